use nalgebra as na;
use std::fmt;
use std::ops::Mul;

use crate::math::{Quaternion, Vector3};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A row-major 4x4 affine matrix, as consumed by renderers
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Matrix4 {
    pub data: [[f64; 4]; 4],
}

impl Matrix4 {
    /// Creates a new matrix from row-major data
    #[inline]
    pub const fn new(data: [[f64; 4]; 4]) -> Self {
        Self { data }
    }

    /// Creates an identity matrix
    #[inline]
    pub const fn identity() -> Self {
        Self::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Composes translation, rotation and scale (`T * R * S`)
    pub fn from_translation_rotation_scale(translation: Vector3, rotation: Quaternion, scale: Vector3) -> Self {
        let Quaternion { w, x, y, z } = rotation;

        let xx = x * x;
        let xy = x * y;
        let xz = x * z;
        let xw = x * w;
        let yy = y * y;
        let yz = y * z;
        let yw = y * w;
        let zz = z * z;
        let zw = z * w;

        Self::new([
            [(1.0 - 2.0 * (yy + zz)) * scale.x, 2.0 * (xy - zw) * scale.y, 2.0 * (xz + yw) * scale.z, translation.x],
            [2.0 * (xy + zw) * scale.x, (1.0 - 2.0 * (xx + zz)) * scale.y, 2.0 * (yz - xw) * scale.z, translation.y],
            [2.0 * (xz - yw) * scale.x, 2.0 * (yz + xw) * scale.y, (1.0 - 2.0 * (xx + yy)) * scale.z, translation.z],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Transforms a point (implicit `w = 1`)
    #[inline]
    pub fn transform_point(&self, p: Vector3) -> Vector3 {
        let m = &self.data;
        Vector3::new(
            m[0][0] * p.x + m[0][1] * p.y + m[0][2] * p.z + m[0][3],
            m[1][0] * p.x + m[1][1] * p.y + m[1][2] * p.z + m[1][3],
            m[2][0] * p.x + m[2][1] * p.y + m[2][2] * p.z + m[2][3],
        )
    }

    /// Extract the translation part of the matrix
    #[inline]
    pub fn translation(&self) -> Vector3 {
        Vector3::new(self.data[0][3], self.data[1][3], self.data[2][3])
    }

    /// Multiplies the matrix by another matrix
    pub fn multiply_matrix(&self, other: &Self) -> Self {
        let mut result = [[0.0; 4]; 4];

        for (i, row) in result.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..4).map(|k| self.data[i][k] * other.data[k][j]).sum();
            }
        }

        Self::new(result)
    }

    /// Convert to nalgebra Matrix4
    #[inline]
    pub fn to_nalgebra(&self) -> na::Matrix4<f64> {
        na::Matrix4::from_fn(|i, j| self.data[i][j])
    }

    /// Convert from nalgebra Matrix4
    #[inline]
    pub fn from_nalgebra(m: &na::Matrix4<f64>) -> Self {
        let mut data = [[0.0; 4]; 4];
        for (i, row) in data.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = m[(i, j)];
            }
        }
        Self::new(data)
    }
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Matrix4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply_matrix(&rhs)
    }
}

impl fmt::Display for Matrix4 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, row) in self.data.iter().enumerate() {
            write!(f, "[ {}, {}, {}, {} ]", row[0], row[1], row[2], row[3])?;
            if i < 3 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
