//! Oriented bounding boxes.
//!
//! Corners are enumerated with a single canonical winding shared by every
//! consumer: bit `i & 1` selects x, `i & 2` selects y and `i & 4` selects z,
//! a clear bit meaning `+half_size` and a set bit meaning `-half_size`. Point 0
//! is therefore `(+x, +y, +z)` and point 7 is `(-x, -y, -z)` in local space.

use crate::math::{Aabb, Quaternion, Rotation, Vector3};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A box with arbitrary position, orientation and half extents
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Oobb {
    /// World-space center
    pub center: Vector3,

    /// Half extents along the box's local axes, all non-negative
    pub half_size: Vector3,

    /// Orientation, a unit quaternion
    pub rotation: Quaternion,
}

impl Oobb {
    /// Creates a new box; negative half extents are folded to their magnitude
    #[inline]
    pub fn new(center: Vector3, half_size: Vector3, rotation: Quaternion) -> Self {
        Self {
            center,
            half_size: half_size.abs(),
            rotation,
        }
    }

    /// Creates the box occupying exactly `aabb`, with identity rotation
    #[inline]
    pub fn from_aabb(aabb: &Aabb) -> Self {
        Self::new(aabb.center(), aabb.half_size(), Quaternion::identity())
    }

    /// Returns the 8 world-space corners in canonical order
    pub fn points(&self) -> [Vector3; 8] {
        let h = self.half_size;
        std::array::from_fn(|i| {
            let local = Vector3::new(
                if i & 1 == 0 { h.x } else { -h.x },
                if i & 2 == 0 { h.y } else { -h.y },
                if i & 4 == 0 { h.z } else { -h.z },
            );
            self.rotation.rotate_vector(local) + self.center
        })
    }

    /// Returns the box's local X, Y and Z axes in world space
    #[inline]
    pub fn basis(&self) -> [Vector3; 3] {
        Vector3::axes().map(|axis| self.rotation.rotate_vector(axis).normalize())
    }

    /// Returns the box covering this one over a displacement of `movement`.
    ///
    /// The center moves halfway and each half extent grows by half the
    /// absolute displacement on that component.
    #[inline]
    pub fn swept(&self, movement: Vector3) -> Self {
        Self {
            center: self.center + movement * 0.5,
            half_size: self.half_size + movement.abs() * 0.5,
            rotation: self.rotation,
        }
    }

    /// Returns the AABB enclosing all 8 corners
    pub fn to_aabb(&self) -> Aabb {
        let points = self.points();
        let mut aabb = Aabb::new(points[0], points[0]);
        for point in &points[1..] {
            aabb.expand_by_point(*point);
        }
        aabb
    }
}

impl From<&Aabb> for Oobb {
    fn from(aabb: &Aabb) -> Self {
        Self::from_aabb(aabb)
    }
}
