use crate::math::{Vector3, Tolerance};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Axis-Aligned Bounding Box (AABB)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Aabb {
    /// Minimum corner of the AABB
    pub min: Vector3,

    /// Maximum corner of the AABB
    pub max: Vector3,
}

impl Aabb {
    /// Creates a new AABB from minimum and maximum points
    #[inline]
    pub fn new(min: Vector3, max: Vector3) -> Self {
        Self { min, max }
    }

    /// Creates an AABB from `[min_x, min_y, min_z, max_x, max_y, max_z]`
    #[inline]
    pub fn from_slice(v: [f64; 6]) -> Self {
        Self::new(Vector3::new(v[0], v[1], v[2]), Vector3::new(v[3], v[4], v[5]))
    }

    /// Creates the tightest AABB around a set of points
    pub fn from_points(points: &[Vector3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut aabb = Self::new(*first, *first);
        for point in rest {
            aabb.expand_by_point(*point);
        }
        Some(aabb)
    }

    /// Creates the tightest AABB around a flat `[x, y, z, x, y, z, ...]` buffer.
    ///
    /// A trailing partial point is ignored.
    pub fn from_flat_points(points: &[f64]) -> Option<Self> {
        let mut chunks = points.chunks_exact(Vector3::SIZE);
        let first = chunks.next().map(|c| Vector3::new(c[0], c[1], c[2]))?;
        let mut aabb = Self::new(first, first);
        for c in chunks {
            aabb.expand_by_point(Vector3::new(c[0], c[1], c[2]));
        }
        Some(aabb)
    }

    /// Returns the center of the AABB
    #[inline]
    pub fn center(&self) -> Vector3 {
        (self.min + self.max) * 0.5
    }

    /// Returns the extents of the AABB in each dimension
    #[inline]
    pub fn size(&self) -> Vector3 {
        self.max - self.min
    }

    /// Returns half the extents of the AABB in each dimension
    #[inline]
    pub fn half_size(&self) -> Vector3 {
        self.size() * 0.5
    }

    /// Checks if this AABB overlaps another, treating contact within the
    /// default epsilon as overlap
    #[inline]
    pub fn collide(&self, other: &Self) -> bool {
        self.collide_with(other, &Tolerance::default())
    }

    /// Overlap test with an explicit tolerance
    pub fn collide_with(&self, other: &Self, tolerance: &Tolerance) -> bool {
        tolerance.lte(self.min.x, other.max.x) && tolerance.gte(self.max.x, other.min.x) &&
        tolerance.lte(self.min.y, other.max.y) && tolerance.gte(self.max.y, other.min.y) &&
        tolerance.lte(self.min.z, other.max.z) && tolerance.gte(self.max.z, other.min.z)
    }

    /// Expands this AABB to include a point
    #[inline]
    pub fn expand_by_point(&mut self, point: Vector3) {
        self.min = self.min.min(&point);
        self.max = self.max.max(&point);
    }

    /// Expands this AABB to include another AABB
    #[inline]
    pub fn expand_by_aabb(&mut self, other: &Self) {
        self.min = self.min.min(&other.min);
        self.max = self.max.max(&other.max);
    }

    /// Returns the 8 corners, bit `i & 1` selecting x, `i & 2` y and `i & 4` z,
    /// a set bit picking the minimum
    pub fn points(&self) -> [Vector3; 8] {
        std::array::from_fn(|i| {
            Vector3::new(
                if i & 1 == 0 { self.max.x } else { self.min.x },
                if i & 2 == 0 { self.max.y } else { self.min.y },
                if i & 4 == 0 { self.max.z } else { self.min.z },
            )
        })
    }
}
