use crate::math::Vector3;

/// A 1-D interval obtained by projecting a point set onto an axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Smallest projected value
    pub min: f64,

    /// Largest projected value
    pub max: f64,
}

impl Projection {
    /// Creates an empty projection (`min = +inf`, `max = -inf`)
    #[inline]
    pub fn empty() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Projects `points` onto `axis`
    pub fn from_points(points: &[Vector3], axis: &Vector3) -> Self {
        let mut projection = Self::empty();
        projection.project(points, axis);
        projection
    }

    /// Recomputes this projection in place, discarding the previous interval
    pub fn project(&mut self, points: &[Vector3], axis: &Vector3) {
        *self = Self::empty();
        for point in points {
            let d = point.dot(axis);
            self.min = self.min.min(d);
            self.max = self.max.max(d);
        }
    }

    /// Returns true if no point has been projected
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    /// How far `other` extends past this interval's minimum (`other.max - self.min`)
    #[inline]
    pub fn overlap_left(&self, other: &Self) -> f64 {
        other.max - self.min
    }

    /// How far this interval extends past `other`'s minimum (`self.max - other.min`)
    #[inline]
    pub fn overlap_right(&self, other: &Self) -> f64 {
        self.max - other.min
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::empty()
    }
}
