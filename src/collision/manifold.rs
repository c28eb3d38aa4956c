use crate::math::Vector3;

/// Result of a narrow-phase test: the axis along which to separate the
/// moving body and how far
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Manifold {
    /// Unit separating axis, oriented along the direction of travel
    pub axis: Vector3,

    /// Non-negative penetration depth along `axis`
    pub penetration: f64,
}

impl Manifold {
    /// Creates a new manifold
    #[inline]
    pub fn new(axis: Vector3, penetration: f64) -> Self {
        Self { axis, penetration }
    }

    /// The displacement that removes the penetration from the moving body
    #[inline]
    pub fn correction(&self) -> Vector3 {
        -(self.axis * self.penetration)
    }
}
