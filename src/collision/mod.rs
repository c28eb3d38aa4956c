mod collision_detector;
mod contact_solver;
mod manifold;

pub use self::collision_detector::{
    continuous_aabb_collision_detection, detect_continuous_collision, CollisionDetector,
};
pub use self::contact_solver::{ContactImpulse, ImpulseSolver};
pub use self::manifold::Manifold;

use crate::math::Vector3;
use bitflags::bitflags;

bitflags! {
    /// A set of world axes
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Axes: u8 {
        const X = 0x01;
        const Y = 0x02;
        const Z = 0x04;
    }
}

impl Axes {
    /// Unit vectors for the axes in the set, in x, y, z order
    pub fn vectors(self) -> Vec<Vector3> {
        [(Self::X, Vector3::X), (Self::Y, Vector3::Y), (Self::Z, Vector3::Z)]
            .into_iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, v)| v)
            .collect()
    }
}
