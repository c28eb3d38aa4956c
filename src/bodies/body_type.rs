/// Type of rigid body, determining how it behaves in the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RigidBodyType {
    /// Integrated every step and pushed around by collisions
    #[default]
    Dynamic,

    /// Never moved by the engine and has infinite mass; only ever a collider
    Static,
}

impl RigidBodyType {
    /// Returns true if the engine integrates bodies of this type
    #[inline]
    pub fn is_movable(self) -> bool {
        self == Self::Dynamic
    }
}
