pub mod engine;
pub mod config;
pub mod storage;

pub use self::engine::{PhysicsEngine, StepReport};
pub use self::config::SimulationConfig;
pub use self::storage::BodyStorage;

/// A unique identifier for a body in a `BodyStorage`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(pub(crate) u32);

impl BodyHandle {
    /// Slot index of the body within its storage
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}
