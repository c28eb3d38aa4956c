//! Continuous collision detection and impulse-based rigid body physics for
//! box-shaped bodies.

pub mod math;
pub mod core;
pub mod bodies;
pub mod collision;
pub mod scene;

/// Re-export common types for easier usage
pub use crate::core::{BodyHandle, BodyStorage, PhysicsEngine, SimulationConfig, StepReport};
pub use crate::bodies::{RigidBody, RigidBodyType, RigidBodyHandle, Material};
pub use crate::collision::{CollisionDetector, Manifold};
pub use crate::math::{Aabb, Oobb, Quaternion, Vector3};

/// Error types for the physics engine
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug, Clone, PartialEq)]
    pub enum PhysicsError {
        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),

        #[error("Resource not found: {0}")]
        ResourceNotFound(String),

        #[error("Simulation stability error: {0}")]
        SimulationError(String),

        #[error("Internal error: {0}")]
        InternalError(String),
    }
}

/// Result type for physics engine operations
pub type Result<T> = std::result::Result<T, error::PhysicsError>;

/// Engine version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
