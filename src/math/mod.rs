mod vector;
mod matrix;
mod transform;
mod rotation;
mod aabb;
mod oobb;
mod projection;
pub mod tolerance;

pub use vector::Vector3;
pub use matrix::Matrix4;
pub use transform::Transform;
pub use rotation::{Quaternion, Rotation};
pub use aabb::Aabb;
pub use oobb::Oobb;
pub use projection::Projection;
pub use tolerance::{Tolerance, EPSILON};

