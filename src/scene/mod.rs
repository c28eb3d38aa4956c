//! Minimal scene-graph node owning a body's transform.

mod node;

pub use self::node::Node;
