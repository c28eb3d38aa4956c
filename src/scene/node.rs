use crate::math::{Matrix4, Transform, Vector3};

/// A transform node: a local transform plus the cached world transform
/// derived from it.
///
/// Mutating the local transform does not touch the world transform;
/// `update_world_matrix` must be called to propagate it.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    local: Transform,
    world: Transform,
    world_matrix: Matrix4,
}

impl Node {
    /// Creates a node whose world transform equals `local`
    pub fn new(local: Transform) -> Self {
        Self {
            local,
            world: local,
            world_matrix: local.to_matrix(),
        }
    }

    /// Creates a node at `position` with identity rotation and unit scale
    pub fn from_position(position: Vector3) -> Self {
        Self::new(Transform::from_position(position))
    }

    /// Returns the local transform
    #[inline]
    pub fn local(&self) -> &Transform {
        &self.local
    }

    /// Replaces the local transform
    #[inline]
    pub fn set_local(&mut self, local: Transform) {
        self.local = local;
    }

    /// Returns the local matrix
    #[inline]
    pub fn local_matrix(&self) -> Matrix4 {
        self.local.to_matrix()
    }

    /// Moves the node by `delta` in its parent's space
    #[inline]
    pub fn translate_by_vector(&mut self, delta: Vector3) {
        self.local.position += delta;
    }

    /// Copies the local transform and matrix into the cached world state
    pub fn update_world_matrix(&mut self) {
        self.world = self.local;
        self.world_matrix = self.local_matrix();
    }

    /// Returns the world transform as of the last `update_world_matrix`
    #[inline]
    pub fn world(&self) -> &Transform {
        &self.world
    }

    /// Returns the world matrix as of the last `update_world_matrix`
    #[inline]
    pub fn world_matrix(&self) -> &Matrix4 {
        &self.world_matrix
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new(Transform::identity())
    }
}
