use crate::bodies::{Material, RigidBodyType};
use crate::core::BodyHandle;
use crate::error::PhysicsError;
use crate::math::{Aabb, Oobb, Quaternion, Transform, Vector3};
use crate::scene::Node;
use crate::Result;

/// Type alias for a handle to a rigid body
pub type RigidBodyHandle = BodyHandle;

/// A box-shaped rigid body for physics simulation
#[derive(Debug, Clone)]
pub struct RigidBody {
    /// The scene node owning the body's transform
    node: Node,

    /// The body's linear velocity
    velocity: Vector3,

    /// The body's angular velocity
    angular_velocity: Vector3,

    /// The body's material properties
    material: Material,

    /// The body's type (dynamic or static)
    body_type: RigidBodyType,

    /// The body's mass, infinite for static bodies
    mass: f64,

    /// Inverse of the body's mass, zero for static bodies
    inv_mass: f64,

    /// Half extents of the box in local space, before node scale
    half_size: Vector3,

    /// World-space axis-aligned bounds
    aabb: Aabb,

    /// World-space oriented bounds
    oobb: Oobb,

    /// Bodies this body is tested against when it moves
    colliders: Vec<BodyHandle>,
}

impl RigidBody {
    fn with_parts(node: Node, half_size: Vector3, body_type: RigidBodyType, mass: f64) -> Self {
        let inv_mass = if body_type.is_movable() { 1.0 / mass } else { 0.0 };
        let mut body = Self {
            node,
            velocity: Vector3::zero(),
            angular_velocity: Vector3::zero(),
            material: Material::default(),
            body_type,
            mass,
            inv_mass,
            half_size: half_size.abs(),
            aabb: Aabb::new(Vector3::zero(), Vector3::zero()),
            oobb: Oobb::new(Vector3::zero(), Vector3::zero(), Quaternion::identity()),
            colliders: Vec::new(),
        };
        body.sync_bounds();
        body
    }

    /// Creates a dynamic box body.
    ///
    /// Fails unless `mass` is finite and strictly positive.
    pub fn new_dynamic(transform: Transform, half_size: Vector3, mass: f64) -> Result<Self> {
        if !mass.is_finite() || mass <= 0.0 {
            return Err(PhysicsError::InvalidParameter(format!(
                "dynamic body mass must be finite and positive, got {}",
                mass
            )));
        }
        Self::check_half_size(half_size)?;

        Ok(Self::with_parts(Node::new(transform), half_size, RigidBodyType::Dynamic, mass))
    }

    /// Creates a static (infinite mass) box body
    pub fn new_static(transform: Transform, half_size: Vector3) -> Result<Self> {
        Self::check_half_size(half_size)?;
        Ok(Self::with_parts(Node::new(transform), half_size, RigidBodyType::Static, f64::INFINITY))
    }

    fn check_half_size(half_size: Vector3) -> Result<()> {
        if half_size.is_finite() {
            Ok(())
        } else {
            Err(PhysicsError::InvalidParameter(format!(
                "half size must be finite, got {}",
                half_size
            )))
        }
    }

    /// Replaces the material after validating it
    pub fn with_material(mut self, material: Material) -> Result<Self> {
        self.set_material(material)?;
        Ok(self)
    }

    /// Sets the initial velocity
    pub fn with_velocity(mut self, velocity: Vector3) -> Self {
        self.velocity = velocity;
        self
    }

    /// Sets the initial angular velocity
    pub fn with_angular_velocity(mut self, angular_velocity: Vector3) -> Self {
        self.angular_velocity = angular_velocity;
        self
    }

    /// Sets the collider list
    pub fn with_colliders(mut self, colliders: impl IntoIterator<Item = BodyHandle>) -> Self {
        self.colliders = colliders.into_iter().collect();
        self
    }

    /// Returns the scene node
    pub fn get_node(&self) -> &Node {
        &self.node
    }

    /// Returns the scene node mutably
    pub fn get_node_mut(&mut self) -> &mut Node {
        &mut self.node
    }

    /// Returns the body's local position
    pub fn get_position(&self) -> Vector3 {
        self.node.local().position
    }

    /// Moves the body's node by `delta`; world matrix and bounds are left stale
    pub fn translate(&mut self, delta: Vector3) {
        self.node.translate_by_vector(delta);
    }

    /// Returns the body's linear velocity
    pub fn get_velocity(&self) -> Vector3 {
        self.velocity
    }

    /// Sets the body's linear velocity
    pub fn set_velocity(&mut self, velocity: Vector3) {
        self.velocity = velocity;
    }

    /// Returns the body's angular velocity
    pub fn get_angular_velocity(&self) -> Vector3 {
        self.angular_velocity
    }

    /// Sets the body's angular velocity
    pub fn set_angular_velocity(&mut self, angular_velocity: Vector3) {
        self.angular_velocity = angular_velocity;
    }

    /// Returns the body's material
    pub fn get_material(&self) -> &Material {
        &self.material
    }

    /// Sets the body's material after validating it
    pub fn set_material(&mut self, material: Material) -> Result<()> {
        material.validate()?;
        self.material = material;
        Ok(())
    }

    /// Returns the body type
    pub fn get_body_type(&self) -> RigidBodyType {
        self.body_type
    }

    /// Returns whether the engine integrates this body
    pub fn is_movable(&self) -> bool {
        self.body_type.is_movable()
    }

    /// Returns the body's mass
    pub fn get_mass(&self) -> f64 {
        self.mass
    }

    /// Returns the body's inverse mass
    pub fn get_inverse_mass(&self) -> f64 {
        self.inv_mass
    }

    /// Changes velocity by `impulse / mass`; static bodies are unaffected
    pub fn apply_impulse(&mut self, impulse: Vector3) {
        self.velocity += impulse * self.inv_mass;
    }

    /// Returns the world-space axis-aligned bounds
    pub fn get_aabb(&self) -> &Aabb {
        &self.aabb
    }

    /// Returns the world-space oriented bounds
    pub fn get_oobb(&self) -> &Oobb {
        &self.oobb
    }

    /// Overrides the bounds with values supplied by the caller
    pub fn set_bounds(&mut self, aabb: Aabb, oobb: Oobb) {
        self.aabb = aabb;
        self.oobb = oobb;
    }

    /// Returns the local half extents
    pub fn get_half_size(&self) -> Vector3 {
        self.half_size
    }

    /// Returns the handles of the bodies this body collides with
    pub fn get_colliders(&self) -> &[BodyHandle] {
        &self.colliders
    }

    /// Appends a collider
    pub fn add_collider(&mut self, handle: BodyHandle) {
        self.colliders.push(handle);
    }

    /// Replaces the collider list
    pub fn set_colliders(&mut self, colliders: Vec<BodyHandle>) {
        self.colliders = colliders;
    }

    /// Propagates the local transform to the world matrix and rebuilds the bounds
    pub fn update_world_matrix(&mut self) {
        self.node.update_world_matrix();
        self.sync_bounds();
    }

    /// Rebuilds the AABB and OOBB from the node's world transform
    pub fn sync_bounds(&mut self) {
        let world = self.node.world();
        self.oobb = Oobb::new(
            world.position,
            self.half_size.component_mul(&world.scale.abs()),
            world.rotation,
        );
        self.aabb = self.oobb.to_aabb();
    }
}
