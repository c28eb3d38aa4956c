use crate::bodies::RigidBody;
use crate::math::{Tolerance, Vector3};

/// Impulses exchanged at one contact
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContactImpulse {
    /// Signed normal impulse magnitude, positive when the bodies approach
    pub normal: f64,

    /// Friction impulse applied to the second body (and negated on the first)
    pub friction: Option<Vector3>,
}

/// Single-shot impulse resolver with restitution and Coulomb friction.
///
/// Body `a` is the mover and `b` the collider; `normal` points from `a`
/// towards `b`. Impulses are subtracted from `a` and added to `b`, each scaled
/// by the body's inverse mass, so a static collider is never moved.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ImpulseSolver {
    tolerance: Tolerance,
}

impl ImpulseSolver {
    /// Creates a solver using `tolerance` for its degeneracy checks
    pub fn new(tolerance: Tolerance) -> Self {
        Self { tolerance }
    }

    /// Applies the normal impulse then the friction impulse
    pub fn resolve(&self, a: &mut RigidBody, b: &mut RigidBody, normal: Vector3) -> Option<ContactImpulse> {
        let j = self.apply_impulse(a, b, normal)?;
        let friction = self.apply_friction_impulse(a, b, normal, j);
        Some(ContactImpulse { normal: j, friction })
    }

    /// Applies `j = (1 + e_a e_b) (n . (v_a - v_b)) / (1/m_a + 1/m_b)` along
    /// `normal` and returns `j`.
    ///
    /// Returns `None` without touching either body when both have infinite mass.
    pub fn apply_impulse(&self, a: &mut RigidBody, b: &mut RigidBody, normal: Vector3) -> Option<f64> {
        let inv_mass_sum = a.get_inverse_mass() + b.get_inverse_mass();
        if inv_mass_sum <= 0.0 {
            return None;
        }

        let relative_velocity = a.get_velocity() - b.get_velocity();
        let impact_speed = normal.dot(&relative_velocity);
        let restitution = a.get_material().restitution * b.get_material().restitution;

        let j = (1.0 + restitution) * impact_speed / inv_mass_sum;
        let impulse = normal * j;

        a.apply_impulse(-impulse);
        b.apply_impulse(impulse);

        Some(j)
    }

    /// Applies Coulomb friction for a contact whose normal impulse was `j`.
    ///
    /// The tangential impulse that would stop relative sliding is used as-is
    /// while it stays under the static friction cone; beyond it, a sliding
    /// impulse of `|j| * mu_a * mu_b` opposes the motion instead. Returns the
    /// impulse added to `b`, or `None` when there is no tangential motion.
    pub fn apply_friction_impulse(
        &self,
        a: &mut RigidBody,
        b: &mut RigidBody,
        normal: Vector3,
        j: f64,
    ) -> Option<Vector3> {
        let inv_mass_sum = a.get_inverse_mass() + b.get_inverse_mass();
        if inv_mass_sum <= 0.0 {
            return None;
        }

        let relative_velocity = a.get_velocity() - b.get_velocity();

        // Points against the tangential part of the relative velocity.
        let tangent = relative_velocity.cross(&normal).cross(&normal);
        if self.tolerance.zero(tangent.length()) {
            return None;
        }
        let tangent = tangent.normalize();

        let jt = relative_velocity.dot(&tangent) / inv_mass_sum;
        let normal_magnitude = j.abs();
        let static_limit = normal_magnitude * a.get_material().static_friction * b.get_material().static_friction;

        let magnitude = if jt.abs() < static_limit {
            jt
        } else {
            -normal_magnitude * a.get_material().friction * b.get_material().friction
        };

        let impulse = tangent * magnitude;
        a.apply_impulse(-impulse);
        b.apply_impulse(impulse);

        Some(impulse)
    }
}
