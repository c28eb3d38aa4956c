use crate::error::PhysicsError;
use crate::Result;

/// Surface and aerodynamic properties of a body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Coefficient of restitution (bounciness), 0-1
    pub restitution: f64,

    /// Dynamic (sliding) friction coefficient
    pub friction: f64,

    /// Static friction coefficient
    pub static_friction: f64,

    /// Scales quadratic drag and the Magnus force
    pub air_friction: f64,
}

impl Material {
    /// Creates a new material with the specified properties
    pub fn new(restitution: f64, friction: f64, static_friction: f64, air_friction: f64) -> Self {
        Self {
            restitution,
            friction,
            static_friction,
            air_friction,
        }
    }

    /// Perfectly elastic and frictionless
    pub fn elastic() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// Creates a material for rubber (high friction, medium restitution)
    pub fn rubber() -> Self {
        Self::new(0.7, 0.8, 1.0, 0.1)
    }

    /// Creates a material for wood (medium friction, low restitution)
    pub fn wood() -> Self {
        Self::new(0.2, 0.4, 0.6, 0.1)
    }

    /// Creates a material for ice (low friction, medium restitution)
    pub fn ice() -> Self {
        Self::new(0.4, 0.03, 0.1, 0.1)
    }

    /// Checks that every coefficient is finite and in range
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(PhysicsError::InvalidParameter(format!(
                "restitution must be within [0, 1], got {}",
                self.restitution
            )));
        }

        for (name, value) in [
            ("friction", self.friction),
            ("static_friction", self.static_friction),
            ("air_friction", self.air_friction),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PhysicsError::InvalidParameter(format!(
                    "{} must be finite and non-negative, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::new(0.3, 0.3, 0.5, 0.1)
    }
}
