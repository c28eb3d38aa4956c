use crate::error::PhysicsError;
use crate::math::{Tolerance, Vector3};
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Configuration parameters for the physics simulation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SimulationConfig {
    /// Constant gravitational acceleration
    pub gravity: Vector3,

    /// Air density used by drag and the Magnus force (kg/m^3)
    pub air_density: f64,

    /// The fixed time step of one `run` call, independent of wall-clock time
    pub time_step: f64,

    /// Bodies whose squared speed does not exceed this keep a stale world
    /// matrix after a step
    pub refresh_speed_sq: f64,

    /// Tolerance shared by every collision predicate
    pub tolerance: Tolerance,
}

impl SimulationConfig {
    /// Sets the gravity
    pub fn with_gravity(mut self, gravity: Vector3) -> Self {
        self.gravity = gravity;
        self
    }

    /// Sets the air density
    pub fn with_air_density(mut self, air_density: f64) -> Self {
        self.air_density = air_density;
        self
    }

    /// Sets the time step
    pub fn with_time_step(mut self, time_step: f64) -> Self {
        self.time_step = time_step;
        self
    }

    /// Sets the world-matrix refresh threshold
    pub fn with_refresh_speed_sq(mut self, refresh_speed_sq: f64) -> Self {
        self.refresh_speed_sq = refresh_speed_sq;
        self
    }

    /// Sets the collision tolerance
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Checks that every parameter is usable by the engine
    pub fn validate(&self) -> Result<()> {
        if !self.gravity.is_finite() {
            return Err(PhysicsError::InvalidParameter(format!("gravity must be finite, got {}", self.gravity)));
        }
        if !self.air_density.is_finite() || self.air_density < 0.0 {
            return Err(PhysicsError::InvalidParameter(format!(
                "air density must be finite and non-negative, got {}",
                self.air_density
            )));
        }
        if !self.time_step.is_finite() || self.time_step <= 0.0 {
            return Err(PhysicsError::InvalidParameter(format!(
                "time step must be finite and positive, got {}",
                self.time_step
            )));
        }
        if self.refresh_speed_sq.is_nan() || self.refresh_speed_sq < 0.0 {
            return Err(PhysicsError::InvalidParameter(format!(
                "refresh speed threshold must be non-negative, got {}",
                self.refresh_speed_sq
            )));
        }
        if !self.tolerance.epsilon.is_finite() || self.tolerance.epsilon <= 0.0 {
            return Err(PhysicsError::InvalidParameter(format!(
                "tolerance epsilon must be finite and positive, got {}",
                self.tolerance.epsilon
            )));
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravity: Vector3::new(0.0, -9.81, 0.0),
            air_density: 1.204, // Dry air at 20 °C
            time_step: 0.1,
            refresh_speed_sq: 1.0,
            tolerance: Tolerance::default(),
        }
    }
}
