use tracing::{debug, instrument, trace, warn};

use crate::bodies::RigidBody;
use crate::collision::{CollisionDetector, ImpulseSolver};
use crate::core::{BodyHandle, BodyStorage, SimulationConfig};
use crate::error::PhysicsError;
use crate::math::{Transform, Vector3};
use crate::Result;

/// Coefficient applied to air friction in the drag and Magnus terms
const AERODYNAMIC_SCALE: f64 = 0.01;

/// Counters describing what one `run` call did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Movable bodies integrated
    pub integrated: usize,

    /// Contacts detected and resolved
    pub contacts: usize,

    /// Bodies whose world matrix was refreshed
    pub refreshed: usize,
}

/// Fixed-step simulation of box bodies with swept collision handling.
///
/// Each `run` integrates every movable body in storage order, tests its
/// tentative displacement against each of its colliders in list order, and
/// resolves every hit with one normal impulse, one friction impulse and a
/// positional correction. Later colliders see the displacement already
/// corrected by earlier ones.
#[derive(Debug, Clone)]
pub struct PhysicsEngine {
    config: SimulationConfig,
    detector: CollisionDetector,
    solver: ImpulseSolver,
}

impl PhysicsEngine {
    /// Creates an engine with the default configuration
    pub fn new() -> Self {
        Self::from_valid_config(SimulationConfig::default())
    }

    /// Creates an engine after validating `config`
    pub fn with_config(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: SimulationConfig) -> Self {
        Self {
            detector: CollisionDetector::new(config.tolerance),
            solver: ImpulseSolver::new(config.tolerance),
            config,
        }
    }

    /// Returns the configuration
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Returns the narrow-phase detector
    pub fn detector(&self) -> &CollisionDetector {
        &self.detector
    }

    /// Advances every movable body by one time step.
    ///
    /// Collider lists are validated before any body is touched: a missing
    /// collider yields `ResourceNotFound` and a body listing itself yields
    /// `InvalidParameter`. A velocity that diverges mid-step yields
    /// `SimulationError` and every position and velocity is restored, so a
    /// failed call leaves the storage exactly as it found it.
    #[instrument(skip_all, fields(bodies = bodies.len()))]
    pub fn run(&self, bodies: &mut BodyStorage<RigidBody>) -> Result<StepReport> {
        Self::check_colliders(bodies)?;

        let snapshot: Vec<(BodyHandle, Transform, Vector3)> = bodies
            .iter()
            .map(|(handle, body)| (handle, *body.get_node().local(), body.get_velocity()))
            .collect();

        let mut report = match self.advance(bodies) {
            Ok(report) => report,
            Err(err) => {
                for (handle, local, velocity) in snapshot {
                    if let Some(body) = bodies.get_mut(handle) {
                        body.get_node_mut().set_local(local);
                        body.set_velocity(velocity);
                    }
                }
                warn!(error = %err, "step rolled back");
                return Err(err);
            }
        };

        for (_, body) in bodies.iter_mut() {
            if body.is_movable() && body.get_velocity().length_squared() > self.config.refresh_speed_sq {
                body.update_world_matrix();
                report.refreshed += 1;
            }
        }

        debug!(?report, "step complete");
        Ok(report)
    }

    /// Integrates and resolves every movable body in storage order
    fn advance(&self, bodies: &mut BodyStorage<RigidBody>) -> Result<StepReport> {
        let mut report = StepReport::default();

        for handle in bodies.handles() {
            let body = bodies.get_body_mut(handle)?;
            if !body.is_movable() {
                continue;
            }

            let mut delta = self.integrate(handle, body)?;
            let colliders = body.get_colliders().to_vec();

            for other in colliders {
                let (body, collider) = bodies.get_pair_mut(handle, other)?;

                let Some(manifold) = self
                    .detector
                    .detect_continuous_collision(body.get_oobb(), collider.get_oobb(), delta)
                else {
                    continue;
                };

                let impulse = self.solver.resolve(body, collider, manifold.axis);
                if !body.get_velocity().is_finite() || !collider.get_velocity().is_finite() {
                    return Err(PhysicsError::SimulationError(format!(
                        "contact between {:?} and {:?} produced a non-finite velocity",
                        handle, other
                    )));
                }
                delta += manifold.correction();
                report.contacts += 1;

                debug!(
                    body = ?handle,
                    collider = ?other,
                    axis = %manifold.axis,
                    penetration = manifold.penetration,
                    impulse = ?impulse,
                    "contact resolved"
                );
            }

            bodies.get_body_mut(handle)?.translate(delta);
            report.integrated += 1;
        }

        Ok(report)
    }

    /// Sum of gravity, quadratic drag and the Magnus force acting on `body`
    pub fn accumulate_forces(&self, body: &RigidBody) -> Vector3 {
        let velocity = body.get_velocity();
        let k = AERODYNAMIC_SCALE * body.get_material().air_friction * self.config.air_density;

        let gravity = self.config.gravity * body.get_mass();
        let drag = -velocity.sign().component_mul(&velocity.component_mul(&velocity)) * k;
        let magnus = velocity.cross(&body.get_angular_velocity()) * k;

        gravity + drag + magnus
    }

    /// Explicit Euler: updates the velocity and returns the tentative displacement
    fn integrate(&self, handle: BodyHandle, body: &mut RigidBody) -> Result<Vector3> {
        let dt = self.config.time_step;
        let acceleration = self.accumulate_forces(body) / body.get_mass();
        let velocity = body.get_velocity() + acceleration * dt;
        let delta = velocity * dt;

        if !velocity.is_finite() || !delta.is_finite() {
            return Err(PhysicsError::SimulationError(format!(
                "velocity of body {:?} diverged to {}",
                handle, velocity
            )));
        }

        body.set_velocity(velocity);
        trace!(body = ?handle, velocity = %velocity, "integrated");

        Ok(delta)
    }

    fn check_colliders(bodies: &BodyStorage<RigidBody>) -> Result<()> {
        for (handle, body) in bodies.iter() {
            if !body.is_movable() {
                continue;
            }
            for &other in body.get_colliders() {
                if other == handle {
                    return Err(PhysicsError::InvalidParameter(format!(
                        "body {:?} lists itself as a collider",
                        handle
                    )));
                }
                bodies.get_body(other)?;
            }
        }
        Ok(())
    }
}

impl Default for PhysicsEngine {
    fn default() -> Self {
        Self::new()
    }
}
