//! Drops a handful of randomly placed boxes onto a floor and prints their
//! heights. Set `RUST_LOG=phys_ccd=debug` to see every resolved contact.

use phys_ccd::math::{Quaternion, Transform, Vector3};
use phys_ccd::{BodyHandle, BodyStorage, Material, PhysicsEngine, RigidBody, SimulationConfig};
use rand::Rng;
use tracing::info;
use tracing_subscriber::EnvFilter;

const BOX_COUNT: usize = 6;
const STEPS: usize = 40;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let engine = PhysicsEngine::with_config(SimulationConfig::default().with_time_step(0.05))?;
    let mut bodies = BodyStorage::new();

    let floor = bodies.add(
        RigidBody::new_static(
            Transform::from_position(Vector3::new(0.0, -0.5, 0.0)),
            Vector3::new(20.0, 0.5, 20.0),
        )?
        .with_material(Material::wood())?,
    );

    let materials = [Material::rubber(), Material::wood(), Material::ice()];
    let mut rng = rand::thread_rng();
    let mut boxes: Vec<BodyHandle> = Vec::with_capacity(BOX_COUNT);

    for i in 0..BOX_COUNT {
        let position = Vector3::new(i as f64 * 2.5 - 6.0, rng.gen_range(2.0..8.0), rng.gen_range(-1.0..1.0));
        let spin = Quaternion::from_axis_angle(Vector3::Y, rng.gen_range(0.0..std::f64::consts::PI));
        let body = RigidBody::new_dynamic(
            Transform::from_position_rotation(position, spin),
            Vector3::splat(0.5),
            rng.gen_range(0.5..3.0),
        )?
        .with_material(materials[i % materials.len()])?
        .with_velocity(Vector3::new(rng.gen_range(-0.5..0.5), 0.0, 0.0))
        .with_colliders([floor]);

        boxes.push(bodies.add(body));
    }

    for step in 1..=STEPS {
        let report = engine.run(&mut bodies)?;

        if step % 10 == 0 {
            info!(step, contacts = report.contacts, refreshed = report.refreshed, "stepped");
            for &handle in &boxes {
                let body = bodies.get_body(handle)?;
                println!(
                    "  box {:>2}: y = {:>7.3}  v = {}",
                    handle.index(),
                    body.get_position().y,
                    body.get_velocity()
                );
            }
        }
    }

    Ok(())
}
