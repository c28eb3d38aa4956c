use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use phys_ccd::collision::detect_continuous_collision;
use phys_ccd::math::{Oobb, Quaternion, Transform, Vector3};
use phys_ccd::{BodyStorage, Material, PhysicsEngine, RigidBody};
use std::f64::consts::PI;
use std::hint::black_box;

fn bench_detect_continuous_collision(c: &mut Criterion) {
    let movable = Oobb::new(Vector3::new(0.0, 0.5, 0.0), Vector3::new(1.0, 0.5, 1.0), Quaternion::identity());
    let aligned = Oobb::new(Vector3::new(0.0, -1.0, 0.0), Vector3::new(5.0, 1.0, 5.0), Quaternion::identity());
    let rotated = Oobb::new(
        Vector3::new(2.0, 1.0, 2.0),
        Vector3::new(1.41, 1.0, 0.705),
        Quaternion::from_axis_angle(Vector3::Y, PI / 4.0),
    );
    let movement = Vector3::new(0.1, -0.8, 0.5);

    let mut group = c.benchmark_group("detect_continuous_collision");
    group.bench_function("aligned_hit", |b| {
        b.iter(|| detect_continuous_collision(black_box(&movable), black_box(&aligned), black_box(movement)))
    });
    group.bench_function("rotated_miss", |b| {
        b.iter(|| detect_continuous_collision(black_box(&movable), black_box(&rotated), black_box(movement)))
    });
    group.finish();
}

fn build_pile(n: usize) -> BodyStorage<RigidBody> {
    let mut bodies = BodyStorage::new();
    let floor = RigidBody::new_static(
        Transform::from_position(Vector3::new(0.0, -0.5, 0.0)),
        Vector3::new(100.0, 0.5, 100.0),
    )
    .expect("floor");
    let floor = bodies.add(floor);

    for i in 0..n {
        let position = Vector3::new((i % 10) as f64 * 1.5, 0.6 + (i / 10) as f64 * 1.5, 0.0);
        let body = RigidBody::new_dynamic(Transform::from_position(position), Vector3::splat(0.5), 1.0)
            .and_then(|body| body.with_material(Material::wood()))
            .expect("box");
        bodies.add(body.with_colliders([floor]));
    }
    bodies
}

fn bench_engine_run(c: &mut Criterion) {
    let engine = PhysicsEngine::new();

    let mut group = c.benchmark_group("engine_run");
    for &n in &[1usize, 10, 100, 1_000] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter_batched(
                || build_pile(n),
                |mut bodies| black_box(engine.run(&mut bodies)),
                criterion::BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_detect_continuous_collision, bench_engine_run);
criterion_main!(benches);
