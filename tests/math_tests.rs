use phys_ccd::math::{Aabb, Matrix4, Oobb, Projection, Quaternion, Rotation, Transform, Vector3};
use phys_ccd::scene::Node;
use std::f64::consts::PI;
use approx::{assert_abs_diff_eq, assert_relative_eq};
use proptest::prelude::*;

#[test]
fn test_vector3_operations() {
    let v1 = Vector3::new(1.0, 2.0, 3.0);
    let v2 = Vector3::new(4.0, 5.0, 6.0);

    assert_eq!(v1 + v2, Vector3::new(5.0, 7.0, 9.0));
    assert_eq!(v2 - v1, Vector3::new(3.0, 3.0, 3.0));
    assert_eq!(v1 * 2.0, Vector3::new(2.0, 4.0, 6.0));
    assert_eq!(v1.dot(&v2), 32.0);
    assert_eq!(v1.cross(&v2), Vector3::new(-3.0, 6.0, -3.0));
    assert_eq!(Vector3::new(-1.0, 2.0, -3.0).abs(), v1);

    let normalized = v1.normalize();
    assert_relative_eq!(normalized.length(), 1.0);
    assert_relative_eq!(normalized.x, 1.0 / 14.0_f64.sqrt());
}

#[test]
fn test_zero_vector_normalizes_to_zero() {
    let n = Vector3::zero().normalize();
    assert_eq!(n, Vector3::zero());
    assert!(n.is_finite());
}

#[test]
fn test_vector_sign_is_tolerant() {
    let s = Vector3::new(2.0, -0.5, 0.0001).sign();
    assert_eq!(s, Vector3::new(1.0, -1.0, 0.0));
}

#[test]
fn test_quaternion_rotation() {
    let q = Quaternion::from_axis_angle(Vector3::Y, PI / 2.0);
    assert!(q.is_unit());

    let rotated = q.rotate_vector(Vector3::X);
    assert_abs_diff_eq!(rotated.x, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(rotated.y, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(rotated.z, -1.0, epsilon = 1e-12);

    assert_relative_eq!(q.angle(), PI / 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(q.axis().y, 1.0, epsilon = 1e-12);
}

#[test]
fn test_quaternion_slerp_midpoint() {
    let a = Quaternion::identity();
    let b = Quaternion::from_axis_angle(Vector3::Z, PI / 2.0);
    let mid = a.slerp(&b, 0.5);

    assert_relative_eq!(mid.angle(), PI / 4.0, epsilon = 1e-9);
}

#[test]
fn test_quaternion_nalgebra_roundtrip() {
    let q = Quaternion::from_axis_angle(Vector3::new(1.0, 1.0, 0.0), 0.3);
    let back = Quaternion::from_nalgebra(&q.to_nalgebra());
    assert_eq!(q, back);
}

#[test]
fn test_matrix_matches_transform() {
    let transform = Transform::new(
        Vector3::new(1.0, 2.0, 3.0),
        Quaternion::from_axis_angle(Vector3::Y, PI / 2.0),
        Vector3::new(2.0, 2.0, 2.0),
    );
    let matrix = transform.to_matrix();
    let point = Vector3::new(1.0, 0.0, 0.0);

    let by_matrix = matrix.transform_point(point);
    let by_transform = transform.transform_point(point);
    assert_abs_diff_eq!(by_matrix.x, by_transform.x, epsilon = 1e-12);
    assert_abs_diff_eq!(by_matrix.y, by_transform.y, epsilon = 1e-12);
    assert_abs_diff_eq!(by_matrix.z, by_transform.z, epsilon = 1e-12);
    assert_abs_diff_eq!(by_matrix.z, 1.0, epsilon = 1e-12);

    assert_eq!(matrix.translation(), Vector3::new(1.0, 2.0, 3.0));
    assert_eq!(Matrix4::identity() * matrix, matrix);
}

#[test]
fn test_aabb_touch_tolerance() {
    let a = Aabb::from_slice([0.0, 0.0, 0.0, 2.0, 2.0, 2.0]);

    assert!(a.collide(&Aabb::from_slice([2.0, 2.0, 2.0, 4.0, 4.0, 4.0])));
    assert!(a.collide(&Aabb::from_slice([2.001, 2.001, 2.001, 4.0, 4.0, 4.0])));
    assert!(!a.collide(&Aabb::from_slice([2.002, 2.002, 2.002, 4.0, 4.0, 4.0])));
}

#[test]
fn test_aabb_separated_on_single_axis() {
    let a = Aabb::from_slice([0.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
    let b = Aabb::from_slice([0.5, 0.5, 3.0, 1.5, 1.5, 4.0]);
    assert!(!a.collide(&b));
    assert!(!b.collide(&a));
}

#[test]
fn test_aabb_from_points() {
    let points = [
        Vector3::new(1.0, -2.0, 0.5),
        Vector3::new(-1.0, 3.0, 0.0),
        Vector3::new(0.0, 0.0, 2.0),
    ];
    let aabb = Aabb::from_points(&points).unwrap();
    assert_eq!(aabb.min, Vector3::new(-1.0, -2.0, 0.0));
    assert_eq!(aabb.max, Vector3::new(1.0, 3.0, 2.0));

    let flat = [1.0, -2.0, 0.5, -1.0, 3.0, 0.0, 0.0, 0.0, 2.0];
    assert_eq!(Aabb::from_flat_points(&flat), Some(aabb));

    assert!(Aabb::from_points(&[]).is_none());
    assert!(Aabb::from_flat_points(&[1.0, 2.0]).is_none());
}

#[test]
fn test_aabb_expansion() {
    let mut aabb = Aabb::from_slice([0.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
    aabb.expand_by_point(Vector3::new(-1.0, 0.5, 3.0));
    assert_eq!(aabb, Aabb::from_slice([-1.0, 0.0, 0.0, 1.0, 1.0, 3.0]));

    aabb.expand_by_aabb(&Aabb::from_slice([0.0, -2.0, 0.0, 5.0, 0.0, 0.0]));
    assert_eq!(aabb, Aabb::from_slice([-1.0, -2.0, 0.0, 5.0, 1.0, 3.0]));
    assert_eq!(aabb.center(), Vector3::new(2.0, -0.5, 1.5));
    assert_eq!(aabb.half_size(), Vector3::new(3.0, 1.5, 1.5));
}

#[test]
fn test_oobb_corner_winding() {
    let oobb = Oobb::new(Vector3::new(10.0, 0.0, 0.0), Vector3::new(1.0, 2.0, 3.0), Quaternion::identity());
    let points = oobb.points();

    assert_eq!(points[0], Vector3::new(11.0, 2.0, 3.0));
    assert_eq!(points[1], Vector3::new(9.0, 2.0, 3.0));
    assert_eq!(points[2], Vector3::new(11.0, -2.0, 3.0));
    assert_eq!(points[4], Vector3::new(11.0, 2.0, -3.0));
    assert_eq!(points[7], Vector3::new(9.0, -2.0, -3.0));

    let aabb = Aabb::from_slice([9.0, -2.0, -3.0, 11.0, 2.0, 3.0]);
    assert_eq!(aabb.points(), points);
}

#[test]
fn test_oobb_basis_is_rotated() {
    let oobb = Oobb::new(Vector3::zero(), Vector3::one(), Quaternion::from_axis_angle(Vector3::Z, PI / 2.0));
    let [x, y, z] = oobb.basis();

    assert_abs_diff_eq!(x.y, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(y.x, -1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(z.z, 1.0, epsilon = 1e-12);
}

#[test]
fn test_oobb_from_aabb_and_back() {
    let aabb = Aabb::from_slice([-1.0, 0.0, 2.0, 3.0, 1.0, 4.0]);
    let oobb = Oobb::from_aabb(&aabb);

    assert_eq!(oobb.center, Vector3::new(1.0, 0.5, 3.0));
    assert_eq!(oobb.half_size, Vector3::new(2.0, 0.5, 1.0));
    assert_eq!(oobb.rotation, Quaternion::identity());
    assert_eq!(oobb.to_aabb(), aabb);
}

#[test]
fn test_oobb_swept_covers_movement() {
    let oobb = Oobb::new(Vector3::zero(), Vector3::one(), Quaternion::identity());
    let swept = oobb.swept(Vector3::new(0.0, -2.0, 1.0));

    assert_eq!(swept.center, Vector3::new(0.0, -1.0, 0.5));
    assert_eq!(swept.half_size, Vector3::new(1.0, 2.0, 1.5));
}

#[test]
fn test_projection_reuse_overwrites_interval() {
    let oobb = Oobb::new(Vector3::new(0.0, 5.0, 0.0), Vector3::new(1.0, 2.0, 3.0), Quaternion::identity());
    let points = oobb.points();

    let mut projection = Projection::from_points(&points, &Vector3::Z);
    assert_eq!((projection.min, projection.max), (-3.0, 3.0));

    projection.project(&points, &Vector3::Y);
    assert_eq!((projection.min, projection.max), (3.0, 7.0));

    projection.project(&points, &Vector3::X);
    assert_eq!((projection.min, projection.max), (-1.0, 1.0));
}

#[test]
fn test_node_world_matrix_is_explicitly_refreshed() {
    let mut node = Node::from_position(Vector3::new(1.0, 0.0, 0.0));
    node.translate_by_vector(Vector3::new(0.0, 2.0, 0.0));

    assert_eq!(node.local().position, Vector3::new(1.0, 2.0, 0.0));
    assert_eq!(node.world_matrix().translation(), Vector3::new(1.0, 0.0, 0.0));

    node.update_world_matrix();
    assert_eq!(node.world_matrix().translation(), Vector3::new(1.0, 2.0, 0.0));
    assert_eq!(*node.world_matrix(), node.local_matrix());
    assert_eq!(node.world().position, Vector3::new(1.0, 2.0, 0.0));

    let turned = Transform::from_position_rotation(Vector3::zero(), Quaternion::from_axis_angle(Vector3::Z, PI));
    node.set_local(turned);
    assert_eq!(node.world().position, Vector3::new(1.0, 2.0, 0.0));

    node.update_world_matrix();
    assert_eq!(node.world(), &turned);
}

#[test]
fn test_nalgebra_roundtrips() {
    let v = Vector3::new(1.5, -2.0, 0.25);
    assert_eq!(Vector3::from_nalgebra(&v.to_nalgebra()), v);

    let m = Transform::new(v, Quaternion::from_axis_angle(Vector3::X, 0.7), Vector3::splat(3.0)).to_matrix();
    assert_eq!(Matrix4::from_nalgebra(&m.to_nalgebra()), m);
    assert_eq!(m.to_nalgebra()[(1, 3)], -2.0);
}

fn arb_aabb() -> impl Strategy<Value = Aabb> {
    (
        prop::array::uniform3(-10.0..10.0f64),
        prop::array::uniform3(0.0..5.0f64),
    )
        .prop_map(|(min, size)| {
            let min = Vector3::from(min);
            Aabb::new(min, min + Vector3::from(size))
        })
}

proptest! {
    #[test]
    fn aabb_collide_is_symmetric(a in arb_aabb(), b in arb_aabb()) {
        prop_assert_eq!(a.collide(&b), b.collide(&a));
    }

    #[test]
    fn aabb_collides_with_its_expansion(a in arb_aabb(), b in arb_aabb()) {
        let mut union = a;
        union.expand_by_aabb(&b);
        prop_assert!(union.collide(&a));
        prop_assert!(union.collide(&b));
    }
}
