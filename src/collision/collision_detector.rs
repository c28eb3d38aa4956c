//! Swept separating-axis tests between boxes.
//!
//! The moving box is inflated to cover its whole displacement for the step,
//! which turns the continuous test into a single static SAT test. Only the
//! face axes of both boxes are tried; edge-edge cross axes are not.

use crate::collision::{Axes, Manifold};
use crate::math::{Aabb, Oobb, Projection, Tolerance, Vector3};

/// Narrow-phase collision test between a moving box and a static box
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CollisionDetector {
    tolerance: Tolerance,
}

impl CollisionDetector {
    /// Creates a detector using `tolerance` for every comparison
    pub fn new(tolerance: Tolerance) -> Self {
        Self { tolerance }
    }

    /// Returns the detector's tolerance
    pub fn tolerance(&self) -> &Tolerance {
        &self.tolerance
    }

    /// Tests `movable`, displaced by `movement` over the step, against `fixed`.
    ///
    /// Returns the least-penetration manifold among the face axes of both
    /// boxes that have a component along `movement`, or `None` when some axis
    /// separates the swept box from `fixed`.
    pub fn detect_continuous_collision(
        &self,
        movable: &Oobb,
        fixed: &Oobb,
        movement: Vector3,
    ) -> Option<Manifold> {
        let axes = self.collect_axes(movable, fixed);
        let swept = movable.swept(movement);

        self.least_penetration(&swept.points(), &fixed.points(), &axes, movement, |axis| {
            !self.tolerance.zero(axis.dot(&movement))
        })
    }

    /// World-axis variant of [`detect_continuous_collision`] for AABBs.
    ///
    /// When `resolving_axes` is given, an axis is a candidate if it is not
    /// orthogonal to at least one of them; otherwise the movement vector is
    /// used as in the oriented test.
    ///
    /// [`detect_continuous_collision`]: Self::detect_continuous_collision
    pub fn continuous_aabb_collision_detection(
        &self,
        movable: &Aabb,
        fixed: &Aabb,
        movement: Vector3,
        resolving_axes: Option<&[Vector3]>,
    ) -> Option<Manifold> {
        let swept = Oobb::from_aabb(movable).swept(movement);
        let fixed = Oobb::from_aabb(fixed);

        self.least_penetration(&swept.points(), &fixed.points(), &Vector3::axes(), movement, |axis| {
            match resolving_axes {
                Some(resolving) => resolving.iter().any(|r| !self.tolerance.zero(axis.dot(r))),
                None => !self.tolerance.zero(axis.dot(&movement)),
            }
        })
    }

    /// Gathers the face normals of both boxes, dropping parallel duplicates
    fn collect_axes(&self, a: &Oobb, b: &Oobb) -> Vec<Vector3> {
        let mut axes: Vec<Vector3> = Vec::with_capacity(6);
        for candidate in a.basis().into_iter().chain(b.basis()) {
            let duplicate = axes
                .iter()
                .any(|existing| self.tolerance.eq(existing.dot(&candidate).abs(), 1.0));
            if !duplicate {
                axes.push(candidate);
            }
        }
        axes
    }

    fn least_penetration(
        &self,
        moving_points: &[Vector3],
        fixed_points: &[Vector3],
        axes: &[Vector3],
        movement: Vector3,
        is_candidate: impl Fn(&Vector3) -> bool,
    ) -> Option<Manifold> {
        let mut moving = Projection::empty();
        let mut fixed = Projection::empty();
        let mut best: Option<Manifold> = None;

        for axis in axes {
            moving.project(moving_points, axis);
            fixed.project(fixed_points, axis);

            let left = moving.overlap_left(&fixed);
            let right = moving.overlap_right(&fixed);
            if self.tolerance.lte(left, 0.0) || self.tolerance.lte(right, 0.0) {
                return None;
            }

            let (axis, penetration) = if axis.dot(&movement) >= 0.0 {
                (*axis, right)
            } else {
                (-*axis, left)
            };

            if !is_candidate(&axis) {
                continue;
            }

            if best.map_or(true, |m| penetration < m.penetration) {
                best = Some(Manifold::new(axis, penetration));
            }
        }

        best.map(|m| Manifold::new(m.axis, m.penetration * (1.0 + self.tolerance.epsilon)))
    }
}

/// [`CollisionDetector::detect_continuous_collision`] with the default tolerance
pub fn detect_continuous_collision(movable: &Oobb, fixed: &Oobb, movement: Vector3) -> Option<Manifold> {
    CollisionDetector::default().detect_continuous_collision(movable, fixed, movement)
}

/// [`CollisionDetector::continuous_aabb_collision_detection`] with the default
/// tolerance, resolving only along the world axes in `resolving`
pub fn continuous_aabb_collision_detection(
    movable: &Aabb,
    fixed: &Aabb,
    movement: Vector3,
    resolving: Option<Axes>,
) -> Option<Manifold> {
    let axes = resolving.map(Axes::vectors);
    CollisionDetector::default().continuous_aabb_collision_detection(movable, fixed, movement, axes.as_deref())
}
