//! Rigid primitives: fixed local geometry, per-frame world geometry.

use cgmath::Vector3;

use super::geometry::GeometryElement;
use super::pose::Pose;

/// A drawable primitive's geometry under rigid-body motion.
///
/// The base (local-frame) geometry is fixed at construction and never
/// mutated afterwards. The world geometry is overwritten wholesale on
/// every [`set_pose`](Self::set_pose) call, so transforms never
/// accumulate: each call is a pure recomputation from the base.
#[derive(Debug, Clone)]
pub struct RigidPrimitive {
    base: Vec<GeometryElement>,
    world: Vec<GeometryElement>,
}

impl RigidPrimitive {
    /// Create a primitive from local-frame geometry.
    ///
    /// The world geometry starts equal to the base, i.e. the identity
    /// pose. Empty geometry is a caller bug and fails immediately.
    pub fn new(base: Vec<GeometryElement>) -> Self {
        assert!(
            !base.is_empty(),
            "rigid primitive needs at least one geometry element"
        );
        let world = base.clone();
        Self { base, world }
    }

    /// Convenience constructor for point-only geometry
    pub fn from_points(points: &[Vector3<f32>]) -> Self {
        Self::new(points.iter().copied().map(GeometryElement::Point).collect())
    }

    /// Recompute the world geometry for `pose`.
    ///
    /// Every spatial point `p` becomes `orientation * p + position`;
    /// topology rows are left exactly as constructed. Element order is
    /// preserved, so per-element metadata indexed parallel to the
    /// geometry stays valid across any number of calls.
    pub fn set_pose(&mut self, pose: &Pose) {
        for (world, base) in self.world.iter_mut().zip(self.base.iter()) {
            if let GeometryElement::Point(p) = base {
                *world = GeometryElement::Point(pose.transform_point(*p));
            }
            // Topology rows pass through untouched
        }
    }

    /// Directly overwrite the world-space points, bypassing any pose.
    ///
    /// Used by primitives whose endpoints are computed externally rather
    /// than derived from a rigid pose. Each call fully replaces the
    /// previous points.
    ///
    /// Panics if `points` does not match the number of spatial points in
    /// the base geometry.
    pub fn set_world_points(&mut self, points: &[Vector3<f32>]) {
        assert_eq!(
            points.len(),
            self.point_count(),
            "world point count does not match base geometry"
        );
        let mut next = points.iter().copied();
        for world in self.world.iter_mut() {
            if let GeometryElement::Point(p) = world {
                *p = next.next().expect("length checked above");
            }
        }
    }

    /// The immutable local-frame geometry
    pub fn base(&self) -> &[GeometryElement] {
        &self.base
    }

    /// The current world-space geometry
    pub fn world(&self) -> &[GeometryElement] {
        &self.world
    }

    /// Current world-space spatial points, in base order
    pub fn world_points(&self) -> impl Iterator<Item = Vector3<f32>> + '_ {
        self.world.iter().filter_map(GeometryElement::as_point)
    }

    /// Number of spatial points in the geometry
    pub fn point_count(&self) -> usize {
        self.base
            .iter()
            .filter(|e| matches!(e, GeometryElement::Point(_)))
            .count()
    }
}
