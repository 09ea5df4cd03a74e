//! Suspended load: a hull from an apex down to its anchor points.

use cgmath::{Matrix3, Vector3, Zero};

use crate::canvas::{Artist, ArtistCategory, ArtistHandle, ArtistKind, Canvas, Style};
use crate::scene::geometry::GeometryElement;
use crate::scene::pose::Pose;
use crate::scene::primitive::RigidPrimitive;

/// A suspended load drawn as a hull from its apex (the local origin) to
/// `N` anchor points.
///
/// The hull is a single surface artist registered on the canvas at
/// construction; the whole hull moves as one rigid body.
pub struct Load {
    body: ArtistHandle,
}

impl Load {
    /// Build the load hull and register it on `canvas`.
    ///
    /// The apex sits at the local origin and the anchors hang off it. A
    /// load with no anchors is a caller bug and fails immediately.
    pub fn new(canvas: &mut Canvas, anchors: &[Vector3<f32>]) -> Self {
        assert!(!anchors.is_empty(), "load needs at least one anchor");

        let mut elements = Vec::with_capacity(anchors.len() + 2);
        elements.push(GeometryElement::Point(Vector3::zero()));
        elements.extend(anchors.iter().copied().map(GeometryElement::Point));
        // Homogeneous row of the hull's coordinate block; rides along
        // untouched by every transform
        elements.push(GeometryElement::Topology(vec![1.0; anchors.len() + 1]));

        let body = Artist::handle(
            ArtistKind::Surface,
            RigidPrimitive::new(elements),
            Style::default(),
        );
        canvas.add(ArtistCategory::Surfaces, &body);

        Self { body }
    }

    /// Move the hull: rotate every vertex about the apex by
    /// `orientation`, then translate by `position`
    pub fn set(&mut self, position: Vector3<f32>, orientation: Matrix3<f32>) {
        self.body
            .borrow_mut()
            .primitive
            .set_pose(&Pose::new(position, orientation));
    }

    /// [`set`](Self::set) with identity orientation
    pub fn set_position(&mut self, position: Vector3<f32>) {
        self.body
            .borrow_mut()
            .primitive
            .set_pose(&Pose::from_position(position));
    }

    /// Drawable handle, for explicit tracking or inspection
    pub fn artist(&self) -> ArtistHandle {
        self.body.clone()
    }
}
