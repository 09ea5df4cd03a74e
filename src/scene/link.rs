//! Rigging links: line segments whose endpoints are computed externally.

use cgmath::{Vector3, Zero};

use crate::canvas::{Artist, ArtistCategory, ArtistHandle, ArtistKind, Canvas, Style};
use crate::scene::primitive::RigidPrimitive;

/// A tether or cable between two independently supplied world points.
///
/// Unlike the rigid scene objects a link carries no pose of its own: one
/// end typically sits on a drone body and the other on a load, both
/// computed by the caller. Each [`set`](Self::set) call replaces the
/// segment outright.
pub struct Link {
    body: ArtistHandle,
}

impl Link {
    /// Create a black, width-1 link and register it on `canvas`
    pub fn new(canvas: &mut Canvas) -> Self {
        Self::with_style(canvas, Style::line([0.0, 0.0, 0.0, 1.0], 1.0))
    }

    /// Create a link with an explicit style
    pub fn with_style(canvas: &mut Canvas, style: Style) -> Self {
        let body = Artist::handle(
            ArtistKind::Line,
            RigidPrimitive::from_points(&[Vector3::zero(), Vector3::zero()]),
            style,
        );
        canvas.add(ArtistCategory::Lines, &body);

        Self { body }
    }

    /// Assign both endpoints directly in world space
    pub fn set(&mut self, start: Vector3<f32>, end: Vector3<f32>) {
        self.body
            .borrow_mut()
            .primitive
            .set_world_points(&[start, end]);
    }

    /// Drawable handle, for explicit tracking or inspection
    pub fn artist(&self) -> ArtistHandle {
        self.body.clone()
    }
}
