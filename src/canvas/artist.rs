use std::cell::RefCell;
use std::rc::Rc;

use crate::scene::primitive::RigidPrimitive;

/// RGBA color with components in `0.0..=1.0`
pub type Color = [f32; 4];

/// How the rendering backend interprets an artist's point list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtistKind {
    /// Independent line segments: consecutive point pairs
    Segments,
    /// A single polyline through all points
    Line,
    /// A filled outline; the first point is the center
    Patch,
    /// A triangulated surface; topology rows carry the homogeneous block
    Surface,
    /// A text label anchored at the first point
    Text,
}

/// Rendering attributes carried alongside an artist's geometry.
///
/// Rigid transforms never touch these: colors, widths, and labels stay
/// bit-identical across any number of `set` calls.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub edge_color: Color,
    pub face_color: Option<Color>,
    pub line_width: f32,
    /// Per-segment colors for [`ArtistKind::Segments`], indexed parallel
    /// to the segment order
    pub segment_colors: Option<Vec<Color>>,
    /// Label text for [`ArtistKind::Text`]
    pub label: Option<String>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            edge_color: [0.0, 0.0, 0.0, 1.0],
            face_color: None,
            line_width: 1.0,
            segment_colors: None,
            label: None,
        }
    }
}

impl Style {
    /// Plain line style with the given color and width
    pub fn line(color: Color, line_width: f32) -> Self {
        Self {
            edge_color: color,
            line_width,
            ..Self::default()
        }
    }
}

/// A drawable primitive: rigid geometry plus fixed render metadata
#[derive(Debug)]
pub struct Artist {
    pub kind: ArtistKind,
    pub primitive: RigidPrimitive,
    pub style: Style,
}

/// Shared handle to an artist.
///
/// Handles are compared by identity ([`Rc::ptr_eq`]), never by value:
/// two artists with identical geometry are still distinct drawables. The
/// single-threaded frame model makes `Rc<RefCell<_>>` sufficient, no
/// locking is involved.
pub type ArtistHandle = Rc<RefCell<Artist>>;

impl Artist {
    /// Create an artist and wrap it in a shareable handle
    pub fn handle(kind: ArtistKind, primitive: RigidPrimitive, style: Style) -> ArtistHandle {
        Rc::new(RefCell::new(Self {
            kind,
            primitive,
            style,
        }))
    }

    /// Identity comparison between two handles
    pub fn same(a: &ArtistHandle, b: &ArtistHandle) -> bool {
        Rc::ptr_eq(a, b)
    }
}
