//! Core animation traits.
//!
//! Defines the contract user animations implement to drive the scene,
//! and the seam to the external rendering/blitting backend.

use std::path::Path;

use crate::canvas::{ArtistHandle, Canvas};

/// Frame token handed to the per-frame callback
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Frame {
    /// Sequential frame index
    Index(usize),
    /// Externally supplied frame value, e.g. simulation time
    Value(f32),
}

/// User animation: builds the scene once, then advances poses per frame.
///
/// This is the interface the [`AnimationDriver`] calls into over a
/// session. Implement it on whatever struct owns your scene objects.
///
/// [`AnimationDriver`]: crate::animation::AnimationDriver
pub trait Animate {
    /// Construct the scene.
    ///
    /// Called exactly once, at driver initialization. Scene objects
    /// created here register their artists on the canvas and are
    /// discovered automatically; any handles returned are tracked
    /// explicitly and keep their returned order at the front of the
    /// drawable set.
    fn setup(&mut self, canvas: &mut Canvas) -> Option<Vec<ArtistHandle>>;

    /// Advance object poses for `frame`.
    ///
    /// Only objects whose pose changed this frame need to be touched;
    /// untouched objects keep their previous world geometry, which stays
    /// valid for redraw. An error fails the whole frame: the driver
    /// yields nothing to the rendering layer rather than a partially
    /// updated scene.
    fn frame(&mut self, frame: Frame) -> anyhow::Result<()>;
}

/// External rendering/blitting backend.
///
/// The driver never draws or encodes anything itself; it hands the
/// cached drawable set to one of these after every frame.
pub trait RenderBackend {
    /// Redraw the given drawables over the static background
    fn blit(&mut self, drawables: &[ArtistHandle]) -> anyhow::Result<()>;

    /// Encode the animation to `path` using the named writer
    fn save(&mut self, path: &Path, writer: &str, drawables: &[ArtistHandle])
        -> anyhow::Result<()>;
}
