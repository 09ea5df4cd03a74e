// src/lib.rs
//! Skyrig
//!
//! A rigid-body scene and animation core for drone and slung-load
//! visualization. Scene objects keep immutable local-frame geometry and
//! recompute world-space geometry from a pose every frame; the animation
//! driver discovers every drawable once at setup and hands the cached
//! set to a blitting render backend per frame.

pub mod animation;
pub mod canvas;
pub mod scene;

// Re-export main types for convenience
pub use animation::{Animate, AnimationDriver, AnimationError, Frame, RenderBackend};
pub use canvas::{Artist, ArtistCategory, ArtistHandle, Canvas};
pub use scene::{Link, Load, Pose, Quadrotor};

/// Creates an animation driver for the given animation
pub fn animate(animator: impl Animate + 'static) -> AnimationDriver {
    AnimationDriver::new(Box::new(animator))
}
