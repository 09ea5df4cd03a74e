//! # Animation Layer
//!
//! Drives the scene frame by frame and owns the drawable registry.
//!
//! ## Architecture Overview
//!
//! - **Traits** ([`traits`]) - The [`Animate`] contract user animations
//!   implement, and the [`RenderBackend`] seam to the external
//!   rendering/blitting layer
//! - **Registry** ([`registry`]) - The [`DrawableSet`] reconciled once
//!   at initialization from the explicit drawable list and the canvas
//!   containers
//! - **Driver** ([`driver`]) - The [`AnimationDriver`] session state
//!   machine: `Uninitialized -> Initialized -> Running -> Stopped`
//!
//! Everything here is single-threaded and synchronous: an external frame
//! tick calls [`AnimationDriver::advance`], each `set` completes before
//! the frame is handed over, and the rendering layer reads the result.

pub mod driver;
pub mod registry;
pub mod traits;

pub use driver::{AnimationDriver, AnimationError, DriverState};
pub use registry::DrawableSet;
pub use traits::{Animate, Frame, RenderBackend};
