//! # Scene Objects
//!
//! Rigid-body scene objects for the drone scene and the geometry model
//! underneath them.
//!
//! ## Architecture Overview
//!
//! - **Pose** ([`pose`]) - Position plus rotation matrix for a rigid body
//! - **Geometry** ([`geometry`], [`primitive`]) - Immutable local-frame
//!   geometry and the per-frame world-space copy derived from it
//! - **Objects** ([`quadrotor`], [`load`], [`link`]) - Composites that
//!   register their drawables on the canvas and expose a uniform `set`
//!   contract
//!
//! Every object recomputes its world geometry from scratch on each `set`
//! call; nothing accumulates between frames.

pub mod geometry;
pub mod link;
pub mod load;
pub mod pose;
pub mod primitive;
pub mod quadrotor;

pub use geometry::GeometryElement;
pub use link::Link;
pub use load::Load;
pub use pose::Pose;
pub use primitive::RigidPrimitive;
pub use quadrotor::Quadrotor;
