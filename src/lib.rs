//! # flowtrails - flow-field particle trails
//!
//! An animated flow-field effect: a grid of steering angles derived from a
//! cheap trigonometric function drives a swarm of particles, each dragging a
//! fading trail across a 2D canvas.
//!
//! ## Quick Start
//!
//! ```ignore
//! use flowtrails::prelude::*;
//!
//! fn main() -> Result<(), RunError> {
//!     Effect::new()
//!         .with_size(1280, 720)
//!         .with_palette(Palette::Spectrum)
//!         .run()
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Flow field
//!
//! [`FlowField`] maps every grid cell to a steering angle, quantized to one
//! decimal so the field bands into regions of identical direction. The cell
//! size grows a little after every frame, so the field coarsens and the
//! visual character drifts over the session. See [`FieldConfig`] for the
//! knobs (`cell_size`, `zoom`, `curve`, `growth`).
//!
//! ### Particles
//!
//! Each [`Particle`] samples the field at its position every tick, steers
//! along the sampled angle, and drags a bounded trail of past positions
//! drawn as a polyline. When its lifetime runs out it respawns at a random
//! point.
//!
//! ### Canvas
//!
//! The effect draws through the [`Canvas`] trait, a minimal path/stroke
//! contract. The built-in windowed runner renders through wgpu; implement
//! the trait yourself to drive the simulation headless (see the `headless`
//! example).
//!
//! ### Debug overlay
//!
//! Press `d` in the windowed runner (or call
//! [`ParticleSystem::toggle_debug`]) to overlay the field grid at its
//! current cell size.

pub mod canvas;
pub mod error;
pub mod field;
mod gpu;
pub mod particle;
mod simulation;
pub mod system;
pub mod time;
pub mod visuals;
mod window;

pub use canvas::Canvas;
pub use error::{GpuError, RunError};
pub use field::{steering_angle, FieldConfig, FlowField};
pub use glam::{Vec2, Vec3};
pub use particle::Particle;
pub use simulation::Effect;
pub use system::ParticleSystem;
pub use visuals::Palette;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use flowtrails::prelude::*;
/// ```
pub mod prelude {
    pub use crate::canvas::Canvas;
    pub use crate::error::RunError;
    pub use crate::field::{FieldConfig, FlowField};
    pub use crate::simulation::Effect;
    pub use crate::system::ParticleSystem;
    pub use crate::time::Time;
    pub use crate::visuals::Palette;
    pub use crate::{Vec2, Vec3};
}
