//! # VOXPAINT
//!
//! A CPU-only voxel renderer using the painter's algorithm: occupied voxels
//! are drawn farthest first, so nearer faces overwrite farther ones without a
//! depth buffer.
//!
//! ## Crates
//!
//! - [`core`]: geometry, rotation, projection, culling, ordering, config
//! - [`rendering`]: draw sinks, CPU framebuffer, frame driver
//!
//! This crate adds the camera controller, scene construction and the
//! frame loop.
//!
//! ```text
//! RendererConfig ──→ App::new ──→ App::tick(keys) ──→ Framebuffer
//!                                   │
//!                      CameraController → FrameDriver
//! ```

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod app;
pub mod cli;
pub mod error;
pub mod input;
pub mod movement;
pub mod scene;

pub use app::{App, SessionStats};
pub use cli::RunOptions;
pub use error::{AppError, AppResult};
pub use input::{HeldKeys, MovementKey};
pub use movement::CameraController;
pub use scene::build_grid;

/// Re-export the pipeline crate.
pub use voxpaint_core as core;

/// Re-export the rendering crate.
pub use voxpaint_rendering as rendering;
