//! # VOXPAINT Core
//!
//! The per-frame voxel pipeline of a CPU-only painter's-algorithm renderer.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    PER-FRAME PIPELINE                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  VoxelSource::occupied_coords → sort_by_distance (far first) │
//! │       ↓                                                      │
//! │  VoxelProcessor (per voxel)                                  │
//! │    ├─ transform 8 corners: + coord + camera, Rotation        │
//! │    ├─ VisibilityChecker: interior, backface                  │
//! │    ├─ frustum: drop faces with a corner below tolerance      │
//! │    └─ Projector → ProcessedFace { quad, color }              │
//! │       ↓                                                      │
//! │  ordered draw list → DrawSink (voxpaint_rendering)           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing in this crate draws. The processor only reads the camera pose and
//! the voxel source, so per-voxel work can be fanned out as long as results
//! are recombined in sorted order.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod camera;
pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod palette;
pub mod processor;
pub mod project;
pub mod rotate;
pub mod sort;
pub mod visibility;
pub mod voxel;

pub use camera::CameraPose;
pub use config::{RendererConfig, VoxelPlacement};
pub use error::{ConfigError, CoreError, CoreResult};
pub use geometry::{FACES, FACE_COUNT, FACE_NORMALS, VERTICES};
pub use palette::{Rgb, VoxelPalette};
pub use processor::{CullCounts, PipelineSettings, ProcessedFace, VoxelProcessor};
pub use project::{Projector, ScreenPoint};
pub use rotate::{rotate, Rotation};
pub use sort::{sort_by_distance, sorted_by_distance, voxel_distance};
pub use visibility::{FaceVisibility, VisibilityChecker};
pub use voxel::{VoxelGrid, VoxelSource, VoxelType};
