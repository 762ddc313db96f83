//! # VOXPAINT Rendering
//!
//! The draw side of the renderer: a [`FrameDriver`] that runs the core
//! pipeline once per frame and hands the ordered quads to a [`DrawSink`].
//!
//! ## Sinks
//!
//! - [`Framebuffer`]: CPU scanline fill into an RGB buffer, PPM export.
//! - [`DrawList`]: records commands; headless runs and tests.
//!
//! Anything else (a window, a terminal, a GPU immediate-mode API) only has to
//! implement [`DrawSink`]. Sinks must draw in the order given: there is no
//! depth buffer and overdraw order is what makes occlusion correct.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod driver;
pub mod error;
pub mod framebuffer;
pub mod sink;
pub mod stats;

pub use driver::{DrawPlan, FrameDriver};
pub use error::{RenderError, RenderResult};
pub use framebuffer::Framebuffer;
pub use sink::{DrawCommand, DrawList, DrawSink};
pub use stats::FrameStats;
