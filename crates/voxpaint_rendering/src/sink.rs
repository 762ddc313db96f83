//! Draw sinks.
//!
//! The frame driver hands quads to a [`DrawSink`] in painter's order. A sink
//! never sorts, depth-tests or drops commands: later quads simply cover
//! earlier ones.

use voxpaint_core::{Rgb, ScreenPoint};

use crate::error::RenderResult;

/// Receiver of one frame's draw commands.
///
/// Per frame the driver calls [`clear`](Self::clear) once, then
/// [`fill_polygon`](Self::fill_polygon) for every quad in draw order, then
/// [`present`](Self::present) once.
pub trait DrawSink {
    /// Resets the frame to a solid colour.
    ///
    /// # Errors
    ///
    /// Implementation defined; an error abandons the frame.
    fn clear(&mut self, color: Rgb) -> RenderResult<()>;

    /// Fills a simple polygon given in winding order.
    ///
    /// # Errors
    ///
    /// Implementation defined; an error abandons the frame.
    fn fill_polygon(&mut self, quad: &[ScreenPoint; 4], color: Rgb) -> RenderResult<()>;

    /// Finishes the frame.
    ///
    /// # Errors
    ///
    /// Implementation defined; an error abandons the frame.
    fn present(&mut self) -> RenderResult<()>;
}

/// One recorded fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCommand {
    /// Corners in winding order.
    pub quad: [ScreenPoint; 4],
    /// Fill colour.
    pub color: Rgb,
}

/// Sink that records commands instead of drawing them.
///
/// Useful headless and in tests: after `present`, [`commands`](Self::commands)
/// holds exactly what a real sink would have filled, in order.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    clear_color: Option<Rgb>,
    commands: Vec<DrawCommand>,
    presented: u64,
}

impl DrawList {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded since the last clear.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Colour of the last clear, if any.
    #[must_use]
    pub const fn clear_color(&self) -> Option<Rgb> {
        self.clear_color
    }

    /// Number of frames presented.
    #[must_use]
    pub const fn presented_frames(&self) -> u64 {
        self.presented
    }
}

impl DrawSink for DrawList {
    fn clear(&mut self, color: Rgb) -> RenderResult<()> {
        self.clear_color = Some(color);
        self.commands.clear();
        Ok(())
    }

    fn fill_polygon(&mut self, quad: &[ScreenPoint; 4], color: Rgb) -> RenderResult<()> {
        self.commands.push(DrawCommand { quad: *quad, color });
        Ok(())
    }

    fn present(&mut self) -> RenderResult<()> {
        self.presented += 1;
        Ok(())
    }
}
