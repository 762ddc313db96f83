//! # Rendering Error Types

use thiserror::Error;
use voxpaint_core::CoreError;

/// Errors that abandon a frame.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The voxel pipeline failed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Writing frame output failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A draw sink refused a command.
    #[error("draw sink failed: {0}")]
    Sink(String),
}

/// Result type for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;
