//! Application error types.

use thiserror::Error;
use voxpaint_core::{ConfigError, CoreError};
use voxpaint_rendering::RenderError;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded or was rejected.
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    /// Scene construction failed.
    #[error("scene: {0}")]
    Core(#[from] CoreError),

    /// A frame was abandoned.
    #[error("render: {0}")]
    Render(#[from] RenderError),

    /// Key name not bound to a movement.
    #[error("unknown key '{0}' (expected w, a, s, d, space or lshift)")]
    UnknownKey(String),

    /// Bad command line.
    #[error("usage: {0}")]
    Usage(String),
}

/// Result type for application operations.
pub type AppResult<T> = Result<T, AppError>;
