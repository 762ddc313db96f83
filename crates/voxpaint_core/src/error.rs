//! # Core Error Types
//!
//! The pipeline itself never fails on geometry: out-of-bounds reads are air and
//! projection is guarded by frustum culling. What can fail is data that does
//! not fit together (a type code with no palette entry) and configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the voxel pipeline and its data model.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A voxel carries a type code the palette has no colour for.
    #[error("unknown voxel type {voxel_type}: palette has {palette_len} colours")]
    UnknownVoxelType {
        /// The offending type code.
        voxel_type: u8,
        /// Number of colours in the palette.
        palette_len: usize,
    },

    /// Attempted to write a voxel outside the grid.
    #[error("voxel {coord:?} is outside grid bounds {dims:?}")]
    OutOfBounds {
        /// Requested coordinate.
        coord: [i32; 3],
        /// Grid dimensions.
        dims: [usize; 3],
    },

    /// Grid dimensions must all be non-zero and addressable with `i32`.
    #[error("invalid grid dimensions {0:?}")]
    InvalidDimensions([usize; 3]),
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for this schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration parsed but holds unusable values.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
