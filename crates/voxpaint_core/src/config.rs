//! # Renderer Configuration
//!
//! Loaded once at startup from a TOML file. Every section is optional and
//! falls back to the values in [`crate::constants`].
//!
//! ```toml
//! palette = [[0, 255, 255], [255, 0, 255]]
//!
//! [viewport]
//! width = 800
//! height = 800
//!
//! [culling]
//! backface_tolerance = -0.3
//! frustum_tolerance = 0.5
//!
//! [[voxels]]
//! position = [0, 0, 0]
//! voxel_type = 1
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::camera::CameraPose;
use crate::constants::{
    BACKFACE_TOLERANCE, CAMERA_START, DEFAULT_PALETTE, FOCAL_LENGTH, FRUSTUM_TOLERANCE,
    GRID_SIZE, MOVEMENT_SPEED, VIEWPORT_HEIGHT, VIEWPORT_WIDTH,
};
use crate::error::ConfigError;
use crate::palette::{Rgb, VoxelPalette};
use crate::processor::PipelineSettings;

/// Output surface size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewportConfig {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: VIEWPORT_WIDTH,
            height: VIEWPORT_HEIGHT,
        }
    }
}

/// Projection parameters.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectionConfig {
    /// Pinhole focal length.
    pub focal_length: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            focal_length: FOCAL_LENGTH,
        }
    }
}

/// Culling thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CullingConfig {
    /// Backface threshold on the normal/direction dot product.
    pub backface_tolerance: f64,
    /// Minimum camera-space depth of a drawable corner. Must be positive.
    pub frustum_tolerance: f64,
}

impl Default for CullingConfig {
    fn default() -> Self {
        Self {
            backface_tolerance: BACKFACE_TOLERANCE,
            frustum_tolerance: FRUSTUM_TOLERANCE,
        }
    }
}

/// Camera movement.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MovementConfig {
    /// Translation per frame per held key.
    pub speed: f64,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            speed: MOVEMENT_SPEED,
        }
    }
}

/// Voxel grid bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridConfig {
    /// Dimensions (x, y, z).
    pub size: [usize; 3],
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { size: GRID_SIZE }
    }
}

/// Initial camera pose.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CameraConfig {
    /// Camera offset.
    pub position: [f64; 3],
    /// Yaw (radians).
    pub yaw: f64,
    /// Pitch (radians).
    pub pitch: f64,
    /// Roll (radians).
    pub roll: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: CAMERA_START,
            yaw: 0.0,
            pitch: 0.0,
            roll: 0.0,
        }
    }
}

/// One solid voxel in the startup scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VoxelPlacement {
    /// Grid coordinate.
    pub position: [i32; 3],
    /// Type code (1-based palette index).
    pub voxel_type: u8,
}

impl VoxelPlacement {
    /// Creates a placement.
    #[must_use]
    pub const fn new(position: [i32; 3], voxel_type: u8) -> Self {
        Self {
            position,
            voxel_type,
        }
    }
}

/// Complete renderer configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RendererConfig {
    /// Output surface.
    pub viewport: ViewportConfig,
    /// Projection.
    pub projection: ProjectionConfig,
    /// Culling thresholds.
    pub culling: CullingConfig,
    /// Camera movement.
    pub movement: MovementConfig,
    /// Grid bounds.
    pub grid: GridConfig,
    /// Initial camera.
    pub camera: CameraConfig,
    /// Colours in type order.
    pub palette: Vec<[u8; 3]>,
    /// Startup scene.
    pub voxels: Vec<VoxelPlacement>,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            viewport: ViewportConfig::default(),
            projection: ProjectionConfig::default(),
            culling: CullingConfig::default(),
            movement: MovementConfig::default(),
            grid: GridConfig::default(),
            camera: CameraConfig::default(),
            palette: DEFAULT_PALETTE.to_vec(),
            voxels: vec![
                VoxelPlacement::new([0, 0, 0], 1),
                VoxelPlacement::new([0, 1, 0], 2),
                VoxelPlacement::new([1, 2, 3], 2),
            ],
        }
    }
}

impl RendererConfig {
    /// Parses and validates a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::Invalid`] for values [`Self::validate`] rejects.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise see
    /// [`Self::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::info!(
            path = %path.display(),
            voxels = config.voxels.len(),
            colors = config.palette.len(),
            "loaded renderer config"
        );
        Ok(config)
    }

    /// Checks that the values can drive the pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| {
            tracing::warn!(%msg, "rejected renderer config");
            Err(ConfigError::Invalid(msg))
        };

        if self.viewport.width == 0 || self.viewport.height == 0 {
            return invalid(format!(
                "viewport must be non-empty, got {}x{}",
                self.viewport.width, self.viewport.height
            ));
        }
        let focal = self.projection.focal_length;
        if !focal.is_finite() || focal == 0.0 {
            return invalid(format!("focal_length must be finite and non-zero, got {focal}"));
        }
        let frustum = self.culling.frustum_tolerance;
        if !frustum.is_finite() || frustum <= 0.0 {
            return invalid(format!("frustum_tolerance must be positive, got {frustum}"));
        }
        if !self.culling.backface_tolerance.is_finite() {
            return invalid("backface_tolerance must be finite".to_owned());
        }
        if !self.movement.speed.is_finite() {
            return invalid("movement speed must be finite".to_owned());
        }
        if self.grid.size.contains(&0) {
            return invalid(format!("grid size must be non-zero, got {:?}", self.grid.size));
        }
        let camera = &self.camera;
        if !camera.position.iter().chain([&camera.yaw, &camera.pitch, &camera.roll]).all(|v| v.is_finite()) {
            return invalid("camera pose must be finite".to_owned());
        }
        if self.palette.is_empty() || self.palette.len() > usize::from(u8::MAX) {
            return invalid(format!(
                "palette must hold 1..=255 colours, got {}",
                self.palette.len()
            ));
        }
        for placement in &self.voxels {
            if placement.voxel_type == 0 || usize::from(placement.voxel_type) > self.palette.len() {
                return invalid(format!(
                    "voxel at {:?} has type {} but the palette has {} colours",
                    placement.position,
                    placement.voxel_type,
                    self.palette.len()
                ));
            }
            let inside = placement
                .position
                .iter()
                .zip(self.grid.size)
                .all(|(&c, size)| usize::try_from(c).is_ok_and(|c| c < size));
            if !inside {
                return invalid(format!(
                    "voxel at {:?} is outside grid {:?}",
                    placement.position, self.grid.size
                ));
            }
        }

        Ok(())
    }

    /// Numeric pipeline settings.
    #[must_use]
    pub fn pipeline_settings(&self) -> PipelineSettings {
        PipelineSettings {
            viewport_width: self.viewport.width,
            viewport_height: self.viewport.height,
            focal_length: self.projection.focal_length,
            backface_tolerance: self.culling.backface_tolerance,
            frustum_tolerance: self.culling.frustum_tolerance,
        }
    }

    /// Initial camera pose.
    #[must_use]
    pub fn camera_pose(&self) -> CameraPose {
        CameraPose::new(
            self.camera.position,
            self.camera.yaw,
            self.camera.pitch,
            self.camera.roll,
        )
    }

    /// Voxel palette.
    #[must_use]
    pub fn voxel_palette(&self) -> VoxelPalette {
        VoxelPalette::new(self.palette.iter().copied().map(Rgb::from_array).collect())
    }
}
