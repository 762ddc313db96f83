//! # Frame Loop
//!
//! ```text
//! Frame N:
//! ┌──────────────────────────────────────────────────────────┐
//! │ 1. INPUT    held keys → CameraController moves the pose  │
//! │ 2. RENDER   FrameDriver: sort, process, clear, fill      │
//! │ 3. PRESENT  framebuffer holds the finished frame         │
//! │ 4. RECORD   FrameStats → SessionStats                    │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The camera is only written in step 1, so the whole of step 2 sees one
//! pose.

use voxpaint_core::{CameraPose, RendererConfig, VoxelGrid, VoxelPalette};
use voxpaint_rendering::{FrameDriver, FrameStats, Framebuffer};

use crate::error::AppResult;
use crate::input::HeldKeys;
use crate::movement::CameraController;
use crate::scene::build_grid;

/// Statistics accumulated over a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionStats {
    /// Frames recorded.
    pub frames_recorded: u64,
    /// Sum of quads drawn.
    pub faces_drawn_sum: u64,
    /// Sum of faces culled for any reason.
    pub faces_culled_sum: u64,
    /// Sum of frame times.
    pub total_us_sum: u64,
    /// Fastest frame.
    pub min_frame_us: u64,
    /// Slowest frame.
    pub max_frame_us: u64,
}

impl SessionStats {
    /// Creates an empty accumulator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            frames_recorded: 0,
            faces_drawn_sum: 0,
            faces_culled_sum: 0,
            total_us_sum: 0,
            min_frame_us: u64::MAX,
            max_frame_us: 0,
        }
    }

    /// Records one frame.
    pub fn record(&mut self, stats: &FrameStats) {
        self.frames_recorded += 1;
        self.faces_drawn_sum += u64::from(stats.faces_drawn);
        self.faces_culled_sum += u64::from(stats.faces_culled());
        self.total_us_sum += stats.frame_time_us;
        self.min_frame_us = self.min_frame_us.min(stats.frame_time_us);
        self.max_frame_us = self.max_frame_us.max(stats.frame_time_us);
    }

    /// Average frame time in milliseconds.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn avg_frame_ms(&self) -> f64 {
        if self.frames_recorded == 0 {
            return 0.0;
        }
        (self.total_us_sum as f64 / self.frames_recorded as f64) / 1000.0
    }

    /// Average FPS.
    #[must_use]
    pub fn avg_fps(&self) -> f64 {
        let avg_ms = self.avg_frame_ms();
        if avg_ms <= 0.0 {
            return 0.0;
        }
        1000.0 / avg_ms
    }

    /// Average quads drawn per frame.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn avg_faces_drawn(&self) -> f64 {
        if self.frames_recorded == 0 {
            return 0.0;
        }
        self.faces_drawn_sum as f64 / self.frames_recorded as f64
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}

/// The renderer application: scene, camera and output surface.
pub struct App {
    camera: CameraPose,
    grid: VoxelGrid,
    palette: VoxelPalette,
    controller: CameraController,
    driver: FrameDriver,
    framebuffer: Framebuffer,
    session: SessionStats,
}

impl App {
    /// Builds the application from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AppError::Config`] if the configuration is rejected
    /// and [`crate::AppError::Core`] if the scene cannot be built.
    pub fn new(config: &RendererConfig) -> AppResult<Self> {
        config.validate()?;
        let grid = build_grid(config)?;

        Ok(Self {
            camera: config.camera_pose(),
            grid,
            palette: config.voxel_palette(),
            controller: CameraController::new(config.movement.speed),
            driver: FrameDriver::new(config.pipeline_settings()),
            framebuffer: Framebuffer::new(config.viewport.width, config.viewport.height),
            session: SessionStats::new(),
        })
    }

    /// Current camera pose.
    #[must_use]
    pub const fn camera(&self) -> &CameraPose {
        &self.camera
    }

    /// Replaces the camera pose.
    pub fn set_camera(&mut self, camera: CameraPose) {
        self.camera = camera;
    }

    /// The voxel grid.
    #[must_use]
    pub const fn grid(&self) -> &VoxelGrid {
        &self.grid
    }

    /// Mutable access to the voxel grid between frames.
    pub fn grid_mut(&mut self) -> &mut VoxelGrid {
        &mut self.grid
    }

    /// The palette.
    #[must_use]
    pub const fn palette(&self) -> &VoxelPalette {
        &self.palette
    }

    /// The last presented frame.
    #[must_use]
    pub const fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// Statistics accumulated so far.
    #[must_use]
    pub const fn session(&self) -> &SessionStats {
        &self.session
    }

    /// Frames rendered so far.
    #[must_use]
    pub const fn frame_count(&self) -> u64 {
        self.driver.frame_count()
    }

    /// Runs one frame: move the camera, then render.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AppError::Render`] if the frame is abandoned. The
    /// camera move of that frame is kept.
    pub fn tick(&mut self, keys: HeldKeys) -> AppResult<FrameStats> {
        self.controller.apply(&mut self.camera, keys);
        tracing::debug!(position = ?self.camera.position, %keys, "camera");

        let stats = self.driver.render_frame(
            &self.camera,
            &self.grid,
            &self.palette,
            &mut self.framebuffer,
        )?;
        self.session.record(&stats);
        Ok(stats)
    }

    /// Runs `frames` frames holding the same keys.
    ///
    /// # Errors
    ///
    /// Stops at the first abandoned frame; see [`Self::tick`].
    pub fn run(&mut self, frames: u64, keys: HeldKeys) -> AppResult<&SessionStats> {
        for _ in 0..frames {
            self.tick(keys)?;
        }
        tracing::info!(
            frames = self.session.frames_recorded,
            avg_ms = self.session.avg_frame_ms(),
            "run complete"
        );
        Ok(&self.session)
    }
}
