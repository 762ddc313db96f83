//! # Frame Driver
//!
//! ```text
//! Frame N:
//! ┌───────────────────────────────────────────────────────────┐
//! │ 1. occupied voxels   ← VoxelSource::occupied_coords       │
//! │ 2. painter's order   ← sort_by_distance (farthest first)  │
//! │ 3. draw list         ← VoxelProcessor::process_all        │
//! │ 4. clear → fill each quad in order → present (DrawSink)   │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! The camera pose is supplied by the caller and read-only for the whole
//! frame. Any error abandons the frame; the next call starts fresh.

use std::time::Instant;

use voxpaint_core::constants::CLEAR_COLOR;
use voxpaint_core::{
    sort_by_distance, CameraPose, CullCounts, PipelineSettings, ProcessedFace, Rgb,
    VoxelPalette, VoxelProcessor, VoxelSource,
};

use crate::error::RenderResult;
use crate::sink::DrawSink;
use crate::stats::FrameStats;

/// Draw list for one frame plus what it took to build it.
#[derive(Debug, Clone, Default)]
pub struct DrawPlan {
    /// Quads in draw order.
    pub faces: Vec<ProcessedFace>,
    /// Occupied voxels in painter's order.
    pub voxels: Vec<[i32; 3]>,
    /// Cull tallies.
    pub counts: CullCounts,
}

/// Runs the per-frame pipeline and feeds a draw sink.
#[derive(Debug, Clone)]
pub struct FrameDriver {
    settings: PipelineSettings,
    clear_color: Rgb,
    frame_count: u64,
    last_stats: FrameStats,
}

impl FrameDriver {
    /// Creates a driver.
    #[must_use]
    pub fn new(settings: PipelineSettings) -> Self {
        Self {
            settings,
            clear_color: Rgb::from_array(CLEAR_COLOR),
            frame_count: 0,
            last_stats: FrameStats::default(),
        }
    }

    /// Sets the colour frames are cleared to.
    #[must_use]
    pub fn with_clear_color(mut self, color: Rgb) -> Self {
        self.clear_color = color;
        self
    }

    /// Pipeline settings in use.
    #[must_use]
    pub const fn settings(&self) -> &PipelineSettings {
        &self.settings
    }

    /// Frames rendered so far.
    #[must_use]
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Statistics of the last completed frame.
    #[must_use]
    pub const fn last_stats(&self) -> FrameStats {
        self.last_stats
    }

    /// Builds the ordered draw list without touching a sink.
    ///
    /// # Errors
    ///
    /// Returns [`crate::RenderError::Core`] if a voxel cannot be processed.
    pub fn plan<S: VoxelSource + ?Sized>(
        &self,
        camera: &CameraPose,
        source: &S,
        palette: &VoxelPalette,
    ) -> RenderResult<DrawPlan> {
        let mut voxels = source.occupied_coords();
        sort_by_distance(&mut voxels, camera.position);

        let processor = VoxelProcessor::new(source, palette, camera, &self.settings);
        let mut counts = CullCounts::default();
        let faces = processor.process_all(&voxels, &mut counts)?;

        Ok(DrawPlan {
            faces,
            voxels,
            counts,
        })
    }

    /// Renders one frame into `sink`.
    ///
    /// # Errors
    ///
    /// Returns the first pipeline or sink error; nothing is presented then.
    pub fn render_frame<S, D>(
        &mut self,
        camera: &CameraPose,
        source: &S,
        palette: &VoxelPalette,
        sink: &mut D,
    ) -> RenderResult<FrameStats>
    where
        S: VoxelSource + ?Sized,
        D: DrawSink + ?Sized,
    {
        let start = Instant::now();
        tracing::debug!(frame = self.frame_count, position = ?camera.position, "frame begin");

        let plan = self.plan(camera, source, palette)?;

        sink.clear(self.clear_color)?;
        for face in &plan.faces {
            sink.fill_polygon(&face.quad, face.color)?;
        }
        sink.present()?;

        let voxels = u32::try_from(plan.voxels.len()).unwrap_or(u32::MAX);
        let mut stats = FrameStats::from_counts(self.frame_count, voxels, plan.counts);
        stats.frame_time_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);

        tracing::trace!(
            frame = stats.frame,
            voxels = stats.voxels,
            drawn = stats.faces_drawn,
            interior = stats.faces_interior,
            backface = stats.faces_backface,
            frustum = stats.faces_frustum,
            "frame complete"
        );

        self.frame_count += 1;
        self.last_stats = stats;
        Ok(stats)
    }
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new(PipelineSettings::default())
    }
}
