//! Frame statistics.

use voxpaint_core::CullCounts;

/// Statistics from one rendered frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Frame number, starting at 0.
    pub frame: u64,
    /// Occupied voxels processed.
    pub voxels: u32,
    /// Quads handed to the sink.
    pub faces_drawn: u32,
    /// Faces hidden by a solid neighbour.
    pub faces_interior: u32,
    /// Faces turned away from the camera.
    pub faces_backface: u32,
    /// Faces dropped by the near-plane test.
    pub faces_frustum: u32,
    /// Wall time for the whole frame in microseconds.
    pub frame_time_us: u64,
}

impl FrameStats {
    /// Builds stats from the processor's cull tallies.
    #[must_use]
    pub const fn from_counts(frame: u64, voxels: u32, counts: CullCounts) -> Self {
        Self {
            frame,
            voxels,
            faces_drawn: counts.emitted,
            faces_interior: counts.interior,
            faces_backface: counts.backface,
            faces_frustum: counts.frustum,
            frame_time_us: 0,
        }
    }

    /// Faces culled for any reason.
    #[must_use]
    pub const fn faces_culled(&self) -> u32 {
        self.faces_interior + self.faces_backface + self.faces_frustum
    }

    /// Returns FPS calculated from frame time.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn fps(&self) -> f64 {
        if self.frame_time_us > 0 {
            1_000_000.0 / self.frame_time_us as f64
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_counts() {
        let counts = CullCounts {
            emitted: 3,
            interior: 4,
            backface: 5,
            frustum: 6,
        };
        let stats = FrameStats::from_counts(7, 2, counts);
        assert_eq!(stats.frame, 7);
        assert_eq!(stats.faces_drawn, 3);
        assert_eq!(stats.faces_culled(), 15);
    }

    #[test]
    fn test_fps() {
        let stats = FrameStats {
            frame_time_us: 20_000,
            ..FrameStats::default()
        };
        assert!((stats.fps() - 50.0).abs() < 1e-9);
        assert!(FrameStats::default().fps().abs() < f64::EPSILON);
    }
}
