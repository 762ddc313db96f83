//! Camera pose.

use crate::constants::CAMERA_START;

/// The camera for one frame.
///
/// `position` is added to every world point before rotation, so it is the
/// offset that brings the world into camera space rather than the eye point
/// itself. Angles are radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Camera offset (x, y, z).
    pub position: [f64; 3],
    /// Rotation about the y axis.
    pub yaw: f64,
    /// Rotation about the x axis.
    pub pitch: f64,
    /// Rotation about the z axis.
    pub roll: f64,
}

impl CameraPose {
    /// Creates a camera at `position` with no rotation.
    #[must_use]
    pub const fn at(position: [f64; 3]) -> Self {
        Self {
            position,
            yaw: 0.0,
            pitch: 0.0,
            roll: 0.0,
        }
    }

    /// Creates a camera with explicit orientation.
    #[must_use]
    pub const fn new(position: [f64; 3], yaw: f64, pitch: f64, roll: f64) -> Self {
        Self {
            position,
            yaw,
            pitch,
            roll,
        }
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self::at(CAMERA_START)
    }
}
