//! Camera movement.
//!
//! Translation only: held keys move the camera offset along the ground plane
//! rotated by yaw, or straight up and down. Orientation is never changed.

use voxpaint_core::constants::MOVEMENT_SPEED;
use voxpaint_core::CameraPose;

use crate::input::{HeldKeys, MovementKey};

/// Applies held keys to the camera once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraController {
    speed: f64,
}

impl CameraController {
    /// Creates a controller moving `speed` units per key per frame.
    #[must_use]
    pub const fn new(speed: f64) -> Self {
        Self { speed }
    }

    /// Translation per key per frame.
    #[must_use]
    pub const fn speed(&self) -> f64 {
        self.speed
    }

    /// Moves `camera` for one frame of `keys`.
    ///
    /// Keys are applied one after another in [`MovementKey::ALL`] order,
    /// each against the same yaw.
    pub fn apply(&self, camera: &mut CameraPose, keys: HeldKeys) {
        if keys.is_empty() {
            return;
        }

        let (sin, cos) = camera.yaw.sin_cos();
        let s = self.speed;
        let [x, y, z] = &mut camera.position;

        for key in keys.iter() {
            match key {
                MovementKey::W => {
                    *x -= sin * s;
                    *z -= cos * s;
                }
                MovementKey::S => {
                    *x += sin * s;
                    *z += cos * s;
                }
                MovementKey::D => {
                    *x -= cos * s;
                    *z += sin * s;
                }
                MovementKey::A => {
                    *x += cos * s;
                    *z -= sin * s;
                }
                MovementKey::Space => *y += s,
                MovementKey::LShift => *y -= s,
            }
        }
    }
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(MOVEMENT_SPEED)
    }
}
