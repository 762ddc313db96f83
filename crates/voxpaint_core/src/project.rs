//! Pinhole projection.

use crate::constants::{FOCAL_LENGTH, VIEWPORT_WIDTH};

/// Integer pixel coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ScreenPoint {
    /// Horizontal pixel.
    pub x: i32,
    /// Vertical pixel.
    pub y: i32,
}

impl ScreenPoint {
    /// Creates a screen point.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Maps camera-space points to pixels.
///
/// Both axes are scaled by the viewport width; there is no aspect-ratio
/// correction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    focal_length: f64,
    width: f64,
}

impl Projector {
    /// Creates a projector for a viewport `width` pixels wide.
    #[must_use]
    pub fn new(focal_length: f64, width: u32) -> Self {
        Self {
            focal_length,
            width: f64::from(width),
        }
    }

    /// Returns the focal length.
    #[must_use]
    pub const fn focal_length(&self) -> f64 {
        self.focal_length
    }

    /// Projects a camera-space point, truncating toward zero.
    ///
    /// `point[2]` must be bounded away from zero. The voxel processor
    /// guarantees this by frustum-culling before projecting.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn project(&self, point: [f64; 3]) -> ScreenPoint {
        let [x, y, z] = point;
        debug_assert!(z != 0.0, "projecting a point on the camera plane");

        let screen_x = (self.focal_length * (x / z) + 1.0) * self.width / 2.0;
        let screen_y = (self.focal_length * (y / z) + 1.0) * self.width / 2.0;

        ScreenPoint::new(screen_x as i32, screen_y as i32)
    }
}

impl Default for Projector {
    fn default() -> Self {
        Self::new(FOCAL_LENGTH, VIEWPORT_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center() {
        let projector = Projector::default();
        assert_eq!(projector.project([0.0, 0.0, 5.0]), ScreenPoint::new(400, 400));
    }

    #[test]
    fn test_known_values() {
        let projector = Projector::default();
        // (1/5 + 1) * 800 / 2 = 480, (-1/5 + 1) * 800 / 2 = 320
        assert_eq!(projector.project([1.0, -1.0, 5.0]), ScreenPoint::new(480, 320));
    }

    #[test]
    fn test_truncates_toward_zero() {
        let projector = Projector::new(1.0, 800);
        // (-3/1 + 1) * 400 = -800 exactly; (-3.001 + 1) * 400 = -800.4 -> -800
        assert_eq!(projector.project([-3.001, 0.0, 1.0]).x, -800);
        // 0.0013 * 400 + 400 = 400.52 -> 400
        assert_eq!(projector.project([0.0013, 0.0, 1.0]).x, 400);
    }

    #[test]
    fn test_uses_width_for_both_axes() {
        let projector = Projector::new(1.0, 200);
        let p = projector.project([1.0, 1.0, 2.0]);
        assert_eq!(p.x, p.y);
        assert_eq!(p.x, 150);
    }

    #[test]
    fn test_monotonic_in_x() {
        let projector = Projector::default();
        let mut last = i32::MIN;
        for i in -50..=50 {
            let x = f64::from(i) * 0.1;
            let sx = projector.project([x, 0.0, 2.0]).x;
            assert!(sx >= last);
            last = sx;
        }
        assert!(projector.project([1.0, 0.0, 2.0]).x > projector.project([-1.0, 0.0, 2.0]).x);
    }
}
