//! Vector rotation.
//!
//! Hand-written so the per-voxel pipeline has no rendering or linear-algebra
//! dependency and can run on worker threads as-is.
//!
//! Rotations are applied one after another: pitch about x, then yaw about the
//! rotated y, then roll about the rotated z. They are NOT folded into a single
//! matrix; the sequence below is the reference result.

/// Cached sines and cosines for a pitch/yaw/roll triple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    cos_pitch: f64,
    sin_pitch: f64,
    cos_yaw: f64,
    sin_yaw: f64,
    cos_roll: f64,
    sin_roll: f64,
}

impl Rotation {
    /// Precomputes the trig for the three angles (radians).
    #[must_use]
    pub fn new(pitch: f64, yaw: f64, roll: f64) -> Self {
        let (sin_pitch, cos_pitch) = pitch.sin_cos();
        let (sin_yaw, cos_yaw) = yaw.sin_cos();
        let (sin_roll, cos_roll) = roll.sin_cos();
        Self {
            cos_pitch,
            sin_pitch,
            cos_yaw,
            sin_yaw,
            cos_roll,
            sin_roll,
        }
    }

    /// Rotates `point`.
    #[inline]
    #[must_use]
    pub fn apply(&self, point: [f64; 3]) -> [f64; 3] {
        let [x, y, z] = point;

        // pitch (x axis)
        let x_pitch = x;
        let y_pitch = y * self.cos_pitch - z * self.sin_pitch;
        let z_pitch = y * self.sin_pitch + z * self.cos_pitch;

        // yaw (y axis)
        let x_yaw = x_pitch * self.cos_yaw + z_pitch * self.sin_yaw;
        let y_yaw = y_pitch;
        let z_yaw = -x_pitch * self.sin_yaw + z_pitch * self.cos_yaw;

        // roll (z axis)
        let x_roll = x_yaw * self.cos_roll - y_yaw * self.sin_roll;
        let y_roll = x_yaw * self.sin_roll + y_yaw * self.cos_roll;
        let z_roll = z_yaw;

        [x_roll, y_roll, z_roll]
    }
}

/// Rotates `point` by pitch, then yaw, then roll (radians).
#[inline]
#[must_use]
pub fn rotate(point: [f64; 3], pitch: f64, yaw: f64, roll: f64) -> [f64; 3] {
    Rotation::new(pitch, yaw, roll).apply(point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPS: f64 = 1e-12;

    fn assert_close(a: [f64; 3], b: [f64; 3]) {
        for i in 0..3 {
            assert!((a[i] - b[i]).abs() < EPS, "{a:?} != {b:?}");
        }
    }

    #[test]
    fn test_identity() {
        for p in [[0.0, 0.0, 0.0], [1.5, -2.0, 7.25], [-1e6, 3.0, 1e-9]] {
            assert_eq!(rotate(p, 0.0, 0.0, 0.0), p);
        }
    }

    #[test]
    fn test_pitch_then_yaw_is_sequential() {
        // pitch maps +y to +z, then yaw maps +z to +x.
        let rotated = rotate([0.0, 1.0, 0.0], FRAC_PI_2, FRAC_PI_2, 0.0);
        assert_close(rotated, [1.0, 0.0, 0.0]);

        // Applying yaw first would leave +y alone and pitch would give +z.
        let yaw_first = rotate(rotate([0.0, 1.0, 0.0], 0.0, FRAC_PI_2, 0.0), FRAC_PI_2, 0.0, 0.0);
        assert_close(yaw_first, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_single_axes() {
        assert_close(rotate([0.0, 1.0, 0.0], FRAC_PI_2, 0.0, 0.0), [0.0, 0.0, 1.0]);
        assert_close(rotate([1.0, 0.0, 0.0], 0.0, FRAC_PI_2, 0.0), [0.0, 0.0, -1.0]);
        assert_close(rotate([1.0, 0.0, 0.0], 0.0, 0.0, FRAC_PI_2), [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_preserves_length() {
        let p = [3.0, -4.0, 12.0];
        let r = rotate(p, 0.3, -1.1, PI / 5.0);
        let len = |v: [f64; 3]| (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
        assert!((len(p) - len(r)).abs() < 1e-9);
    }

    #[test]
    fn test_cached_rotation_matches_free_function() {
        let rotation = Rotation::new(0.2, 0.4, 0.6);
        let p = [1.0, 2.0, 3.0];
        assert_eq!(rotation.apply(p), rotate(p, 0.2, 0.4, 0.6));
    }
}
