//! Per-face visibility.
//!
//! Two independent rules, either of which hides a face:
//!
//! 1. **Interior**: the neighbour at `coord - normal` is solid. Neighbours
//!    outside the grid read as air, so faces on the grid boundary stay.
//! 2. **Backface**: the vector from the face's first corner, shifted by the
//!    voxel position and camera offset, dotted with the baked normal exceeds
//!    the backface tolerance.
//!
//! Nothing is cached; both rules run for every face of every voxel, every
//! frame.

use crate::camera::CameraPose;
use crate::constants::BACKFACE_TOLERANCE;
use crate::geometry::{neighbor_coord, FACES, FACE_NORMALS, VERTICES};
use crate::voxel::VoxelSource;

/// Outcome of the visibility test for one face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceVisibility {
    /// The face should be drawn.
    Visible,
    /// A solid neighbour covers the face.
    Interior,
    /// The face is turned away from the camera.
    Backface,
}

impl FaceVisibility {
    /// Returns true for [`FaceVisibility::Visible`].
    #[inline]
    #[must_use]
    pub const fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }
}

/// Decides which faces of a voxel survive culling.
#[derive(Debug)]
pub struct VisibilityChecker<'a, S: ?Sized> {
    source: &'a S,
    camera_position: [f64; 3],
    backface_tolerance: f64,
}

impl<S: ?Sized> Clone for VisibilityChecker<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for VisibilityChecker<'_, S> {}

impl<'a, S: VoxelSource + ?Sized> VisibilityChecker<'a, S> {
    /// Creates a checker with the default backface tolerance.
    #[must_use]
    pub fn new(source: &'a S, camera: &CameraPose) -> Self {
        Self::with_tolerance(source, camera, BACKFACE_TOLERANCE)
    }

    /// Creates a checker with an explicit backface tolerance.
    #[must_use]
    pub fn with_tolerance(source: &'a S, camera: &CameraPose, backface_tolerance: f64) -> Self {
        Self {
            source,
            camera_position: camera.position,
            backface_tolerance,
        }
    }

    /// Returns true if `face` of the voxel at `coord` should be drawn.
    #[inline]
    #[must_use]
    pub fn is_visible(&self, face: usize, coord: [i32; 3]) -> bool {
        self.classify(face, coord).is_visible()
    }

    /// Classifies `face` of the voxel at `coord`.
    ///
    /// The interior rule is checked first.
    #[must_use]
    pub fn classify(&self, face: usize, coord: [i32; 3]) -> FaceVisibility {
        if self.is_interior(face, coord) {
            FaceVisibility::Interior
        } else if self.is_backface(face, coord) {
            FaceVisibility::Backface
        } else {
            FaceVisibility::Visible
        }
    }

    /// Returns true if a solid neighbour covers `face`.
    #[inline]
    #[must_use]
    pub fn is_interior(&self, face: usize, coord: [i32; 3]) -> bool {
        self.source.voxel_at(neighbor_coord(face, coord)).is_solid()
    }

    /// Returns true if `face` is turned away beyond the tolerance.
    #[must_use]
    pub fn is_backface(&self, face: usize, coord: [i32; 3]) -> bool {
        self.facing(face, coord) > self.backface_tolerance
    }

    /// Dot product of the baked normal with the camera direction for `face`.
    #[must_use]
    pub fn facing(&self, face: usize, coord: [i32; 3]) -> f64 {
        let corner = VERTICES[FACES[face][0]];
        let normal = FACE_NORMALS[face];

        (0..3)
            .map(|axis| {
                let dir = f64::from(corner[axis] - coord[axis]) - self.camera_position[axis];
                f64::from(normal[axis]) * dir
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxel::{VoxelGrid, VoxelType};

    fn grid_with(coords: &[[i32; 3]]) -> VoxelGrid {
        let mut grid = VoxelGrid::new([16, 16, 16]).unwrap();
        for &c in coords {
            grid.set(c, VoxelType::new(1)).unwrap();
        }
        grid
    }

    #[test]
    fn test_single_voxel_front_view() {
        let grid = grid_with(&[[0, 0, 0]]);
        let camera = CameraPose::at([0.0, 0.0, 5.0]);
        let checker = VisibilityChecker::new(&grid, &camera);

        let visible: Vec<usize> = (0..6).filter(|&f| checker.is_visible(f, [0, 0, 0])).collect();
        assert_eq!(visible, vec![2, 3, 5]);

        assert_eq!(checker.classify(0, [0, 0, 0]), FaceVisibility::Backface);
        assert_eq!(checker.classify(1, [0, 0, 0]), FaceVisibility::Backface);
        assert_eq!(checker.classify(4, [0, 0, 0]), FaceVisibility::Backface);
    }

    #[test]
    fn test_shared_face_is_interior_from_both_sides() {
        let grid = grid_with(&[[0, 0, 0], [1, 0, 0]]);
        let camera = CameraPose::at([0.0, 0.0, 5.0]);
        let checker = VisibilityChecker::new(&grid, &camera);

        // Face 3 of (0,0,0) probes (1,0,0); face 1 of (1,0,0) probes (0,0,0).
        assert_eq!(checker.classify(3, [0, 0, 0]), FaceVisibility::Interior);
        assert_eq!(checker.classify(1, [1, 0, 0]), FaceVisibility::Interior);
        assert!(!checker.is_visible(3, [0, 0, 0]));
        assert!(!checker.is_visible(1, [1, 0, 0]));
    }

    #[test]
    fn test_grid_edge_face_visible() {
        // Face 1 of (0,0,0) probes (-1,0,0), which is outside the grid.
        let grid = grid_with(&[[0, 0, 0]]);
        let camera = CameraPose::at([3.0, 0.0, 5.0]);
        let checker = VisibilityChecker::new(&grid, &camera);

        assert!(!checker.is_interior(1, [0, 0, 0]));
        assert!(checker.is_visible(1, [0, 0, 0]));
    }

    #[test]
    fn test_tolerance_band() {
        let grid = grid_with(&[[0, 0, 0]]);
        // For face 1 at the origin the facing value is -cam_x.
        let grazing = CameraPose::at([0.25, 0.0, 5.0]);
        let checker = VisibilityChecker::new(&grid, &grazing);
        assert!((checker.facing(1, [0, 0, 0]) - -0.25).abs() < 1e-12);
        assert!(checker.is_backface(1, [0, 0, 0]));

        let loose = VisibilityChecker::with_tolerance(&grid, &grazing, 0.0);
        assert!(!loose.is_backface(1, [0, 0, 0]));
    }
}
