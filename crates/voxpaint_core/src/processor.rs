//! Voxel processor.
//!
//! Turns one occupied grid cell into the screen quads of its visible faces:
//!
//! ```text
//! 8 corners ── + coord + camera offset ── rotate ──> camera space
//!                                                      │
//! for face in FACES ── visibility ── frustum (z) ── project ──> ProcessedFace
//! ```
//!
//! Camera-space corners are computed once per voxel and shared by its faces.
//! A face with any corner nearer than the frustum tolerance is dropped whole,
//! which is also what keeps the projector away from `z == 0`.

use crate::camera::CameraPose;
use crate::constants::{BACKFACE_TOLERANCE, FOCAL_LENGTH, FRUSTUM_TOLERANCE, VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use crate::error::CoreResult;
use crate::geometry::{vertex_offset, FACES, FACE_COUNT, VERTEX_COUNT};
use crate::palette::{Rgb, VoxelPalette};
use crate::project::{Projector, ScreenPoint};
use crate::rotate::Rotation;
use crate::visibility::{FaceVisibility, VisibilityChecker};
use crate::voxel::VoxelSource;

/// Numeric tunables of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineSettings {
    /// Viewport width in pixels (scales both projected axes).
    pub viewport_width: u32,
    /// Viewport height in pixels.
    pub viewport_height: u32,
    /// Pinhole focal length.
    pub focal_length: f64,
    /// Backface culling threshold.
    pub backface_tolerance: f64,
    /// Minimum camera-space depth of a drawable corner.
    pub frustum_tolerance: f64,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            focal_length: FOCAL_LENGTH,
            backface_tolerance: BACKFACE_TOLERANCE,
            frustum_tolerance: FRUSTUM_TOLERANCE,
        }
    }
}

/// A face ready to fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessedFace {
    /// Corners in winding order.
    pub quad: [ScreenPoint; 4],
    /// Flat fill colour.
    pub color: Rgb,
    /// Index into [`FACES`] the quad came from.
    pub face: usize,
}

/// Per-face culling tallies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CullCounts {
    /// Faces emitted.
    pub emitted: u32,
    /// Faces hidden by a solid neighbour.
    pub interior: u32,
    /// Faces turned away from the camera.
    pub backface: u32,
    /// Faces with a corner behind the near tolerance.
    pub frustum: u32,
}

impl CullCounts {
    /// Adds another tally into this one.
    pub fn merge(&mut self, other: Self) {
        self.emitted += other.emitted;
        self.interior += other.interior;
        self.backface += other.backface;
        self.frustum += other.frustum;
    }

    /// Total faces considered.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.emitted + self.interior + self.backface + self.frustum
    }
}

/// Processes voxels against one camera pose and one grid snapshot.
///
/// Holds only shared references and copies, so a processor can be used from
/// several threads at once.
#[derive(Debug)]
pub struct VoxelProcessor<'a, S: ?Sized> {
    source: &'a S,
    palette: &'a VoxelPalette,
    camera: CameraPose,
    rotation: Rotation,
    projector: Projector,
    visibility: VisibilityChecker<'a, S>,
    frustum_tolerance: f64,
}

impl<S: ?Sized> Clone for VoxelProcessor<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for VoxelProcessor<'_, S> {}

impl<'a, S: VoxelSource + ?Sized> VoxelProcessor<'a, S> {
    /// Creates a processor for one frame.
    #[must_use]
    pub fn new(
        source: &'a S,
        palette: &'a VoxelPalette,
        camera: &CameraPose,
        settings: &PipelineSettings,
    ) -> Self {
        Self {
            source,
            palette,
            camera: *camera,
            rotation: Rotation::new(camera.pitch, camera.yaw, camera.roll),
            projector: Projector::new(settings.focal_length, settings.viewport_width),
            visibility: VisibilityChecker::with_tolerance(source, camera, settings.backface_tolerance),
            frustum_tolerance: settings.frustum_tolerance,
        }
    }

    /// Returns the visibility checker used by this processor.
    #[must_use]
    pub const fn visibility(&self) -> &VisibilityChecker<'a, S> {
        &self.visibility
    }

    /// Transforms the eight corners of the voxel at `coord` into camera space.
    #[must_use]
    pub fn transform_vertices(&self, coord: [i32; 3]) -> [[f64; 3]; VERTEX_COUNT] {
        let [cx, cy, cz] = self.camera.position;
        let mut out = [[0.0; 3]; VERTEX_COUNT];

        for (i, vertex) in out.iter_mut().enumerate() {
            let [ox, oy, oz] = vertex_offset(i);
            let world = [
                ox + f64::from(coord[0]) + cx,
                oy + f64::from(coord[1]) + cy,
                oz + f64::from(coord[2]) + cz,
            ];
            *vertex = self.rotation.apply(world);
        }

        out
    }

    /// Processes one voxel, returning its drawable faces in face-table order.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CoreError::UnknownVoxelType`] if a face is emitted
    /// for a type the palette has no colour for.
    pub fn process_voxel(&self, coord: [i32; 3]) -> CoreResult<Vec<ProcessedFace>> {
        let mut faces = Vec::with_capacity(FACE_COUNT);
        let mut counts = CullCounts::default();
        self.process_voxel_into(coord, &mut faces, &mut counts)?;
        Ok(faces)
    }

    /// Processes one voxel, appending its faces to `out`.
    ///
    /// # Errors
    ///
    /// See [`Self::process_voxel`].
    pub fn process_voxel_into(
        &self,
        coord: [i32; 3],
        out: &mut Vec<ProcessedFace>,
        counts: &mut CullCounts,
    ) -> CoreResult<()> {
        let voxel = self.source.voxel_at(coord);
        if voxel.is_air() {
            tracing::trace!(?coord, "skipping air voxel");
            return Ok(());
        }

        let vertices = self.transform_vertices(coord);
        let mut cached_color = None;

        for (face, corners) in FACES.iter().enumerate() {
            match self.visibility.classify(face, coord) {
                FaceVisibility::Interior => {
                    counts.interior += 1;
                    continue;
                }
                FaceVisibility::Backface => {
                    counts.backface += 1;
                    continue;
                }
                FaceVisibility::Visible => {}
            }

            let Some(quad) = self.project_face(&vertices, corners) else {
                counts.frustum += 1;
                continue;
            };

            let color = match cached_color {
                Some(c) => c,
                None => {
                    let c = self.palette.color_for(voxel)?;
                    cached_color = Some(c);
                    c
                }
            };

            out.push(ProcessedFace { quad, color, face });
            counts.emitted += 1;
        }

        Ok(())
    }

    /// Processes voxels in the given order and concatenates their faces.
    ///
    /// The output order follows `coords`, then face-table order.
    ///
    /// # Errors
    ///
    /// Stops at the first voxel that fails; see [`Self::process_voxel`].
    pub fn process_all(
        &self,
        coords: &[[i32; 3]],
        counts: &mut CullCounts,
    ) -> CoreResult<Vec<ProcessedFace>> {
        let mut out = Vec::with_capacity(coords.len() * 3);
        for &coord in coords {
            self.process_voxel_into(coord, &mut out, counts)?;
        }
        Ok(out)
    }

    /// Projects the corners of a face, or `None` if any corner is too near.
    fn project_face(
        &self,
        vertices: &[[f64; 3]; VERTEX_COUNT],
        corners: &[usize; 4],
    ) -> Option<[ScreenPoint; 4]> {
        let mut quad = [ScreenPoint::default(); 4];
        for (slot, &index) in quad.iter_mut().zip(corners) {
            let vertex = vertices[index];
            if vertex[2] < self.frustum_tolerance {
                return None;
            }
            *slot = self.projector.project(vertex);
        }
        Some(quad)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::voxel::{VoxelGrid, VoxelType};

    fn single_voxel(voxel_type: u8) -> VoxelGrid {
        let mut grid = VoxelGrid::new([16, 16, 16]).unwrap();
        grid.set([0, 0, 0], VoxelType::new(voxel_type)).unwrap();
        grid
    }

    #[test]
    fn test_front_view_emits_three_faces() {
        let grid = single_voxel(1);
        let palette = VoxelPalette::default();
        let camera = CameraPose::at([0.0, 0.0, 5.0]);
        let processor = VoxelProcessor::new(&grid, &palette, &camera, &PipelineSettings::default());

        let faces = processor.process_voxel([0, 0, 0]).unwrap();
        let indices: Vec<usize> = faces.iter().map(|f| f.face).collect();
        assert_eq!(indices, vec![2, 3, 5]);
        assert!(faces.iter().all(|f| f.color == Rgb::new(0, 255, 255)));

        // Face 2 is the z = 5 square from (0,0) to (1,1): 400..480 on both axes.
        assert_eq!(
            faces[0].quad,
            [
                ScreenPoint::new(400, 400),
                ScreenPoint::new(480, 400),
                ScreenPoint::new(480, 480),
                ScreenPoint::new(400, 480),
            ]
        );
    }

    #[test]
    fn test_transform_without_rotation_is_translation() {
        let grid = single_voxel(1);
        let palette = VoxelPalette::default();
        let camera = CameraPose::at([0.5, -1.0, 4.0]);
        let processor = VoxelProcessor::new(&grid, &palette, &camera, &PipelineSettings::default());

        let vertices = processor.transform_vertices([2, 3, 4]);
        assert_eq!(vertices[0], [2.5, 2.0, 8.0]);
        assert_eq!(vertices[6], [3.5, 3.0, 9.0]);
    }

    #[test]
    fn test_frustum_abort_drops_whole_face() {
        let grid = single_voxel(1);
        let palette = VoxelPalette::default();
        // Corners sit at z = -0.2 or z = 0.8. Only face 0 lies wholly at 0.8.
        let camera = CameraPose::at([0.5, 0.0, -0.2]);
        let processor = VoxelProcessor::new(&grid, &palette, &camera, &PipelineSettings::default());

        let mut out = Vec::new();
        let mut counts = CullCounts::default();
        processor.process_voxel_into([0, 0, 0], &mut out, &mut counts).unwrap();

        // Face 1 projects its first corner before hitting a near one.
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].face, 0);
        assert_eq!(counts.frustum, 3);
        assert_eq!(counts.backface, 2);
        assert_eq!(counts.total(), 6);
    }

    #[test]
    fn test_everything_behind_near_plane() {
        let grid = single_voxel(1);
        let palette = VoxelPalette::default();
        let camera = CameraPose::at([0.0, 0.0, -0.6]);
        let processor = VoxelProcessor::new(&grid, &palette, &camera, &PipelineSettings::default());

        assert!(processor.process_voxel([0, 0, 0]).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_type_is_an_error() {
        let grid = single_voxel(9);
        let palette = VoxelPalette::default();
        let camera = CameraPose::at([0.0, 0.0, 5.0]);
        let processor = VoxelProcessor::new(&grid, &palette, &camera, &PipelineSettings::default());

        assert_eq!(
            processor.process_voxel([0, 0, 0]),
            Err(CoreError::UnknownVoxelType {
                voxel_type: 9,
                palette_len: 2,
            })
        );
    }

    #[test]
    fn test_air_yields_nothing() {
        let grid = single_voxel(1);
        let palette = VoxelPalette::default();
        let camera = CameraPose::at([0.0, 0.0, 5.0]);
        let processor = VoxelProcessor::new(&grid, &palette, &camera, &PipelineSettings::default());

        assert!(processor.process_voxel([5, 5, 5]).unwrap().is_empty());
    }

    #[test]
    fn test_process_all_preserves_order() {
        let mut grid = VoxelGrid::new([16, 16, 16]).unwrap();
        grid.set([0, 0, 0], VoxelType::new(1)).unwrap();
        grid.set([3, 0, 0], VoxelType::new(2)).unwrap();
        let palette = VoxelPalette::default();
        let camera = CameraPose::at([0.0, 0.0, 5.0]);
        let processor = VoxelProcessor::new(&grid, &palette, &camera, &PipelineSettings::default());

        let mut counts = CullCounts::default();
        let faces = processor.process_all(&[[3, 0, 0], [0, 0, 0]], &mut counts).unwrap();
        let split = faces.iter().position(|f| f.color == Rgb::new(0, 255, 255)).unwrap();

        assert!(faces[..split].iter().all(|f| f.color == Rgb::new(255, 0, 255)));
        assert!(faces[split..].iter().all(|f| f.color == Rgb::new(0, 255, 255)));
        assert_eq!(counts.emitted as usize, faces.len());
    }
}
