//! # Pipeline Scenario Tests
//!
//! End-to-end runs of sort + process over small scenes.

use voxpaint_core::{
    sorted_by_distance, CameraPose, CullCounts, PipelineSettings, ProcessedFace, Rgb,
    RendererConfig, VoxelGrid, VoxelPalette, VoxelProcessor, VoxelSource, VoxelType,
};

fn run_frame(grid: &VoxelGrid, camera: &CameraPose) -> Vec<ProcessedFace> {
    let palette = VoxelPalette::default();
    let settings = PipelineSettings::default();
    let coords = sorted_by_distance(grid.occupied_coords(), camera.position);
    let processor = VoxelProcessor::new(grid, &palette, camera, &settings);
    let mut counts = CullCounts::default();
    processor.process_all(&coords, &mut counts).unwrap()
}

/// One voxel straight ahead: three faces toward the camera, three culled.
#[test]
fn test_single_voxel_scene() {
    let mut grid = VoxelGrid::new([16, 16, 16]).unwrap();
    grid.set([0, 0, 0], VoxelType::new(1)).unwrap();
    let camera = CameraPose::at([0.0, 0.0, 5.0]);

    let faces = run_frame(&grid, &camera);

    assert_eq!(faces.len(), 3);
    assert_eq!(faces.iter().map(|f| f.face).collect::<Vec<_>>(), vec![2, 3, 5]);
    for face in &faces {
        assert_eq!(face.color, Rgb::new(0, 255, 255));
        assert_eq!(face.quad.len(), 4);
    }
}

/// Empty grid, empty draw list.
#[test]
fn test_empty_scene() {
    let grid = VoxelGrid::new([16, 16, 16]).unwrap();
    assert!(run_frame(&grid, &CameraPose::default()).is_empty());
}

/// Processing the same snapshot twice gives the same list.
#[test]
fn test_idempotent_frames() {
    let config = RendererConfig::default();
    let mut grid = VoxelGrid::new(config.grid.size).unwrap();
    for placement in &config.voxels {
        grid.set(placement.position, VoxelType::new(placement.voxel_type)).unwrap();
    }
    let camera = CameraPose::new([0.3, 1.0, 5.0], 0.2, -0.1, 0.05);

    let first = run_frame(&grid, &camera);
    let second = run_frame(&grid, &camera);
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

/// A solid 3x3x3 block only shows its outer shell.
#[test]
fn test_block_hides_inner_faces() {
    let mut grid = VoxelGrid::new([16, 16, 16]).unwrap();
    for x in 0..3 {
        for y in 0..3 {
            for z in 0..3 {
                grid.set([x, y, z], VoxelType::new(2)).unwrap();
            }
        }
    }
    let camera = CameraPose::at([-1.0, -1.0, 8.0]);
    let palette = VoxelPalette::default();
    let settings = PipelineSettings::default();
    let processor = VoxelProcessor::new(&grid, &palette, &camera, &settings);

    // The centre voxel is enclosed on all sides.
    let mut counts = CullCounts::default();
    let mut out = Vec::new();
    processor.process_voxel_into([1, 1, 1], &mut out, &mut counts).unwrap();
    assert!(out.is_empty());
    assert_eq!(counts.interior, 6);

    // Only face 2 (the z = 0 side) of the front centre voxel faces the camera.
    let front = processor.process_voxel([1, 1, 0]).unwrap();
    assert_eq!(front.iter().map(|f| f.face).collect::<Vec<_>>(), vec![2]);
}
