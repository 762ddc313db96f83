//! Scene construction from configuration.

use voxpaint_core::{CoreResult, RendererConfig, VoxelGrid, VoxelType};

/// Builds the voxel grid described by `config`.
///
/// Later placements overwrite earlier ones at the same coordinate.
///
/// # Errors
///
/// Returns [`voxpaint_core::CoreError::InvalidDimensions`] for an empty grid
/// and [`voxpaint_core::CoreError::OutOfBounds`] for a placement outside it.
pub fn build_grid(config: &RendererConfig) -> CoreResult<VoxelGrid> {
    let mut grid = VoxelGrid::new(config.grid.size)?;
    for placement in &config.voxels {
        grid.set(placement.position, VoxelType::new(placement.voxel_type))?;
    }

    tracing::info!(
        dims = ?grid.dims(),
        solid = grid.solid_count(),
        "scene built"
    );
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxpaint_core::{CoreError, VoxelPlacement, VoxelSource};

    #[test]
    fn test_default_scene() {
        let grid = build_grid(&RendererConfig::default()).unwrap();
        assert_eq!(grid.dims(), [16, 16, 16]);
        assert_eq!(grid.solid_count(), 3);
        assert_eq!(grid.get([0, 0, 0]), VoxelType::new(1));
        assert_eq!(grid.get([0, 1, 0]), VoxelType::new(2));
        assert_eq!(grid.get([1, 2, 3]), VoxelType::new(2));
        assert_eq!(grid.occupied_coords(), vec![[0, 0, 0], [0, 1, 0], [1, 2, 3]]);
    }

    #[test]
    fn test_later_placement_wins() {
        let config = RendererConfig {
            voxels: vec![VoxelPlacement::new([2, 2, 2], 1), VoxelPlacement::new([2, 2, 2], 2)],
            ..RendererConfig::default()
        };
        let grid = build_grid(&config).unwrap();
        assert_eq!(grid.solid_count(), 1);
        assert_eq!(grid.get([2, 2, 2]), VoxelType::new(2));
    }

    #[test]
    fn test_placement_outside_grid() {
        let mut config = RendererConfig::default();
        config.voxels.push(VoxelPlacement::new([16, 0, 0], 1));
        assert!(matches!(build_grid(&config), Err(CoreError::OutOfBounds { .. })));
    }
}
