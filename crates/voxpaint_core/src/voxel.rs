//! Voxel grid and the occupancy query.
//!
//! The grid is a dense `x * y * z` array of one-byte type codes. Reads outside
//! the grid return [`VoxelType::AIR`] because interior-face culling probes the
//! neighbours of edge voxels.

use crate::error::{CoreError, CoreResult};

/// A voxel type code.
///
/// `0` is air. Any other value `n` selects palette colour `n - 1`.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct VoxelType(pub u8);

impl VoxelType {
    /// Air (empty cell).
    pub const AIR: Self = Self(0);

    /// Creates a voxel type from its code.
    #[inline]
    #[must_use]
    pub const fn new(code: u8) -> Self {
        Self(code)
    }

    /// Returns the raw type code.
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        self.0
    }

    /// Returns true if this is air.
    #[inline]
    #[must_use]
    pub const fn is_air(self) -> bool {
        self.0 == 0
    }

    /// Returns true if this is solid.
    #[inline]
    #[must_use]
    pub const fn is_solid(self) -> bool {
        self.0 != 0
    }

    /// Returns the palette index for a solid voxel, `None` for air.
    #[inline]
    #[must_use]
    pub const fn palette_index(self) -> Option<usize> {
        match self.0 {
            0 => None,
            n => Some(n as usize - 1),
        }
    }
}

/// Read access to voxel occupancy.
///
/// The pipeline only ever reads through this trait, so any storage that can
/// answer these two questions can be rendered.
pub trait VoxelSource {
    /// Returns the voxel at `coord`, or air when `coord` lies outside the
    /// source's bounds.
    fn voxel_at(&self, coord: [i32; 3]) -> VoxelType;

    /// Returns every coordinate holding a solid voxel.
    fn occupied_coords(&self) -> Vec<[i32; 3]>;
}

/// Fixed-size dense voxel grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoxelGrid {
    /// Dimensions (x, y, z).
    dims: [usize; 3],
    /// Type codes. Layout: `cells[(x * dy + y) * dz + z]`.
    cells: Box<[VoxelType]>,
    /// Number of solid cells.
    solid_count: usize,
}

impl VoxelGrid {
    /// Creates an all-air grid.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidDimensions`] if any dimension is zero or
    /// too large to address with `i32` coordinates.
    pub fn new(dims: [usize; 3]) -> CoreResult<Self> {
        let addressable = dims
            .iter()
            .all(|&d| d > 0 && i32::try_from(d).is_ok());
        let volume = dims[0]
            .checked_mul(dims[1])
            .and_then(|v| v.checked_mul(dims[2]));

        match (addressable, volume) {
            (true, Some(volume)) => Ok(Self {
                dims,
                cells: vec![VoxelType::AIR; volume].into_boxed_slice(),
                solid_count: 0,
            }),
            _ => Err(CoreError::InvalidDimensions(dims)),
        }
    }

    /// Returns the grid dimensions.
    #[inline]
    #[must_use]
    pub const fn dims(&self) -> [usize; 3] {
        self.dims
    }

    /// Returns the number of solid voxels.
    #[inline]
    #[must_use]
    pub const fn solid_count(&self) -> usize {
        self.solid_count
    }

    /// Returns true if the grid holds no solid voxels.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.solid_count == 0
    }

    /// Returns true if `coord` is inside the grid.
    #[inline]
    #[must_use]
    pub fn contains(&self, coord: [i32; 3]) -> bool {
        self.index(coord).is_some()
    }

    /// Linear index of `coord`, or `None` outside the grid.
    #[inline]
    fn index(&self, coord: [i32; 3]) -> Option<usize> {
        let [dx, dy, dz] = self.dims;
        let x = usize::try_from(coord[0]).ok().filter(|&x| x < dx)?;
        let y = usize::try_from(coord[1]).ok().filter(|&y| y < dy)?;
        let z = usize::try_from(coord[2]).ok().filter(|&z| z < dz)?;
        Some((x * dy + y) * dz + z)
    }

    /// Gets the voxel at `coord`. Out-of-bounds reads return air.
    #[inline]
    #[must_use]
    pub fn get(&self, coord: [i32; 3]) -> VoxelType {
        self.index(coord)
            .map_or(VoxelType::AIR, |idx| self.cells[idx])
    }

    /// Sets the voxel at `coord`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::OutOfBounds`] if `coord` is outside the grid.
    pub fn set(&mut self, coord: [i32; 3], voxel: VoxelType) -> CoreResult<()> {
        let idx = self.index(coord).ok_or(CoreError::OutOfBounds {
            coord,
            dims: self.dims,
        })?;
        let old = self.cells[idx];

        if old.is_solid() && voxel.is_air() {
            self.solid_count -= 1;
        } else if old.is_air() && voxel.is_solid() {
            self.solid_count += 1;
        }

        self.cells[idx] = voxel;
        Ok(())
    }

    /// Resets every cell to air.
    pub fn clear(&mut self) {
        self.cells.fill(VoxelType::AIR);
        self.solid_count = 0;
    }
}

impl VoxelSource for VoxelGrid {
    #[inline]
    fn voxel_at(&self, coord: [i32; 3]) -> VoxelType {
        self.get(coord)
    }

    /// Enumerates solid cells x-major, then y, then z.
    fn occupied_coords(&self) -> Vec<[i32; 3]> {
        let [_, dy, dz] = self.dims;
        let mut coords = Vec::with_capacity(self.solid_count);

        for (idx, voxel) in self.cells.iter().enumerate() {
            if voxel.is_solid() {
                let z = idx % dz;
                let y = (idx / dz) % dy;
                let x = idx / (dy * dz);
                // Dimensions are checked to fit i32 in `new`.
                #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
                coords.push([x as i32, y as i32, z as i32]);
            }
        }

        coords
    }
}
