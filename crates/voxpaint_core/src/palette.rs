//! Flat voxel colours.
//!
//! One RGB colour per solid voxel type. Type `n` is drawn with colour
//! `n - 1`; air has no colour.

use bytemuck::{Pod, Zeroable};

use crate::constants::DEFAULT_PALETTE;
use crate::error::{CoreError, CoreResult};
use crate::voxel::VoxelType;

/// 8-bit RGB colour.
///
/// `repr(C)` with no padding so framebuffers can be viewed as raw bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Creates a colour.
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a colour from an `[r, g, b]` triple.
    #[inline]
    #[must_use]
    pub const fn from_array(rgb: [u8; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2])
    }

    /// Returns the colour as an `[r, g, b]` triple.
    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Ordered colour table for solid voxel types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoxelPalette {
    /// Colours indexed by `type - 1`.
    colors: Vec<Rgb>,
}

impl VoxelPalette {
    /// Creates a palette from colours in type order.
    #[must_use]
    pub fn new(colors: Vec<Rgb>) -> Self {
        Self { colors }
    }

    /// Number of colours.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if the palette has no colours.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Returns the colours in type order.
    #[must_use]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Looks up the colour of a solid voxel type.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownVoxelType`] for air or for a type code past
    /// the end of the palette.
    pub fn color_for(&self, voxel: VoxelType) -> CoreResult<Rgb> {
        voxel
            .palette_index()
            .and_then(|idx| self.colors.get(idx))
            .copied()
            .ok_or(CoreError::UnknownVoxelType {
                voxel_type: voxel.code(),
                palette_len: self.colors.len(),
            })
    }
}

impl Default for VoxelPalette {
    fn default() -> Self {
        Self::new(DEFAULT_PALETTE.iter().copied().map(Rgb::from_array).collect())
    }
}
