//! # Pipeline Constants
//!
//! Default tunables for the renderer.
//!
//! These are the values used when no configuration file is supplied. Every one
//! of them can be overridden through [`crate::config::RendererConfig`].

// =============================================================================
// VIEWPORT
// =============================================================================

/// Viewport width in pixels.
///
/// The projector scales BOTH axes by this value.
pub const VIEWPORT_WIDTH: u32 = 800;

/// Viewport height in pixels.
pub const VIEWPORT_HEIGHT: u32 = 800;

/// Pinhole focal length.
pub const FOCAL_LENGTH: f64 = 1.0;

// =============================================================================
// CULLING
// =============================================================================

/// Faces whose baked normal dotted with the camera direction exceeds this
/// value are culled.
pub const BACKFACE_TOLERANCE: f64 = -0.3;

/// Minimum camera-space depth a vertex needs to be projected.
pub const FRUSTUM_TOLERANCE: f64 = 0.5;

// =============================================================================
// MOVEMENT
// =============================================================================

/// Camera translation per frame per held key.
pub const MOVEMENT_SPEED: f64 = 0.05;

// =============================================================================
// WORLD
// =============================================================================

/// Voxel grid dimensions (x, y, z).
pub const GRID_SIZE: [usize; 3] = [16, 16, 16];

/// Starting camera offset.
pub const CAMERA_START: [f64; 3] = [0.0, 1.0, 5.0];

/// Default palette, indexed by `type - 1`.
pub const DEFAULT_PALETTE: [[u8; 3]; 2] = [
    [0, 255, 255],
    [255, 0, 255],
];

/// Colour the frame is cleared to before drawing.
pub const CLEAR_COLOR: [u8; 3] = [0, 0, 0];
