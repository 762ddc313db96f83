//! Unit-cube geometry tables.
//!
//! Baked once, never mutated. Face `i` is drawn through `FACES[i]` in table
//! order, which fixes the polygon winding, and culled with `FACE_NORMALS[i]`.

/// Number of cube corners.
pub const VERTEX_COUNT: usize = 8;

/// Number of cube faces.
pub const FACE_COUNT: usize = 6;

/// Corner offsets relative to the voxel's grid position.
pub const VERTICES: [[i32; 3]; VERTEX_COUNT] = [
    [0, 0, 0],
    [1, 0, 0],
    [1, 1, 0],
    [0, 1, 0],
    [0, 0, 1],
    [1, 0, 1],
    [1, 1, 1],
    [0, 1, 1],
];

/// Faces as indices into [`VERTICES`], four per face in winding order.
pub const FACES: [[usize; 4]; FACE_COUNT] = [
    [5, 4, 7, 6], // front
    [4, 0, 3, 7], // right
    [0, 1, 2, 3], // back
    [1, 5, 6, 2], // left
    [4, 5, 1, 0], // bottom
    [3, 2, 6, 7], // top
];

/// Baked normal per face, index-aligned with [`FACES`].
///
/// The neighbour that hides face `i` lives at `coord - FACE_NORMALS[i]`, and
/// the backface test dots this same vector with the camera direction.
pub const FACE_NORMALS: [[i32; 3]; FACE_COUNT] = [
    [0, 0, -1],
    [1, 0, 0],
    [0, 0, 1],
    [-1, 0, 0],
    [0, 1, 0],
    [0, -1, 0],
];

/// Returns a corner offset as floating point.
#[inline]
#[must_use]
pub fn vertex_offset(index: usize) -> [f64; 3] {
    let [x, y, z] = VERTICES[index];
    [f64::from(x), f64::from(y), f64::from(z)]
}

/// Returns the grid coordinate probed for interior culling of `face`.
#[inline]
#[must_use]
pub fn neighbor_coord(face: usize, coord: [i32; 3]) -> [i32; 3] {
    let n = FACE_NORMALS[face];
    [coord[0] - n[0], coord[1] - n[1], coord[2] - n[2]]
}
