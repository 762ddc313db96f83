//! Painter's ordering.
//!
//! Voxels are drawn farthest first so nearer ones overdraw them; there is no
//! depth buffer. The key is the length of `coord + reference`: a sum, not a
//! difference, matching how the camera offset is added to world points in the
//! voxel processor.

/// Sort key for one voxel: `|coord + reference|`.
#[inline]
#[must_use]
pub fn voxel_distance(coord: [i32; 3], reference: [f64; 3]) -> f64 {
    let x = f64::from(coord[0]) + reference[0];
    let y = f64::from(coord[1]) + reference[1];
    let z = f64::from(coord[2]) + reference[2];
    (x * x + y * y + z * z).sqrt()
}

/// Sorts `coords` in place, farthest first.
///
/// Order among equal keys is unspecified.
pub fn sort_by_distance(coords: &mut [[i32; 3]], reference: [f64; 3]) {
    coords.sort_unstable_by(|a, b| {
        voxel_distance(*b, reference).total_cmp(&voxel_distance(*a, reference))
    });
}

/// Returns `coords` sorted farthest first.
#[must_use]
pub fn sorted_by_distance(mut coords: Vec<[i32; 3]>, reference: [f64; 3]) -> Vec<[i32; 3]> {
    sort_by_distance(&mut coords, reference);
    coords
}
