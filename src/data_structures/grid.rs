//! Procedural ground-plane grid.
//!
//! The grid is the one mesh that is generated rather than parsed: parallel
//! line segments covering a fixed square on the X/Z plane, two vertices per
//! segment. Draw calls for it must use line-list topology.

/// How far the grid extends along X on each side of the origin.
pub const GRID_X_RANGE: f32 = 1000.0;
/// How far the grid extends along Z on each side of the origin.
pub const GRID_Z_RANGE: f32 = 1000.0;

/// Vertical offset applied to the grid's world matrix so meshes rest on it.
pub const GRID_Y_OFFSET: f32 = -0.5;

/// Build the grid's positions and a matching uniform color list.
///
/// Rows step along X emitting segments that span the full Z range, columns
/// step along Z emitting segments that span the full X range. Both returned
/// lists have the same component length, one RGB triple per vertex.
pub fn build_grid_attributes(
    row_spacing: f32,
    column_spacing: f32,
    color: [f32; 3],
) -> (Vec<f32>, Vec<f32>) {
    let mut positions = Vec::new();

    let mut x = -GRID_X_RANGE;
    while x < GRID_X_RANGE {
        positions.extend_from_slice(&[x, 0.0, -GRID_Z_RANGE]);
        positions.extend_from_slice(&[x, 0.0, GRID_Z_RANGE]);
        x += row_spacing;
    }

    let mut z = -GRID_Z_RANGE;
    while z < GRID_Z_RANGE {
        positions.extend_from_slice(&[-GRID_X_RANGE, 0.0, z]);
        positions.extend_from_slice(&[GRID_X_RANGE, 0.0, z]);
        z += column_spacing;
    }

    let vertex_count = positions.len() / 3;
    let mut colors = Vec::with_capacity(positions.len());
    for _ in 0..vertex_count {
        colors.extend_from_slice(&color);
    }

    (positions, colors)
}
