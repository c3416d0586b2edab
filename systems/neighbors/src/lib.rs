#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure neighbor counting over toroidal grids.
//!
//! Every cell has exactly eight Moore neighbors; coordinates wrap modulo the
//! grid's rows and columns so the lattice has no edges. On grids a single row
//! or column wide the wrapped offsets collapse onto the same physical cells,
//! which are then counted once per offset. A live `1x1` grid therefore sees
//! itself eight times.

use life_core::{Grid, NeighborCounts};

/// Row and column offsets of the eight Moore neighbors.
pub const MOORE_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Counts the live Moore neighbors of every cell.
///
/// Each cell performs exactly eight wrapped lookups, so the whole pass is
/// linear in the number of cells. The input grid is never modified.
#[must_use]
pub fn count_neighbors(grid: &Grid) -> NeighborCounts {
    NeighborCounts::from_fn(grid.dimensions(), |row, col| {
        live_neighbors(grid, row, col)
    })
}

/// Counts the live Moore neighbors of a single cell.
#[must_use]
pub fn live_neighbors(grid: &Grid, row: u32, col: u32) -> u8 {
    let rows = i64::from(grid.rows());
    let cols = i64::from(grid.cols());

    MOORE_OFFSETS
        .iter()
        .filter(|(d_row, d_col)| {
            let neighbor_row = (i64::from(row) + d_row).rem_euclid(rows) as u32;
            let neighbor_col = (i64::from(col) + d_col).rem_euclid(cols) as u32;
            grid.get(neighbor_row, neighbor_col)
                .map_or(false, |state| state.is_alive())
        })
        .count() as u8
}
