#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Conway transition rules applied cell by cell.

use life_core::{CellState, DimensionMismatch, Grid, NeighborCounts};
use life_system_neighbors::count_neighbors;

/// Next state of a single cell given its live neighbor count.
///
/// Live cells survive with two or three neighbors and die otherwise; dead
/// cells come alive with exactly three neighbors.
#[must_use]
pub const fn next_state(current: CellState, neighbors: u8) -> CellState {
    match (current, neighbors) {
        (CellState::Alive, 2..=3) => CellState::Alive,
        (CellState::Dead, 3) => CellState::Alive,
        _ => CellState::Dead,
    }
}

/// Applies [`next_state`] to every cell, producing a new grid.
///
/// Both inputs are read-only. Counts sized differently from the grid mean the
/// caller paired a grid with counts derived from another one.
pub fn apply_rules(grid: &Grid, counts: &NeighborCounts) -> Result<Grid, DimensionMismatch> {
    if grid.dimensions() != counts.dimensions() {
        return Err(DimensionMismatch {
            grid: grid.dimensions(),
            counts: counts.dimensions(),
        });
    }

    let cells = grid.cells();
    let neighbors = counts.counts();
    let cols = grid.cols() as usize;
    Ok(Grid::from_fn(grid.dimensions(), |row, col| {
        let index = row as usize * cols + col as usize;
        next_state(cells[index], neighbors[index])
    }))
}

/// Advances a grid by one generation.
#[must_use]
pub fn step(grid: &Grid) -> Grid {
    let counts = count_neighbors(grid);
    match apply_rules(grid, &counts) {
        Ok(next) => next,
        Err(mismatch) => unreachable!("counts derived from the grid itself: {mismatch}"),
    }
}
