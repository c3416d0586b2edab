//! Fixed-size cell lattices and the derived neighbor count lattice.

use std::{fmt, ops::Deref, sync::Arc};

use serde::{Deserialize, Serialize};

use crate::SimulationError;

/// State of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    /// Empty cell.
    #[default]
    Dead,
    /// Populated cell.
    Alive,
}

impl CellState {
    /// Reports whether the cell is populated.
    #[must_use]
    pub const fn is_alive(self) -> bool {
        matches!(self, Self::Alive)
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            Self::Alive
        } else {
            Self::Dead
        }
    }
}

impl From<CellState> for bool {
    fn from(state: CellState) -> Self {
        state.is_alive()
    }
}

/// Size of a grid in rows and columns, both at least one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDimensions")]
pub struct Dimensions {
    rows: u32,
    cols: u32,
}

impl Dimensions {
    /// Validates a row and column count.
    pub fn new(rows: u32, cols: u32) -> Result<Self, SimulationError> {
        if rows == 0 || cols == 0 {
            return Err(SimulationError::InvalidDimension { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Row-major index of the provided cell, if it lies inside the grid.
    #[must_use]
    pub fn index(&self, row: u32, col: u32) -> Option<usize> {
        if row < self.rows && col < self.cols {
            Some(row as usize * self.cols as usize + col as usize)
        } else {
            None
        }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

#[derive(Deserialize)]
struct RawDimensions {
    rows: u32,
    cols: u32,
}

impl TryFrom<RawDimensions> for Dimensions {
    type Error = SimulationError;

    fn try_from(raw: RawDimensions) -> Result<Self, Self::Error> {
        Self::new(raw.rows, raw.cols)
    }
}

/// Rectangular, row-major lattice of cell states with toroidal adjacency.
///
/// The engine never edits a grid in place: every generation produces a brand
/// new grid so neighbor counts are never read from partially updated data.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    dimensions: Dimensions,
    cells: Vec<CellState>,
}

impl Grid {
    /// Creates an all-dead grid, rejecting zero rows or columns.
    pub fn new(rows: u32, cols: u32) -> Result<Self, SimulationError> {
        Ok(Self::dead(Dimensions::new(rows, cols)?))
    }

    /// Creates an all-dead grid of validated dimensions.
    #[must_use]
    pub fn dead(dimensions: Dimensions) -> Self {
        Self::filled(dimensions, CellState::Dead)
    }

    /// Creates a grid where every cell holds `state`.
    #[must_use]
    pub fn filled(dimensions: Dimensions, state: CellState) -> Self {
        Self {
            dimensions,
            cells: vec![state; dimensions.cell_count()],
        }
    }

    /// Creates a grid by evaluating `cell` for every `(row, col)` in row-major order.
    #[must_use]
    pub fn from_fn<F>(dimensions: Dimensions, mut cell: F) -> Self
    where
        F: FnMut(u32, u32) -> CellState,
    {
        let cells = (0..dimensions.rows())
            .flat_map(|row| (0..dimensions.cols()).map(move |col| (row, col)))
            .map(|(row, col)| cell(row, col))
            .collect();
        Self { dimensions, cells }
    }

    /// Parses rows of text where `#` or `1` marks a live cell and `.` or `0`
    /// a dead one. Every row must be as wide as the first.
    pub fn from_rows<I, S>(rows: I) -> Result<Self, SimulationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cells = Vec::new();
        let mut width = None;
        let mut height = 0_usize;

        for (row, text) in rows.into_iter().enumerate() {
            let parsed = parse_row(row, text.as_ref())?;
            let expected = *width.get_or_insert(parsed.len());
            if parsed.len() != expected {
                return Err(SimulationError::RaggedPattern {
                    row,
                    expected,
                    found: parsed.len(),
                });
            }
            cells.extend(parsed);
            height += 1;
        }

        let rows = u32::try_from(height).unwrap_or(u32::MAX);
        let cols = u32::try_from(width.unwrap_or(0)).unwrap_or(u32::MAX);
        let dimensions = Dimensions::new(rows, cols)?;
        Ok(Self { dimensions, cells })
    }

    /// Dimensions of the grid.
    #[must_use]
    pub const fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.dimensions.rows()
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> u32 {
        self.dimensions.cols()
    }

    /// State of the provided cell, or `None` outside the grid.
    #[must_use]
    pub fn get(&self, row: u32, col: u32) -> Option<CellState> {
        self.dimensions
            .index(row, col)
            .map(|index| self.cells[index])
    }

    /// Overwrites a single cell.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` lies outside the grid.
    pub fn set(&mut self, row: u32, col: u32, state: CellState) {
        let Some(index) = self.dimensions.index(row, col) else {
            panic!(
                "cell ({row}, {col}) lies outside the {} grid",
                self.dimensions
            );
        };
        self.cells[index] = state;
    }

    /// Row-major cell slice.
    #[must_use]
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Iterator over rows, each exactly `cols` cells wide.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks_exact(self.cols() as usize)
    }

    /// Number of live cells.
    #[must_use]
    pub fn live_cells(&self) -> u64 {
        self.cells.iter().filter(|cell| cell.is_alive()).count() as u64
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}", self.dimensions)?;
        for row in self.iter_rows() {
            for cell in row {
                f.write_str(if cell.is_alive() { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn parse_row(row: usize, text: &str) -> Result<Vec<CellState>, SimulationError> {
    text.chars()
        .enumerate()
        .map(|(column, glyph)| match glyph {
            '#' | '1' => Ok(CellState::Alive),
            '.' | '0' => Ok(CellState::Dead),
            _ => Err(SimulationError::UnknownGlyph { row, column, glyph }),
        })
        .collect()
}

/// Per-cell count of live Moore neighbors, sized like the grid it was derived from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NeighborCounts {
    dimensions: Dimensions,
    counts: Vec<u8>,
}

impl NeighborCounts {
    /// Creates counts by evaluating `count` for every `(row, col)` in row-major order.
    #[must_use]
    pub fn from_fn<F>(dimensions: Dimensions, mut count: F) -> Self
    where
        F: FnMut(u32, u32) -> u8,
    {
        let counts = (0..dimensions.rows())
            .flat_map(|row| (0..dimensions.cols()).map(move |col| (row, col)))
            .map(|(row, col)| count(row, col))
            .collect();
        Self { dimensions, counts }
    }

    /// Dimensions of the count lattice.
    #[must_use]
    pub const fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Count stored for the provided cell, or `None` outside the lattice.
    #[must_use]
    pub fn get(&self, row: u32, col: u32) -> Option<u8> {
        self.dimensions
            .index(row, col)
            .map(|index| self.counts[index])
    }

    /// Row-major count slice.
    #[must_use]
    pub fn counts(&self) -> &[u8] {
        &self.counts
    }
}

/// Immutable, cheaply cloneable grid handed to observers.
///
/// Snapshots share the grid the world produced for a generation; the world
/// replaces rather than mutates that grid, so a snapshot never changes.
#[derive(Clone, PartialEq, Eq)]
pub struct GridSnapshot(Arc<Grid>);

impl GridSnapshot {
    /// Wraps a finished grid.
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        Self(Arc::new(grid))
    }

    /// Reports whether two snapshots share the same allocation.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl From<Grid> for GridSnapshot {
    fn from(grid: Grid) -> Self {
        Self::new(grid)
    }
}

impl Deref for GridSnapshot {
    type Target = Grid;

    fn deref(&self) -> &Grid {
        &self.0
    }
}

impl fmt::Debug for GridSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}
