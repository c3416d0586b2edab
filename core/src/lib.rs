#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Life engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters submit [`Command`] values
//! describing desired state changes, the world executes those commands via its
//! `apply` entry point, and then broadcasts [`Event`] values carrying immutable
//! [`GridSnapshot`]s. Systems are pure functions over [`Grid`] and
//! [`NeighborCounts`] values and never touch world state directly.

mod grid;
mod population;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use grid::{CellState, Dimensions, Grid, GridSnapshot, NeighborCounts};
pub use population::{PopulationHistory, PopulationSample};

/// Largest number of live cells a single Moore neighborhood can contain.
pub const MAX_NEIGHBORS: u8 = 8;

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Seeds a fresh grid and begins a new run from generation zero.
    Start {
        /// Size of the grid seeded for the run.
        dimensions: Dimensions,
        /// Probability that any single cell starts alive.
        density: Density,
    },
    /// Begins a new run from a caller-provided grid instead of a seeded one.
    Load {
        /// Grid used as generation zero.
        grid: Grid,
    },
    /// Advances the simulation by exactly one generation unless paused.
    Tick,
    /// Suspends generation stepping without touching the grid or history.
    Pause,
    /// Resumes generation stepping after a pause.
    Resume,
    /// Discards the current run and reseeds using the stored density.
    Reset {
        /// Size of the grid seeded for the new run.
        dimensions: Dimensions,
    },
    /// Stores the density used by the next start or reset.
    SetDensity {
        /// Density applied to subsequent seeding.
        density: Density,
    },
}

impl Command {
    /// Builds a [`Command::SetDensity`] from a raw value, rejecting values
    /// outside `[0, 1]`.
    pub fn set_density(value: f64) -> Result<Self, SimulationError> {
        Ok(Self::SetDensity {
            density: Density::new(value)?,
        })
    }
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Announces that a run began and exposes generation zero.
    RunStarted {
        /// Initial seeded grid.
        snapshot: GridSnapshot,
        /// Density used to seed the grid.
        density: Density,
    },
    /// Announces that the previous run was discarded and a new one seeded.
    RunReset {
        /// Freshly seeded grid for generation zero.
        snapshot: GridSnapshot,
        /// Density used to seed the grid.
        density: Density,
    },
    /// Confirms that the simulation advanced one generation.
    GenerationAdvanced {
        /// Generation index of the new grid.
        generation: Generation,
        /// Number of live cells in the new grid.
        population: u64,
        /// Immutable view of the new grid.
        snapshot: GridSnapshot,
    },
    /// Reports that the run transitioned into the paused state.
    Paused,
    /// Reports that the run transitioned back into the running state.
    Resumed,
    /// Confirms that a new seeding density was stored.
    DensityChanged {
        /// Density applied to the next start or reset.
        density: Density,
    },
}

/// Lifecycle state of the generation driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum RunStatus {
    /// No run has been started yet.
    #[default]
    Uninitialized,
    /// Ticks advance the simulation.
    Running,
    /// Ticks are ignored until the run resumes.
    Paused,
}

/// Index of a generation within a single run.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Generation(u64);

impl Generation {
    /// The seeded grid of every run.
    pub const ZERO: Self = Self(0);

    /// Creates a new generation index with the provided numeric value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the generation.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Returns the generation that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Probability in `[0, 1]` that a seeded cell starts alive.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Density(f64);

impl Density {
    /// Seeds nothing; every cell starts dead.
    pub const EMPTY: Self = Self(0.0);
    /// Seeds everything; every cell starts alive.
    pub const FULL: Self = Self(1.0);

    /// Validates a raw density value.
    pub fn new(value: f64) -> Result<Self, SimulationError> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(SimulationError::InvalidDensity { value })
        }
    }

    /// Clamps a raw value into `[0, 1]`. NaN maps to [`Density::EMPTY`].
    #[must_use]
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            Self::EMPTY
        } else {
            Self(value.clamp(0.0, 1.0))
        }
    }

    /// Retrieves the underlying probability.
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.0
    }
}

impl Default for Density {
    fn default() -> Self {
        Self(0.5)
    }
}

impl TryFrom<f64> for Density {
    type Error = SimulationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Density> for f64 {
    fn from(density: Density) -> Self {
        density.0
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outbound view handed to renderers and charts after every start or tick.
#[derive(Clone, Debug)]
pub struct Frame<'a> {
    /// Immutable grid for the current generation.
    pub snapshot: GridSnapshot,
    /// Generation the snapshot belongs to.
    pub generation: Generation,
    /// Population samples recorded for the current run.
    pub population: &'a PopulationHistory,
}

/// Input validation failures raised at the control surface.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum SimulationError {
    /// Grid rows or columns were zero.
    #[error("grid dimensions must be at least 1x1, got {rows}x{cols}")]
    InvalidDimension {
        /// Requested row count.
        rows: u32,
        /// Requested column count.
        cols: u32,
    },
    /// Density fell outside `[0, 1]`.
    #[error("density {value} lies outside [0, 1]")]
    InvalidDensity {
        /// Rejected raw value.
        value: f64,
    },
    /// A textual pattern row did not match the width of the first row.
    #[error("pattern row {row} has {found} cells, expected {expected}")]
    RaggedPattern {
        /// Zero-based row index.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
    /// A textual pattern contained a glyph that is neither alive nor dead.
    #[error("pattern row {row} column {column} contains unknown glyph {glyph:?}")]
    UnknownGlyph {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        column: usize,
        /// Offending character.
        glyph: char,
    },
}

/// Neighbor counts were derived from a grid of different dimensions.
///
/// Only the engine itself can produce this; callers treat it as a broken
/// invariant rather than a recoverable condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("neighbor counts sized {counts} do not match grid sized {grid}")]
pub struct DimensionMismatch {
    /// Dimensions of the grid being transitioned.
    pub grid: Dimensions,
    /// Dimensions of the supplied neighbor counts.
    pub counts: Dimensions,
}
