#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Seeding system that produces the initial grid of a run from a density.

use life_core::{CellState, Density, Dimensions, Grid};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeds a grid where each cell is independently alive with probability `density`.
///
/// A density of zero yields an all-dead grid and a density of one an all-alive
/// grid without consuming any randomness. Otherwise each cell draws a uniform
/// value in `[0, 1)` and comes alive when the draw falls below the density.
pub fn seed<R: Rng>(dimensions: Dimensions, density: Density, rng: &mut R) -> Grid {
    let probability = density.get();
    if probability <= 0.0 {
        return Grid::dead(dimensions);
    }
    if probability >= 1.0 {
        return Grid::filled(dimensions, CellState::Alive);
    }

    Grid::from_fn(dimensions, |_, _| {
        CellState::from(rng.gen::<f64>() < probability)
    })
}

/// Stateful seeder backed by a reproducible ChaCha stream.
#[derive(Clone, Debug)]
pub struct Seeder {
    rng: ChaCha8Rng,
}

impl Seeder {
    /// Creates a seeder whose output is fully determined by `seed`.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Seeds the next grid from the underlying stream.
    #[must_use]
    pub fn seed(&mut self, dimensions: Dimensions, density: Density) -> Grid {
        seed(dimensions, density, &mut self.rng)
    }
}
