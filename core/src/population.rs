//! Population time series recorded once per generation.

use serde::{Deserialize, Serialize};

use crate::Generation;

/// Live-cell count observed for one generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PopulationSample {
    generation: Generation,
    live_cells: u64,
}

impl PopulationSample {
    /// Creates a sample for the provided generation.
    #[must_use]
    pub const fn new(generation: Generation, live_cells: u64) -> Self {
        Self {
            generation,
            live_cells,
        }
    }

    /// Generation the sample was taken from.
    #[must_use]
    pub const fn generation(&self) -> Generation {
        self.generation
    }

    /// Number of live cells in that generation.
    #[must_use]
    pub const fn live_cells(&self) -> u64 {
        self.live_cells
    }
}

/// Append-only population series for a single run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PopulationHistory {
    samples: Vec<PopulationSample>,
}

impl PopulationHistory {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a sample. Generations must strictly increase.
    pub fn record(&mut self, sample: PopulationSample) {
        debug_assert!(
            self.latest()
                .map_or(true, |last| last.generation() < sample.generation()),
            "population samples must be recorded in increasing generation order"
        );
        self.samples.push(sample);
    }

    /// Drops every sample.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Samples in recording order.
    #[must_use]
    pub fn samples(&self) -> &[PopulationSample] {
        &self.samples
    }

    /// Iterator over the samples in recording order.
    pub fn iter(&self) -> impl Iterator<Item = &PopulationSample> {
        self.samples.iter()
    }

    /// Number of recorded samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Reports whether no sample has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Most recently recorded sample.
    #[must_use]
    pub fn latest(&self) -> Option<&PopulationSample> {
        self.samples.last()
    }

    /// Sample with the largest population; the earliest wins ties.
    #[must_use]
    pub fn peak(&self) -> Option<&PopulationSample> {
        self.samples
            .iter()
            .reduce(|best, sample| {
                if sample.live_cells() > best.live_cells() {
                    sample
                } else {
                    best
                }
            })
    }

    /// Sample with the smallest population; the earliest wins ties.
    #[must_use]
    pub fn minimum(&self) -> Option<&PopulationSample> {
        self.samples
            .iter()
            .reduce(|best, sample| {
                if sample.live_cells() < best.live_cells() {
                    sample
                } else {
                    best
                }
            })
    }
}
