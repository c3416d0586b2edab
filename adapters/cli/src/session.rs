//! Drives the world through every configured run, one frame at a time.

use std::fmt;

use life_core::{Command, Dimensions, Event, Generation, PopulationSample};
use life_rendering::{FrameControl, Scene};
use life_world::{self as world, query, Config, World};
use log::{debug, info};

use crate::settings::{Opening, Settings};

/// Population outline of one finished run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct RunSummary {
    run: u32,
    initial: u64,
    last: PopulationSample,
    peak: Option<PopulationSample>,
    minimum: Option<PopulationSample>,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Run {}: initial {}, final {} at generation {}",
            self.run,
            self.initial,
            self.last.live_cells(),
            self.last.generation()
        )?;
        if let (Some(peak), Some(minimum)) = (self.peak, self.minimum) {
            write!(
                f,
                ", peak {} at generation {}, minimum {} at generation {}",
                peak.live_cells(),
                peak.generation(),
                minimum.live_cells(),
                minimum.generation()
            )?;
        }
        Ok(())
    }
}

/// Sequence of runs sharing one world and one seeding stream.
#[derive(Debug)]
pub(crate) struct Session {
    world: World,
    opening: Option<Command>,
    dimensions: Dimensions,
    generations: u64,
    runs: u32,
    run: u32,
    initial: u64,
    events: Vec<Event>,
    summaries: Vec<RunSummary>,
}

impl Session {
    /// Builds a session whose world has not started its first run yet.
    pub(crate) fn new(settings: &Settings) -> Self {
        let dimensions = settings.opening.dimensions();
        let opening = match &settings.opening {
            Opening::Seeded(dimensions) => Command::Start {
                dimensions: *dimensions,
                density: settings.density,
            },
            Opening::Pattern(grid) => Command::Load { grid: grid.clone() },
        };

        Self {
            world: World::new(Config::new(settings.seed).with_density(settings.density)),
            opening: Some(opening),
            dimensions,
            generations: settings.generations,
            runs: settings.runs,
            run: 0,
            initial: 0,
            events: Vec::new(),
            summaries: Vec::new(),
        }
    }

    /// Issues the next command and copies the resulting frame into `scene`.
    ///
    /// The first call starts the first run. Later calls tick until the run
    /// reaches the configured generation count, then reset into the next run.
    pub(crate) fn advance(&mut self, scene: &mut Scene) -> FrameControl {
        let command = match self.opening.take() {
            Some(opening) => opening,
            None if query::generation(&self.world).get() >= self.generations => Command::Reset {
                dimensions: self.dimensions,
            },
            None => Command::Tick,
        };

        self.events.clear();
        world::apply(&mut self.world, command, &mut self.events);
        for event in &self.events {
            if let Event::RunStarted { snapshot, .. } | Event::RunReset { snapshot, .. } = event {
                self.run += 1;
                self.initial = snapshot.live_cells();
                debug!("run {} opened with {} live cells", self.run, self.initial);
            }
        }

        if let Some(frame) = query::frame(&self.world) {
            scene.capture(&frame, query::status(&self.world));
        }
        if self.runs > 1 {
            scene.run = Some(self.run);
        }

        if query::generation(&self.world).get() < self.generations {
            return FrameControl::Continue;
        }

        let summary = self.summarize();
        info!("{summary}");
        self.summaries.push(summary);
        if self.run >= self.runs {
            FrameControl::Exit
        } else {
            FrameControl::Continue
        }
    }

    /// Summaries of every finished run, in run order.
    pub(crate) fn summaries(&self) -> &[RunSummary] {
        &self.summaries
    }

    fn summarize(&self) -> RunSummary {
        let history = query::population_history(&self.world);
        let last = history
            .latest()
            .copied()
            .unwrap_or_else(|| PopulationSample::new(Generation::ZERO, self.initial));
        RunSummary {
            run: self.run,
            initial: self.initial,
            last,
            peak: history.peak().copied(),
            minimum: history.minimum().copied(),
        }
    }
}
