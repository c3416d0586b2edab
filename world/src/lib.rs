#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative simulation state for the Life engine.
//!
//! The [`World`] owns the current grid, the generation counter, the pause
//! flag, the seeding density, and the population history of the active run.
//! All mutations flow through [`apply`]; observers read through [`query`] and
//! the [`Event`]s emitted by `apply`, which only ever carry immutable
//! snapshots.

use life_core::{
    Command, Density, Dimensions, Event, Generation, Grid, GridSnapshot, PopulationHistory,
    PopulationSample, RunStatus,
};
use life_system_neighbors::count_neighbors;
use life_system_rules::apply_rules;
use life_system_seeding::Seeder;
use log::{debug, trace};

const DEFAULT_RNG_SEED: u64 = 0x1f3d_5b79_a2c4_e6f8;

/// Configuration parameters required to construct the world.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    rng_seed: u64,
    density: Density,
}

impl Config {
    /// Creates a configuration whose seeding stream is derived from `rng_seed`.
    #[must_use]
    pub fn new(rng_seed: u64) -> Self {
        Self {
            rng_seed,
            density: Density::default(),
        }
    }

    /// Replaces the density stored before the first run starts.
    #[must_use]
    pub const fn with_density(mut self, density: Density) -> Self {
        self.density = density;
        self
    }

    /// Seed of the seeding stream.
    #[must_use]
    pub const fn rng_seed(&self) -> u64 {
        self.rng_seed
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_RNG_SEED)
    }
}

/// Represents the authoritative simulation state.
#[derive(Debug)]
pub struct World {
    seeder: Seeder,
    density: Density,
    status: RunStatus,
    grid: Option<GridSnapshot>,
    generation: Generation,
    population: PopulationHistory,
}

impl World {
    /// Creates an uninitialized world; no grid exists until a run starts.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            seeder: Seeder::from_seed(config.rng_seed),
            density: config.density,
            status: RunStatus::Uninitialized,
            grid: None,
            generation: Generation::ZERO,
            population: PopulationHistory::new(),
        }
    }

    fn begin_run(&mut self, grid: Grid) -> GridSnapshot {
        let snapshot = GridSnapshot::new(grid);
        debug!(
            "run began on {} grid at density {} with {} live cells",
            snapshot.dimensions(),
            self.density,
            snapshot.live_cells()
        );
        self.grid = Some(snapshot.clone());
        self.generation = Generation::ZERO;
        self.population.clear();
        self.status = RunStatus::Running;
        snapshot
    }

    fn seed_run(&mut self, dimensions: Dimensions) -> GridSnapshot {
        let grid = self.seeder.seed(dimensions, self.density);
        self.begin_run(grid)
    }

    fn advance(&mut self, out_events: &mut Vec<Event>) {
        let Some(current) = self.grid.as_ref() else {
            return;
        };

        let counts = count_neighbors(current);
        let next = apply_rules(current, &counts)
            .expect("neighbor counts are always derived from the current grid");
        let population = next.live_cells();
        let snapshot = GridSnapshot::new(next);

        self.grid = Some(snapshot.clone());
        self.generation = self.generation.next();
        self.population
            .record(PopulationSample::new(self.generation, population));
        trace!(
            "generation {} holds {} live cells",
            self.generation,
            population
        );

        out_events.push(Event::GenerationAdvanced {
            generation: self.generation,
            population,
            snapshot,
        });
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

/// Applies the provided command to the world, mutating state deterministically.
///
/// Ticks, pauses, and resumes issued before the first run are ignored. A reset
/// issued before the first run starts one using the stored density.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::Start {
            dimensions,
            density,
        } => {
            world.density = density;
            let snapshot = world.seed_run(dimensions);
            out_events.push(Event::RunStarted { snapshot, density });
        }
        Command::Load { grid } => {
            let snapshot = world.begin_run(grid);
            out_events.push(Event::RunStarted {
                snapshot,
                density: world.density,
            });
        }
        Command::Reset { dimensions } => {
            let snapshot = world.seed_run(dimensions);
            out_events.push(Event::RunReset {
                snapshot,
                density: world.density,
            });
        }
        Command::Tick => match world.status {
            RunStatus::Running => world.advance(out_events),
            RunStatus::Paused => {}
            RunStatus::Uninitialized => debug!("tick ignored before the first run"),
        },
        Command::Pause => match world.status {
            RunStatus::Running => {
                world.status = RunStatus::Paused;
                debug!("paused at generation {}", world.generation);
                out_events.push(Event::Paused);
            }
            RunStatus::Paused => {}
            RunStatus::Uninitialized => debug!("pause ignored before the first run"),
        },
        Command::Resume => match world.status {
            RunStatus::Paused => {
                world.status = RunStatus::Running;
                debug!("resumed at generation {}", world.generation);
                out_events.push(Event::Resumed);
            }
            RunStatus::Running => {}
            RunStatus::Uninitialized => debug!("resume ignored before the first run"),
        },
        Command::SetDensity { density } => {
            world.density = density;
            debug!("density for the next run set to {density}");
            out_events.push(Event::DensityChanged { density });
        }
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use super::World;
    use life_core::{
        Density, Dimensions, Frame, Generation, GridSnapshot, PopulationHistory, RunStatus,
    };

    /// Lifecycle state of the driver.
    #[must_use]
    pub fn status(world: &World) -> RunStatus {
        world.status
    }

    /// Reports whether ticks are currently ignored because the run is paused.
    #[must_use]
    pub fn is_paused(world: &World) -> bool {
        world.status == RunStatus::Paused
    }

    /// Immutable snapshot of the current grid, if a run exists.
    #[must_use]
    pub fn snapshot(world: &World) -> Option<GridSnapshot> {
        world.grid.clone()
    }

    /// Dimensions of the current grid, if a run exists.
    #[must_use]
    pub fn dimensions(world: &World) -> Option<Dimensions> {
        world.grid.as_ref().map(|grid| grid.dimensions())
    }

    /// Generation of the current grid; zero before the first run.
    #[must_use]
    pub fn generation(world: &World) -> Generation {
        world.generation
    }

    /// Density applied to the next start or reset.
    #[must_use]
    pub fn density(world: &World) -> Density {
        world.density
    }

    /// Population samples recorded since the current run started.
    #[must_use]
    pub fn population_history(world: &World) -> &PopulationHistory {
        &world.population
    }

    /// Outbound frame for renderers and charts, if a run exists.
    #[must_use]
    pub fn frame(world: &World) -> Option<Frame<'_>> {
        world.grid.clone().map(|snapshot| Frame {
            snapshot,
            generation: world.generation,
            population: &world.population,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dimensions(rows: u32, cols: u32) -> Dimensions {
        Dimensions::new(rows, cols).expect("valid dimensions")
    }

    fn started_world() -> World {
        let mut world = World::new(Config::new(7));
        let mut events = Vec::new();
        apply(
            &mut world,
            Command::Start {
                dimensions: dimensions(8, 8),
                density: Density::default(),
            },
            &mut events,
        );
        world
    }

    #[test]
    fn new_world_is_uninitialized() {
        let world = World::default();
        assert_eq!(query::status(&world), RunStatus::Uninitialized);
        assert!(query::snapshot(&world).is_none());
        assert!(query::frame(&world).is_none());
        assert_eq!(query::generation(&world), Generation::ZERO);
        assert_eq!(query::density(&world), Density::default());
    }

    #[test]
    fn config_density_applies_before_first_run() {
        let density = Density::new(0.2).expect("valid density");
        let world = World::new(Config::new(1).with_density(density));
        assert_eq!(query::density(&world), density);
    }

    #[test]
    fn start_emits_generation_zero_snapshot() {
        let mut world = World::new(Config::new(3));
        let mut events = Vec::new();
        apply(
            &mut world,
            Command::Start {
                dimensions: dimensions(4, 6),
                density: Density::FULL,
            },
            &mut events,
        );

        assert_eq!(query::status(&world), RunStatus::Running);
        assert_eq!(query::generation(&world), Generation::ZERO);
        assert!(query::population_history(&world).is_empty());
        match events.as_slice() {
            [Event::RunStarted { snapshot, density }] => {
                assert_eq!(*density, Density::FULL);
                assert_eq!(snapshot.live_cells(), 24);
                let current = query::snapshot(&world).expect("run started");
                assert!(snapshot.ptr_eq(&current));
            }
            other => panic!("unexpected events: {other:?}"),
        }
    }

    #[test]
    fn commands_before_first_run_are_ignored() {
        let mut world = World::default();
        let mut events = Vec::new();
        for command in [Command::Tick, Command::Pause, Command::Resume] {
            apply(&mut world, command, &mut events);
        }
        assert!(events.is_empty());
        assert_eq!(query::status(&world), RunStatus::Uninitialized);
    }

    #[test]
    fn pause_and_resume_emit_only_on_transition() {
        let mut world = started_world();
        let mut events = Vec::new();

        apply(&mut world, Command::Pause, &mut events);
        apply(&mut world, Command::Pause, &mut events);
        assert_eq!(events, vec![Event::Paused]);
        assert!(query::is_paused(&world));

        events.clear();
        apply(&mut world, Command::Resume, &mut events);
        apply(&mut world, Command::Resume, &mut events);
        assert_eq!(events, vec![Event::Resumed]);
        assert_eq!(query::status(&world), RunStatus::Running);
    }

    #[test]
    fn set_density_leaves_grid_in_flight_untouched() {
        let mut world = started_world();
        let before = query::snapshot(&world).expect("run started");
        let mut events = Vec::new();

        apply(
            &mut world,
            Command::SetDensity {
                density: Density::EMPTY,
            },
            &mut events,
        );

        let after = query::snapshot(&world).expect("run still active");
        assert!(before.ptr_eq(&after));
        assert_eq!(query::density(&world), Density::EMPTY);
        assert_eq!(
            events,
            vec![Event::DensityChanged {
                density: Density::EMPTY
            }]
        );
    }

    #[test]
    fn reset_before_first_run_starts_one() {
        let mut world = World::default();
        let mut events = Vec::new();
        apply(
            &mut world,
            Command::Reset {
                dimensions: dimensions(3, 3),
            },
            &mut events,
        );
        assert_eq!(query::status(&world), RunStatus::Running);
        assert!(matches!(events.as_slice(), [Event::RunReset { .. }]));
    }

    #[test]
    fn world_can_move_between_threads() {
        fn assert_send<T: Send>() {}
        assert_send::<World>();
    }
}
