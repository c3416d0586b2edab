//! Command-line arguments, the optional TOML settings file, and their merge.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{bail, ensure, Context, Result};
use clap::Parser;
use life_core::{Density, Dimensions, Grid};
use life_rendering::{frame_interval, GlyphPalette};
use serde::Deserialize;

const DEFAULT_ROWS: u32 = 25;
const DEFAULT_COLS: u32 = 150;
const DEFAULT_GENERATIONS: u64 = 100;
const DEFAULT_REFRESH_RATE: f64 = 10.0;

/// Conway's Game of Life on a toroidal grid.
#[derive(Debug, Parser)]
#[command(name = "life", version)]
pub(crate) struct Args {
    /// Number of grid rows.
    #[arg(long)]
    rows: Option<u32>,
    /// Number of grid columns.
    #[arg(long)]
    cols: Option<u32>,
    /// Probability in [0, 1] that a seeded cell starts alive.
    #[arg(long)]
    density: Option<f64>,
    /// Generations stepped in every run.
    #[arg(long)]
    generations: Option<u64>,
    /// Frames drawn per second; 0 draws as fast as possible.
    #[arg(long)]
    refresh_rate: Option<f64>,
    /// Seed of the seeding stream; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Consecutive runs, each reseeded from scratch.
    #[arg(long)]
    runs: Option<u32>,
    /// Skip drawing frames and print only the run summaries.
    #[arg(long)]
    quiet: bool,
    /// Glyph drawn for live cells.
    #[arg(long)]
    alive_glyph: Option<char>,
    /// Glyph drawn for dead cells.
    #[arg(long)]
    dead_glyph: Option<char>,
    /// Clear the terminal before every frame.
    #[arg(long)]
    clear: bool,
    /// Text grid of `#` and `.` rows used as the first generation.
    #[arg(long)]
    pattern: Option<PathBuf>,
    /// TOML file supplying defaults for any of the options above.
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Settings read from the TOML file passed with `--config`.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub(crate) struct FileSettings {
    rows: Option<u32>,
    cols: Option<u32>,
    density: Option<f64>,
    generations: Option<u64>,
    refresh_rate: Option<f64>,
    seed: Option<u64>,
    runs: Option<u32>,
    quiet: Option<bool>,
    alive_glyph: Option<char>,
    dead_glyph: Option<char>,
    clear: Option<bool>,
    pattern: Option<PathBuf>,
}

impl FileSettings {
    fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("failed to parse settings file")
    }

    fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file {}", path.display()))?;
        Self::parse(&contents).with_context(|| format!("invalid settings in {}", path.display()))
    }
}

/// Source of the first generation of the first run.
#[derive(Debug, PartialEq)]
pub(crate) enum Opening {
    /// Seed a grid of the given size at the configured density.
    Seeded(Dimensions),
    /// Start from a grid read from a pattern file.
    Pattern(Grid),
}

impl Opening {
    /// Dimensions of every run in the session.
    pub(crate) fn dimensions(&self) -> Dimensions {
        match self {
            Self::Seeded(dimensions) => *dimensions,
            Self::Pattern(grid) => grid.dimensions(),
        }
    }
}

/// Fully validated settings for one invocation.
#[derive(Debug)]
pub(crate) struct Settings {
    pub(crate) opening: Opening,
    pub(crate) density: Density,
    pub(crate) generations: u64,
    pub(crate) frame_interval: Option<Duration>,
    pub(crate) seed: u64,
    pub(crate) runs: u32,
    pub(crate) quiet: bool,
    pub(crate) palette: GlyphPalette,
    pub(crate) clear: bool,
}

impl Settings {
    /// Reads the settings file named by `--config`, if any, and merges it with
    /// the arguments.
    pub(crate) fn load(args: Args) -> Result<Self> {
        let file = match args.config.as_deref() {
            Some(path) => FileSettings::load(path)?,
            None => FileSettings::default(),
        };
        Self::resolve(args, file, read_pattern)
    }

    /// Explicit arguments win over the file, which wins over built-in defaults.
    fn resolve<P>(args: Args, file: FileSettings, read_pattern: P) -> Result<Self>
    where
        P: FnOnce(&Path) -> Result<Grid>,
    {
        let rows = args.rows.or(file.rows);
        let cols = args.cols.or(file.cols);

        let opening = match args.pattern.or(file.pattern) {
            Some(path) => {
                let grid = read_pattern(&path)?;
                if rows.is_some() || cols.is_some() {
                    log::warn!(
                        "grid size {} from {} overrides --rows/--cols",
                        grid.dimensions(),
                        path.display()
                    );
                }
                Opening::Pattern(grid)
            }
            None => Opening::Seeded(
                Dimensions::new(
                    rows.unwrap_or(DEFAULT_ROWS),
                    cols.unwrap_or(DEFAULT_COLS),
                )
                .context("invalid grid size")?,
            ),
        };

        let density = match args.density.or(file.density) {
            Some(value) => Density::new(value).context("invalid density")?,
            None => Density::default(),
        };

        let refresh_rate = args
            .refresh_rate
            .or(file.refresh_rate)
            .unwrap_or(DEFAULT_REFRESH_RATE);
        let frame_interval = frame_interval(refresh_rate).context("invalid refresh rate")?;

        let runs = args.runs.or(file.runs).unwrap_or(1);
        ensure!(runs > 0, "at least one run is required");

        let defaults = GlyphPalette::default();
        let palette = GlyphPalette::new(
            args.alive_glyph.or(file.alive_glyph).unwrap_or(defaults.alive()),
            args.dead_glyph.or(file.dead_glyph).unwrap_or(defaults.dead()),
        )
        .context("invalid glyphs")?;

        Ok(Self {
            opening,
            density,
            generations: args
                .generations
                .or(file.generations)
                .unwrap_or(DEFAULT_GENERATIONS),
            frame_interval,
            seed: args.seed.or(file.seed).unwrap_or_else(rand::random),
            runs,
            quiet: args.quiet || file.quiet.unwrap_or(false),
            palette,
            clear: args.clear || file.clear.unwrap_or(false),
        })
    }
}

fn read_pattern(path: &Path) -> Result<Grid> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read pattern {}", path.display()))?;
    parse_pattern(&contents).with_context(|| format!("invalid pattern in {}", path.display()))
}

fn parse_pattern(contents: &str) -> Result<Grid> {
    let rows: Vec<&str> = contents
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .collect();
    if rows.is_empty() {
        bail!("pattern contains no rows");
    }
    Ok(Grid::from_rows(rows)?)
}
