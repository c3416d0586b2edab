#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering contracts for Life adapters.

use anyhow::Result as AnyResult;
use life_core::{CellState, Frame, Generation, Grid, GridSnapshot, RunStatus};
use std::{error::Error, fmt, time::Duration};

/// Glyphs used to draw live and dead cells as text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GlyphPalette {
    alive: char,
    dead: char,
}

impl GlyphPalette {
    /// Shaded blocks for live cells, light shading for dead ones.
    pub const BLOCKS: Self = Self {
        alive: '▓',
        dead: '░',
    };

    /// Creates a palette, rejecting glyphs that cannot be told apart or printed.
    pub fn new(alive: char, dead: char) -> Result<Self, RenderingError> {
        for glyph in [alive, dead] {
            if glyph.is_control() || (glyph.is_whitespace() && glyph != ' ') {
                return Err(RenderingError::UnprintableGlyph { glyph });
            }
        }
        if alive == dead {
            return Err(RenderingError::IndistinguishableGlyphs { glyph: alive });
        }
        Ok(Self { alive, dead })
    }

    /// Glyph drawn for live cells.
    #[must_use]
    pub const fn alive(&self) -> char {
        self.alive
    }

    /// Glyph drawn for dead cells.
    #[must_use]
    pub const fn dead(&self) -> char {
        self.dead
    }

    /// Glyph drawn for the provided cell state.
    #[must_use]
    pub const fn glyph(&self, state: CellState) -> char {
        match state {
            CellState::Alive => self.alive,
            CellState::Dead => self.dead,
        }
    }
}

impl Default for GlyphPalette {
    fn default() -> Self {
        Self::BLOCKS
    }
}

/// Renders every row of the grid as a line of glyphs.
#[must_use]
pub fn render_grid(grid: &Grid, palette: GlyphPalette) -> String {
    let width = grid.cols() as usize + 1;
    let mut text = String::with_capacity(width * grid.rows() as usize * 3);
    for row in grid.iter_rows() {
        text.extend(row.iter().map(|&state| palette.glyph(state)));
        text.push('\n');
    }
    text
}

/// Everything a backend draws for one frame.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Scene {
    /// Grid of the current generation, once a run exists.
    pub grid: Option<GridSnapshot>,
    /// Generation index of the grid.
    pub generation: Generation,
    /// Live cells in the grid.
    pub population: u64,
    /// Lifecycle state of the driver when the scene was captured.
    pub status: RunStatus,
    /// One-based label of the run being shown when several runs are chained.
    pub run: Option<u32>,
}

impl Scene {
    /// Copies the outbound frame of the world into the scene.
    pub fn capture(&mut self, frame: &Frame<'_>, status: RunStatus) {
        self.population = frame
            .population
            .latest()
            .filter(|sample| sample.generation() == frame.generation)
            .map_or_else(|| frame.snapshot.live_cells(), |sample| sample.live_cells());
        self.grid = Some(frame.snapshot.clone());
        self.generation = frame.generation;
        self.status = status;
    }

    /// Caption printed beneath the grid.
    #[must_use]
    pub fn caption(&self) -> String {
        let mut caption = String::new();
        if let Some(run) = self.run {
            caption.push_str(&format!("Run {run} | "));
        }
        caption.push_str(&format!(
            "Generation {} | Population {}",
            self.generation, self.population
        ));
        if self.status == RunStatus::Paused {
            caption.push_str(" | Paused");
        }
        caption
    }
}

/// Signal returned by scene updates to keep or stop the frame loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FrameControl {
    /// Draw this frame and schedule another.
    Continue,
    /// Draw this frame and return from the backend.
    Exit,
}

/// Presentation descriptor consumed by rendering backends.
#[derive(Clone, Debug, PartialEq)]
pub struct Presentation {
    /// Heading written once before the first frame.
    pub title: String,
    /// Glyphs used for cells.
    pub palette: GlyphPalette,
    /// Minimum time between frames; `None` draws frames back to back.
    pub frame_interval: Option<Duration>,
    /// Whether the grid is drawn or only the caption.
    pub show_grid: bool,
    /// Whether the surface is cleared before each frame.
    pub clear_between_frames: bool,
    /// Scene content that should be displayed.
    pub scene: Scene,
}

impl Presentation {
    /// Constructs a presentation that draws grids without pacing or clearing.
    #[must_use]
    pub fn new<T>(title: T, palette: GlyphPalette) -> Self
    where
        T: Into<String>,
    {
        Self {
            title: title.into(),
            palette,
            frame_interval: None,
            show_grid: true,
            clear_between_frames: false,
            scene: Scene::default(),
        }
    }
}

/// Converts a refresh rate in frames per second into the pause between frames.
///
/// A rate of zero disables pacing. Negative, NaN, and infinite rates are rejected.
pub fn frame_interval(refresh_rate: f64) -> Result<Option<Duration>, RenderingError> {
    if !refresh_rate.is_finite() || refresh_rate < 0.0 {
        return Err(RenderingError::InvalidRefreshRate { refresh_rate });
    }
    if refresh_rate == 0.0 {
        return Ok(None);
    }
    Ok(Some(Duration::from_secs_f64(1.0 / refresh_rate)))
}

/// Rendering backend capable of presenting Life scenes.
pub trait RenderingBackend {
    /// Runs the rendering backend until `update_scene` requests an exit.
    ///
    /// The closure receives the wall-clock time since the previous frame and
    /// mutates the scene before it is drawn. The frame produced by the call that
    /// returns [`FrameControl::Exit`] is still drawn.
    fn run<F>(self, presentation: Presentation, update_scene: F) -> AnyResult<()>
    where
        F: FnMut(Duration, &mut Scene) -> FrameControl;
}

/// Errors that can occur when constructing rendering descriptors.
#[derive(Debug, PartialEq)]
pub enum RenderingError {
    /// Live and dead cells would share the same glyph.
    IndistinguishableGlyphs {
        /// Glyph provided for both states.
        glyph: char,
    },
    /// A glyph is a control or layout character.
    UnprintableGlyph {
        /// Offending glyph.
        glyph: char,
    },
    /// Refresh rate was negative or not a finite number.
    InvalidRefreshRate {
        /// Provided refresh rate.
        refresh_rate: f64,
    },
}

impl fmt::Display for RenderingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndistinguishableGlyphs { glyph } => {
                write!(f, "live and dead cells both use glyph {glyph:?}")
            }
            Self::UnprintableGlyph { glyph } => {
                write!(f, "glyph {glyph:?} cannot be printed")
            }
            Self::InvalidRefreshRate { refresh_rate } => {
                write!(
                    f,
                    "refresh rate must be a non-negative number (received {refresh_rate})"
                )
            }
        }
    }
}

impl Error for RenderingError {}
