#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Text rendering adapter that draws Life scenes onto any [`Write`] sink.
//!
//! Frames are written as rows of glyphs followed by a caption line. When the
//! presentation asks for it, ANSI escape sequences clear the terminal before
//! each frame so the grid animates in place.

use anyhow::{Context, Result};
use life_rendering::{
    render_grid, FrameControl, GlyphPalette, Presentation, RenderingBackend, Scene,
};
use log::debug;
use std::{
    io::{self, Write},
    thread,
    time::{Duration, Instant},
};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Rendering backend that writes frames as text.
#[derive(Debug)]
pub struct TerminalBackend<W> {
    out: W,
}

impl TerminalBackend<io::Stdout> {
    /// Returns a backend that draws onto standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalBackend<W> {
    /// Returns a backend that draws onto the provided sink.
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

/// Layout options that stay fixed for the lifetime of a frame loop.
#[derive(Clone, Copy, Debug)]
struct FrameStyle<'a> {
    title: &'a str,
    palette: GlyphPalette,
    show_grid: bool,
    clear: bool,
}

fn draw_frame<W: Write>(out: &mut W, style: FrameStyle<'_>, scene: &Scene) -> io::Result<()> {
    if style.clear {
        out.write_all(CLEAR_SCREEN.as_bytes())?;
        if !style.title.is_empty() {
            writeln!(out, "{}", style.title)?;
        }
    }
    if style.show_grid {
        if let Some(grid) = scene.grid.as_ref() {
            out.write_all(render_grid(grid, style.palette).as_bytes())?;
        }
    }
    writeln!(out, "{}", scene.caption())?;
    if style.show_grid && !style.clear {
        writeln!(out)?;
    }
    out.flush()
}

impl<W: Write> RenderingBackend for TerminalBackend<W> {
    fn run<F>(self, presentation: Presentation, mut update_scene: F) -> Result<()>
    where
        F: FnMut(Duration, &mut Scene) -> FrameControl,
    {
        let Self { mut out } = self;

        let Presentation {
            title,
            palette,
            frame_interval,
            show_grid,
            clear_between_frames,
            scene,
        } = presentation;

        let style = FrameStyle {
            title: &title,
            palette,
            show_grid,
            clear: clear_between_frames,
        };

        if !clear_between_frames && !title.is_empty() {
            writeln!(out, "{title}").context("failed to write presentation title")?;
        }

        let mut scene = scene;
        let mut frames: u64 = 0;
        let mut previous = Instant::now();

        loop {
            let frame_start = Instant::now();
            let frame_dt = frame_start.duration_since(previous);
            previous = frame_start;

            let control = update_scene(frame_dt, &mut scene);
            draw_frame(&mut out, style, &scene)
                .with_context(|| format!("failed to draw frame {frames}"))?;
            frames += 1;

            if control == FrameControl::Exit {
                break;
            }

            if let Some(interval) = frame_interval {
                let spent = frame_start.elapsed();
                if let Some(remaining) = interval.checked_sub(spent) {
                    thread::sleep(remaining);
                }
            }
        }

        debug!("terminal backend drew {frames} frames");
        Ok(())
    }
}
