#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that runs Conway's Game of Life in the terminal.

mod session;
mod settings;

use anyhow::Result;
use clap::Parser;
use life_rendering::{FrameControl, Presentation, RenderingBackend, Scene};
use life_rendering_terminal::TerminalBackend;
use log::info;

use self::{
    session::Session,
    settings::{Args, Settings},
};

/// Entry point for the Life command-line interface.
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let settings = Settings::load(Args::parse())?;
    info!(
        "{} grid, density {}, {} generations x {} runs, seed {}",
        settings.opening.dimensions(),
        settings.density,
        settings.generations,
        settings.runs,
        settings.seed
    );

    let mut session = Session::new(&settings);

    if settings.quiet {
        let mut scene = Scene::default();
        while session.advance(&mut scene) == FrameControl::Continue {}
    } else {
        let mut presentation = Presentation::new("Conway's Game of Life", settings.palette);
        presentation.frame_interval = settings.frame_interval;
        presentation.clear_between_frames = settings.clear;

        TerminalBackend::stdout().run(presentation, |_, scene| session.advance(scene))?;
    }

    for summary in session.summaries() {
        println!("{summary}");
    }
    Ok(())
}
