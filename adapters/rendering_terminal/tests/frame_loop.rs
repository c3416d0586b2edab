use life_core::{Generation, Grid, GridSnapshot};
use life_rendering::{FrameControl, GlyphPalette, Presentation, RenderingBackend};
use life_rendering_terminal::TerminalBackend;
use std::time::Duration;

fn presentation() -> Presentation {
    let mut presentation = Presentation::new(
        "Conway's Game of Life",
        GlyphPalette::new('O', '-').expect("valid palette"),
    );
    let grid = Grid::from_rows(["#..", "..."]).expect("valid pattern");
    presentation.scene.grid = Some(GridSnapshot::new(grid));
    presentation
}

#[test]
fn loop_runs_until_exit_and_draws_the_final_frame() {
    let mut out = Vec::new();
    let mut calls = 0;

    TerminalBackend::new(&mut out)
        .run(presentation(), |_, scene| {
            calls += 1;
            scene.generation = Generation::new(calls);
            if calls == 3 {
                FrameControl::Exit
            } else {
                FrameControl::Continue
            }
        })
        .expect("frame loop succeeds");

    let text = String::from_utf8(out).expect("utf8");
    assert_eq!(calls, 3);
    assert!(text.starts_with("Conway's Game of Life\n"));
    assert_eq!(text.matches("O--\n---\n").count(), 3);
    assert!(text.contains("Generation 3 | Population 0"));
    assert!(!text.contains("Generation 4"));
}

#[test]
fn frames_are_paced_by_the_interval() {
    let mut out = Vec::new();
    let mut presentation = presentation();
    presentation.frame_interval = Some(Duration::from_millis(20));
    presentation.show_grid = false;
    let mut deltas = Vec::new();

    TerminalBackend::new(&mut out)
        .run(presentation, |dt, _| {
            deltas.push(dt);
            if deltas.len() == 3 {
                FrameControl::Exit
            } else {
                FrameControl::Continue
            }
        })
        .expect("frame loop succeeds");

    assert!(
        deltas[1..]
            .iter()
            .all(|dt| *dt >= Duration::from_millis(20)),
        "frames after the first wait for the interval: {deltas:?}"
    );
}
