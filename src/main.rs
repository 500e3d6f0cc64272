use anyhow::Result;
use clap::Parser;

use cyclist::app::App;
use cyclist::cli::Cli;
use cyclist::render::RecordingRenderer;
use cyclist::scene::Scene;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.frames > 0 {
        run_headless(cli.frames);
        return Ok(());
    }

    App::run()
}

/// Drive the scene for a fixed number of frames against the recording
/// renderer. Useful for profiling the frame logic without a GPU.
fn run_headless(frames: u32) {
    let mut scene = Scene::new();
    let mut recorder = RecordingRenderer::new();

    for frame in 0..frames {
        scene.tick();
        scene.update();
        recorder.clear();
        scene.render(&mut recorder);
        log::debug!("frame {}: {} draw calls", frame, recorder.calls.len());
    }

    log::info!(
        "headless run complete: {} frames, {} draw calls per frame",
        frames,
        recorder.calls.len()
    );
}
