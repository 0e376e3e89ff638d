//! Block Breaker entry point
//!
//! No windowing backend is linked: the binary runs a headless autopilot
//! session at the configured frame rate and reports how it went.

use std::process;

use anyhow::{Context, Result};

use block_breaker::{App, Settings};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{e:#}");
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    log::info!("Block Breaker (headless) starting...");

    let settings = Settings::load().context("Failed to load settings")?;
    log::info!(
        "Running {} frames at {} fps",
        settings.demo_frames,
        settings.target_fps
    );

    let mut app = App::new(settings);
    let summary = app.run_headless();

    log::info!(
        "Stopped on {} after {} frames: score {}, lives {}, {} bricks left",
        summary.screen.as_str(),
        summary.frames,
        summary.score,
        summary.lives,
        summary.bricks_left
    );
    if let Some(top) = app.high_scores.top_score() {
        log::info!("Best score this session: {top}");
    }

    Ok(())
}
