//! Meteor Strike headless demo
//!
//! Runs a session for a fixed number of frames with a scripted pointer sweep
//! and prints the final render snapshot as JSON.

#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

#[cfg(not(target_arch = "wasm32"))]
use clap::Parser;

#[cfg(not(target_arch = "wasm32"))]
use meteor_strike::{Preset, Session, Tuning, sim::Surface};

/// Frame spacing of a 60 Hz display (ms)
#[cfg(not(target_arch = "wasm32"))]
const FRAME_MS: f64 = 1000.0 / 60.0;

#[cfg(not(target_arch = "wasm32"))]
#[derive(Parser, Debug)]
#[command(name = "meteor-strike")]
#[command(about = "Run the shooter simulation headless and dump the final frame")]
struct Cli {
    /// Tuning JSON; missing or invalid files fall back to defaults
    tuning: Option<PathBuf>,
    /// Frames to simulate
    #[arg(long, default_value_t = 3600)]
    frames: u32,
    /// Difficulty preset applied on top of the tuning
    #[arg(long)]
    preset: Option<String>,
    #[arg(long, default_value_t = 1)]
    seed: u64,
    #[arg(long, default_value_t = 480.0)]
    width: f32,
    #[arg(long, default_value_t = 800.0)]
    height: f32,
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut tuning = match &cli.tuning {
        Some(path) => Tuning::load(path),
        None => Tuning::default(),
    };
    if let Some(name) = &cli.preset {
        let preset = Preset::from_str(name)
            .ok_or_else(|| anyhow::anyhow!("unknown preset '{name}'"))?;
        tuning.apply_preset(preset);
        log::info!("Preset: {}", preset.as_str());
    }

    let surface = Surface::new(cli.width, cli.height);
    let mut session = Session::new(tuning, surface, cli.seed);
    let input = session.input();

    for frame in 0..cli.frames {
        // Thumb sweeps side to side near the bottom of the screen
        let phase = frame as f32 * 0.02;
        let x = surface.width * (0.5 + 0.4 * phase.sin());
        let y = surface.height * 0.9;
        input.set_target_position(x, y, surface.width, surface.height);

        if !session.frame(f64::from(frame) * FRAME_MS) {
            break;
        }
    }

    if let Some(stats) = session.with_simulation(|sim| sim.state().stats.clone()) {
        log::info!(
            "{} frames, {} shots, {} hazards spawned, {} escaped, {} pickups, {}/{} bosses defeated",
            stats.frames,
            stats.shots_fired,
            stats.hazards_spawned,
            stats.hazards_escaped,
            stats.pickups_collected,
            stats.bosses_defeated,
            stats.bosses_spawned
        );
    }

    let snapshot = session
        .snapshot()
        .ok_or_else(|| anyhow::anyhow!("session ended before the snapshot"))?;
    session.teardown();

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser host drives `Session` directly
}
