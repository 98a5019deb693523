//! Duck Run headless driver
//!
//! Runs the simulation with a scripted input track at the host frame rate
//! and prints the final snapshot as JSON. Useful for replaying levels and
//! checking determinism without a renderer.

#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

#[cfg(not(target_arch = "wasm32"))]
use clap::Parser;

/// Host frame interval (80 FPS)
#[cfg(not(target_arch = "wasm32"))]
const FRAME_SECS: f64 = 1.0 / 80.0;

/// Headless duck platformer run
#[cfg(not(target_arch = "wasm32"))]
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Level to play (1-5)
    #[arg(short, long, default_value_t = 1)]
    level: u8,

    /// Number of ticks to simulate
    #[arg(short, long, default_value_t = 2400)]
    ticks: u32,

    /// JSON tuning file overriding the built-in constants
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Hold right the whole run and hop every second, throwing an egg on
/// each hop
#[cfg(not(target_arch = "wasm32"))]
fn scripted_input(tick: u32) -> duck_run::sim::TickInput {
    let phase = tick % 80;
    duck_run::sim::TickInput {
        right: true,
        jump: phase < 12,
        shoot: phase == 0,
        ..Default::default()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use duck_run::Tuning;
    use duck_run::sim::{GameMode, GameState, tick};

    let args = Args::parse();
    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let tuning = match &args.tuning {
        Some(path) => Tuning::load(path)
            .with_context(|| format!("loading tuning from {}", path.display()))?,
        None => Tuning::default(),
    };

    let mut state = GameState::new(tuning);
    state
        .init_game(args.level)
        .with_context(|| format!("starting level {}", args.level))?;
    log::info!("Duck Run (headless) level {} for {} ticks", args.level, args.ticks);

    for i in 0..args.ticks {
        let now = f64::from(i) * FRAME_SECS;
        tick(&mut state, &scripted_input(i), now);
        for event in state.drain_events() {
            log::debug!("tick {}: {}", state.time_ticks, event.name());
        }
        if matches!(state.mode, GameMode::Lost | GameMode::LevelSelect) {
            log::info!("Run ended after {} ticks in {:?}", state.time_ticks, state.mode);
            break;
        }
    }

    let snapshot = serde_json::to_string_pretty(&state.snapshot())?;
    println!("{snapshot}");
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry is handled by the embedding host
}
