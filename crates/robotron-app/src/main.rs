use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context};
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

use robotron_app::audio::logging_table;
use robotron_app::game_loop::{spawn_game_loop, LoopConfig};
use robotron_app::input::Autopilot;
use robotron_core::level::LevelLayout;
use robotron_procgen::level_one;
use robotron_sim::engine::SimConfig;

/// Run the arena simulation headless with an autopilot at the controls.
#[derive(Debug, Parser)]
#[command(name = "robotron", version)]
struct Cli {
    /// Level layout JSON. Defaults to a generated level one.
    #[arg(long)]
    level: Option<PathBuf>,
    /// Frames to simulate before exiting.
    #[arg(long, default_value_t = 600)]
    frames: u64,
    /// Seed for the simulation and level generation.
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Run flat out instead of at the tick rate.
    #[arg(long)]
    unpaced: bool,
    /// Print the final snapshot as JSON.
    #[arg(long)]
    dump: bool,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let sim = SimConfig {
        seed: cli.seed,
        ..Default::default()
    };
    let layout = match &cli.level {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading level {}", path.display()))?;
            LevelLayout::from_json(&text)
                .with_context(|| format!("parsing level {}", path.display()))?
        }
        None => level_one(&mut ChaCha8Rng::seed_from_u64(cli.seed), &sim.screen),
    };
    layout.validate().context("invalid level")?;

    let handle = spawn_game_loop(
        LoopConfig {
            sim,
            level: Some(layout),
            max_frames: Some(cli.frames),
            paced: !cli.unpaced,
        },
        logging_table(),
        Box::new(Autopilot::default()),
    )
    .context("starting game loop")?;

    let latest = handle.latest_snapshot.clone();
    let report = handle
        .join()
        .map_err(|_| anyhow!("game loop thread panicked"))?;
    tracing::info!(
        frames = report.frames,
        score = report.score,
        phase = ?report.phase,
        "run finished"
    );

    if cli.dump {
        let snapshot = latest
            .lock()
            .map_err(|_| anyhow!("snapshot lock poisoned"))?
            .clone();
        if let Some(snapshot) = snapshot {
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(true)
        .compact()
        .init();
}
