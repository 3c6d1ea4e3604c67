//! Game loop thread: runs the director at 60Hz and publishes snapshots.
//!
//! The director is created inside this thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel; snapshots are stored in
//! shared state for polling.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use robotron_core::constants::{DT, TICK_RATE};
use robotron_core::level::LevelLayout;
use robotron_core::state::GameStateSnapshot;
use robotron_sim::audio::AudioTable;
use robotron_sim::engine::{Director, SimConfig};

use crate::input::InputSource;
use crate::state::{GameLoopCommand, LoopHandle, LoopReport};

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// How the loop runs.
#[derive(Debug, Clone, Default)]
pub struct LoopConfig {
    pub sim: SimConfig,
    /// Loaded (clearing) before the first frame.
    pub level: Option<LevelLayout>,
    /// Stop after this many frames. `None` runs until shutdown.
    pub max_frames: Option<u64>,
    /// Sleep between frames to hold the tick rate. Off runs flat out.
    pub paced: bool,
}

/// Spawns the game loop in a new thread.
pub fn spawn_game_loop(
    config: LoopConfig,
    audio: AudioTable,
    input: Box<dyn InputSource>,
) -> io::Result<LoopHandle> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let latest_snapshot = Arc::new(Mutex::new(None));
    let shared = Arc::clone(&latest_snapshot);

    let thread = std::thread::Builder::new()
        .name("robotron-game-loop".into())
        .spawn(move || run_game_loop(config, audio, input, cmd_rx, &shared))?;

    Ok(LoopHandle {
        command_tx: cmd_tx,
        latest_snapshot,
        thread,
    })
}

/// The game loop. Runs until Shutdown, channel disconnect or the frame limit.
fn run_game_loop(
    config: LoopConfig,
    audio: AudioTable,
    mut input: Box<dyn InputSource>,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) -> LoopReport {
    let mut director = Director::new(config.sim.clone(), audio);
    if let Some(layout) = &config.level {
        if let Err(err) = director.load_level(layout, true) {
            tracing::error!(%err, "initial level rejected");
        }
    }

    let mut frames = 0u64;
    let mut last: Option<GameStateSnapshot> = None;
    let mut next_tick_time = Instant::now();

    let report = |director: &Director, frames| LoopReport {
        frames,
        score: director.score(),
        phase: director.phase(),
    };

    loop {
        if config.max_frames.is_some_and(|max| frames >= max) {
            return report(&director, frames);
        }

        // 1. Poll input, then let queued commands override it
        let mut frame_input = input.poll(last.as_ref());
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Input(queued)) => frame_input = queued,
                Ok(GameLoopCommand::Shoot(target)) => {
                    director.shoot_at(target);
                }
                Ok(GameLoopCommand::LoadLevel { layout, clear }) => {
                    if let Err(err) = director.load_level(&layout, clear) {
                        tracing::warn!(%err, "level rejected");
                    }
                }
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    return report(&director, frames);
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance one frame
        director.update(DT, &frame_input);
        frames += 1;

        // 3. Store latest snapshot for polling
        let snapshot = director.snapshot();
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot.clone());
        }
        last = Some(snapshot);

        if !config.paced {
            continue;
        }

        // 4. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind: reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}
