//! State shared between the driver and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use robotron_core::enums::GamePhase;
use robotron_core::input::FrameInput;
use robotron_core::level::LevelLayout;
use robotron_core::state::GameStateSnapshot;
use robotron_core::types::Vec2;

/// Commands sent from the driver to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// Use this input for the next frame instead of polling.
    Input(FrameInput),
    /// Fire at a screen point before the next frame.
    Shoot(Vec2),
    /// Load a level between frames.
    LoadLevel { layout: LevelLayout, clear: bool },
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot, updated by the game loop thread after each frame.
pub type SharedSnapshot = Arc<Mutex<Option<GameStateSnapshot>>>;

/// How a finished loop ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopReport {
    pub frames: u64,
    pub score: u32,
    pub phase: GamePhase,
}

/// Handle to a running game loop thread.
pub struct LoopHandle {
    pub command_tx: mpsc::Sender<GameLoopCommand>,
    pub latest_snapshot: SharedSnapshot,
    pub(crate) thread: JoinHandle<LoopReport>,
}

impl LoopHandle {
    /// Queue a command. Returns false once the loop has exited.
    pub fn send(&self, command: GameLoopCommand) -> bool {
        self.command_tx.send(command).is_ok()
    }

    /// Clone of the most recent snapshot, if a frame has run.
    pub fn latest(&self) -> Option<GameStateSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|lock| lock.clone())
    }

    /// Wait for the loop to finish.
    pub fn join(self) -> thread::Result<LoopReport> {
        self.thread.join()
    }

    /// Ask the loop to stop, then wait for it.
    pub fn shutdown(self) -> thread::Result<LoopReport> {
        let _ = self.command_tx.send(GameLoopCommand::Shutdown);
        self.join()
    }
}
