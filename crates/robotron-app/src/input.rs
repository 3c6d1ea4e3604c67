//! Input sources polled once per frame by the game loop.

use robotron_core::enums::Heading;
use robotron_core::input::{AimInput, FrameInput, MovementInput};
use robotron_core::state::GameStateSnapshot;

/// Anything that can produce a frame's movement and aim. Gets the previous
/// frame's snapshot (if any) so it can react to the arena.
pub trait InputSource: Send {
    fn poll(&mut self, last: Option<&GameStateSnapshot>) -> FrameInput;
}

/// No input at all.
#[derive(Debug, Default, Clone, Copy)]
pub struct Idle;

impl InputSource for Idle {
    fn poll(&mut self, _last: Option<&GameStateSnapshot>) -> FrameInput {
        FrameInput::idle()
    }
}

/// Deterministic stand-in for a player: strafes through the four headings
/// and fires at the nearest enemy on a fixed cadence.
#[derive(Debug, Clone)]
pub struct Autopilot {
    frame: u64,
    /// Frames spent on each heading.
    pub strafe_frames: u64,
    /// Frames between shots.
    pub fire_every: u64,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            frame: 0,
            strafe_frames: 45,
            fire_every: 12,
        }
    }
}

impl Autopilot {
    fn heading(&self) -> Heading {
        const CYCLE: [Heading; 4] = [Heading::Right, Heading::Down, Heading::Left, Heading::Up];
        let step = self.frame / self.strafe_frames.max(1);
        CYCLE[(step % CYCLE.len() as u64) as usize]
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, last: Option<&GameStateSnapshot>) -> FrameInput {
        let movement = MovementInput::Analog {
            vector: self.heading().vector(),
        };

        let aim = last
            .filter(|_| self.frame % self.fire_every.max(1) == 0)
            .and_then(|snap| {
                let player = snap.player?.position;
                snap.enemies
                    .iter()
                    .map(|e| e.position)
                    .min_by(|a, b| a.distance_squared(player).total_cmp(&b.distance_squared(player)))
            })
            .map(|target| AimInput::At { target });

        self.frame += 1;
        FrameInput { movement, aim }
    }
}
