//! Game state snapshot: the read-only view handed to the renderer each frame.

use serde::{Deserialize, Serialize};

use crate::components::Sprite;
use crate::enums::GamePhase;
use crate::events::{AudioCue, GameEvent};
use crate::types::{Rect, SimTime, Vec2};

/// Complete visible state after a frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub score: u32,
    pub screen: Rect,
    pub player: Option<EntityView>,
    pub enemies: Vec<EntityView>,
    pub family: Vec<EntityView>,
    pub bullets: Vec<EntityView>,
    pub debris: Vec<EntityView>,
    /// Cues triggered during the last frame, including shots fired just
    /// before it.
    pub audio_events: Vec<AudioCue>,
    pub events: Vec<GameEvent>,
}

/// One drawable entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntityView {
    pub position: Vec2,
    pub bounds: Rect,
    pub sprite: Sprite,
}

impl GameStateSnapshot {
    /// All entities back to front: debris, enemies, family, player, bullets.
    pub fn draw_order(&self) -> impl Iterator<Item = &EntityView> {
        self.debris
            .iter()
            .chain(&self.enemies)
            .chain(&self.family)
            .chain(self.player.iter())
            .chain(&self.bullets)
    }

    /// Whether the last frame ended with the player touching an enemy.
    pub fn player_down(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, GameEvent::PlayerDown { .. }))
    }
}
