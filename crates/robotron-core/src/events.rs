//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::EnemyVariant;
use crate::types::Vec2;

/// Named audio cues the simulation can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioCue {
    Shoot,
    Explosion,
}

impl AudioCue {
    pub fn name(self) -> &'static str {
        match self {
            AudioCue::Shoot => "shoot",
            AudioCue::Explosion => "explosion",
        }
    }
}

/// Gameplay events recorded during one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A bullet left the player.
    ShotFired { origin: Vec2, direction: Vec2 },
    /// A bullet destroyed an enemy.
    EnemyDestroyed {
        variant: EnemyVariant,
        position: Vec2,
        reward: u32,
    },
    /// An enemy reached the player.
    PlayerDown { position: Vec2 },
}
