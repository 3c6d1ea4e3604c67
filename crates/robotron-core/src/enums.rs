//! Enumeration types used throughout the simulation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LevelError;
use crate::types::Vec2;

/// Enemy behavioural variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyVariant {
    /// Slow pursuer, worth nothing.
    #[default]
    Basic,
    /// Immobile hazard.
    Electrode,
    /// Fast pursuer.
    Grunt,
}

/// Family member wander heading. Screen space, so `Down` is +y.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    #[default]
    Hold,
    Right,
    Left,
    Down,
    Up,
}

/// Axis along which the shatter factory cuts a sprite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SliceAxis {
    /// Horizontal strips, spreading vertically.
    #[default]
    Horizontal,
    /// Vertical columns, spreading horizontally.
    Vertical,
}

/// Entity liveness. `Destroyed` is terminal; the owning pass flushes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lifecycle {
    #[default]
    Alive,
    Destroyed,
}

/// Source image a sprite is cut from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteKind {
    Player,
    BasicEnemy,
    Electrode,
    Grunt,
    FamilyMember,
    Bullet,
}

/// Spawnable entity kind, as named in level data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpawnKind {
    Player,
    Enemy(EnemyVariant),
    FamilyMember,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Active,
    /// The player touched an enemy. Frames no longer advance until the next
    /// level load.
    PlayerDown,
}

impl EnemyVariant {
    pub fn sprite_kind(self) -> SpriteKind {
        match self {
            EnemyVariant::Basic => SpriteKind::BasicEnemy,
            EnemyVariant::Electrode => SpriteKind::Electrode,
            EnemyVariant::Grunt => SpriteKind::Grunt,
        }
    }
}

impl Heading {
    /// All five choices, drawn from uniformly on every heading change.
    pub const ALL: [Heading; 5] = [
        Heading::Hold,
        Heading::Right,
        Heading::Left,
        Heading::Down,
        Heading::Up,
    ];

    /// Unit step for this heading (zero for `Hold`).
    pub fn vector(self) -> Vec2 {
        match self {
            Heading::Hold => Vec2::ZERO,
            Heading::Right => Vec2::X,
            Heading::Left => Vec2::NEG_X,
            Heading::Down => Vec2::Y,
            Heading::Up => Vec2::NEG_Y,
        }
    }
}

impl SpawnKind {
    /// Name used for this kind in level files.
    pub fn name(self) -> &'static str {
        match self {
            SpawnKind::Player => "Player",
            SpawnKind::Enemy(EnemyVariant::Basic) => "Enemy",
            SpawnKind::Enemy(EnemyVariant::Electrode) => "Electrode",
            SpawnKind::Enemy(EnemyVariant::Grunt) => "Grunt",
            SpawnKind::FamilyMember => "FamilyMember",
        }
    }
}

impl FromStr for SpawnKind {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Player" => Ok(SpawnKind::Player),
            "Enemy" => Ok(SpawnKind::Enemy(EnemyVariant::Basic)),
            "Electrode" => Ok(SpawnKind::Enemy(EnemyVariant::Electrode)),
            "Grunt" => Ok(SpawnKind::Enemy(EnemyVariant::Grunt)),
            "FamilyMember" => Ok(SpawnKind::FamilyMember),
            other => Err(LevelError::UnknownKind(other.to_string())),
        }
    }
}

impl fmt::Display for SpawnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
