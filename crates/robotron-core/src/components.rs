//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in the behaviour crate and the sim systems.
//!
//! Every entity carries `Position`, `Bounds`, `Sprite` and `Lifecycle` plus
//! exactly one of the kind components below, which doubles as the marker of
//! the collection that owns it.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{Rect, Vec2};

/// Collision and containment box, derived from `Position` each frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds(pub Rect);

/// Visual footprint: a region of a source image, optionally rotated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    pub kind: SpriteKind,
    /// Sub-region of the source image this sprite shows.
    pub source: Rect,
    /// Rotation applied when rendering (degrees, counter-clockwise on screen).
    pub angle_deg: f32,
}

/// The player-controlled shooter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player {
    /// Movement speed (px/s).
    pub speed: f32,
}

/// A hostile robot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    pub variant: EnemyVariant,
    /// Pursuit speed (px/s). Zero for immobile variants.
    pub speed: f32,
    /// Score awarded when a bullet destroys this enemy.
    pub reward: u32,
}

/// A player bullet travelling in a straight line.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bullet {
    /// Unit travel direction.
    pub direction: Vec2,
    /// Speed (px/s).
    pub speed: f32,
}

/// A wandering human.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FamilyMember {
    pub heading: Heading,
    /// Seconds until a new heading is drawn.
    pub heading_timer_secs: f32,
    /// Wander speed (px/s).
    pub speed: f32,
}

/// One slice of a shattered sprite.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Debris {
    /// Velocity (px/s).
    pub velocity: Vec2,
    /// Remaining lifetime (seconds).
    pub lifetime_secs: f32,
}
