//! Simulation constants and tuning parameters.

use crate::types::Rect;

/// Driver tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick at the driver tick rate.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// --- World bounds ---

/// Default screen width in pixels.
pub const SCREEN_WIDTH: i32 = 800;

/// Default screen height in pixels.
pub const SCREEN_HEIGHT: i32 = 800;

/// Default screen rectangle.
pub const SCREEN_RECT: Rect = Rect::new(0, 0, SCREEN_WIDTH, SCREEN_HEIGHT);

// --- Player ---

/// Player movement speed (px/s).
pub const PLAYER_SPEED: f32 = 250.0;

/// Player sprite edge length (px).
pub const PLAYER_SIZE: i32 = 32;

// --- Bullets ---

/// Bullet speed (px/s).
pub const BULLET_SPEED: f32 = 1000.0;

/// Bullet sprite length along the travel direction (px).
pub const BULLET_LENGTH: i32 = 32;

/// Bullet sprite thickness across the travel direction (px).
pub const BULLET_WIDTH: i32 = 8;

// --- Enemies ---

/// Basic enemy pursuit speed (px/s).
pub const BASIC_ENEMY_SPEED: f32 = 50.0;

/// Grunt pursuit speed (px/s).
pub const GRUNT_SPEED: f32 = 100.0;

/// Electrodes never move.
pub const ELECTRODE_SPEED: f32 = 0.0;

pub const BASIC_ENEMY_REWARD: u32 = 0;
pub const ELECTRODE_REWARD: u32 = 100;
pub const GRUNT_REWARD: u32 = 200;

/// Enemy sprite edge length (px).
pub const ENEMY_SIZE: i32 = 32;

// --- Family members ---

/// Wander speed (px/s).
pub const FAMILY_SPEED: f32 = 50.0;

/// Family member sprite edge length (px).
pub const FAMILY_SIZE: i32 = 32;

/// Base time a family member holds one heading (seconds).
pub const FAMILY_HEADING_SECS: f32 = 2.0;

/// Upper bound of the random jitter added to each heading period (seconds).
pub const FAMILY_HEADING_JITTER_SECS: f32 = 0.25;

// --- Debris ---

/// Debris speed scale (px/s per slice offset unit).
pub const DEBRIS_SPEED: f32 = 150.0;

/// Debris lifetime (seconds).
pub const DEBRIS_LIFETIME_SECS: f32 = 0.5;

/// Shatter slice thickness (px).
pub const SHATTER_SLICE_PX: i32 = 4;

// --- Spawning ---

/// Inner spawn ring radius as a fraction of half the smaller screen edge.
pub const SPAWN_MIN_FRACTION: f32 = 0.5;

/// Outer spawn ring radius as a fraction of half the smaller screen edge.
pub const SPAWN_MAX_FRACTION: f32 = 1.0;

/// Largest accepted spawn coordinate magnitude (px). Anything beyond this is
/// rejected as level data so box arithmetic stays inside `i32`.
pub const MAX_SPAWN_COORD: f32 = 1.0e6;
