//! Enemy pursuit.
//!
//! Every mobile variant heads straight for the shared target each frame.
//! Electrodes have zero speed and never move.

use robotron_core::geometry::steer_toward;
use robotron_core::types::Vec2;

/// Position after chasing `target` for `dt` seconds.
///
/// Returns `position` unchanged when the enemy is immobile or already sits
/// exactly on the target (no defined heading that frame).
pub fn pursue(position: Vec2, target: Vec2, speed: f32, dt: f32) -> Vec2 {
    if speed == 0.0 {
        return position;
    }
    match steer_toward(position, target) {
        Some(direction) => position + direction * speed * dt,
        None => position,
    }
}
