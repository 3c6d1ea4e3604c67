//! Player movement.

use robotron_core::input::MovementInput;
use robotron_core::types::Vec2;

/// New player position after `dt` seconds of `movement`, or `None` when no
/// direction is held (zero input never moves the player).
pub fn step(position: Vec2, movement: &MovementInput, speed: f32, dt: f32) -> Option<Vec2> {
    let direction = movement.direction();
    if direction == Vec2::ZERO {
        return None;
    }
    Some(position + direction * speed * dt)
}
