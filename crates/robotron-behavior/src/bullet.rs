//! Bullet flight and hit detection.

use robotron_core::components::Sprite;
use robotron_core::constants::{BULLET_LENGTH, BULLET_WIDTH};
use robotron_core::enums::SpriteKind;
use robotron_core::geometry::{rotated_extent, screen_angle_deg};
use robotron_core::types::{Rect, Vec2};

/// Sprite and collision box size for a bullet flying along `direction`.
///
/// The sprite is oriented once at creation; the box is the axis-aligned
/// extent of the rotated sprite.
pub fn footprint(direction: Vec2) -> (Sprite, i32, i32) {
    let angle_deg = screen_angle_deg(direction);
    let sprite = Sprite {
        kind: SpriteKind::Bullet,
        source: Rect::new(0, 0, BULLET_LENGTH, BULLET_WIDTH),
        angle_deg,
    };
    let (w, h) = rotated_extent(BULLET_LENGTH, BULLET_WIDTH, angle_deg);
    (sprite, w, h)
}

/// Position after `dt` seconds of straight flight.
pub fn advance(position: Vec2, direction: Vec2, speed: f32, dt: f32) -> Vec2 {
    position + direction * speed * dt
}

/// Bullets are never clamped; once the box stops touching the screen the
/// bullet is gone.
pub fn has_left_screen(bounds: &Rect, screen: &Rect) -> bool {
    !bounds.intersects(screen)
}

/// First target whose box overlaps `bounds`, skipping any already claimed
/// this frame. Ordering carries no gameplay meaning; only one target is
/// ever returned.
pub fn first_hit<T: Copy>(
    bounds: &Rect,
    targets: &[(T, Rect)],
    claimed: impl Fn(&T) -> bool,
) -> Option<T> {
    targets
        .iter()
        .find(|(id, rect)| !claimed(id) && bounds.intersects(rect))
        .map(|(id, _)| *id)
}
