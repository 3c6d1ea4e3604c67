//! Geometry and aiming helpers shared by behaviours and systems.

use crate::types::{Rect, Vec2};

/// A shot origin and its unit direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aim {
    pub origin: Vec2,
    pub direction: Vec2,
}

/// Clamp `bounds` inside `screen`. When the clamp actually moved the box,
/// `position` is overwritten with the box center; otherwise the float
/// position is left alone so sub-pixel motion is not lost at a wall.
///
/// Returns whether the box moved.
pub fn clamp_to_bounds(position: &mut Vec2, bounds: &mut Rect, screen: &Rect) -> bool {
    let clamped = bounds.clamped_within(screen);
    if clamped == *bounds {
        return false;
    }
    *bounds = clamped;
    *position = clamped.center();
    true
}

/// Re-center `bounds` on `position`, then clamp as in [`clamp_to_bounds`].
pub fn place_and_clamp(position: &mut Vec2, bounds: &mut Rect, screen: &Rect) -> bool {
    bounds.set_center(*position);
    clamp_to_bounds(position, bounds, screen)
}

/// Shot from `origin` toward `target`. `None` when the two coincide.
pub fn aim_from(origin: Vec2, target: Vec2) -> Option<Aim> {
    steer_toward(origin, target).map(|direction| Aim { origin, direction })
}

/// Unit vector from `from` toward `to`. `None` when the two coincide.
pub fn steer_toward(from: Vec2, to: Vec2) -> Option<Vec2> {
    (to - from).try_normalize()
}

/// Screen-space angle of `direction` in degrees, counter-clockwise with
/// y pointing down (so (0, -1) is 90°).
pub fn screen_angle_deg(direction: Vec2) -> f32 {
    (-direction.y).atan2(direction.x).to_degrees()
}

/// Axis-aligned extent of a `w` x `h` box rotated by `angle_deg`, rounded up
/// to whole pixels.
pub fn rotated_extent(w: i32, h: i32, angle_deg: f32) -> (i32, i32) {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    let (sin, cos) = (sin.abs(), cos.abs());
    let (w, h) = (w as f32, h as f32);
    let rw = w * cos + h * sin;
    let rh = w * sin + h * cos;
    // Shave float noise so axis-aligned angles keep their exact size.
    ((rw - 1e-3).ceil() as i32, (rh - 1e-3).ceil() as i32)
}
