//! Debris slice motion and expiry.

use robotron_core::components::Debris;
use robotron_core::types::Vec2;

/// Advance one slice by `dt`: move it and burn lifetime.
/// Returns the new position.
pub fn advance(debris: &mut Debris, position: Vec2, dt: f32) -> Vec2 {
    debris.lifetime_secs -= dt;
    position + debris.velocity * dt
}

/// Lifetime exhausted.
pub fn is_expired(debris: &Debris) -> bool {
    debris.lifetime_secs <= 0.0
}
