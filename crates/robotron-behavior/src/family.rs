//! Family member wander state machine.
//!
//! States are the five headings. When the heading timer runs out a new
//! heading is drawn uniformly (holding still included) and the timer resets
//! to the base period plus a little jitter so groups drift out of sync.

use rand::Rng;

use robotron_core::components::FamilyMember;
use robotron_core::constants::{FAMILY_HEADING_JITTER_SECS, FAMILY_HEADING_SECS};
use robotron_core::enums::Heading;
use robotron_core::types::Vec2;

/// Seconds until the next heading change.
pub fn next_heading_period(rng: &mut impl Rng) -> f32 {
    FAMILY_HEADING_SECS + rng.gen_range(0.0..=FAMILY_HEADING_JITTER_SECS)
}

/// Uniform pick over all five headings.
pub fn random_heading(rng: &mut impl Rng) -> Heading {
    Heading::ALL[rng.gen_range(0..Heading::ALL.len())]
}

/// Run the timer, transition if it expired, and return the new position.
/// Returns whether the heading was redrawn alongside it.
pub fn wander(
    member: &mut FamilyMember,
    position: Vec2,
    dt: f32,
    rng: &mut impl Rng,
) -> (Vec2, bool) {
    member.heading_timer_secs -= dt;
    let redrawn = member.heading_timer_secs <= 0.0;
    if redrawn {
        member.heading = random_heading(rng);
        member.heading_timer_secs = next_heading_period(rng);
    }
    (
        position + member.heading.vector() * member.speed * dt,
        redrawn,
    )
}
