//! Family member wander system.

use hecs::World;
use rand::Rng;

use robotron_behavior::family;
use robotron_core::components::{Bounds, FamilyMember};
use robotron_core::enums::Lifecycle;
use robotron_core::geometry::place_and_clamp;
use robotron_core::types::{Position, Rect};

/// Wander every family member and keep it on screen.
pub fn run(world: &mut World, dt: f32, screen: &Rect, rng: &mut impl Rng) {
    for (entity, (member, pos, bounds, lifecycle)) in
        world.query_mut::<(&mut FamilyMember, &mut Position, &mut Bounds, &Lifecycle)>()
    {
        if *lifecycle == Lifecycle::Destroyed {
            continue;
        }
        let (next, redrawn) = family::wander(member, pos.0, dt, rng);
        if redrawn {
            tracing::trace!(id = entity.id(), heading = ?member.heading, "family heading");
        }
        pos.0 = next;
        place_and_clamp(&mut pos.0, &mut bounds.0, screen);
    }
}
