//! Debris system: drifts shatter slices and expires them.

use hecs::{Entity, World};

use robotron_behavior::debris;
use robotron_core::components::{Bounds, Debris};
use robotron_core::enums::Lifecycle;
use robotron_core::types::{Position, Rect};

use crate::systems::cleanup;

/// Advance every slice. A slice dies once its lifetime runs out or its box
/// no longer touches the screen. Dead slices are flushed at the end.
pub fn run(world: &mut World, dt: f32, screen: &Rect, despawn_buffer: &mut Vec<Entity>) {
    for (_entity, (slice, pos, bounds, lifecycle)) in
        world.query_mut::<(&mut Debris, &mut Position, &mut Bounds, &mut Lifecycle)>()
    {
        if *lifecycle == Lifecycle::Destroyed {
            continue;
        }
        pos.0 = debris::advance(slice, pos.0, dt);
        bounds.0.set_center(pos.0);
        if debris::is_expired(slice) || !bounds.0.intersects(screen) {
            *lifecycle = Lifecycle::Destroyed;
        }
    }

    cleanup::flush::<Debris>(world, despawn_buffer);
}
