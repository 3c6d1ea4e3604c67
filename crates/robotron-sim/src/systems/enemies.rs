//! Enemy pursuit system. Every live enemy chases the same target.

use hecs::{Entity, World};

use robotron_behavior::enemy;
use robotron_core::components::{Bounds, Enemy};
use robotron_core::enums::Lifecycle;
use robotron_core::geometry::place_and_clamp;
use robotron_core::types::{Position, Rect, Vec2};

use crate::systems::cleanup;

/// Steer enemies toward `target` (they hold still when there is none), keep
/// them on screen, then flush enemies destroyed earlier in the frame.
pub fn run(
    world: &mut World,
    target: Option<Vec2>,
    dt: f32,
    screen: &Rect,
    despawn_buffer: &mut Vec<Entity>,
) {
    for (_entity, (stats, pos, bounds, lifecycle)) in
        world.query_mut::<(&Enemy, &mut Position, &mut Bounds, &Lifecycle)>()
    {
        if *lifecycle == Lifecycle::Destroyed {
            continue;
        }
        if let Some(target) = target {
            pos.0 = enemy::pursue(pos.0, target, stats.speed, dt);
        }
        place_and_clamp(&mut pos.0, &mut bounds.0, screen);
    }

    cleanup::flush::<Enemy>(world, despawn_buffer);
}
