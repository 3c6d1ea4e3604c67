//! Player movement system.

use hecs::World;

use robotron_behavior::player;
use robotron_core::components::{Bounds, Player};
use robotron_core::enums::Lifecycle;
use robotron_core::geometry::place_and_clamp;
use robotron_core::input::MovementInput;
use robotron_core::types::{Position, Rect, Vec2};

/// Move the player by `movement` and keep its box on screen.
///
/// Without a held direction the position is left exactly where it is and
/// only the box is clamped.
pub fn run(world: &mut World, movement: &MovementInput, dt: f32, screen: &Rect) {
    for (_entity, (player, pos, bounds, lifecycle)) in
        world.query_mut::<(&Player, &mut Position, &mut Bounds, &Lifecycle)>()
    {
        if *lifecycle == Lifecycle::Destroyed {
            continue;
        }
        match player::step(pos.0, movement, player.speed, dt) {
            Some(next) => {
                pos.0 = next;
                place_and_clamp(&mut pos.0, &mut bounds.0, screen);
            }
            None => bounds.0 = bounds.0.clamped_within(screen),
        }
    }
}

/// Current player position, if a live player exists.
pub fn position(world: &World) -> Option<Vec2> {
    world
        .query::<(&Player, &Position, &Lifecycle)>()
        .iter()
        .find(|(_, (_, _, lifecycle))| **lifecycle == Lifecycle::Alive)
        .map(|(_, (_, pos, _))| pos.0)
}
