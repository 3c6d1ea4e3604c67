//! End-of-frame player-vs-enemy contact check.

use hecs::World;

use robotron_core::components::{Bounds, Enemy, Player};
use robotron_core::enums::Lifecycle;
use robotron_core::types::{Position, Vec2};

/// Position of the player if its box overlaps any live enemy.
pub fn player_contact(world: &World) -> Option<Vec2> {
    let mut players = world.query::<(&Player, &Position, &Bounds, &Lifecycle)>();
    let (_, (_, pos, player_box, _)) = players
        .iter()
        .find(|(_, (_, _, _, lifecycle))| **lifecycle == Lifecycle::Alive)?;

    let mut enemies = world.query::<(&Enemy, &Bounds, &Lifecycle)>();
    let touching = enemies.iter().any(|(_, (_, enemy_box, lifecycle))| {
        *lifecycle == Lifecycle::Alive && player_box.0.intersects(&enemy_box.0)
    });

    touching.then_some(pos.0)
}
