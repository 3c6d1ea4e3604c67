//! Bullet flight and bullet-vs-enemy resolution.
//!
//! Each bullet advances, dies on leaving the screen, and otherwise destroys
//! at most one enemy it overlaps. An enemy claimed by one bullet cannot be
//! claimed by another in the same frame. Both sides are only marked here;
//! bullets are flushed at the end of this pass and enemies at the end of
//! theirs.

use hecs::{Entity, World};

use robotron_behavior::bullet;
use robotron_core::components::{Bounds, Bullet, Enemy, Sprite};
use robotron_core::enums::{EnemyVariant, Lifecycle};
use robotron_core::events::AudioCue;
use robotron_core::types::{Position, Rect, Vec2};

use crate::audio::ExplosionCue;
use crate::systems::cleanup;

/// An enemy destroyed by a bullet this frame.
#[derive(Debug, Clone, Copy)]
pub struct Kill {
    pub enemy: Entity,
    pub variant: EnemyVariant,
    pub position: Vec2,
    pub reward: u32,
    pub sprite: Sprite,
}

/// Run the bullet pass. Returns the enemies killed, in hit order.
pub fn run(
    world: &mut World,
    dt: f32,
    screen: &Rect,
    audio_events: &mut Vec<AudioCue>,
    despawn_buffer: &mut Vec<Entity>,
) -> Vec<Kill> {
    let targets: Vec<(Entity, Rect)> = world
        .query::<(&Enemy, &Bounds, &Lifecycle)>()
        .iter()
        .filter(|(_, (_, _, lifecycle))| **lifecycle == Lifecycle::Alive)
        .map(|(entity, (_, bounds, _))| (entity, bounds.0))
        .collect();

    let mut claimed: Vec<Entity> = Vec::new();

    for (_entity, (shot, pos, bounds, lifecycle, cue)) in world.query_mut::<(
        &Bullet,
        &mut Position,
        &mut Bounds,
        &mut Lifecycle,
        &ExplosionCue,
    )>() {
        if *lifecycle == Lifecycle::Destroyed {
            continue;
        }
        pos.0 = bullet::advance(pos.0, shot.direction, shot.speed, dt);
        bounds.0.set_center(pos.0);

        if bullet::has_left_screen(&bounds.0, screen) {
            *lifecycle = Lifecycle::Destroyed;
            continue;
        }

        if let Some(enemy) = bullet::first_hit(&bounds.0, &targets, |e| claimed.contains(e)) {
            claimed.push(enemy);
            *lifecycle = Lifecycle::Destroyed;
            cue.trigger();
            audio_events.push(AudioCue::Explosion);
        }
    }

    let mut kills = Vec::with_capacity(claimed.len());
    for enemy in claimed {
        if let Ok((stats, pos, sprite, lifecycle)) =
            world.query_one_mut::<(&Enemy, &Position, &Sprite, &mut Lifecycle)>(enemy)
        {
            *lifecycle = Lifecycle::Destroyed;
            kills.push(Kill {
                enemy,
                variant: stats.variant,
                position: pos.0,
                reward: stats.reward,
                sprite: *sprite,
            });
        }
    }

    cleanup::flush::<Bullet>(world, despawn_buffer);
    kills
}
