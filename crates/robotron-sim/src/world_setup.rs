//! Entity spawn factories for populating the simulation world.
//!
//! Each factory spawns one entity with the component bundle of its
//! collection: the kind component, `Position`, `Bounds`, `Sprite` and
//! `Lifecycle`.

use hecs::{Entity, World};

use robotron_core::components::*;
use robotron_core::constants::*;
use robotron_core::enums::*;
use robotron_core::geometry::Aim;
use robotron_core::types::{Position, Rect, Vec2};

use robotron_behavior::bullet;
use robotron_behavior::profiles::get_profile;

use crate::audio::ExplosionCue;

/// Spawn any level-data kind at `position`.
pub fn spawn(world: &mut World, kind: SpawnKind, position: Vec2) -> Entity {
    match kind {
        SpawnKind::Player => spawn_player(world, position),
        SpawnKind::Enemy(variant) => spawn_enemy(world, variant, position),
        SpawnKind::FamilyMember => spawn_family_member(world, position),
    }
}

/// Spawn the player.
pub fn spawn_player(world: &mut World, position: Vec2) -> Entity {
    world.spawn((
        Player {
            speed: PLAYER_SPEED,
        },
        Position(position),
        Bounds(Rect::centered_at(PLAYER_SIZE, PLAYER_SIZE, position)),
        full_sprite(SpriteKind::Player, PLAYER_SIZE),
        Lifecycle::Alive,
    ))
}

/// Spawn an enemy of the given variant.
pub fn spawn_enemy(world: &mut World, variant: EnemyVariant, position: Vec2) -> Entity {
    let profile = get_profile(variant);
    world.spawn((
        Enemy {
            variant,
            speed: profile.speed,
            reward: profile.reward,
        },
        Position(position),
        Bounds(Rect::centered_at(profile.size, profile.size, position)),
        full_sprite(variant.sprite_kind(), profile.size),
        Lifecycle::Alive,
    ))
}

/// Spawn a family member. Its heading timer starts expired so the first
/// frame draws a heading.
pub fn spawn_family_member(world: &mut World, position: Vec2) -> Entity {
    world.spawn((
        FamilyMember {
            heading: Heading::Hold,
            heading_timer_secs: 0.0,
            speed: FAMILY_SPEED,
        },
        Position(position),
        Bounds(Rect::centered_at(FAMILY_SIZE, FAMILY_SIZE, position)),
        full_sprite(SpriteKind::FamilyMember, FAMILY_SIZE),
        Lifecycle::Alive,
    ))
}

/// Spawn a bullet along `aim`, carrying a shared explosion cue.
pub fn spawn_bullet(world: &mut World, aim: Aim, explosion: ExplosionCue) -> Entity {
    let (sprite, w, h) = bullet::footprint(aim.direction);
    world.spawn((
        Bullet {
            direction: aim.direction,
            speed: BULLET_SPEED,
        },
        Position(aim.origin),
        Bounds(Rect::centered_at(w, h, aim.origin)),
        sprite,
        Lifecycle::Alive,
        explosion,
    ))
}

/// Spawn one debris slice.
pub fn spawn_debris(world: &mut World, position: Vec2, velocity: Vec2, sprite: Sprite) -> Entity {
    world.spawn((
        Debris {
            velocity,
            lifetime_secs: DEBRIS_LIFETIME_SECS,
        },
        Position(position),
        Bounds(Rect::centered_at(sprite.source.w, sprite.source.h, position)),
        sprite,
        Lifecycle::Alive,
    ))
}

fn full_sprite(kind: SpriteKind, size: i32) -> Sprite {
    Sprite {
        kind,
        source: Rect::new(0, 0, size, size),
        angle_deg: 0.0,
    }
}
