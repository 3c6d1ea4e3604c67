//! Built-in level layouts.

use rand::Rng;

use robotron_core::constants::{SPAWN_MAX_FRACTION, SPAWN_MIN_FRACTION};
use robotron_core::enums::{EnemyVariant, SpawnKind};
use robotron_core::level::LevelLayout;
use robotron_core::types::Rect;

use crate::radial::generate_rand_coords;

pub const LEVEL_ONE_ELECTRODES: usize = 10;
pub const LEVEL_ONE_GRUNTS: usize = 10;
pub const LEVEL_ONE_FAMILY: usize = 5;

/// The opening wave: electrodes and grunts in a ring around a centered
/// player, with a family to protect.
pub fn level_one(rng: &mut impl Rng, screen: &Rect) -> LevelLayout {
    let mut ring = |count| {
        generate_rand_coords(&mut *rng, screen, count, SPAWN_MIN_FRACTION, SPAWN_MAX_FRACTION)
    };
    let electrodes = ring(LEVEL_ONE_ELECTRODES);
    let grunts = ring(LEVEL_ONE_GRUNTS);
    let family = ring(LEVEL_ONE_FAMILY);

    LevelLayout::new()
        .with(SpawnKind::Enemy(EnemyVariant::Electrode), electrodes)
        .with(SpawnKind::Enemy(EnemyVariant::Grunt), grunts)
        .with(SpawnKind::Player, [screen.center()])
        .with(SpawnKind::FamilyMember, family)
}
