//! Variant-specific enemy parameters.

use robotron_core::enums::EnemyVariant;

/// Behavioural profile for an enemy variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyProfile {
    /// Pursuit speed (px/s).
    pub speed: f32,
    /// Score for a bullet kill.
    pub reward: u32,
    /// Sprite edge length (px).
    pub size: i32,
}

/// Get the profile for a given variant.
pub fn get_profile(variant: EnemyVariant) -> EnemyProfile {
    use robotron_core::constants::*;

    match variant {
        EnemyVariant::Basic => EnemyProfile {
            speed: BASIC_ENEMY_SPEED,
            reward: BASIC_ENEMY_REWARD,
            size: ENEMY_SIZE,
        },
        EnemyVariant::Electrode => EnemyProfile {
            speed: ELECTRODE_SPEED,
            reward: ELECTRODE_REWARD,
            size: ENEMY_SIZE,
        },
        EnemyVariant::Grunt => EnemyProfile {
            speed: GRUNT_SPEED,
            reward: GRUNT_REWARD,
            size: ENEMY_SIZE,
        },
    }
}
