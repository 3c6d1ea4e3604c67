//! Snapshot system: queries the world and builds a `GameStateSnapshot`.
//!
//! Read-only. Entities within each collection are ordered by entity id so
//! two worlds built by the same operations serialize identically.

use hecs::{Component, World};

use robotron_core::components::*;
use robotron_core::enums::GamePhase;
use robotron_core::events::{AudioCue, GameEvent};
use robotron_core::state::{EntityView, GameStateSnapshot};
use robotron_core::types::{Position, Rect, SimTime};

/// Everything the snapshot needs beyond the world itself.
pub struct FrameReport<'a> {
    pub time: SimTime,
    pub phase: GamePhase,
    pub score: u32,
    pub screen: Rect,
    pub audio_events: &'a [AudioCue],
    pub events: &'a [GameEvent],
}

/// Build a complete snapshot from the current world state.
pub fn build_snapshot(world: &World, report: &FrameReport<'_>) -> GameStateSnapshot {
    GameStateSnapshot {
        time: report.time,
        phase: report.phase,
        score: report.score,
        screen: report.screen,
        player: views::<Player>(world).into_iter().next(),
        enemies: views::<Enemy>(world),
        family: views::<FamilyMember>(world),
        bullets: views::<Bullet>(world),
        debris: views::<Debris>(world),
        audio_events: report.audio_events.to_vec(),
        events: report.events.to_vec(),
    }
}

/// Drawable views of every entity carrying marker `T`.
fn views<T: Component>(world: &World) -> Vec<EntityView> {
    let mut found: Vec<(u32, EntityView)> = world
        .query::<(&T, &Position, &Bounds, &Sprite)>()
        .iter()
        .map(|(entity, (_, pos, bounds, sprite))| {
            (
                entity.id(),
                EntityView {
                    position: pos.0,
                    bounds: bounds.0,
                    sprite: *sprite,
                },
            )
        })
        .collect();
    found.sort_by_key(|(id, _)| *id);
    found.into_iter().map(|(_, view)| view).collect()
}
