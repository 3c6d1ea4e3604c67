//! Cleanup: flushes entities marked `Destroyed` from one collection.

use hecs::{Component, Entity, World};

use robotron_core::enums::Lifecycle;

/// Despawn every `Destroyed` entity carrying marker `T`.
/// Uses a pre-allocated buffer to avoid per-frame allocation. Returns the
/// number removed.
pub fn flush<T: Component>(world: &mut World, despawn_buffer: &mut Vec<Entity>) -> usize {
    despawn_buffer.clear();

    for (entity, (lifecycle, _marker)) in world.query_mut::<(&Lifecycle, &T)>() {
        if *lifecycle == Lifecycle::Destroyed {
            despawn_buffer.push(entity);
        }
    }

    let removed = despawn_buffer.len();
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    removed
}
