//! Shatter factory: cuts a destroyed entity's sprite into debris slices.
//!
//! Slices are `SHATTER_SLICE_PX` thick. Slice `i` of `n` moves along the
//! slicing axis at `(n/2 - (i + 0.5)) * DEBRIS_SPEED`, so the outer slices fly
//! fastest and the spread is symmetric about the middle. Every slice starts
//! at the origin position.

use hecs::World;

use robotron_core::components::Sprite;
use robotron_core::constants::{DEBRIS_SPEED, SHATTER_SLICE_PX};
use robotron_core::enums::SliceAxis;
use robotron_core::types::{Rect, Vec2};

use crate::world_setup::spawn_debris;

/// One planned debris slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slice {
    pub sprite: Sprite,
    pub velocity: Vec2,
}

/// Cut `sprite` into slices along `axis` without touching the world.
///
/// Horizontal slicing yields `floor(height / 4)` strips; vertical slicing
/// yields `floor(width / 4)` columns.
pub fn slice_plan(sprite: &Sprite, axis: SliceAxis) -> Vec<Slice> {
    let src = sprite.source;
    let extent = match axis {
        SliceAxis::Horizontal => src.h,
        SliceAxis::Vertical => src.w,
    };
    let count = extent / SHATTER_SLICE_PX;
    let half = count as f32 / 2.0;

    (0..count)
        .map(|i| {
            let offset = (half - (i as f32 + 0.5)) * DEBRIS_SPEED;
            let (source, velocity) = match axis {
                SliceAxis::Horizontal => (
                    Rect::new(src.x, src.y + i * SHATTER_SLICE_PX, src.w, SHATTER_SLICE_PX),
                    Vec2::new(0.0, offset),
                ),
                SliceAxis::Vertical => (
                    Rect::new(src.x + i * SHATTER_SLICE_PX, src.y, SHATTER_SLICE_PX, src.h),
                    Vec2::new(offset, 0.0),
                ),
            };
            Slice {
                sprite: Sprite { source, ..*sprite },
                velocity,
            }
        })
        .collect()
}

/// Spawn debris for `sprite` shattering at `origin`. Slices that would
/// start off screen are skipped. Returns the number spawned.
pub fn shatter(
    world: &mut World,
    origin: Vec2,
    sprite: &Sprite,
    screen: &Rect,
    axis: SliceAxis,
) -> usize {
    let mut spawned = 0;
    for slice in slice_plan(sprite, axis) {
        let bounds = Rect::centered_at(slice.sprite.source.w, slice.sprite.source.h, origin);
        if !bounds.intersects(screen) {
            continue;
        }
        spawn_debris(world, origin, slice.velocity, slice.sprite);
        spawned += 1;
    }
    tracing::debug!(spawned, ?axis, x = origin.x, y = origin.y, "shatter");
    spawned
}
