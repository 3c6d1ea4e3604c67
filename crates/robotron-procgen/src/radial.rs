//! Annulus sampling around a spawn area.
//!
//! Points are drawn with a uniform angle and a uniform radius between the
//! two bounds, so they cluster toward the inner edge relative to an
//! area-uniform draw. That bias is what keeps spawns in a loose ring.

use std::f32::consts::TAU;

use rand::Rng;

use robotron_core::types::{Rect, Vec2};

/// One point between `min_radius` and `max_radius` from `center`.
/// Swapped bounds are accepted.
pub fn random_point_on_annulus(
    rng: &mut impl Rng,
    center: Vec2,
    min_radius: f32,
    max_radius: f32,
) -> Vec2 {
    let (lo, hi) = if min_radius <= max_radius {
        (min_radius, max_radius)
    } else {
        (max_radius, min_radius)
    };
    let angle = rng.gen_range(0.0..TAU);
    let radius = if hi > lo { rng.gen_range(lo..=hi) } else { lo };
    center + Vec2::from_angle(angle) * radius
}

/// `count` points on the same annulus.
pub fn random_points_on_annulus(
    rng: &mut impl Rng,
    center: Vec2,
    min_radius: f32,
    max_radius: f32,
    count: usize,
) -> Vec<Vec2> {
    (0..count)
        .map(|_| random_point_on_annulus(rng, center, min_radius, max_radius))
        .collect()
}

/// `count` points around the center of `area`. Radii are fractions of half
/// the area's shorter side, so a `max_fraction` of 1.0 reaches the nearest
/// edge.
pub fn generate_rand_coords(
    rng: &mut impl Rng,
    area: &Rect,
    count: usize,
    min_fraction: f32,
    max_fraction: f32,
) -> Vec<Vec2> {
    let half_side = area.w.min(area.h) as f32 / 2.0;
    random_points_on_annulus(
        rng,
        area.center(),
        half_side * min_fraction,
        half_side * max_fraction,
        count,
    )
}
