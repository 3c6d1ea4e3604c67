//! Random spawn placement and built-in level layouts.

pub mod levels;
pub mod radial;

pub use levels::level_one;
pub use radial::{generate_rand_coords, random_point_on_annulus, random_points_on_annulus};
