//! Simulation director for the arena shooter.
//!
//! Owns the hecs ECS world, runs systems once per frame in a fixed order,
//! and produces GameStateSnapshots for the renderer.

pub mod audio;
pub mod engine;
pub mod shatter;
pub mod systems;
pub mod world_setup;

pub use robotron_core as core;
pub use audio::{AudioTable, SharedCue, SoundCue};
pub use engine::{Director, SimConfig};
