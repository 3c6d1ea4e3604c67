//! Entity behaviours for ROBOTRON.
//!
//! Per-entity update rules for the player, bullets, enemies, family members
//! and debris, plus per-variant enemy profiles.
//! No ECS dependency. Every rule operates on plain data so it can be tested
//! in isolation and applied by the sim systems.

pub mod bullet;
pub mod debris;
pub mod enemy;
pub mod family;
pub mod player;
pub mod profiles;

pub use robotron_core as core;

#[cfg(test)]
mod tests;
