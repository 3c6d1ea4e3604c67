//! ECS systems that operate on the simulation world each frame.
//!
//! Systems are plain functions over `&mut World` (or `&World` for read-only).
//! They do not own state; everything lives in components. Each collection's
//! pass marks entities `Destroyed` and flushes them at its own end, never
//! while iterating.

pub mod bullets;
pub mod cleanup;
pub mod collision;
pub mod debris;
pub mod enemies;
pub mod family;
pub mod player;
pub mod snapshot;
