//! Headless driver for the arena shooter simulation.
//!
//! Runs the director on its own thread at a fixed tick rate, feeds it input
//! from an `InputSource` plus queued commands, and publishes snapshots.

pub mod audio;
pub mod game_loop;
pub mod input;
pub mod state;
