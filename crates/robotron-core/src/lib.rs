//! Core types and definitions for the ROBOTRON simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry, components, input signals, level layouts, state snapshots,
//! events, errors and constants.
//! It has no dependency on the ECS, an RNG or any runtime framework.

pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod geometry;
pub mod input;
pub mod level;
pub mod state;
pub mod types;
