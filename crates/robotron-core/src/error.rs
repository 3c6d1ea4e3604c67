//! Error types surfaced by the simulation.

use thiserror::Error;

use crate::events::AudioCue;

/// Invalid level data. Loading a level never partially applies one of these.
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("level must contain exactly one player spawn, found {found}")]
    PlayerCount { found: usize },
    #[error("unrecognized entity kind `{0}`")]
    UnknownKind(String),
    #[error("spawn coordinate for `{kind}` is not finite")]
    NonFiniteSpawn { kind: String },
    #[error("spawn coordinate for `{kind}` is beyond ±{limit}")]
    SpawnOutOfRange { kind: String, limit: f32 },
    #[error("malformed level data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Audio trigger failure. Never aborts a frame.
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("no sound registered for cue `{}`", .0.name())]
    MissingCue(AudioCue),
    #[error("audio backend failure: {0}")]
    Backend(String),
}
