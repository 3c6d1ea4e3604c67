//! Audio cue table injected into the director.
//!
//! The simulation never talks to an audio device. It is handed a table of
//! shared cue handles at construction and fires them fire-and-forget;
//! failures are logged and the frame carries on.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use robotron_core::error::AudioError;
use robotron_core::events::AudioCue;

/// A playable sound. Implementations must tolerate being triggered from
/// the simulation thread at any time.
pub trait SoundCue: Send + Sync {
    fn play(&self) -> Result<(), AudioError>;
}

/// Shared, non-owning handle to a cue.
pub type SharedCue = Arc<dyn SoundCue>;

/// Cue handle held by each bullet for its explosion sound.
#[derive(Clone, Default)]
pub struct ExplosionCue(pub Option<SharedCue>);

/// Table of cue handles, keyed by cue.
#[derive(Clone, Default)]
pub struct AudioTable {
    cues: HashMap<AudioCue, SharedCue>,
}

impl AudioTable {
    /// An empty table. Every trigger becomes a logged `MissingCue`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: register a handle for `cue`.
    pub fn with_cue(mut self, cue: AudioCue, handle: SharedCue) -> Self {
        self.cues.insert(cue, handle);
        self
    }

    pub fn get(&self, cue: AudioCue) -> Option<SharedCue> {
        self.cues.get(&cue).cloned()
    }

    /// Play `cue`, logging instead of failing.
    pub fn trigger(&self, cue: AudioCue) {
        let result = match self.cues.get(&cue) {
            Some(handle) => handle.play(),
            None => Err(AudioError::MissingCue(cue)),
        };
        if let Err(err) = result {
            tracing::warn!(cue = cue.name(), %err, "audio cue failed");
        }
    }
}

impl ExplosionCue {
    /// Play the held handle, if any, logging failures.
    pub fn trigger(&self) {
        let Some(handle) = &self.0 else {
            tracing::warn!(
                err = %AudioError::MissingCue(AudioCue::Explosion),
                "audio cue failed"
            );
            return;
        };
        if let Err(err) = handle.play() {
            tracing::warn!(cue = AudioCue::Explosion.name(), %err, "audio cue failed");
        }
    }
}

impl fmt::Debug for AudioTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.cues.keys().map(|c| c.name()).collect();
        names.sort_unstable();
        f.debug_struct("AudioTable").field("cues", &names).finish()
    }
}

impl fmt::Debug for ExplosionCue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ExplosionCue")
            .field(&self.0.as_ref().map(|_| "<cue>"))
            .finish()
    }
}
