//! Audio cues for the headless driver: every play is a log line.

use std::sync::Arc;

use robotron_core::error::AudioError;
use robotron_core::events::AudioCue;
use robotron_sim::audio::{AudioTable, SoundCue};

/// A cue that logs instead of making noise.
#[derive(Debug, Clone, Copy)]
pub struct LoggingCue(pub AudioCue);

impl SoundCue for LoggingCue {
    fn play(&self) -> Result<(), AudioError> {
        tracing::debug!(cue = self.0.name(), "play");
        Ok(())
    }
}

/// Table with a logging cue registered for every cue.
pub fn logging_table() -> AudioTable {
    [AudioCue::Shoot, AudioCue::Explosion]
        .into_iter()
        .fold(AudioTable::new(), |table, cue| {
            table.with_cue(cue, Arc::new(LoggingCue(cue)))
        })
}
