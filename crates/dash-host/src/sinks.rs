//! Outbound seams: score persistence and audio playback.
//!
//! Both are best-effort. A failed persist is logged and dropped, a missing
//! audio backend degrades to silence; neither ever touches gameplay state.

use std::fmt;

use dash_engine::SoundCue;

/// Failure reported by a score sink. The runner logs it and moves on.
#[derive(Debug)]
pub struct SinkError(pub String);

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for SinkError {}

/// Receives the final score of each run, once per run. Implementations
/// forward it to the lifetime-points store.
pub trait ScoreSink {
    fn persist(&mut self, points: u32) -> Result<(), SinkError>;
}

/// Discards scores. The default when the host wires nothing up.
#[derive(Debug, Default)]
pub struct NullScoreSink;

impl ScoreSink for NullScoreSink {
    fn persist(&mut self, _points: u32) -> Result<(), SinkError> {
        Ok(())
    }
}

/// In-memory sink: accumulates lifetime points. Used by tests and demos.
#[derive(Debug, Default)]
pub struct MemoryScoreSink {
    pub lifetime_points: u64,
    pub runs: u32,
}

impl ScoreSink for MemoryScoreSink {
    fn persist(&mut self, points: u32) -> Result<(), SinkError> {
        self.lifetime_points += points as u64;
        self.runs += 1;
        Ok(())
    }
}

/// Plays sound cues. Implementations swallow their own failures — playback
/// must never block or interrupt the frame callback.
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);
}

/// Silent audio backend.
#[derive(Debug, Default)]
pub struct NullAudioSink;

impl AudioSink for NullAudioSink {
    fn play(&mut self, _cue: SoundCue) {}
}
