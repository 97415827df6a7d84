pub mod runner;
pub mod sinks;

pub use runner::SessionRunner;
pub use sinks::{AudioSink, MemoryScoreSink, NullAudioSink, NullScoreSink, ScoreSink, SinkError};
