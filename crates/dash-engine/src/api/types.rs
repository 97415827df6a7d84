/// Lifecycle of one play session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    #[default]
    Menu,
    Playing,
    Paused,
    GameOver,
}

/// A sound cue emitted by the simulation.
/// Playback is fire-and-forget; a missing audio backend degrades to silence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Jump,
    Collect,
    GameOver,
}

/// An event communicated from the simulation to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunEvent {
    /// A collectible was picked up. `awarded == value * multiplier`.
    Pickup {
        value: u32,
        multiplier: u32,
        awarded: u32,
    },
    /// The run ended. Fired exactly once per run; the host forwards
    /// `final_score` to the lifetime-points store.
    GameOver { final_score: u32 },
}
