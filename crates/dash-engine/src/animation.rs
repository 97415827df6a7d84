//! Sprite animation clip selection.
//!
//! The clip is a pure function of session status and the player's airborne
//! flag, recomputed every frame. [`AnimLatch`] reports only the changes so
//! the sprite layer never restarts a clip it is already playing.

use crate::api::types::SessionStatus;

/// Animation clips the sprite layer knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimClip {
    #[default]
    Idle,
    Run,
    Jump,
    Dead,
}

impl AnimClip {
    /// Numeric clip id for flat draw buffers.
    pub fn as_f32(self) -> f32 {
        match self {
            AnimClip::Idle => 0.0,
            AnimClip::Run => 1.0,
            AnimClip::Jump => 2.0,
            AnimClip::Dead => 3.0,
        }
    }
}

/// Derive the clip for the current state. Paused keeps the playing-state
/// clip — the render layer freezes it anyway.
pub fn clip_for(status: SessionStatus, airborne: bool) -> AnimClip {
    match status {
        SessionStatus::Menu => AnimClip::Idle,
        SessionStatus::GameOver => AnimClip::Dead,
        SessionStatus::Playing | SessionStatus::Paused => {
            if airborne {
                AnimClip::Jump
            } else {
                AnimClip::Run
            }
        }
    }
}

/// Edge detector for clip changes.
#[derive(Debug, Clone, Default)]
pub struct AnimLatch {
    current: AnimClip,
}

impl AnimLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> AnimClip {
        self.current
    }

    /// Apply the clip for this frame. Returns `Some(clip)` only when it
    /// differs from the one already playing.
    pub fn apply(&mut self, clip: AnimClip) -> Option<AnimClip> {
        if clip != self.current {
            self.current = clip;
            Some(clip)
        } else {
            None
        }
    }
}
