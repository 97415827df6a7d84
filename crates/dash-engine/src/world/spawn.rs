//! Frame-counter driven spawning of obstacles and collectibles.
//!
//! Spacing thresholds shrink as world speed grows, so faster play spawns
//! more frequently without packing entities closer together on screen.

use crate::core::rng::Rng;
use crate::world::collectible::Placement;
use crate::world::obstacle::ObstacleKind;

const OBSTACLE_BASE_INTERVAL: f32 = 90.0;
const OBSTACLE_MIN_INTERVAL: u32 = 36;
const OBSTACLE_JITTER: u32 = 30;

const COLLECTIBLE_BASE_INTERVAL: f32 = 70.0;
const COLLECTIBLE_MIN_INTERVAL: u32 = 30;
const COLLECTIBLE_JITTER: u32 = 40;

/// What (if anything) to spawn this step.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpawnDecision {
    pub obstacle: Option<ObstacleKind>,
    pub collectible: Option<Placement>,
}

/// Spawn pacing state for one session.
#[derive(Debug, Clone)]
pub struct Spawner {
    obstacle_timer: u32,
    obstacle_interval: u32,
    collectible_timer: u32,
    collectible_interval: u32,
    suppressed: bool,
}

impl Spawner {
    pub fn new() -> Self {
        Self {
            obstacle_timer: 0,
            obstacle_interval: OBSTACLE_BASE_INTERVAL as u32,
            collectible_timer: 0,
            collectible_interval: COLLECTIBLE_BASE_INTERVAL as u32,
            suppressed: false,
        }
    }

    /// Disable all spawning. Used by hosts that want a clear track
    /// (tutorials, deterministic scoring checks).
    pub fn suppress(&mut self, on: bool) {
        self.suppressed = on;
    }

    pub fn reset(&mut self) {
        let suppressed = self.suppressed;
        *self = Self::new();
        self.suppressed = suppressed;
    }

    /// Advance one frame and decide what to spawn. `speed_ratio` is
    /// current world speed over base speed (>= 1 in practice).
    pub fn step(&mut self, speed_ratio: f32, rng: &mut Rng) -> SpawnDecision {
        let mut decision = SpawnDecision::default();
        if self.suppressed {
            return decision;
        }

        self.obstacle_timer += 1;
        if self.obstacle_timer >= self.obstacle_interval {
            decision.obstacle = Some(match rng.next_int(3) {
                0 => ObstacleKind::GroundHazard,
                1 => ObstacleKind::LowProfile,
                _ => ObstacleKind::Tall,
            });
            self.obstacle_timer = 0;
            self.obstacle_interval = next_interval(
                OBSTACLE_BASE_INTERVAL,
                OBSTACLE_MIN_INTERVAL,
                OBSTACLE_JITTER,
                speed_ratio,
                rng,
            );
        }

        self.collectible_timer += 1;
        if self.collectible_timer >= self.collectible_interval {
            decision.collectible = Some(if rng.next_int(2) == 0 {
                Placement::Ground
            } else {
                Placement::Air
            });
            self.collectible_timer = 0;
            self.collectible_interval = next_interval(
                COLLECTIBLE_BASE_INTERVAL,
                COLLECTIBLE_MIN_INTERVAL,
                COLLECTIBLE_JITTER,
                speed_ratio,
                rng,
            );
        }

        decision
    }
}

impl Default for Spawner {
    fn default() -> Self {
        Self::new()
    }
}

fn next_interval(base: f32, min: u32, jitter: u32, speed_ratio: f32, rng: &mut Rng) -> u32 {
    let scaled = (base / speed_ratio.max(1.0)) as u32;
    scaled.max(min) + rng.next_int(jitter)
}
