use glam::Vec2;

use crate::api::config::RunnerConfig;
use crate::core::aabb::Aabb;

/// Side length of the collectible treat sprite.
pub const COLLECTIBLE_SIZE: f32 = 24.0;
/// Points for a ground-level treat.
pub const GROUND_VALUE: u32 = 10;
/// Points for an air treat (needs a jump to reach).
pub const AIR_VALUE: u32 = 15;

/// Where a collectible sits relative to the ground line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Ground,
    Air,
}

impl Placement {
    /// Height of the treat's top edge above the ground line. Ground treats
    /// sit low enough for a grounded runner's hitbox; air treats need a jump.
    fn clearance(self) -> f32 {
        match self {
            Placement::Ground => 30.0,
            Placement::Air => 130.0,
        }
    }

    pub fn value(self) -> u32 {
        match self {
            Placement::Ground => GROUND_VALUE,
            Placement::Air => AIR_VALUE,
        }
    }
}

/// A treat scrolling toward the player. Collected ones are filtered out
/// after each update pass.
#[derive(Debug, Clone)]
pub struct Collectible {
    pub pos: Vec2,
    pub size: Vec2,
    pub value: u32,
    pub collected: bool,
    pub placement: Placement,
}

impl Collectible {
    /// Spawn just past the right edge at the placement's height.
    pub fn spawn(cfg: &RunnerConfig, placement: Placement) -> Self {
        Self {
            pos: Vec2::new(
                cfg.world_width + cfg.spawn_lead,
                cfg.ground_line() - placement.clearance(),
            ),
            size: Vec2::splat(COLLECTIBLE_SIZE),
            value: placement.value(),
            collected: false,
            placement,
        }
    }

    pub fn advance(&mut self, speed: f32) {
        self.pos.x -= speed;
    }

    pub fn off_screen(&self, margin: f32) -> bool {
        self.pos.x + self.size.x < -margin
    }

    pub fn hitbox(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}
