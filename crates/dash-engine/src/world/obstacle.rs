use glam::Vec2;

use crate::api::config::RunnerConfig;
use crate::core::aabb::Aabb;

/// The three obstacle silhouettes the spawner chooses between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    /// Square hazard sitting on the ground (crate, hydrant).
    GroundHazard,
    /// Wide and low — easy to clear, punishes late jumps.
    LowProfile,
    /// Narrow and tall — needs a full jump.
    Tall,
}

impl ObstacleKind {
    pub fn size(self) -> Vec2 {
        match self {
            ObstacleKind::GroundHazard => Vec2::new(40.0, 40.0),
            ObstacleKind::LowProfile => Vec2::new(58.0, 26.0),
            ObstacleKind::Tall => Vec2::new(34.0, 64.0),
        }
    }
}

/// A ground hazard scrolling toward the player.
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub pos: Vec2,
    pub size: Vec2,
    pub kind: ObstacleKind,
}

impl Obstacle {
    /// Spawn just past the right edge, seated on the ground.
    pub fn spawn(cfg: &RunnerConfig, kind: ObstacleKind) -> Self {
        let size = kind.size();
        Self {
            pos: Vec2::new(
                cfg.world_width + cfg.spawn_lead,
                cfg.ground_line() - size.y,
            ),
            size,
            kind,
        }
    }

    pub fn advance(&mut self, speed: f32) {
        self.pos.x -= speed;
    }

    /// True once the trailing edge has passed the prune margin.
    pub fn off_screen(&self, margin: f32) -> bool {
        self.pos.x + self.size.x < -margin
    }

    pub fn hitbox(&self) -> Aabb {
        Aabb::new(self.pos, self.size).shrink(Vec2::splat(2.0))
    }
}
