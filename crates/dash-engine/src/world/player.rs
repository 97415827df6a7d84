use glam::Vec2;

use crate::api::config::RunnerConfig;
use crate::core::aabb::Aabb;

/// Default sprite size of the player in world units.
pub const PLAYER_SIZE: Vec2 = Vec2::new(56.0, 44.0);
/// Fixed horizontal position — the world scrolls, the player does not.
pub const PLAYER_X: f32 = 96.0;

/// The runner. `pos` is the sprite's top-left corner; only y moves.
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    pub vy: f32,
    pub airborne: bool,
    /// Breed modifiers, copied from the selected descriptor.
    pub speed_stat: f32,
    pub jump_stat: f32,
}

impl Player {
    /// Create a player seated on the ground line.
    pub fn new(cfg: &RunnerConfig, speed_stat: f32, jump_stat: f32) -> Self {
        Self {
            pos: Vec2::new(PLAYER_X, cfg.ground_line() - PLAYER_SIZE.y),
            size: PLAYER_SIZE,
            vy: 0.0,
            airborne: false,
            speed_stat,
            jump_stat,
        }
    }

    /// Request a jump. No-op while airborne (no double/air jump).
    /// Returns true if the jump was taken.
    pub fn jump(&mut self, cfg: &RunnerConfig) -> bool {
        if self.airborne {
            return false;
        }
        // Heavier jump stats weaken the impulse, but it must stay upward.
        let impulse = cfg.jump_impulse + self.jump_stat * cfg.jump_stat_coeff;
        self.vy = impulse.min(cfg.jump_impulse_cap);
        self.airborne = true;
        true
    }

    /// One gravity step: integrate velocity, clamp to the ground line.
    pub fn integrate(&mut self, cfg: &RunnerConfig) {
        if !self.airborne {
            return;
        }
        self.vy += cfg.gravity;
        self.pos.y += self.vy;

        let ground_top = cfg.ground_line() - self.size.y;
        if self.pos.y >= ground_top {
            self.pos.y = ground_top;
            self.vy = 0.0;
            self.airborne = false;
        }
    }

    /// Re-seat the player after a viewport resize. A grounded player lands
    /// on the new ground line; an airborne one is only clamped into bounds.
    pub fn reseat(&mut self, cfg: &RunnerConfig) {
        let ground_top = cfg.ground_line() - self.size.y;
        if !self.airborne {
            self.pos.y = ground_top;
        } else if self.pos.y > ground_top {
            // Shrinking the viewport moved the ground above the player.
            self.pos.y = ground_top;
            self.vy = 0.0;
            self.airborne = false;
        }
    }

    /// Collision hitbox — an inset sub-rectangle of the sprite so grazing
    /// pixels don't end the run.
    pub fn hitbox(&self) -> Aabb {
        Aabb::new(self.pos, self.size).shrink(Vec2::new(self.size.x * 0.2, self.size.y * 0.12))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> RunnerConfig {
        RunnerConfig::default()
    }

    #[test]
    fn new_player_is_grounded() {
        let cfg = cfg();
        let p = Player::new(&cfg, 1.0, 1.0);
        assert!(!p.airborne);
        assert_eq!(p.pos.y, cfg.ground_line() - p.size.y);
    }

    #[test]
    fn jump_sets_upward_velocity() {
        let cfg = cfg();
        let mut p = Player::new(&cfg, 1.0, 1.0);
        assert!(p.jump(&cfg));
        assert!(p.airborne);
        assert!(p.vy < 0.0);
    }

    #[test]
    fn airborne_jump_is_noop() {
        let cfg = cfg();
        let mut p = Player::new(&cfg, 1.0, 1.0);
        p.jump(&cfg);
        let vy = p.vy;
        assert!(!p.jump(&cfg));
        assert_eq!(p.vy, vy);
    }

    #[test]
    fn extreme_jump_stat_stays_upward() {
        let cfg = cfg();
        let mut p = Player::new(&cfg, 1.0, 100.0);
        p.jump(&cfg);
        assert!(p.vy < 0.0, "impulse inverted: {}", p.vy);
        assert_eq!(p.vy, cfg.jump_impulse_cap);
    }

    #[test]
    fn gravity_brings_player_back_to_ground() {
        let cfg = cfg();
        let mut p = Player::new(&cfg, 1.0, 1.0);
        p.jump(&cfg);
        for _ in 0..300 {
            p.integrate(&cfg);
        }
        assert!(!p.airborne);
        assert_eq!(p.pos.y, cfg.ground_line() - p.size.y);
        assert_eq!(p.vy, 0.0);
    }

    #[test]
    fn hitbox_is_inset() {
        let cfg = cfg();
        let p = Player::new(&cfg, 1.0, 1.0);
        let hb = p.hitbox();
        assert!(hb.pos.x > p.pos.x);
        assert!(hb.size.x < p.size.x);
        assert!(hb.size.y < p.size.y);
    }

    #[test]
    fn reseat_grounds_player_after_resize() {
        let mut cfg = cfg();
        let mut p = Player::new(&cfg, 1.0, 1.0);
        cfg.world_height = 600.0;
        p.reseat(&cfg);
        assert_eq!(p.pos.y, cfg.ground_line() - p.size.y);
    }
}
