/// Tuning for one runner session, provided by the host.
///
/// Distances are in world units (canvas pixels at 1:1 zoom), velocities in
/// units per fixed step. Y grows downward; the ground line sits at
/// `world_height - floor_height`.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Most fixed steps one host frame may cover. Caps catch-up after a
    /// long stall so the world never leaps ahead.
    pub max_steps_per_frame: u32,
    /// World width in game units.
    pub world_width: f32,
    /// World height in game units.
    pub world_height: f32,
    /// Height of the ground strip at the bottom of the world.
    pub floor_height: f32,
    /// Scroll speed at score 0 with a neutral breed.
    pub base_speed: f32,
    /// Extra speed per score point (source ramps by score/500).
    pub speed_per_score: f32,
    /// Extra speed per breed speed-stat point.
    pub speed_stat_coeff: f32,
    /// Downward acceleration per step.
    pub gravity: f32,
    /// Upward (negative) velocity applied on jump.
    pub jump_impulse: f32,
    /// Impulse reduction per breed jump-stat point.
    pub jump_stat_coeff: f32,
    /// Weakest impulse a jump may produce. Keeps the impulse upward even
    /// for extreme jump stats.
    pub jump_impulse_cap: f32,
    /// How far past the left edge entities live before pruning.
    pub prune_margin: f32,
    /// How far past the right edge new entities spawn.
    pub spawn_lead: f32,
    /// Frames in one full day/night cycle.
    pub day_length_frames: u32,
    /// Maximum number of draw instances (default: 512).
    pub max_instances: usize,
}

impl RunnerConfig {
    /// Y coordinate of the ground line (top of the floor strip).
    pub fn ground_line(&self) -> f32 {
        self.world_height - self.floor_height
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            max_steps_per_frame: 10,
            world_width: 800.0,
            world_height: 450.0,
            floor_height: 80.0,
            base_speed: 6.0,
            speed_per_score: 1.0 / 500.0,
            speed_stat_coeff: 0.4,
            gravity: 0.6,
            jump_impulse: -13.0,
            jump_stat_coeff: 0.6,
            jump_impulse_cap: -2.0,
            prune_margin: 100.0,
            spawn_lead: 50.0,
            day_length_frames: 1800,
            max_instances: 512,
        }
    }
}
