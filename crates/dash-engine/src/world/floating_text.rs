use glam::Vec2;

/// Points popup spawned on pickup. Rises, fades, and is pruned once
/// `life` reaches zero.
#[derive(Debug, Clone)]
pub struct FloatingText {
    pub pos: Vec2,
    pub text: String,
    /// Remaining life in (0, 1]. Doubles as render opacity.
    pub life: f32,
    pub color: [f32; 3],
    pub scale: f32,
}

const RISE_PER_STEP: f32 = 1.2;
const DECAY_PER_STEP: f32 = 0.02;

const PLAIN_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
const BOOSTED_COLOR: [f32; 3] = [1.0, 0.84, 0.25];

impl FloatingText {
    /// Popup for `awarded` points. Boosted pickups (multiplier above x1)
    /// get the gold color and a larger scale.
    pub fn points(pos: Vec2, awarded: u32, boosted: bool) -> Self {
        Self {
            pos,
            text: format!("+{awarded}"),
            life: 1.0,
            color: if boosted { BOOSTED_COLOR } else { PLAIN_COLOR },
            scale: if boosted { 1.4 } else { 1.0 },
        }
    }

    /// Advance one step. Returns false once expired.
    pub fn tick(&mut self) -> bool {
        self.pos.y -= RISE_PER_STEP;
        self.life -= DECAY_PER_STEP;
        self.life > 0.0
    }
}
