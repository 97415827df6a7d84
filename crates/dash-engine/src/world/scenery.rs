//! Parallax backdrop — three silhouette layers plus clouds.
//!
//! Purely visual, no collision. Elements are recycled rather than
//! spawned/pruned: once one scrolls off the trailing edge it wraps around
//! ahead of the viewport with re-randomized variant and scale.

use glam::Vec2;

use crate::api::config::RunnerConfig;
use crate::core::rng::Rng;

/// Depth of a silhouette layer. Deeper layers scroll slower.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerDepth {
    Far,
    Mid,
    Near,
}

impl LayerDepth {
    /// Fraction of world speed this layer scrolls at.
    pub fn scroll_factor(self) -> f32 {
        match self {
            LayerDepth::Far => 0.15,
            LayerDepth::Mid => 0.3,
            LayerDepth::Near => 0.55,
        }
    }

    /// Base silhouette width before scaling.
    pub fn base_width(self) -> f32 {
        match self {
            LayerDepth::Far => 220.0,
            LayerDepth::Mid => 170.0,
            LayerDepth::Near => 130.0,
        }
    }

    fn count(self) -> usize {
        match self {
            LayerDepth::Far => 4,
            LayerDepth::Mid => 5,
            LayerDepth::Near => 6,
        }
    }
}

/// Number of silhouette variants per layer (hills, trees, fences...).
pub const VARIANTS: u32 = 4;

/// One silhouette element within a layer.
#[derive(Debug, Clone)]
pub struct SceneryItem {
    pub x: f32,
    pub variant: u32,
    pub scale: f32,
}

/// A drifting cloud. Scrolls with a tiny parallax factor plus its own drift.
#[derive(Debug, Clone)]
pub struct Cloud {
    pub pos: Vec2,
    pub scale: f32,
    pub drift: f32,
}

const CLOUD_COUNT: usize = 3;
const CLOUD_FACTOR: f32 = 0.08;
const CLOUD_WIDTH: f32 = 90.0;

/// All recycled backdrop state for one session.
#[derive(Debug, Clone)]
pub struct Scenery {
    pub far: Vec<SceneryItem>,
    pub mid: Vec<SceneryItem>,
    pub near: Vec<SceneryItem>,
    pub clouds: Vec<Cloud>,
}

fn seed_layer(depth: LayerDepth, cfg: &RunnerConfig, rng: &mut Rng) -> Vec<SceneryItem> {
    let count = depth.count();
    let spacing = layer_span(depth, cfg) / count as f32;
    (0..count)
        .map(|i| SceneryItem {
            x: i as f32 * spacing + rng.range_f32(0.0, spacing * 0.4),
            variant: rng.next_int(VARIANTS),
            scale: rng.range_f32(0.8, 1.3),
        })
        .collect()
}

/// Total wrap distance for a layer: covers the viewport plus one element.
fn layer_span(depth: LayerDepth, cfg: &RunnerConfig) -> f32 {
    cfg.world_width + depth.base_width() * 1.5
}

impl Scenery {
    pub fn new(cfg: &RunnerConfig, rng: &mut Rng) -> Self {
        Self {
            far: seed_layer(LayerDepth::Far, cfg, rng),
            mid: seed_layer(LayerDepth::Mid, cfg, rng),
            near: seed_layer(LayerDepth::Near, cfg, rng),
            clouds: (0..CLOUD_COUNT)
                .map(|_| Cloud {
                    pos: Vec2::new(
                        rng.range_f32(0.0, cfg.world_width),
                        rng.range_f32(30.0, cfg.world_height * 0.35),
                    ),
                    scale: rng.range_f32(0.7, 1.4),
                    drift: rng.range_f32(0.1, 0.35),
                })
                .collect(),
        }
    }

    /// Scroll all layers one step at `speed` and wrap anything that left
    /// the trailing edge.
    pub fn advance(&mut self, speed: f32, cfg: &RunnerConfig, rng: &mut Rng) {
        for (depth, items) in [
            (LayerDepth::Far, &mut self.far),
            (LayerDepth::Mid, &mut self.mid),
            (LayerDepth::Near, &mut self.near),
        ] {
            let span = layer_span(depth, cfg);
            for item in items.iter_mut() {
                item.x -= speed * depth.scroll_factor();
                if item.x + depth.base_width() * item.scale < 0.0 {
                    item.x += span;
                    item.variant = rng.next_int(VARIANTS);
                    item.scale = rng.range_f32(0.8, 1.3);
                }
            }
        }

        for cloud in &mut self.clouds {
            cloud.pos.x -= speed * CLOUD_FACTOR + cloud.drift;
            if cloud.pos.x + CLOUD_WIDTH * cloud.scale < 0.0 {
                cloud.pos.x = cfg.world_width + rng.range_f32(0.0, 120.0);
                cloud.pos.y = rng.range_f32(30.0, cfg.world_height * 0.35);
                cloud.scale = rng.range_f32(0.7, 1.4);
                cloud.drift = rng.range_f32(0.1, 0.35);
            }
        }
    }
}
