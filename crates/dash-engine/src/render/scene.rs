//! Builds the per-frame draw-command list from session state.
//!
//! Pure read: the session is never mutated here, which keeps the
//! simulation testable without a drawing surface. Instances are emitted
//! back-to-front; the backend draws them in order.

use glam::Vec2;

use crate::animation::clip_for;
use crate::render::instance::{DrawInstance, DrawKind, DrawList};
use crate::render::sky;
use crate::render::text::{push_text, text_width};
use crate::session::Session;
use crate::world::collectible::Placement;
use crate::world::obstacle::ObstacleKind;
use crate::world::scenery::LayerDepth;

const SUN_COLOR: [f32; 4] = [1.0, 0.88, 0.45, 1.0];
const MOON_COLOR: [f32; 4] = [0.88, 0.9, 0.95, 1.0];
const CLOUD_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 0.85];
const GRASS_COLOR: [f32; 4] = [0.36, 0.62, 0.3, 1.0];
const DIRT_COLOR: [f32; 4] = [0.42, 0.3, 0.2, 1.0];
const OBSTACLE_COLOR: [f32; 4] = [0.55, 0.27, 0.18, 1.0];
const GROUND_TREAT_COLOR: [f32; 4] = [0.95, 0.75, 0.2, 1.0];
const AIR_TREAT_COLOR: [f32; 4] = [0.95, 0.45, 0.55, 1.0];
const CELESTIAL_RADIUS: f32 = 28.0;
const CLOUD_SIZE: Vec2 = Vec2::new(90.0, 34.0);
const FLOAT_TEXT_SIZE: f32 = 16.0;

/// Silhouette tone per layer, darkened toward night.
fn silhouette_color(depth: LayerDepth, night: f32) -> [f32; 4] {
    let base = match depth {
        LayerDepth::Far => 0.62,
        LayerDepth::Mid => 0.48,
        LayerDepth::Near => 0.34,
    };
    let v = base * (1.0 - night * 0.7);
    [v * 0.7, v, v * 0.75, 1.0]
}

fn obstacle_kind_code(kind: ObstacleKind) -> f32 {
    match kind {
        ObstacleKind::GroundHazard => 0.0,
        ObstacleKind::LowProfile => 1.0,
        ObstacleKind::Tall => 2.0,
    }
}

/// Rebuild `list` from the session's current state.
pub fn build_draw_list(session: &Session, list: &mut DrawList) {
    list.clear();

    let cfg = session.config();
    let phase = session.day_night_phase();
    let night = 1.0 - sky::daylight(phase);

    // Sky gradient.
    let (top, horizon) = sky::sky_gradient(phase);
    list.push(DrawInstance {
        kind: DrawKind::Sky.as_f32(),
        x: 0.0,
        y: 0.0,
        w: cfg.world_width,
        h: cfg.world_height,
        color: top,
        color2: horizon,
        ..Default::default()
    });

    // Sun or moon on its arc.
    let (center, is_sun) = sky::celestial(phase, cfg.world_width, cfg.world_height);
    list.push(DrawInstance {
        kind: DrawKind::Celestial.as_f32(),
        x: center.x - CELESTIAL_RADIUS,
        y: center.y - CELESTIAL_RADIUS,
        w: CELESTIAL_RADIUS * 2.0,
        h: CELESTIAL_RADIUS * 2.0,
        color: if is_sun { SUN_COLOR } else { MOON_COLOR },
        p0: if is_sun { 1.0 } else { 0.0 },
        ..Default::default()
    });

    // Clouds, then silhouettes far to near.
    let scenery = session.scenery();
    for cloud in &scenery.clouds {
        list.push(DrawInstance {
            kind: DrawKind::Cloud.as_f32(),
            x: cloud.pos.x,
            y: cloud.pos.y,
            w: CLOUD_SIZE.x * cloud.scale,
            h: CLOUD_SIZE.y * cloud.scale,
            color: CLOUD_COLOR,
            ..Default::default()
        });
    }
    for (depth, items) in [
        (LayerDepth::Far, &scenery.far),
        (LayerDepth::Mid, &scenery.mid),
        (LayerDepth::Near, &scenery.near),
    ] {
        let color = silhouette_color(depth, night);
        let layer_code = match depth {
            LayerDepth::Far => 0.0,
            LayerDepth::Mid => 1.0,
            LayerDepth::Near => 2.0,
        };
        for item in items {
            let w = depth.base_width() * item.scale;
            let h = w * 0.55;
            list.push(DrawInstance {
                kind: DrawKind::Silhouette.as_f32(),
                x: item.x,
                y: cfg.ground_line() - h,
                w,
                h,
                color,
                p0: item.variant as f32,
                p1: layer_code,
                ..Default::default()
            });
        }
    }

    // Ground strip.
    list.push(DrawInstance {
        kind: DrawKind::Ground.as_f32(),
        x: 0.0,
        y: cfg.ground_line(),
        w: cfg.world_width,
        h: cfg.floor_height,
        color: GRASS_COLOR,
        color2: DIRT_COLOR,
        ..Default::default()
    });

    // Collectibles behind obstacles, obstacles behind the player.
    for c in session.collectibles() {
        list.push(DrawInstance {
            kind: DrawKind::Collectible.as_f32(),
            x: c.pos.x,
            y: c.pos.y,
            w: c.size.x,
            h: c.size.y,
            color: match c.placement {
                Placement::Ground => GROUND_TREAT_COLOR,
                Placement::Air => AIR_TREAT_COLOR,
            },
            ..Default::default()
        });
    }
    for o in session.obstacles() {
        list.push(DrawInstance {
            kind: DrawKind::Obstacle.as_f32(),
            x: o.pos.x,
            y: o.pos.y,
            w: o.size.x,
            h: o.size.y,
            color: OBSTACLE_COLOR,
            p0: obstacle_kind_code(o.kind),
            ..Default::default()
        });
    }

    // Player, tinted with the breed color, carrying the clip id.
    let player = session.player();
    let breed = session.breed();
    let clip = clip_for(session.status(), player.airborne);
    list.push(DrawInstance {
        kind: DrawKind::Player.as_f32(),
        x: player.pos.x,
        y: player.pos.y,
        w: player.size.x,
        h: player.size.y,
        color: [breed.color[0], breed.color[1], breed.color[2], 1.0],
        p0: clip.as_f32(),
        ..Default::default()
    });

    // Floating point popups, centered, fading with remaining life.
    for ft in session.floating_texts() {
        let size = FLOAT_TEXT_SIZE * ft.scale;
        let origin = Vec2::new(ft.pos.x - text_width(&ft.text, size) * 0.5, ft.pos.y);
        push_text(
            list,
            &ft.text,
            origin,
            size,
            [ft.color[0], ft.color[1], ft.color[2], ft.life],
        );
    }
}
