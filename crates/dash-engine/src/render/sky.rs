//! Day/night sky: gradient colors and the sun/moon arc, all derived from
//! the session's frame counter.

use glam::Vec2;
use std::f32::consts::PI;

const DAY_TOP: [f32; 4] = [0.35, 0.65, 0.95, 1.0];
const DAY_HORIZON: [f32; 4] = [0.78, 0.88, 0.98, 1.0];
const NIGHT_TOP: [f32; 4] = [0.04, 0.05, 0.16, 1.0];
const NIGHT_HORIZON: [f32; 4] = [0.16, 0.16, 0.32, 1.0];

fn lerp_color(a: [f32; 4], b: [f32; 4], t: f32) -> [f32; 4] {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
        a[3] + (b[3] - a[3]) * t,
    ]
}

/// How much daylight is left at `phase` ∈ [0, 1): 1.0 at noon (phase 0),
/// 0.0 at midnight (phase 0.5), smooth in between.
pub fn daylight(phase: f32) -> f32 {
    0.5 + 0.5 * (phase * 2.0 * PI).cos()
}

/// Top and horizon colors of the sky gradient at `phase`.
pub fn sky_gradient(phase: f32) -> ([f32; 4], [f32; 4]) {
    let night = 1.0 - daylight(phase);
    (
        lerp_color(DAY_TOP, NIGHT_TOP, night),
        lerp_color(DAY_HORIZON, NIGHT_HORIZON, night),
    )
}

/// Position of the sun or moon on its arc. Returns the disc center and
/// whether it is the sun. Each body sweeps the sky during its half of the
/// cycle: the sun over phase [0, 0.5), the moon over [0.5, 1).
pub fn celestial(phase: f32, world_width: f32, world_height: f32) -> (Vec2, bool) {
    let is_sun = phase < 0.5;
    let progress = if is_sun { phase * 2.0 } else { (phase - 0.5) * 2.0 };
    let angle = PI * (1.0 - progress);
    let center = Vec2::new(
        world_width * 0.5 + angle.cos() * world_width * 0.42,
        world_height * 0.55 - angle.sin() * world_height * 0.38,
    );
    (center, is_sun)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daylight_peaks_at_noon_and_bottoms_at_midnight() {
        assert!((daylight(0.0) - 1.0).abs() < 1e-6);
        assert!(daylight(0.5).abs() < 1e-6);
        assert!((daylight(0.25) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn sky_is_dark_at_midnight() {
        let (top_noon, _) = sky_gradient(0.0);
        let (top_midnight, _) = sky_gradient(0.5);
        assert!(top_midnight[2] < top_noon[2], "midnight should be darker");
        assert_eq!(top_noon, DAY_TOP);
        assert_eq!(top_midnight, NIGHT_TOP);
    }

    #[test]
    fn sun_by_day_moon_by_night() {
        let (_, is_sun) = celestial(0.1, 800.0, 450.0);
        assert!(is_sun);
        let (_, is_sun) = celestial(0.7, 800.0, 450.0);
        assert!(!is_sun);
    }

    #[test]
    fn celestial_sweeps_left_to_right() {
        let (dawn, _) = celestial(0.05, 800.0, 450.0);
        let (noonish, _) = celestial(0.25, 800.0, 450.0);
        let (dusk, _) = celestial(0.45, 800.0, 450.0);
        assert!(dawn.x < noonish.x);
        assert!(noonish.x < dusk.x);
        // Highest point mid-arc.
        assert!(noonish.y < dawn.y);
        assert!(noonish.y < dusk.y);
    }
}
