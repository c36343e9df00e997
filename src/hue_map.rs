//! Hue strip mapping between a 1-D position and a fully saturated color.
//!
//! The strip runs Red → Purple → Blue → Teal → Green → Yellow → Orange → Red
//! over six unequal segments. Each segment ramps exactly one channel while
//! the other two stay pinned at 0 or 255, which matches the rendered
//! gradient stops without a degree → HSV → RGB detour.

use crate::color::Rgb;

/// Segment boundaries as fractions of the strip width.
pub const HUE_STOPS: [f64; 7] = [0.0, 0.15, 0.33, 0.49, 0.67, 0.84, 1.0];

/// Sample the strip at `x` pixels along a strip `width` pixels wide.
///
/// Positions outside `[0, 1]` (including a zero-width strip) fall back to
/// pure red.
pub fn hue_from_position(x: f64, width: f64) -> Rgb {
    let position = x / width;
    let [_, purple, blue, teal, green, yellow, _] = HUE_STOPS;

    if (0.0..=purple).contains(&position) {
        let t = position / purple;
        return Rgb::new(255, 0, ramp(t));
    }
    if (purple..=blue).contains(&position) {
        let t = 1.0 - (position - purple) / (blue - purple);
        return Rgb::new(ramp(t), 0, 255);
    }
    if (blue..=teal).contains(&position) {
        let t = (position - blue) / (teal - blue);
        return Rgb::new(0, ramp(t), 255);
    }
    if (teal..=green).contains(&position) {
        let t = 1.0 - (position - teal) / (green - teal);
        return Rgb::new(0, 255, ramp(t));
    }
    if (green..=yellow).contains(&position) {
        let t = (position - green) / (yellow - green);
        return Rgb::new(ramp(t), 255, 0);
    }
    if (yellow..=1.0).contains(&position) {
        let t = 1.0 - (position - yellow) / (1.0 - yellow);
        return Rgb::new(255, ramp(t), 0);
    }
    Rgb::RED
}

/// Inverse of [`hue_from_position`]: hue degrees → normalized position.
///
/// Hue decreases along the strip, one 60° sector per segment, so 300° sits
/// at 0.15 and 60° at 0.84. Both 0° and 360° are red; 0° maps to 0.
pub fn position_from_hue(hue: f64) -> f64 {
    let hue = if hue.is_finite() {
        hue.rem_euclid(360.0)
    } else {
        0.0
    };
    if hue == 0.0 {
        return 0.0;
    }
    let travelled = (360.0 - hue) / 60.0;
    let segment = (travelled.floor() as usize).min(5);
    let fraction = travelled - segment as f64;
    let start = HUE_STOPS[segment];
    let end = HUE_STOPS[segment + 1];
    start + fraction * (end - start)
}

fn ramp(t: f64) -> u8 {
    (t * 255.0).round().clamp(0.0, 255.0) as u8
}
