//! Saturation/value surface mapping.
//!
//! The surface is the hue color under two overlays: white fading out left to
//! right (saturation) and black fading in top to bottom (value). Sampling
//! composes the overlays per channel with the same rounding the painted
//! gradient has, so a sampled point matches its pixel.

use crate::color::{Coordinate, Rgb};

/// Color at `(x, y)` on a `width` × `height` surface tinted with `hue`.
///
/// `(0, 0)` is white, `(width, 0)` is `hue`, and the bottom edge is black.
/// A zero-sized axis contributes no overlay.
pub fn color_from_surface_position(hue: Rgb, x: f64, y: f64, width: f64, height: f64) -> Rgb {
    let white_opacity = if width > 0.0 { (width - x) / width } else { 0.0 };
    let black_opacity = if height > 0.0 { y / height } else { 0.0 };
    let white_channel = (white_opacity * 255.0).round();

    let blend = |channel: u8| {
        let c = (f64::from(channel) * (1.0 - white_opacity)).round() + white_channel;
        let c = (c * (1.0 - black_opacity)).round();
        c.clamp(0.0, 255.0)
    };

    Rgb::from_f64_channels(blend(hue.r), blend(hue.g), blend(hue.b))
}

/// [`color_from_surface_position`] at a [`Coordinate`].
pub fn color_at(hue: Rgb, at: Coordinate, width: f64, height: f64) -> Rgb {
    color_from_surface_position(hue, at.x, at.y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: f64 = 288.0;
    const H: f64 = 256.0;

    #[test]
    fn corners() {
        let hue = Rgb::new(0, 128, 255);
        assert_eq!(color_from_surface_position(hue, 0.0, 0.0, W, H), Rgb::WHITE);
        assert_eq!(color_from_surface_position(hue, W, 0.0, W, H), hue);
        assert_eq!(color_from_surface_position(hue, W, H, W, H), Rgb::BLACK);
        assert_eq!(color_from_surface_position(hue, 0.0, H, W, H), Rgb::BLACK);
    }

    #[test]
    fn center_mixes_both_overlays() {
        // Half white lifts red to 256 and the zero channels to 128; half black
        // then halves each before the final clamp.
        let mixed = color_from_surface_position(Rgb::RED, W / 2.0, H / 2.0, W, H);
        assert_eq!(mixed, Rgb::new(128, 64, 64));
    }

    #[test]
    fn degenerate_surface_does_not_divide_by_zero() {
        let hue = Rgb::new(10, 20, 30);
        assert_eq!(color_from_surface_position(hue, 0.0, 0.0, 0.0, 0.0), hue);
        assert_eq!(color_from_surface_position(hue, 0.0, 5.0, 0.0, 10.0), Rgb::new(5, 10, 15));
    }

    #[test]
    fn color_at_matches_raw_form() {
        let at = Coordinate::new(100.0, 40.0);
        assert_eq!(
            color_at(Rgb::RED, at, W, H),
            color_from_surface_position(Rgb::RED, 100.0, 40.0, W, H)
        );
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn any_rgb() -> impl Strategy<Value = Rgb> {
            any::<[u8; 3]>().prop_map(Rgb::from)
        }

        proptest! {
            #[test]
            fn darker_going_down(hue in any_rgb(), x in 0.0..=W, y in 0.0..H, dy in 0.0..H) {
                let upper = color_from_surface_position(hue, x, y, W, H);
                let lower = color_from_surface_position(hue, x, (y + dy).min(H), W, H);
                for (u, l) in upper.channels().into_iter().zip(lower.channels()) {
                    prop_assert!(l <= u, "{:?} above {:?}", upper, lower);
                }
            }

            #[test]
            fn towards_hue_going_right(hue in any_rgb(), x in 0.0..W, dx in 0.0..W, y in 0.0..=H) {
                let left = color_from_surface_position(hue, x, y, W, H);
                let right = color_from_surface_position(hue, (x + dx).min(W), y, W, H);
                // The two overlay terms round separately, so allow one unit.
                for (l, r) in left.channels().into_iter().zip(right.channels()) {
                    prop_assert!(r <= l.saturating_add(1), "{:?} left of {:?}", left, right);
                }
            }
        }
    }
}
