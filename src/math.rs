//! Color math: conversions between RGB, HSV and hex.
//!
//! HSV follows the picker's display conventions: hue in whole degrees,
//! saturation and value in percent with two decimals.

use crate::color::{Hsv, Rgb};
use crate::error::PickerError;

/// RGB → HSV.
///
/// Achromatic colors (all channels equal) get hue 0; black gets saturation 0.
/// Hue is rounded to the nearest degree, saturation and value to two decimals.
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let r = f64::from(rgb.r);
    let g = f64::from(rgb.g);
    let b = f64::from(rgb.b);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = if delta == 0.0 {
        0.0
    } else {
        let sector = if max == r {
            ((g - b) / delta) % 6.0
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };
        let degrees = (sector * 60.0).round();
        if degrees < 0.0 {
            degrees + 360.0
        } else {
            degrees
        }
    };

    let s = if max == 0.0 { 0.0 } else { delta / max };
    let v = max / 255.0;

    Hsv {
        h,
        s: round2(s * 100.0),
        v: round2(v * 100.0),
    }
}

/// HSV → RGB over six 60° sectors.
///
/// Input is normalized first (hue wrapped, s/v clamped), so the output is
/// always a valid color.
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let Hsv { h, s, v } = Hsv::new(hsv.h, hsv.s, hsv.v);
    let c = (v / 100.0) * (s / 100.0);
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v / 100.0 - c;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    Rgb::from_f64_channels((r + m) * 255.0, (g + m) * 255.0, (b + m) * 255.0)
}

/// Parse `#rgb` or `#rrggbb`; the `#` is optional and case is ignored.
///
/// 3-digit shorthand doubles each digit. Anything else is `InvalidHex`.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, PickerError> {
    let trimmed = hex.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    let invalid = || PickerError::InvalidHex(hex.to_string());

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return Err(invalid()),
    };

    let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).map_err(|_| invalid());
    Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Format as lowercase `#rrggbb`.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

/// Whether `value` is exactly three integers, each in 0–255.
pub fn is_valid_rgb(value: &[i64]) -> bool {
    value.len() == 3 && value.iter().all(|c| (0..=255).contains(c))
}

/// Bound `value` into `[min, max]`. NaN resolves to `min`.
pub fn min_max(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hsv(h: f64, s: f64, v: f64) -> Hsv {
        Hsv { h, s, v }
    }

    #[test]
    fn rgb_to_hsv_primaries_and_extremes() {
        assert_eq!(rgb_to_hsv(Rgb::new(255, 0, 0)), hsv(0.0, 100.0, 100.0));
        assert_eq!(rgb_to_hsv(Rgb::new(0, 255, 0)), hsv(120.0, 100.0, 100.0));
        assert_eq!(rgb_to_hsv(Rgb::new(0, 0, 255)), hsv(240.0, 100.0, 100.0));
        assert_eq!(rgb_to_hsv(Rgb::new(0, 0, 0)), hsv(0.0, 0.0, 0.0));
        assert_eq!(rgb_to_hsv(Rgb::new(255, 255, 255)), hsv(0.0, 0.0, 100.0));
    }

    #[test]
    fn rgb_to_hsv_gray_is_achromatic() {
        let gray = rgb_to_hsv(Rgb::new(128, 128, 128));
        assert_eq!(gray.h, 0.0);
        assert_eq!(gray.s, 0.0);
        assert_eq!(gray.v, 50.2);
    }

    #[test]
    fn rgb_to_hsv_wraps_negative_red_sector() {
        // Red max with blue above green lands below 0° before wrapping.
        let magenta_ish = rgb_to_hsv(Rgb::new(255, 0, 128));
        assert_eq!(magenta_ish.h, 330.0);
        assert_eq!(magenta_ish.s, 100.0);
    }

    #[test]
    fn rgb_to_hsv_rounds_to_display_precision() {
        let c = rgb_to_hsv(Rgb::new(200, 100, 50));
        assert_eq!(c.h, 20.0);
        assert_eq!(c.s, 75.0);
        assert_eq!(c.v, 78.43);
    }

    #[test]
    fn hsv_to_rgb_sector_table() {
        assert_eq!(hsv_to_rgb(hsv(0.0, 100.0, 100.0)), Rgb::new(255, 0, 0));
        assert_eq!(hsv_to_rgb(hsv(60.0, 100.0, 100.0)), Rgb::new(255, 255, 0));
        assert_eq!(hsv_to_rgb(hsv(120.0, 100.0, 100.0)), Rgb::new(0, 255, 0));
        assert_eq!(hsv_to_rgb(hsv(180.0, 100.0, 100.0)), Rgb::new(0, 255, 255));
        assert_eq!(hsv_to_rgb(hsv(240.0, 100.0, 100.0)), Rgb::new(0, 0, 255));
        assert_eq!(hsv_to_rgb(hsv(300.0, 100.0, 100.0)), Rgb::new(255, 0, 255));
        assert_eq!(hsv_to_rgb(hsv(30.0, 100.0, 100.0)), Rgb::new(255, 128, 0));
    }

    #[test]
    fn hsv_to_rgb_normalizes_out_of_range_input() {
        assert_eq!(hsv_to_rgb(hsv(360.0, 100.0, 100.0)), Rgb::new(255, 0, 0));
        assert_eq!(hsv_to_rgb(hsv(-120.0, 100.0, 100.0)), Rgb::new(0, 0, 255));
        assert_eq!(hsv_to_rgb(hsv(0.0, 250.0, 250.0)), Rgb::new(255, 0, 0));
        assert_eq!(hsv_to_rgb(hsv(f64::NAN, 0.0, 100.0)), Rgb::WHITE);
    }

    #[test]
    fn round_trip_is_exact_for_black_and_white() {
        for rgb in [Rgb::BLACK, Rgb::WHITE] {
            assert_eq!(hsv_to_rgb(rgb_to_hsv(rgb)), rgb);
        }
    }

    #[test]
    fn whole_degree_hue_shifts_near_red() {
        // 0.47° rounds to 0°, which drops the green channel by two.
        let seeded = Rgb::new(255, 2, 0);
        assert_eq!(rgb_to_hsv(seeded), hsv(0.0, 100.0, 100.0));
        assert_eq!(hsv_to_rgb(rgb_to_hsv(seeded)), Rgb::new(255, 0, 0));
    }

    #[test]
    fn hex_to_rgb_expands_shorthand() {
        let long = hex_to_rgb("#ffffff").unwrap();
        assert_eq!(hex_to_rgb("#fff").unwrap(), long);
        assert_eq!(long, Rgb::WHITE);
        assert_eq!(hex_to_rgb("1a2").unwrap(), Rgb::new(0x11, 0xaa, 0x22));
        assert_eq!(hex_to_rgb(" 3B82F6 ").unwrap(), Rgb::new(0x3b, 0x82, 0xf6));
    }

    #[test]
    fn hex_to_rgb_rejects_bad_grammar() {
        for bad in ["zzz", "", "#", "##fff", "#ffff", "#fffffff", "12345g", "#ff ff ff"] {
            assert_eq!(
                hex_to_rgb(bad),
                Err(PickerError::InvalidHex(bad.to_string())),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn rgb_to_hex_is_lowercase_and_padded() {
        assert_eq!(rgb_to_hex(Rgb::new(0, 10, 255)), "#000aff");
        assert_eq!(rgb_to_hex(Rgb::new(171, 205, 239)), "#abcdef");
    }

    #[test]
    fn is_valid_rgb_checks_len_and_range() {
        assert!(is_valid_rgb(&[0, 0, 0]));
        assert!(is_valid_rgb(&[255, 255, 255]));
        assert!(!is_valid_rgb(&[256, 0, 0]));
        assert!(!is_valid_rgb(&[-1, 0, 0]));
        assert!(!is_valid_rgb(&[0, 0]));
        assert!(!is_valid_rgb(&[]));
    }

    #[test]
    fn min_max_bounds_and_absorbs_nan() {
        assert_eq!(min_max(-4.0, 0.0, 10.0), 0.0);
        assert_eq!(min_max(14.0, 0.0, 10.0), 10.0);
        assert_eq!(min_max(4.5, 0.0, 10.0), 4.5);
        assert_eq!(min_max(f64::NAN, 0.0, 10.0), 0.0);
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn any_rgb() -> impl Strategy<Value = Rgb> {
            any::<[u8; 3]>().prop_map(Rgb::from)
        }

        proptest! {
            #[test]
            fn rgb_to_hsv_stays_in_range(rgb in any_rgb()) {
                let hsv = rgb_to_hsv(rgb);
                prop_assert!(hsv.h >= 0.0 && hsv.h < 360.0, "h out of range: {}", hsv.h);
                prop_assert!(hsv.s >= 0.0 && hsv.s <= 100.0, "s out of range: {}", hsv.s);
                prop_assert!(hsv.v >= 0.0 && hsv.v <= 100.0, "v out of range: {}", hsv.v);
                prop_assert_eq!(hsv.h.fract(), 0.0);
            }

            #[test]
            fn round_trip_within_whole_degree_tolerance(rgb in any_rgb()) {
                // Whole-degree hue costs up to 0.5°, i.e. at most two units on
                // the intermediate channel of a fully saturated color. A one-unit
                // bound fails: [255, 2, 0] -> hsv(0, 100, 100) -> [255, 0, 0].
                let back = hsv_to_rgb(rgb_to_hsv(rgb));
                prop_assert!(
                    back.max_channel_diff(rgb) <= 2,
                    "{:?} -> {:?}", rgb, back
                );
            }

            #[test]
            fn achromatic_round_trip_is_exact(n in any::<u8>()) {
                let gray = Rgb::new(n, n, n);
                prop_assert_eq!(hsv_to_rgb(rgb_to_hsv(gray)), gray);
            }

            #[test]
            fn hex_round_trip_is_exact(rgb in any_rgb()) {
                prop_assert_eq!(hex_to_rgb(&rgb_to_hex(rgb)), Ok(rgb));
            }
        }
    }
}
