//! Value types shared by the picker core: `Rgb`, `Hsv`, and `Coordinate`.
//!
//! `Rgb` stores 0–255 channels as `u8`, so an out-of-range channel cannot be
//! represented. `Hsv` uses degrees for hue and percentages for saturation and
//! value, matching what the text fields display.

use std::fmt;

use crate::error::PickerError;
use crate::math;

/// An 8-bit-per-channel RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const RED: Rgb = Rgb::new(255, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as an array, in `r, g, b` order.
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Build from per-channel values computed in floating point.
    ///
    /// Each value is rounded and clamped into 0–255; NaN maps to 0.
    pub(crate) fn from_f64_channels(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: channel_from_f64(r),
            g: channel_from_f64(g),
            b: channel_from_f64(b),
        }
    }

    pub fn to_hsv(self) -> Hsv {
        math::rgb_to_hsv(self)
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        math::rgb_to_hex(self)
    }

    /// Parse `#rgb` / `#rrggbb` (the `#` is optional).
    pub fn from_hex(hex: &str) -> Result<Self, PickerError> {
        math::hex_to_rgb(hex)
    }

    /// Largest per-channel distance between two colors.
    pub fn max_channel_diff(self, other: Rgb) -> u8 {
        self.r
            .abs_diff(other.r)
            .max(self.g.abs_diff(other.g))
            .max(self.b.abs_diff(other.b))
    }
}

fn channel_from_f64(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 255.0) as u8
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(rgb: Rgb) -> Self {
        rgb.channels()
    }
}

impl TryFrom<&[i64]> for Rgb {
    type Error = PickerError;

    fn try_from(value: &[i64]) -> Result<Self, Self::Error> {
        if !math::is_valid_rgb(value) {
            return Err(PickerError::InvalidRgb(format!("{value:?}")));
        }
        // Length and ranges were checked above.
        Ok(Self {
            r: value[0] as u8,
            g: value[1] as u8,
            b: value[2] as u8,
        })
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.r, self.g, self.b)
    }
}

/// Hue in degrees `[0, 360)`, saturation and value in percent `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    /// Wraps hue modulo 360 and clamps saturation/value into 0–100.
    ///
    /// Non-finite components collapse to 0.
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self {
            h: finite_or_zero(h).rem_euclid(360.0),
            s: finite_or_zero(s).clamp(0.0, 100.0),
            v: finite_or_zero(v).clamp(0.0, 100.0),
        }
    }

    pub fn to_rgb(self) -> Rgb {
        math::hsv_to_rgb(self)
    }

    /// The same hue at full saturation and value.
    pub fn pure_hue(self) -> Hsv {
        Hsv {
            h: self.h,
            s: 100.0,
            v: 100.0,
        }
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}",
            self.h.round() as i64,
            self.s.round() as i64,
            self.v.round() as i64
        )
    }
}

/// A point in surface-local pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub const ORIGIN: Coordinate = Coordinate { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_from_accepts_in_range_triples() {
        let rgb = Rgb::try_from([12_i64, 0, 255].as_slice()).unwrap();
        assert_eq!(rgb, Rgb::new(12, 0, 255));
    }

    #[test]
    fn try_from_rejects_wrong_length_and_range() {
        assert!(Rgb::try_from([1_i64, 2].as_slice()).is_err());
        assert!(Rgb::try_from([1_i64, 2, 3, 4].as_slice()).is_err());
        assert!(Rgb::try_from([256_i64, 0, 0].as_slice()).is_err());
        assert!(Rgb::try_from([0_i64, -1, 0].as_slice()).is_err());
    }

    #[test]
    fn from_f64_channels_rounds_and_clamps() {
        let rgb = Rgb::from_f64_channels(254.6, -3.0, f64::NAN);
        assert_eq!(rgb, Rgb::new(255, 0, 0));
        assert_eq!(Rgb::from_f64_channels(300.0, 0.4, 0.5), Rgb::new(255, 0, 1));
    }

    #[test]
    fn hsv_new_wraps_hue_and_clamps_percentages() {
        let hsv = Hsv::new(-30.0, 140.0, -5.0);
        assert_eq!(hsv.h, 330.0);
        assert_eq!(hsv.s, 100.0);
        assert_eq!(hsv.v, 0.0);
        assert_eq!(Hsv::new(360.0, 50.0, 50.0).h, 0.0);
        assert_eq!(Hsv::new(f64::NAN, f64::INFINITY, 10.0), Hsv::new(0.0, 0.0, 10.0));
    }

    #[test]
    fn display_matches_text_field_format() {
        assert_eq!(Rgb::new(1, 2, 3).to_string(), "1, 2, 3");
        assert_eq!(Hsv::new(240.0, 49.6, 12.4).to_string(), "240, 50, 12");
    }

    #[test]
    fn max_channel_diff_picks_the_largest_gap() {
        assert_eq!(Rgb::new(10, 20, 30).max_channel_diff(Rgb::new(12, 15, 30)), 5);
        assert_eq!(Rgb::WHITE.max_channel_diff(Rgb::WHITE), 0);
    }
}
