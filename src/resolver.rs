//! Text input resolution: typed hex/RGB/HSV text → a canonical `(hsv, rgb)`
//! pair for the selection state.
//!
//! Bad input never fails. Numeric fields that hold no digits become 255,
//! out-of-range numbers are clamped, and an invalid hex string saturates
//! the current hue.

use crate::color::{Hsv, Rgb};
use crate::math;

/// Value substituted when a numeric field holds no digits.
pub const NUMERIC_FALLBACK: i64 = 255;

/// Which set of text fields is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputMode {
    #[default]
    Hex,
    Rgb,
    Hsv,
}

impl InputMode {
    pub const ALL: [InputMode; 3] = [InputMode::Hex, InputMode::Rgb, InputMode::Hsv];

    pub fn label(self) -> &'static str {
        match self {
            InputMode::Hex => "Hex",
            InputMode::Rgb => "RGB",
            InputMode::Hsv => "HSV",
        }
    }
}

/// Position of a field within its three-field row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    First,
    Second,
    Third,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::First, Channel::Second, Channel::Third];

    pub fn index(self) -> usize {
        match self {
            Channel::First => 0,
            Channel::Second => 1,
            Channel::Third => 2,
        }
    }
}

/// Parse a numeric field.
///
/// Reads an optionally signed run of leading digits and ignores whatever
/// follows. An empty field is 0; a field with no leading digits is
/// [`NUMERIC_FALLBACK`].
pub fn parse_channel(text: &str) -> i64 {
    if text.is_empty() {
        return 0;
    }
    match leading_int(text) {
        Some(value) => value,
        None => {
            tracing::warn!(text, fallback = NUMERIC_FALLBACK, "numeric field has no digits");
            NUMERIC_FALLBACK
        }
    }
}

fn leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    // Too many digits for i64 only happens far outside every channel range.
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Replace one RGB channel with typed text.
pub fn resolve_rgb_field(current: Rgb, channel: Channel, text: &str) -> (Hsv, Rgb) {
    let value = parse_channel(text).clamp(0, 255) as u8;
    let mut channels = current.channels();
    channels[channel.index()] = value;
    let rgb = Rgb::from(channels);
    (math::rgb_to_hsv(rgb), rgb)
}

/// Replace one HSV component with typed text.
///
/// Hue is bounded to 0–360, saturation and value to 0–100.
pub fn resolve_hsv_field(current: Hsv, channel: Channel, text: &str) -> (Hsv, Rgb) {
    let raw = parse_channel(text);
    let Hsv { mut h, mut s, mut v } = current;
    match channel {
        Channel::First => h = raw.clamp(0, 360) as f64,
        Channel::Second => s = raw.clamp(0, 100) as f64,
        Channel::Third => v = raw.clamp(0, 100) as f64,
    }
    let hsv = Hsv::new(h, s, v);
    (hsv, math::hsv_to_rgb(hsv))
}

/// How the hex field shows a color: uppercase, no `#`.
pub fn display_hex(rgb: Rgb) -> String {
    math::rgb_to_hex(rgb)[1..].to_uppercase()
}

/// The hex field's edit sub-state.
///
/// While focused the field holds a free-form draft; only [`HexField::commit`]
/// produces a value for the selection state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HexField {
    #[default]
    Committed,
    Editing(String),
}

impl HexField {
    /// Start editing, seeding the draft with the current color.
    ///
    /// Does nothing if a draft is already open.
    pub fn begin_edit(&mut self, current: Rgb) {
        if *self == HexField::Committed {
            *self = HexField::Editing(display_hex(current));
        }
    }

    /// Replace the draft.
    pub fn edit(&mut self, text: impl Into<String>) {
        *self = HexField::Editing(text.into());
    }

    pub fn draft(&self) -> Option<&str> {
        match self {
            HexField::Editing(text) => Some(text),
            HexField::Committed => None,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, HexField::Editing(_))
    }

    /// Close the draft and resolve it.
    ///
    /// `hue` is the current hue sample; an unparsable draft resolves to it
    /// at full saturation and value. Returns `None` when no draft was open.
    pub fn commit(&mut self, hue: Rgb) -> Option<(Hsv, Rgb)> {
        let draft = match std::mem::take(self) {
            HexField::Editing(text) => text,
            HexField::Committed => return None,
        };
        Some(match math::hex_to_rgb(&draft) {
            Ok(rgb) => (math::rgb_to_hsv(rgb), rgb),
            Err(err) => {
                tracing::warn!(%err, "hex draft rejected, saturating current hue");
                let hsv = math::rgb_to_hsv(hue).pure_hue();
                (hsv, math::hsv_to_rgb(hsv))
            }
        })
    }
}
