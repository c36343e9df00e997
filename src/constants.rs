//! Sizing, color, and styling constants for the picker.

/// Default saturation/value surface width
pub const SURFACE_WIDTH: f64 = 288.0;

/// Default saturation/value surface height
pub const SURFACE_HEIGHT: f64 = 256.0;

/// Default hue strip width
pub const HUE_WIDTH: f64 = 220.0;

/// Hue strip track height
pub const HUE_HEIGHT: f32 = 12.0;

/// Selector handle radius on the surface
pub const HANDLE_RADIUS: f64 = 7.0;

/// Thumb radius on the hue strip
pub const THUMB_RADIUS: f64 = 8.0;

/// Gap between picker elements
pub const GAP: f32 = 8.0;

/// Padding around the whole picker
pub const PADDING: f32 = 8.0;

/// Numeric input field width
pub const INPUT_WIDTH: f32 = 36.0;

/// Hex input field width
pub const HEX_INPUT_WIDTH: f32 = 64.0;

/// Input font size
pub const INPUT_FONT: f32 = 11.0;

/// Label font size
pub const LABEL_FONT: f32 = 10.0;

/// Swatch side length
pub const SWATCH_SIZE: f32 = 24.0;
