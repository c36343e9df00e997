//! Error types for the picker's conversion and configuration boundary.

use thiserror::Error;

/// Errors produced when raw input cannot be turned into a picker value.
///
/// Interactive edits never surface these: the text resolver and selection
/// state recover by fallback or clamping. They exist so the conversion
/// functions can report *why* an input was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PickerError {
    /// A hex string did not match the `#rgb` / `#rrggbb` grammar.
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),

    /// A raw channel tuple was not three integers in 0–255.
    #[error("invalid rgb value: {0}")]
    InvalidRgb(String),

    /// A surface or strip size was zero, negative, or not finite.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: f64, height: f64 },
}
