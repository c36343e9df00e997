//! Picker configuration: surface geometry and the initial text input mode.

use crate::constants;
use crate::error::PickerError;
use crate::resolver::InputMode;

/// Sizes of the two selection areas plus the text mode shown first.
///
/// Coordinates handed to the selection state are in these pixel units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickerConfig {
    pub surface_width: f64,
    pub surface_height: f64,
    pub hue_width: f64,
    pub initial_mode: InputMode,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            surface_width: constants::SURFACE_WIDTH,
            surface_height: constants::SURFACE_HEIGHT,
            hue_width: constants::HUE_WIDTH,
            initial_mode: InputMode::Hex,
        }
    }
}

impl PickerConfig {
    #[must_use]
    pub fn surface_size(mut self, width: f64, height: f64) -> Self {
        self.surface_width = width;
        self.surface_height = height;
        self
    }

    #[must_use]
    pub fn hue_width(mut self, width: f64) -> Self {
        self.hue_width = width;
        self
    }

    #[must_use]
    pub fn initial_mode(mut self, mode: InputMode) -> Self {
        self.initial_mode = mode;
        self
    }

    /// Reject sizes the mappers cannot divide by.
    pub fn validate(&self) -> Result<(), PickerError> {
        let usable = |v: f64| v.is_finite() && v > 0.0;
        if !usable(self.surface_width) || !usable(self.surface_height) {
            return Err(PickerError::InvalidDimensions {
                width: self.surface_width,
                height: self.surface_height,
            });
        }
        if !usable(self.hue_width) {
            return Err(PickerError::InvalidDimensions {
                width: self.hue_width,
                height: f64::from(constants::HUE_HEIGHT),
            });
        }
        Ok(())
    }
}
