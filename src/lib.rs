//! # floem-sv-picker
//!
//! A saturation/value color picker for [Floem](https://github.com/lapce/floem).
//!
//! The picker is a 2D saturation/value surface over a hue strip, with hex,
//! RGB and HSV text entry. The color engine and the selection state machine
//! are plain Rust and usable without a window:
//!
//! ```rust
//! use floem_sv_picker::{ColorPicker, Coordinate, PickerConfig, Rgb};
//!
//! let mut picker: ColorPicker = ColorPicker::new(PickerConfig::default(), Some(Rgb::new(255, 2, 0)));
//! picker.set_surface_selector(Coordinate::new(288.0, 0.0));
//! assert_eq!(picker.color(), Rgb::new(255, 0, 0));
//! ```
//!
//! ## Widget
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_sv_picker::{color_picker, Rgb};
//!
//! let color = RwSignal::new(Rgb::new(59, 130, 246));
//! // Use `color_picker(color)` in your Floem view tree.
//! ```

mod color;
mod config;
mod constants;
mod drag;
mod editor;
mod error;
#[cfg(all(feature = "eyedropper", target_os = "macos"))]
mod eyedropper;
mod hue_map;
mod hue_strip;
mod inputs;
mod math;
mod picker;
mod resolver;
mod state;
mod surface_map;
mod sv_area;

pub use color::{Coordinate, Hsv, Rgb};
pub use config::PickerConfig;
pub use drag::{DragAxis, DragController, DragState, PointerCapture};
pub use error::PickerError;
pub use hue_map::{hue_from_position, position_from_hue, HUE_STOPS};
pub use math::{hex_to_rgb, hsv_to_rgb, is_valid_rgb, min_max, rgb_to_hex, rgb_to_hsv};
pub use picker::{ColorPicker, ListenerId};
pub use resolver::{
    display_hex, parse_channel, resolve_hsv_field, resolve_rgb_field, Channel, HexField,
    InputMode, NUMERIC_FALLBACK,
};
pub use state::{Geometry, Seed, SelectionEvent, SelectionState};
pub use surface_map::{color_at, color_from_surface_position};

use std::sync::Once;

use floem::prelude::*;
use floem::reactive::RwSignal;
use floem::text::FONT_SYSTEM;

static LOAD_LUCIDE_FONT: Once = Once::new();

/// Creates the color picker view with the default layout.
///
/// `color` seeds the picker and receives every canonical color afterwards.
pub fn color_picker(color: RwSignal<Rgb>) -> impl IntoView {
    color_picker_with(color, PickerConfig::default())
}

/// Creates the color picker view with a custom layout.
///
/// An invalid `config` is logged and replaced by the default one.
pub fn color_picker_with(color: RwSignal<Rgb>, config: PickerConfig) -> impl IntoView {
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });
    let config = match config.validate() {
        Ok(()) => config,
        Err(err) => {
            tracing::warn!(%err, "invalid picker config, using defaults");
            PickerConfig::default()
        }
    };
    editor::color_editor(color, config)
}
