//! Picker panel: saturation/value surface, hue strip, swatch, and the text
//! input row, all bound to one shared `ColorPicker`.

use std::cell::RefCell;
use std::rc::Rc;

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate};

use crate::color::Rgb;
use crate::config::PickerConfig;
use crate::constants;
#[cfg(all(feature = "eyedropper", target_os = "macos"))]
use crate::eyedropper::eyedropper_button;
use crate::hue_strip::hue_strip;
use crate::inputs::{copy_button, hex_input, hsv_inputs, mode_selector, rgb_inputs};
use crate::picker::ColorPicker;
use crate::resolver::InputMode;
use crate::state::SelectionEvent;
use crate::sv_area::sv_area;

/// The picker shared by every view of one panel.
pub(crate) type SharedPicker = Rc<RefCell<ColorPicker>>;

/// Run an edit against the shared picker.
///
/// Edits never nest on the UI thread; if one arrives while another is still
/// notifying listeners it is dropped with a warning.
pub(crate) fn edit<R: Default>(picker: &SharedPicker, f: impl FnOnce(&mut ColorPicker) -> R) -> R {
    match picker.try_borrow_mut() {
        Ok(mut p) => f(&mut p),
        Err(_) => {
            tracing::warn!("picker busy, edit dropped");
            R::default()
        }
    }
}

/// Creates the picker panel.
///
/// `color` seeds the picker once. Every later canonical color is written
/// back to it; outside writes after that are not read.
pub(crate) fn color_editor(color: RwSignal<Rgb>, config: PickerConfig) -> impl IntoView {
    let mut picker = ColorPicker::new(config, Some(color.get_untracked()));

    // Read-only mirror of the picker state for the views.
    let snapshot = RwSignal::new(*picker.state());
    let mode = RwSignal::new(picker.mode());

    // Every edit ends with exactly one color event.
    picker.subscribe(move |event, state| {
        if let SelectionEvent::Color(rgb) = event {
            snapshot.set(*state);
            if color.get_untracked() != *rgb {
                color.set(*rgb);
            }
        }
    });

    let picker: SharedPicker = Rc::new(RefCell::new(picker));

    let hex_row = {
        let picker = picker.clone();
        h_stack((
            hex_input(picker, snapshot),
            copy_button(move || snapshot.get().color().to_hex()),
        ))
        .style(move |s| {
            s.gap(constants::GAP / 2.0)
                .items_center()
                .apply_if(mode.get() != InputMode::Hex, |s| s.hide())
        })
    };

    let rgb_row = {
        let picker = picker.clone();
        h_stack((
            rgb_inputs(picker, snapshot),
            copy_button(move || snapshot.get().color().to_string()),
        ))
        .style(move |s| {
            s.gap(constants::GAP / 2.0)
                .items_center()
                .apply_if(mode.get() != InputMode::Rgb, |s| s.hide())
        })
    };

    let hsv_row = {
        let picker = picker.clone();
        h_stack((
            hsv_inputs(picker, snapshot),
            copy_button(move || snapshot.get().hsv().to_string()),
        ))
        .style(move |s| {
            s.gap(constants::GAP / 2.0)
                .items_center()
                .apply_if(mode.get() != InputMode::Hsv, |s| s.hide())
        })
    };

    v_stack((
        // Saturation/value surface
        sv_area(picker.clone(), snapshot),
        // Swatch (+ eyedropper) and hue strip row
        h_stack((
            #[cfg(all(feature = "eyedropper", target_os = "macos"))]
            eyedropper_button(picker.clone()),
            empty().style(move |st| {
                let c = snapshot.get().color();
                st.width(constants::SWATCH_SIZE)
                    .height(constants::SWATCH_SIZE)
                    .border_radius(constants::SWATCH_SIZE / 2.0)
                    .border(1.0)
                    .border_color(Color::rgb8(180, 180, 180))
                    .background(Color::rgb8(c.r, c.g, c.b))
            }),
            empty().style(|s| s.flex_grow(1.0)),
            hue_strip(picker.clone(), snapshot),
        ))
        .style(|st| st.items_center().gap(constants::GAP).margin_horiz(constants::PADDING)),
        // Mode selector + the fields for the active mode
        h_stack((
            mode_selector(picker.clone(), mode),
            empty().style(|s| s.flex_grow(1.0)),
            hex_row,
            rgb_row,
            hsv_row,
        ))
        .style(|st| st.items_center().gap(constants::GAP).margin_horiz(constants::PADDING)),
    ))
    .style(|st| {
        st.gap(constants::GAP)
            .padding_bottom(constants::PADDING)
            .background(Color::WHITE)
    })
}
