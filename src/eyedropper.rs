//! Screen color sampling on macOS through `NSColorSampler`.
//!
//! The sampler is asynchronous. macOS shows its magnifier, and the selection
//! handler runs later on the main thread with the clicked pixel, or with
//! nil when the user presses Esc. A sample enters the picker through
//! `set_from_text`, the same path as a typed color.

use std::cell::Cell;

use block2::RcBlock;
use objc2::rc::{Allocated, Id};
use objc2::runtime::{AnyClass, AnyObject};
use objc2::{msg_send, msg_send_id};

use floem::prelude::*;

use crate::color::Rgb;
use crate::editor::{edit, SharedPicker};
use crate::inputs::icon_button;

/// Convert an `NSColor` to an sRGB [`Rgb`], dropping alpha.
///
/// # Safety
///
/// `color` must be null or point to a live `NSColor`.
unsafe fn srgb_of(color: *mut AnyObject) -> Option<Rgb> {
    if color.is_null() {
        return None;
    }
    let space_class = AnyClass::get("NSColorSpace")?;
    let space: *const AnyObject = msg_send![space_class, sRGBColorSpace];
    if space.is_null() {
        return None;
    }
    let converted: *const AnyObject = msg_send![&*color, colorUsingColorSpace: &*space];
    if converted.is_null() {
        return None;
    }
    let [mut r, mut g, mut b, mut alpha] = [0.0_f64; 4];
    let _: () = msg_send![
        &*converted,
        getRed: &mut r,
        green: &mut g,
        blue: &mut b,
        alpha: &mut alpha
    ];
    Some(Rgb::from_f64_channels(r * 255.0, g * 255.0, b * 255.0))
}

/// Open the system sampler; `on_pick` runs at most once.
///
/// Call from the main thread. Floem event handlers run there.
fn sample_screen(on_pick: impl FnOnce(Rgb) + 'static) {
    let Some(class) = AnyClass::get("NSColorSampler") else {
        tracing::warn!("NSColorSampler unavailable");
        return;
    };

    let pending: Cell<Option<Box<dyn FnOnce(Rgb)>>> = Cell::new(Some(Box::new(on_pick)));
    let handler = RcBlock::new(move |color: *mut AnyObject| {
        match unsafe { srgb_of(color) } {
            Some(rgb) => {
                if let Some(on_pick) = pending.take() {
                    on_pick(rgb);
                }
            }
            None => tracing::debug!("eyedropper cancelled"),
        }
    });

    unsafe {
        let sampler: Allocated<AnyObject> = msg_send_id![class, alloc];
        let sampler: Id<AnyObject> = msg_send_id![sampler, init];
        let _: () = msg_send![&*sampler, showSamplerWithSelectionHandler: &*handler];
    }
}

/// Pipette button next to the swatch.
pub(crate) fn eyedropper_button(picker: SharedPicker) -> impl IntoView {
    icon_button(lucide_icons::Icon::Pipette, move || {
        let picker = picker.clone();
        sample_screen(move |picked| {
            tracing::debug!(%picked, "eyedropper sample");
            edit(&picker, |p| p.set_from_text(picked.to_hsv(), picked));
        });
    })
}
