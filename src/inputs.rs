//! Text input components: mode selector, numeric channel fields, the hex
//! field, and copy buttons.
//!
//! Fields keep whatever the user types until Enter or focus loss, then hand
//! the raw text to the picker, which resolves it.

use std::rc::Rc;

use floem::event::EventPropagation;
use floem::prelude::*;
use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};

use crate::constants;
use crate::editor::{edit, SharedPicker};
use crate::resolver::{self, Channel, InputMode};
use crate::state::SelectionState;

fn field_style(s: floem::style::Style, width: f32) -> floem::style::Style {
    s.width(width)
        .padding(2.0)
        .font_size(constants::INPUT_FONT)
        .font_family("monospace".to_string())
        .background(Color::WHITE)
        .border(1.0)
        .border_color(Color::rgb8(200, 200, 200))
        .border_radius(3.0)
}

fn is_enter(e: &floem::event::Event) -> bool {
    match e {
        floem::event::Event::KeyDown(ke) => {
            ke.key.logical_key == floem::keyboard::Key::Named(floem::keyboard::NamedKey::Enter)
        }
        _ => false,
    }
}

/// A numeric field showing `display(state)` and committing through `on_commit`.
fn number_input(
    lbl: &'static str,
    snapshot: RwSignal<SelectionState>,
    display: impl Fn(&SelectionState) -> String + 'static,
    on_commit: impl Fn(&str) + 'static,
) -> impl IntoView {
    let display = Rc::new(display);
    let text = RwSignal::new(display(&snapshot.get_untracked()));

    // State → text
    let display_fwd = display.clone();
    create_effect(move |_| {
        let expected = display_fwd(&snapshot.get());
        if text.get_untracked() != expected {
            text.set(expected);
        }
    });

    let commit = Rc::new(move || {
        let raw = text.get_untracked();
        if raw != display(&snapshot.get_untracked()) {
            on_commit(&raw);
        }
        // Show the settled value even when the edit changed nothing.
        let settled = display(&snapshot.get_untracked());
        if raw != settled {
            text.set(settled);
        }
    });
    let commit_on_enter = commit.clone();

    v_stack((
        text_input(text)
            .style(|s| field_style(s, constants::INPUT_WIDTH))
            .on_event_stop(floem::event::EventListener::FocusLost, move |_| {
                commit();
            })
            .on_event(floem::event::EventListener::KeyDown, move |e| {
                if is_enter(e) {
                    commit_on_enter();
                    return EventPropagation::Stop;
                }
                EventPropagation::Continue
            }),
        label(move || lbl).style(|s| {
            s.font_size(constants::LABEL_FONT)
                .color(Color::rgb8(120, 120, 120))
                .justify_content(Some(floem::taffy::AlignContent::Center))
        }),
    ))
    .style(|s| s.items_center().gap(1.0))
}

fn rgb_field(
    picker: SharedPicker,
    snapshot: RwSignal<SelectionState>,
    channel: Channel,
    lbl: &'static str,
) -> impl IntoView {
    number_input(
        lbl,
        snapshot,
        move |state| state.color().channels()[channel.index()].to_string(),
        move |text| {
            edit(&picker, |p| p.commit_rgb_field(channel, text));
        },
    )
}

fn hsv_field(
    picker: SharedPicker,
    snapshot: RwSignal<SelectionState>,
    channel: Channel,
    lbl: &'static str,
) -> impl IntoView {
    number_input(
        lbl,
        snapshot,
        move |state| {
            let hsv = state.hsv();
            let value = match channel {
                Channel::First => hsv.h,
                Channel::Second => hsv.s,
                Channel::Third => hsv.v,
            };
            format!("{}", value.round() as i64)
        },
        move |text| {
            edit(&picker, |p| p.commit_hsv_field(channel, text));
        },
    )
}

/// R, G, B fields (0–255).
pub(crate) fn rgb_inputs(picker: SharedPicker, snapshot: RwSignal<SelectionState>) -> impl IntoView {
    h_stack((
        rgb_field(picker.clone(), snapshot, Channel::First, "R"),
        rgb_field(picker.clone(), snapshot, Channel::Second, "G"),
        rgb_field(picker, snapshot, Channel::Third, "B"),
    ))
    .style(|s| s.gap(constants::GAP / 2.0))
}

/// H (0–360), S and V (0–100) fields.
pub(crate) fn hsv_inputs(picker: SharedPicker, snapshot: RwSignal<SelectionState>) -> impl IntoView {
    h_stack((
        hsv_field(picker.clone(), snapshot, Channel::First, "H"),
        hsv_field(picker.clone(), snapshot, Channel::Second, "S"),
        hsv_field(picker, snapshot, Channel::Third, "V"),
    ))
    .style(|s| s.gap(constants::GAP / 2.0))
}

/// The hex field.
///
/// Focus opens a draft in the picker; the typed text is only parsed when
/// editing ends, so partial strings like `3B8` are never applied mid-edit.
pub(crate) fn hex_input(picker: SharedPicker, snapshot: RwSignal<SelectionState>) -> impl IntoView {
    let text = RwSignal::new(resolver::display_hex(snapshot.get_untracked().color()));

    // State → text
    create_effect(move |_| {
        let val = resolver::display_hex(snapshot.get().color());
        if text.get_untracked() != val {
            text.set(val);
        }
    });

    let begin = picker.clone();
    let commit = Rc::new(move || {
        let raw = text.get_untracked();
        edit(&picker, |p| {
            p.edit_hex(raw.clone());
            p.commit_hex()
        });
        let settled = resolver::display_hex(snapshot.get_untracked().color());
        if raw != settled {
            text.set(settled);
        }
    });
    let commit_on_enter = commit.clone();

    h_stack((
        label(|| "#").style(|s| {
            s.font_size(constants::INPUT_FONT)
                .font_family("monospace".to_string())
                .color(Color::rgb8(120, 120, 120))
        }),
        text_input(text)
            .style(|s| field_style(s, constants::HEX_INPUT_WIDTH))
            .on_event_stop(floem::event::EventListener::FocusGained, move |_| {
                edit(&begin, |p| p.begin_hex_edit());
            })
            .on_event_stop(floem::event::EventListener::FocusLost, move |_| {
                commit();
            })
            .on_event(floem::event::EventListener::KeyDown, move |e| {
                if is_enter(e) {
                    commit_on_enter();
                    return EventPropagation::Stop;
                }
                EventPropagation::Continue
            }),
    ))
    .style(|s| s.items_center().gap(1.0))
}

fn mode_tab(picker: SharedPicker, mode: RwSignal<InputMode>, tab: InputMode) -> impl IntoView {
    label(move || tab.label())
        .style(move |s| {
            let active = mode.get() == tab;
            let c = if active {
                Color::rgb8(40, 40, 40)
            } else {
                Color::rgb8(120, 120, 120)
            };
            s.font_size(constants::INPUT_FONT)
                .padding_horiz(4.0)
                .padding_vert(2.0)
                .border_radius(3.0)
                .color(c)
                .cursor(floem::style::CursorStyle::Pointer)
                .apply_if(active, |s| s.background(Color::rgb8(225, 225, 225)))
                .hover(|s| s.background(Color::rgb8(235, 235, 235)))
        })
        .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
            edit(&picker, |p| p.set_mode(tab));
            mode.set(tab);
        })
}

/// Hex / RGB / HSV switch.
pub(crate) fn mode_selector(picker: SharedPicker, mode: RwSignal<InputMode>) -> impl IntoView {
    let [hex, rgb, hsv] = InputMode::ALL;
    h_stack((
        mode_tab(picker.clone(), mode, hex),
        mode_tab(picker.clone(), mode, rgb),
        mode_tab(picker, mode, hsv),
    ))
    .style(|s| s.gap(2.0).items_center())
}

/// A 20×20 glyph button from the lucide font. The glyph darkens while
/// pressed and `on_click` runs on release.
pub(crate) fn icon_button(icon: lucide_icons::Icon, on_click: impl Fn() + 'static) -> impl IntoView {
    let glyph = icon.unicode().to_string();
    let pressed = RwSignal::new(false);
    container(label(move || glyph.clone()).style(move |s| {
        let c = if pressed.get() {
            Color::rgb8(80, 80, 80)
        } else {
            Color::rgb8(120, 120, 120)
        };
        s.font_size(14.0).font_family("lucide".to_string()).color(c)
    }))
    .style(|s| {
        s.size(20.0, 20.0)
            .items_center()
            .justify_center()
            .border_radius(3.0)
            .cursor(floem::style::CursorStyle::Pointer)
            .hover(|s| s.background(Color::rgb8(230, 230, 230)))
    })
    .on_event_stop(floem::event::EventListener::PointerDown, move |_| {
        pressed.set(true);
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        pressed.set(false);
        on_click();
    })
}

/// Copies the result of `get_text` to the clipboard.
pub(crate) fn copy_button(get_text: impl Fn() -> String + 'static) -> impl IntoView {
    icon_button(lucide_icons::Icon::Copy, move || copy_to_clipboard(&get_text()))
}

fn copy_to_clipboard(text: &str) {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(err) = clipboard.set_text(text) {
                tracing::warn!(%err, "clipboard write failed");
            }
        }
        Err(err) => tracing::warn!(%err, "clipboard unavailable"),
    }
}
