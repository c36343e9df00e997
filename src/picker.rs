//! `ColorPicker`: the single writer of a [`SelectionState`].
//!
//! Views never touch the state directly. They call the edit entry points
//! here (drags on the two areas, text commits) and learn about the result
//! through subscribed listeners, which run after the state is fully updated.

use crate::color::{Coordinate, Hsv, Rgb};
use crate::config::PickerConfig;
use crate::constants;
use crate::drag::{DragAxis, DragController, PointerCapture};
use crate::math;
use crate::resolver::{self, Channel, HexField, InputMode};
use crate::state::{Geometry, SelectionEvent, SelectionState};

/// Handle returned by [`ColorPicker::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&SelectionEvent, &SelectionState)>;

pub struct ColorPicker<C: PointerCapture = ()> {
    state: SelectionState,
    surface_drag: DragController<C>,
    hue_drag: DragController<C>,
    mode: InputMode,
    hex: HexField,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl<C: PointerCapture> ColorPicker<C> {
    /// Build a picker, seeding it from `initial` when given.
    pub fn new(config: PickerConfig, initial: Option<Rgb>) -> Self {
        let geometry = Geometry {
            surface_width: config.surface_width,
            surface_height: config.surface_height,
            hue_width: config.hue_width,
        };
        Self {
            state: SelectionState::with_initial(geometry, initial),
            surface_drag: DragController::new(
                DragAxis::Both,
                config.surface_width,
                config.surface_height,
            ),
            hue_drag: DragController::new(
                DragAxis::Horizontal,
                config.hue_width,
                f64::from(constants::HUE_HEIGHT),
            ),
            mode: config.initial_mode,
            hex: HexField::Committed,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn color(&self) -> Rgb {
        self.state.color()
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
    }

    pub fn hex_field(&self) -> &HexField {
        &self.hex
    }

    pub fn is_dragging(&self) -> bool {
        self.surface_drag.is_dragging() || self.hue_drag.is_dragging()
    }

    /// Register a listener for every subsequent [`SelectionEvent`].
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&SelectionEvent, &SelectionState) + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns whether the listener was registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    // -- Surface drag --

    pub fn press_surface(
        &mut self,
        capture: C,
        pointer: Coordinate,
        origin: Coordinate,
    ) -> Vec<SelectionEvent> {
        let at = self.surface_drag.press(capture, pointer, origin);
        self.set_surface_selector(at)
    }

    pub fn drag_surface(&mut self, pointer: Coordinate, origin: Coordinate) -> Vec<SelectionEvent> {
        match self.surface_drag.drag(pointer, origin) {
            Some(at) => self.set_surface_selector(at),
            None => Vec::new(),
        }
    }

    pub fn release_surface(&mut self) -> bool {
        self.surface_drag.release()
    }

    // -- Hue drag --

    pub fn press_hue(
        &mut self,
        capture: C,
        pointer: Coordinate,
        origin: Coordinate,
    ) -> Vec<SelectionEvent> {
        let at = self.hue_drag.press(capture, pointer, origin);
        self.set_hue(at.x)
    }

    pub fn drag_hue(&mut self, pointer: Coordinate, origin: Coordinate) -> Vec<SelectionEvent> {
        match self.hue_drag.drag(pointer, origin) {
            Some(at) => self.set_hue(at.x),
            None => Vec::new(),
        }
    }

    pub fn release_hue(&mut self) -> bool {
        self.hue_drag.release()
    }

    // -- Direct state edits --

    pub fn set_surface_selector(&mut self, at: Coordinate) -> Vec<SelectionEvent> {
        let events = self.state.set_surface_selector(at);
        self.notify(events)
    }

    pub fn set_hue(&mut self, x: f64) -> Vec<SelectionEvent> {
        let events = self.state.set_hue(x);
        self.notify(events)
    }

    pub fn set_from_text(&mut self, hsv: Hsv, rgb: Rgb) -> Vec<SelectionEvent> {
        let events = self.state.set_from_text(hsv, rgb);
        self.notify(events)
    }

    /// One-shot initial color; a no-op once seeded.
    pub fn seed(&mut self, rgb: Rgb) -> Vec<SelectionEvent> {
        let events = self.state.seed_from_initial_color(rgb);
        self.notify(events)
    }

    // -- Text fields --

    /// Commit one RGB field. A value that leaves the color as it is
    /// produces no events, so the hue selector keeps its place.
    pub fn commit_rgb_field(&mut self, channel: Channel, text: &str) -> Vec<SelectionEvent> {
        let (hsv, rgb) = resolver::resolve_rgb_field(self.state.color(), channel, text);
        if rgb == self.state.color() {
            tracing::trace!(?channel, text, "rgb field unchanged");
            return Vec::new();
        }
        tracing::debug!(?channel, text, "rgb field committed");
        self.set_from_text(hsv, rgb)
    }

    /// Commit one HSV field, unless it still shows what the fields display.
    ///
    /// The comparison is on displayed values rather than RGB: a new hue on
    /// white leaves the color alone but must still move the hue selector.
    pub fn commit_hsv_field(&mut self, channel: Channel, text: &str) -> Vec<SelectionEvent> {
        let current = self.state.hsv();
        let (hsv, rgb) = resolver::resolve_hsv_field(current, channel, text);
        if same_display(hsv, current) {
            tracing::trace!(?channel, text, "hsv field unchanged");
            return Vec::new();
        }
        tracing::debug!(?channel, text, "hsv field committed");
        self.set_from_text(hsv, rgb)
    }

    /// Open a hex draft seeded with the current color.
    pub fn begin_hex_edit(&mut self) {
        self.hex.begin_edit(self.state.color());
    }

    pub fn edit_hex(&mut self, text: impl Into<String>) {
        self.hex.edit(text);
    }

    /// Resolve the open hex draft, if any, into the selection state.
    ///
    /// A draft naming the current color closes without events.
    pub fn commit_hex(&mut self) -> Vec<SelectionEvent> {
        let current = self.state.color();
        if self
            .hex
            .draft()
            .is_some_and(|draft| math::hex_to_rgb(draft) == Ok(current))
        {
            self.hex = HexField::Committed;
            tracing::trace!("hex field unchanged");
            return Vec::new();
        }
        match self.hex.commit(self.state.hue()) {
            Some((hsv, rgb)) => {
                tracing::debug!(color = %rgb, "hex field committed");
                self.set_from_text(hsv, rgb)
            }
            None => Vec::new(),
        }
    }

    fn notify(&mut self, events: Vec<SelectionEvent>) -> Vec<SelectionEvent> {
        for event in &events {
            for (_, listener) in self.listeners.iter_mut() {
                listener(event, &self.state);
            }
        }
        events
    }
}

fn same_display(a: Hsv, b: Hsv) -> bool {
    a.h.round() == b.h.round() && a.s.round() == b.s.round() && a.v.round() == b.v.round()
}
