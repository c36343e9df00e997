//! Hue strip.
//!
//! Renders the piecewise hue spectrum as a rasterized image (the strip does
//! not depend on picker state, so it is only redrawn when its size changes)
//! with a ring thumb at the hue selector.

use std::sync::Arc;

use floem::kurbo::{Circle, Rect};
use floem::peniko::{self, Blob, Color};

use floem::reactive::{create_effect, RwSignal, SignalGet};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::color::Coordinate;
use crate::constants;
use crate::editor::{edit, SharedPicker};
use crate::hue_map::hue_from_position;
use crate::state::SelectionState;

/// Rasterize the spectrum: one `hue_from_position` sample per column.
fn rasterize_spectrum(width: u32, height: u32) -> Vec<u8> {
    let mut buf = vec![0u8; (width * height * 4) as usize];
    for px in 0..width {
        let c = hue_from_position(px as f64 + 0.5, width as f64);
        for py in 0..height {
            let offset = ((py * width + px) * 4) as usize;
            buf[offset] = c.r;
            buf[offset + 1] = c.g;
            buf[offset + 2] = c.b;
            buf[offset + 3] = 255;
        }
    }
    buf
}

pub(crate) struct HueStrip {
    id: ViewId,
    picker: SharedPicker,
    hue_x: f64,
    size: floem::taffy::prelude::Size<f32>,
    img: Option<peniko::Image>,
    img_hash: Vec<u8>,
    cached_dims: (u32, u32),
}

/// Creates the hue strip. The thumb follows `snapshot`'s hue selector.
pub(crate) fn hue_strip(picker: SharedPicker, snapshot: RwSignal<SelectionState>) -> HueStrip {
    let id = ViewId::new();

    create_effect(move |_| {
        let x = snapshot.get().hue_x();
        id.update_state(x);
    });

    let state = snapshot.get_untracked();
    let width = state.geometry().hue_width;

    HueStrip {
        id,
        picker,
        hue_x: state.hue_x(),
        size: Default::default(),
        img: None,
        img_hash: Vec::new(),
        cached_dims: (0, 0),
    }
    .style(move |s| {
        s.width(width)
            .height((constants::THUMB_RADIUS * 2.0) as f32)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

impl HueStrip {
    /// The track is thinner than the view so the thumb is not clipped.
    fn track_rect(&self) -> Rect {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        let track = f64::from(constants::HUE_HEIGHT);
        let top = (h - track) / 2.0;
        Rect::new(0.0, top, w, top + track)
    }

    fn ensure_spectrum_image(&mut self, scale: f64) {
        let s = scale.max(1.0);
        let pw = (self.size.width as f64 * s).round() as u32;
        let ph = (f64::from(constants::HUE_HEIGHT) * s).round() as u32;
        if pw == 0 || ph == 0 {
            return;
        }
        let dims = (pw, ph);
        if self.cached_dims == dims {
            return;
        }

        let pixels = rasterize_spectrum(pw, ph);
        let blob = Blob::new(Arc::new(pixels));
        let img = peniko::Image::new(blob.clone(), peniko::Format::Rgba8, pw, ph);

        self.img_hash = blob.id().to_le_bytes().to_vec();
        self.img = Some(img);
        self.cached_dims = dims;
    }
}

impl View for HueStrip {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(x) = state.downcast::<f64>() {
            self.hue_x = *x;
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                let at = Coordinate::new(e.pos.x, e.pos.y);
                edit(&self.picker, |p| p.press_hue((), at, Coordinate::ORIGIN));
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                let at = Coordinate::new(e.pos.x, e.pos.y);
                let events = edit(&self.picker, |p| p.drag_hue(at, Coordinate::ORIGIN));
                if events.is_empty() {
                    EventPropagation::Continue
                } else {
                    EventPropagation::Stop
                }
            }
            Event::PointerUp(_) | Event::FocusLost => {
                edit(&self.picker, |p| p.release_hue());
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }
        let track = self.track_rect();
        let rtrack = track.to_rounded_rect(track.height() / 2.0);

        cx.save();
        cx.clip(&rtrack);
        let scale = cx.scale();
        self.ensure_spectrum_image(scale);
        if let Some(ref img) = self.img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.img_hash,
                },
                track,
            );
        }
        cx.restore();

        // Thumb
        let thumb = Circle::new((self.hue_x, h / 2.0), constants::THUMB_RADIUS - 1.0);
        cx.fill(&thumb, Color::WHITE, 0.0);
        cx.stroke(
            &thumb,
            Color::rgba8(0, 0, 0, 80),
            &floem::kurbo::Stroke::new(1.0),
        );
    }
}
