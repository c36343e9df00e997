//! Saturation/value surface.
//!
//! Rasterizes `color_from_surface_position` for the current hue into an
//! RGBA8 buffer (cached per hue and physical size) and draws the selector
//! handle filled with the canonical color. Pointer presses, moves and
//! releases drive the picker's surface drag controller.

use std::sync::Arc;

use floem::kurbo::{Circle, Point, Rect};
use floem::peniko::{self, Blob, Color};

use floem::reactive::{create_effect, RwSignal, SignalGet};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::color::{Coordinate, Rgb};
use crate::constants;
use crate::editor::{edit, SharedPicker};
use crate::state::SelectionState;
use crate::surface_map::color_from_surface_position;

/// Rasterize the surface for `hue` at `width`×`height` physical pixels.
///
/// Pixel centers are mapped back into the logical `surface_w`×`surface_h`
/// space before sampling, so the raster matches what a pointer picks.
fn rasterize_surface(
    hue: Rgb,
    width: u32,
    height: u32,
    surface_w: f64,
    surface_h: f64,
) -> Vec<u8> {
    let mut buf = vec![0u8; (width * height * 4) as usize];
    for py in 0..height {
        let y = (py as f64 + 0.5) / height as f64 * surface_h;
        let row_offset = (py * width * 4) as usize;
        for px in 0..width {
            let x = (px as f64 + 0.5) / width as f64 * surface_w;
            let c = color_from_surface_position(hue, x, y, surface_w, surface_h);
            let offset = row_offset + (px * 4) as usize;
            buf[offset] = c.r;
            buf[offset + 1] = c.g;
            buf[offset + 2] = c.b;
            buf[offset + 3] = 255;
        }
    }
    buf
}

struct SurfaceUpdate {
    hue: Rgb,
    selector: Coordinate,
    color: Rgb,
}

pub(crate) struct SvArea {
    id: ViewId,
    picker: SharedPicker,
    hue: Rgb,
    selector: Coordinate,
    color: Rgb,
    surface_w: f64,
    surface_h: f64,
    size: floem::taffy::prelude::Size<f32>,
    img: Option<peniko::Image>,
    img_hash: Vec<u8>,
    cached_hue: Option<Rgb>,
    cached_dims: (u32, u32),
}

/// Creates the saturation/value surface.
///
/// `snapshot` mirrors the picker state after every edit; the view only
/// reads it. Edits go through `picker`.
pub(crate) fn sv_area(picker: SharedPicker, snapshot: RwSignal<SelectionState>) -> SvArea {
    let id = ViewId::new();

    create_effect(move |_| {
        let state = snapshot.get();
        id.update_state(SurfaceUpdate {
            hue: state.hue(),
            selector: state.surface(),
            color: state.color(),
        });
    });

    let state = snapshot.get_untracked();
    let geometry = state.geometry();

    SvArea {
        id,
        picker,
        hue: state.hue(),
        selector: state.surface(),
        color: state.color(),
        surface_w: geometry.surface_width,
        surface_h: geometry.surface_height,
        size: Default::default(),
        img: None,
        img_hash: Vec::new(),
        cached_hue: None,
        cached_dims: (0, 0),
    }
    .style(move |s| {
        s.width(geometry.surface_width)
            .height(geometry.surface_height)
            .border_radius(constants::GAP / 2.0)
            .cursor(floem::style::CursorStyle::Default)
    })
}

impl SvArea {
    fn ensure_surface_image(&mut self, scale: f64) {
        let s = scale.max(1.0);
        let pw = (self.size.width as f64 * s).round() as u32;
        let ph = (self.size.height as f64 * s).round() as u32;
        if pw == 0 || ph == 0 {
            return;
        }
        let dims = (pw, ph);
        if self.cached_dims == dims && self.cached_hue == Some(self.hue) {
            return;
        }

        let pixels = rasterize_surface(self.hue, pw, ph, self.surface_w, self.surface_h);
        let blob = Blob::new(Arc::new(pixels));
        let img = peniko::Image::new(blob.clone(), peniko::Format::Rgba8, pw, ph);

        self.img_hash = blob.id().to_le_bytes().to_vec();
        self.img = Some(img);
        self.cached_hue = Some(self.hue);
        self.cached_dims = dims;
    }
}

fn pointer(pos: Point) -> Coordinate {
    Coordinate::new(pos.x, pos.y)
}

impl View for SvArea {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<SurfaceUpdate>() {
            self.hue = update.hue;
            self.selector = update.selector;
            self.color = update.color;
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        // Pointer positions are already view-local.
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                let at = pointer(e.pos);
                edit(&self.picker, |p| p.press_surface((), at, Coordinate::ORIGIN));
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                let at = pointer(e.pos);
                let events = edit(&self.picker, |p| p.drag_surface(at, Coordinate::ORIGIN));
                if events.is_empty() {
                    EventPropagation::Continue
                } else {
                    EventPropagation::Stop
                }
            }
            Event::PointerUp(_) | Event::FocusLost => {
                edit(&self.picker, |p| p.release_surface());
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
        let rect = Rect::new(0.0, 0.0, w, h);

        let scale = cx.scale();
        self.ensure_surface_image(scale);
        if let Some(ref img) = self.img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.img_hash,
                },
                rect,
            );
        }

        // Handle: canonical color inside a white ring
        let center = Point::new(self.selector.x, self.selector.y);
        let radius = constants::HANDLE_RADIUS;
        let c = self.color;
        cx.fill(
            &Circle::new(center, radius),
            Color::rgb8(c.r, c.g, c.b),
            0.0,
        );
        cx.stroke(
            &Circle::new(center, radius),
            Color::WHITE,
            &floem::kurbo::Stroke::new(2.0),
        );
        cx.stroke(
            &Circle::new(center, radius + 1.5),
            Color::rgba8(0, 0, 0, 80),
            &floem::kurbo::Stroke::new(1.0),
        );
    }
}
