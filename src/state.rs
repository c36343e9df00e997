//! Selection state: the one canonical color and the selector positions
//! derived from it.
//!
//! Every operation leaves the record consistent and reports what changed as
//! a list of [`SelectionEvent`]s, in the order listeners should see them.

use crate::color::{Coordinate, Hsv, Rgb};
use crate::hue_map::{hue_from_position, position_from_hue};
use crate::math;
use crate::surface_map::color_at;

/// Pixel sizes of the surface and the hue strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub surface_width: f64,
    pub surface_height: f64,
    pub hue_width: f64,
}

impl Geometry {
    /// Bound a coordinate into the surface.
    pub fn clamp_surface(&self, at: Coordinate) -> Coordinate {
        Coordinate {
            x: math::min_max(at.x, 0.0, self.surface_width),
            y: math::min_max(at.y, 0.0, self.surface_height),
        }
    }

    /// Bound an x offset into the hue strip.
    pub fn clamp_hue(&self, x: f64) -> f64 {
        math::min_max(x, 0.0, self.hue_width)
    }

    /// Surface coordinate for a saturation/value pair.
    pub fn surface_for(&self, hsv: Hsv) -> Coordinate {
        Coordinate {
            x: hsv.s / 100.0 * self.surface_width,
            y: (1.0 - hsv.v / 100.0) * self.surface_height,
        }
    }

    /// Hue strip offset for a hue in degrees.
    pub fn hue_x_for(&self, hue: f64) -> f64 {
        position_from_hue(hue) * self.hue_width
    }
}

/// Whether the one-shot initial color has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seed {
    Uninitialized,
    Seeded,
}

/// A change to the canonical record, carrying the new value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectionEvent {
    SurfaceSelector(Coordinate),
    Hue { hue: Rgb, position: f64 },
    Color(Rgb),
    TextCommit { hsv: Hsv, rgb: Rgb },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionState {
    geometry: Geometry,
    hue: Rgb,
    color: Rgb,
    hue_x: f64,
    surface: Coordinate,
    seed: Seed,
}

impl SelectionState {
    /// Red hue, white color, both selectors at the origin.
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            hue: Rgb::RED,
            color: Rgb::WHITE,
            hue_x: 0.0,
            surface: Coordinate::ORIGIN,
            seed: Seed::Uninitialized,
        }
    }

    /// A fresh state, seeded from `initial` when one is given.
    pub fn with_initial(geometry: Geometry, initial: Option<Rgb>) -> Self {
        let mut state = Self::new(geometry);
        if let Some(rgb) = initial {
            state.seed_from_initial_color(rgb);
        }
        state
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// The fully saturated sample at the hue selector.
    pub fn hue(&self) -> Rgb {
        self.hue
    }

    /// The canonical color.
    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn hsv(&self) -> Hsv {
        math::rgb_to_hsv(self.color)
    }

    pub fn hue_x(&self) -> f64 {
        self.hue_x
    }

    pub fn surface(&self) -> Coordinate {
        self.surface
    }

    pub fn seed(&self) -> Seed {
        self.seed
    }

    /// Color recomputed from the two selector positions alone.
    pub fn rederived_color(&self) -> Rgb {
        let g = self.geometry;
        let hue = hue_from_position(self.hue_x, g.hue_width);
        color_at(hue, self.surface, g.surface_width, g.surface_height)
    }

    /// Move the surface selector; the color follows under the current hue.
    pub fn set_surface_selector(&mut self, at: Coordinate) -> Vec<SelectionEvent> {
        let g = self.geometry;
        self.surface = g.clamp_surface(at);
        self.color = color_at(self.hue, self.surface, g.surface_width, g.surface_height);
        tracing::trace!(x = self.surface.x, y = self.surface.y, color = %self.color, "surface selector moved");
        vec![
            SelectionEvent::SurfaceSelector(self.surface),
            SelectionEvent::Color(self.color),
        ]
    }

    /// Move the hue selector; the surface selector stays where it is.
    pub fn set_hue(&mut self, x: f64) -> Vec<SelectionEvent> {
        let g = self.geometry;
        self.hue_x = g.clamp_hue(x);
        self.hue = hue_from_position(self.hue_x, g.hue_width);
        self.color = color_at(self.hue, self.surface, g.surface_width, g.surface_height);
        tracing::trace!(x = self.hue_x, hue = %self.hue, color = %self.color, "hue selector moved");
        vec![
            SelectionEvent::Hue {
                hue: self.hue,
                position: self.hue_x,
            },
            SelectionEvent::Color(self.color),
        ]
    }

    /// Accept a validated `(hsv, rgb)` pair from the text fields.
    ///
    /// `rgb` becomes the canonical color as given; both selectors are placed
    /// from `hsv`.
    pub fn set_from_text(&mut self, hsv: Hsv, rgb: Rgb) -> Vec<SelectionEvent> {
        let hsv = Hsv::new(hsv.h, hsv.s, hsv.v);
        self.place_selectors(hsv);
        self.color = rgb;
        tracing::trace!(%hsv, color = %rgb, "text committed");
        let mut events = self.placement_events();
        events.push(SelectionEvent::TextCommit { hsv, rgb });
        events
    }

    /// Apply the externally supplied initial color, at most once.
    ///
    /// The given RGB is kept exactly rather than re-derived from the
    /// selectors, since RGB → HSV → RGB is not the identity.
    pub fn seed_from_initial_color(&mut self, rgb: Rgb) -> Vec<SelectionEvent> {
        if self.seed == Seed::Seeded {
            return Vec::new();
        }
        self.seed = Seed::Seeded;
        self.place_selectors(math::rgb_to_hsv(rgb));
        self.color = rgb;
        tracing::debug!(color = %rgb, "seeded from initial color");
        self.placement_events()
    }

    fn place_selectors(&mut self, hsv: Hsv) {
        let g = self.geometry;
        self.surface = g.clamp_surface(g.surface_for(hsv));
        self.hue_x = g.clamp_hue(g.hue_x_for(hsv.h));
        self.hue = hue_from_position(self.hue_x, g.hue_width);
    }

    fn placement_events(&self) -> Vec<SelectionEvent> {
        vec![
            SelectionEvent::SurfaceSelector(self.surface),
            SelectionEvent::Hue {
                hue: self.hue,
                position: self.hue_x,
            },
            SelectionEvent::Color(self.color),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{hsv_to_rgb, rgb_to_hsv};

    fn geometry() -> Geometry {
        Geometry {
            surface_width: 288.0,
            surface_height: 256.0,
            hue_width: 220.0,
        }
    }

    #[test]
    fn default_state_is_consistent() {
        let state = SelectionState::new(geometry());
        assert_eq!(state.hue(), Rgb::RED);
        assert_eq!(state.color(), Rgb::WHITE);
        assert_eq!(state.rederived_color(), state.color());
        assert_eq!(state.seed(), Seed::Uninitialized);
    }

    #[test]
    fn surface_selector_is_clamped_and_recolors() {
        let mut state = SelectionState::new(geometry());
        let events = state.set_surface_selector(Coordinate::new(400.0, -20.0));
        assert_eq!(state.surface(), Coordinate::new(288.0, 0.0));
        assert_eq!(state.color(), Rgb::RED);
        assert_eq!(
            events,
            vec![
                SelectionEvent::SurfaceSelector(Coordinate::new(288.0, 0.0)),
                SelectionEvent::Color(Rgb::RED),
            ]
        );
    }

    #[test]
    fn hue_change_keeps_surface_selector() {
        let mut state = SelectionState::new(geometry());
        state.set_surface_selector(Coordinate::new(288.0, 128.0));
        let before = state.surface();
        let x = geometry().hue_x_for(120.0);
        state.set_hue(x);
        assert_eq!(state.surface(), before);
        assert_eq!(state.hue(), Rgb::new(0, 255, 0));
        assert_eq!(state.color(), Rgb::new(0, 128, 0));
        assert_eq!(state.rederived_color(), state.color());
    }

    #[test]
    fn hue_is_clamped_to_strip() {
        let mut state = SelectionState::new(geometry());
        state.set_hue(-10.0);
        assert_eq!(state.hue_x(), 0.0);
        state.set_hue(500.0);
        assert_eq!(state.hue_x(), 220.0);
        assert_eq!(state.hue(), Rgb::RED);
    }

    #[test]
    fn text_commit_places_both_selectors() {
        let mut state = SelectionState::new(geometry());
        let hsv = Hsv::new(240.0, 50.0, 25.0);
        let rgb = hsv_to_rgb(hsv);
        let events = state.set_from_text(hsv, rgb);

        assert_eq!(state.color(), rgb);
        assert_eq!(state.surface(), Coordinate::new(144.0, 192.0));
        assert_eq!(state.hue(), Rgb::new(0, 0, 255));
        assert!(state.rederived_color().max_channel_diff(rgb) <= 1);
        assert_eq!(events.len(), 4);
        assert_eq!(events[3], SelectionEvent::TextCommit { hsv, rgb });
    }

    #[test]
    fn seed_applies_only_once() {
        let mut state = SelectionState::with_initial(geometry(), Some(Rgb::new(10, 200, 30)));
        assert_eq!(state.seed(), Seed::Seeded);
        assert_eq!(state.color(), Rgb::new(10, 200, 30));
        assert!(state.seed_from_initial_color(Rgb::BLACK).is_empty());
        assert_eq!(state.color(), Rgb::new(10, 200, 30));
    }

    #[test]
    fn seed_keeps_the_exact_rgb() {
        let seeded = Rgb::new(255, 2, 0);
        let state = SelectionState::with_initial(geometry(), Some(seeded));
        assert_eq!(state.color(), seeded);
        // Re-derived from the selectors the hue rounds to 0°.
        assert_eq!(state.rederived_color(), Rgb::RED);
    }

    #[test]
    fn seed_divergence_does_not_outlive_next_edit() {
        let mut state = SelectionState::with_initial(geometry(), Some(Rgb::new(255, 2, 0)));
        state.set_surface_selector(state.surface());
        assert_eq!(state.color(), state.rederived_color());
    }

    #[test]
    fn unseeded_state_accepts_late_seed() {
        let mut state = SelectionState::with_initial(geometry(), None);
        assert_eq!(state.seed(), Seed::Uninitialized);
        state.set_hue(50.0);
        let events = state.seed_from_initial_color(Rgb::new(0, 0, 255));
        assert_eq!(events.len(), 3);
        assert_eq!(state.seed(), Seed::Seeded);
    }

    #[test]
    fn seeded_then_hue_dragged_to_blue() {
        let seeded = Rgb::new(255, 2, 0);
        let mut state = SelectionState::with_initial(geometry(), Some(seeded));
        let seed_hsv = rgb_to_hsv(seeded);

        state.set_hue(geometry().hue_x_for(240.0));
        let expected = hsv_to_rgb(Hsv::new(240.0, seed_hsv.s, seed_hsv.v));
        assert_eq!(state.color(), expected);
        assert_eq!(state.color(), Rgb::new(0, 0, 255));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn drag_edits_stay_rederivable(
                hue_x in -50.0_f64..300.0,
                x in -50.0_f64..350.0,
                y in -50.0_f64..300.0,
            ) {
                let mut state = SelectionState::new(geometry());
                state.set_hue(hue_x);
                state.set_surface_selector(Coordinate::new(x, y));
                prop_assert_eq!(state.color(), state.rederived_color());
                let s = state.surface();
                prop_assert!((0.0..=288.0).contains(&s.x) && (0.0..=256.0).contains(&s.y));
            }

            #[test]
            fn text_edits_stay_rederivable(h in 0.0_f64..360.0, s in 0.0_f64..=100.0, v in 0.0_f64..=100.0) {
                let mut state = SelectionState::new(geometry());
                let hsv = Hsv::new(h.round(), s, v);
                let rgb = hsv_to_rgb(hsv);
                state.set_from_text(hsv, rgb);
                // Selectors sit on pixel positions and the surface rounds each
                // overlay, so a one-unit bound is too tight: [255, 2, 0] already
                // comes back as [255, 0, 0] through whole-degree hue alone.
                let drift = state.rederived_color().max_channel_diff(rgb);
                prop_assert!(drift <= 2, "{:?} vs {:?}", state.rederived_color(), rgb);
            }
        }
    }
}
