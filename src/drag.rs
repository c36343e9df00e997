//! Pointer drag state machine for one selection area.
//!
//! A press starts a drag session and takes ownership of the host's global
//! move/release subscription; the session ends on release or when the
//! controller is dropped, and the subscription is released on both paths.

use crate::color::Coordinate;
use crate::math;

/// A held global pointer subscription.
pub trait PointerCapture {
    /// Stop receiving global move/release notifications.
    fn release(&mut self);
}

/// Hosts that route moves to the active view on their own (floem does)
/// have nothing to undo.
impl PointerCapture for () {
    fn release(&mut self) {}
}

/// Which axes a drag reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragAxis {
    /// The saturation/value surface.
    Both,
    /// The hue strip; `y` is pinned to 0.
    Horizontal,
}

#[derive(Debug)]
pub enum DragState<C> {
    Idle,
    Dragging(C),
}

/// Per-area drag controller.
#[derive(Debug)]
pub struct DragController<C: PointerCapture> {
    axis: DragAxis,
    width: f64,
    height: f64,
    state: DragState<C>,
}

impl<C: PointerCapture> DragController<C> {
    pub fn new(axis: DragAxis, width: f64, height: f64) -> Self {
        Self {
            axis,
            width,
            height,
            state: DragState::Idle,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    pub fn state(&self) -> &DragState<C> {
        &self.state
    }

    /// Start a session at `pointer` and return the clamped coordinate.
    ///
    /// `origin` is the area's offset in the pointer's coordinate space.
    pub fn press(&mut self, capture: C, pointer: Coordinate, origin: Coordinate) -> Coordinate {
        // A second press without a release must not leak the first capture.
        self.release();
        self.state = DragState::Dragging(capture);
        let at = self.clamp(pointer, origin);
        tracing::debug!(axis = ?self.axis, x = at.x, y = at.y, "drag started");
        at
    }

    /// Clamped coordinate for a move, or `None` outside a session.
    pub fn drag(&mut self, pointer: Coordinate, origin: Coordinate) -> Option<Coordinate> {
        match self.state {
            DragState::Dragging(_) => Some(self.clamp(pointer, origin)),
            DragState::Idle => None,
        }
    }

    /// End the session. Returns whether one was active.
    pub fn release(&mut self) -> bool {
        match std::mem::replace(&mut self.state, DragState::Idle) {
            DragState::Dragging(mut capture) => {
                capture.release();
                tracing::debug!(axis = ?self.axis, "drag released");
                true
            }
            DragState::Idle => false,
        }
    }

    /// Translate into area-local space and bound to the area.
    pub fn clamp(&self, pointer: Coordinate, origin: Coordinate) -> Coordinate {
        let x = math::min_max(pointer.x - origin.x, 0.0, self.width);
        let y = match self.axis {
            DragAxis::Both => math::min_max(pointer.y - origin.y, 0.0, self.height),
            DragAxis::Horizontal => 0.0,
        };
        Coordinate { x, y }
    }
}

impl<C: PointerCapture> Drop for DragController<C> {
    fn drop(&mut self) {
        self.release();
    }
}
