// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw input accepted by the viewport, and the per-viewport input state.
//!
//! Hosts translate their windowing system's pointer and wheel events into
//! [`PointerEvent`] and [`WheelEvent`] and pass them to
//! [`Viewport::pointer_down`](crate::Viewport::pointer_down) and friends.
//! [`InputManager`] keeps the pointers that are down and the pending click,
//! and is what plugins consult for pointer counts.

use kurbo::{Point, Vec2};
use vantage_event_state::click::ClickState;
use vantage_event_state::pointer::{Pointer, PointerTracker};

pub use vantage_event_state::pointer::{PointerId, PointerKind};

use crate::options::MouseButtons;

/// A pointer press, move or release in screen pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Host-assigned pointer identifier.
    pub id: PointerId,
    /// Device class.
    pub kind: PointerKind,
    /// Position in screen pixels.
    pub position: Point,
    /// Mouse buttons held during the event. For a press this includes the
    /// button that went down.
    pub buttons: MouseButtons,
    /// Event timestamp in milliseconds, on any monotonic clock.
    pub time_ms: f64,
}

impl PointerEvent {
    /// A mouse event with the primary button held.
    #[must_use]
    pub fn mouse(position: Point, time_ms: f64) -> Self {
        Self {
            id: PointerId(0),
            kind: PointerKind::Mouse,
            position,
            buttons: MouseButtons::LEFT,
            time_ms,
        }
    }

    /// A mouse event with no buttons held, as produced by hovering.
    #[must_use]
    pub fn hover(position: Point, time_ms: f64) -> Self {
        Self {
            buttons: MouseButtons::empty(),
            ..Self::mouse(position, time_ms)
        }
    }

    /// A touch event for finger `id`.
    #[must_use]
    pub fn touch(id: u64, position: Point, time_ms: f64) -> Self {
        Self {
            id: PointerId(id),
            kind: PointerKind::Touch,
            position,
            buttons: MouseButtons::empty(),
            time_ms,
        }
    }
}

/// Unit of [`WheelEvent::delta`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum DeltaMode {
    /// Deltas are in pixels.
    #[default]
    Pixel,
    /// Deltas are in lines; plugins convert with their `line_height`.
    Line,
}

/// A wheel or trackpad scroll.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelEvent {
    /// Pointer position in screen pixels.
    pub position: Point,
    /// Horizontal delta.
    pub dx: f64,
    /// Vertical delta; positive scrolls down.
    pub dy: f64,
    /// Depth delta.
    pub dz: f64,
    /// Unit of the deltas.
    pub mode: DeltaMode,
    /// Whether the control key was held. Trackpad pinches arrive this way.
    pub ctrl: bool,
}

impl WheelEvent {
    /// A vertical pixel-mode scroll at `position`.
    #[must_use]
    pub fn vertical(position: Point, dy: f64) -> Self {
        Self {
            position,
            dx: 0.0,
            dy,
            dz: 0.0,
            mode: DeltaMode::Pixel,
            ctrl: false,
        }
    }

    /// Planar delta as a vector.
    #[must_use]
    pub fn delta(&self) -> Vec2 {
        Vec2::new(self.dx, self.dy)
    }

    /// Multiplier that converts the deltas to pixels.
    #[must_use]
    pub fn line_scale(&self, line_height: f64) -> f64 {
        match self.mode {
            DeltaMode::Pixel => 1.0,
            DeltaMode::Line => line_height,
        }
    }
}

/// Pointer bookkeeping owned by a viewport.
///
/// Tracks which pointers are down and whether the current press can still
/// become a click. Plugins read it through
/// [`Viewport::input`](crate::Viewport::input).
#[derive(Clone, Debug, Default)]
pub struct InputManager {
    pointers: PointerTracker,
    click: ClickState,
}

impl InputManager {
    /// Number of pointers down, counting the mouse as one.
    #[must_use]
    pub fn count(&self) -> usize {
        self.pointers.down_count()
    }

    /// Touch and pen pointers that are down, in the order they went down.
    #[must_use]
    pub fn touches(&self) -> &[Pointer] {
        self.pointers.touch_pointers()
    }

    /// Whether the mouse is pressed.
    #[must_use]
    pub fn is_mouse_down(&self) -> bool {
        self.pointers.is_mouse_down()
    }

    /// The pointer tracker.
    #[must_use]
    pub fn pointers(&self) -> &PointerTracker {
        &self.pointers
    }

    /// Whether the current press can still become a click.
    #[must_use]
    pub fn is_click_available(&self) -> bool {
        self.click.is_available()
    }

    /// Forgets every pointer and any pending click.
    pub fn clear(&mut self) {
        self.pointers.clear();
        self.click.clear();
    }

    pub(crate) fn press(&mut self, event: &PointerEvent, click_eligible: bool) {
        self.pointers
            .on_pointer_down(event.id, event.kind, event.position);
        self.click
            .on_down(event.position, self.pointers.down_count(), click_eligible);
    }

    pub(crate) fn record_move(&mut self, event: &PointerEvent, threshold: f64) {
        self.pointers.on_pointer_move(event.id, event.position);
        self.click.on_move(event.position, threshold);
    }

    pub(crate) fn release(&mut self, event: &PointerEvent) {
        self.pointers.on_pointer_up(event.id, event.kind);
    }

    pub(crate) fn take_click(&mut self) -> Option<Point> {
        self.click.on_up(self.pointers.down_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_release_track_counts() {
        let mut input = InputManager::default();
        input.press(&PointerEvent::touch(1, Point::new(10.0, 10.0), 0.0), true);
        input.press(&PointerEvent::touch(2, Point::new(20.0, 10.0), 0.0), true);
        assert_eq!(input.count(), 2);
        assert!(!input.is_click_available(), "second finger rules out a click");

        input.release(&PointerEvent::touch(1, Point::ZERO, 0.0));
        assert_eq!(input.count(), 1);
        assert_eq!(input.touches()[0].id, PointerId(2));
    }

    #[test]
    fn click_survives_small_moves() {
        let mut input = InputManager::default();
        let down = PointerEvent::mouse(Point::new(50.0, 50.0), 0.0);
        input.press(&down, true);
        input.record_move(&PointerEvent::mouse(Point::new(52.0, 51.0), 8.0), 5.0);
        input.release(&down);
        assert_eq!(input.take_click(), Some(Point::new(50.0, 50.0)));
    }

    #[test]
    fn line_mode_scales_by_line_height() {
        let mut wheel = WheelEvent::vertical(Point::ZERO, 3.0);
        assert_eq!(wheel.line_scale(20.0), 1.0);
        wheel.mode = DeltaMode::Line;
        assert_eq!(wheel.line_scale(20.0), 20.0);
        assert_eq!(wheel.delta(), Vec2::new(0.0, 3.0));
    }

    #[test]
    fn clear_drops_pointers_and_click() {
        let mut input = InputManager::default();
        input.press(&PointerEvent::mouse(Point::ZERO, 0.0), true);
        input.clear();
        assert_eq!(input.count(), 0);
        assert!(!input.is_mouse_down());
        assert!(!input.is_click_available());
    }
}
