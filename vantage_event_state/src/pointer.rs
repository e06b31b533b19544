// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer tracker: which pointers are down and where they were last seen.
//!
//! The mouse is tracked as a single pressed flag. Touch and pen pointers each
//! get a [`Pointer`] record, kept in the order they went down, which is what
//! multi-touch gestures such as pinch consume.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use vantage_event_state::pointer::{PointerId, PointerKind, PointerTracker};
//!
//! let mut pointers = PointerTracker::new();
//! pointers.on_pointer_down(PointerId(1), PointerKind::Touch, Point::new(10.0, 10.0));
//! pointers.on_pointer_down(PointerId(2), PointerKind::Touch, Point::new(90.0, 10.0));
//! assert_eq!(pointers.down_count(), 2);
//!
//! pointers.on_pointer_move(PointerId(2), Point::new(120.0, 10.0));
//! assert_eq!(pointers.touch_pointers()[1].last, Point::new(120.0, 10.0));
//!
//! pointers.on_pointer_up(PointerId(1), PointerKind::Touch);
//! assert_eq!(pointers.down_count(), 1);
//! ```

use kurbo::Point;
use smallvec::SmallVec;

/// Host-assigned identifier of a physical pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub u64);

/// Device class of a pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum PointerKind {
    /// A mouse; tracked as a single pressed flag.
    #[default]
    Mouse,
    /// A finger on a touch surface.
    Touch,
    /// A stylus.
    Pen,
}

impl PointerKind {
    /// Returns `true` for the mouse.
    #[must_use]
    pub fn is_mouse(self) -> bool {
        matches!(self, Self::Mouse)
    }
}

/// A touch or pen pointer that is currently down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
    /// Identifier of the pointer.
    pub id: PointerId,
    /// Last known screen position.
    pub last: Point,
}

/// Tracks pressed pointers across down/move/up events.
#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    mouse_down: bool,
    touches: SmallVec<[Pointer; 4]>,
}

impl PointerTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a pointer going down.
    ///
    /// A touch/pen id that is already tracked keeps its existing record.
    pub fn on_pointer_down(&mut self, id: PointerId, kind: PointerKind, position: Point) {
        if kind.is_mouse() {
            self.mouse_down = true;
        } else if self.get(id).is_none() {
            self.touches.push(Pointer { id, last: position });
        }
    }

    /// Records a new position for a tracked pointer. Unknown ids are ignored.
    pub fn on_pointer_move(&mut self, id: PointerId, position: Point) {
        self.record(id, position);
    }

    /// Records a pointer going up. Unknown ids are ignored.
    pub fn on_pointer_up(&mut self, id: PointerId, kind: PointerKind) {
        if kind.is_mouse() {
            self.mouse_down = false;
        } else {
            self.touches.retain(|p| p.id != id);
        }
    }

    /// Updates the last known position of `id`, returning whether it is tracked.
    pub fn record(&mut self, id: PointerId, position: Point) -> bool {
        match self.touches.iter_mut().find(|p| p.id == id) {
            Some(pointer) => {
                pointer.last = position;
                true
            }
            None => false,
        }
    }

    /// Returns the record for `id`, if it is a tracked touch/pen pointer.
    #[must_use]
    pub fn get(&self, id: PointerId) -> Option<&Pointer> {
        self.touches.iter().find(|p| p.id == id)
    }

    /// Touch/pen pointers that are down, in the order they went down.
    #[must_use]
    pub fn touch_pointers(&self) -> &[Pointer] {
        &self.touches
    }

    /// Whether the mouse is pressed.
    #[must_use]
    pub fn is_mouse_down(&self) -> bool {
        self.mouse_down
    }

    /// Number of pointers down, counting the mouse as one.
    #[must_use]
    pub fn down_count(&self) -> usize {
        usize::from(self.mouse_down) + self.touches.len()
    }

    /// Forgets every pointer.
    ///
    /// Hosts call this when up events can no longer be trusted to arrive,
    /// for example after losing focus.
    pub fn clear(&mut self) {
        self.mouse_down = false;
        self.touches.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: PointerId = PointerId(1);
    const B: PointerId = PointerId(2);

    #[test]
    fn touches_keep_insertion_order() {
        let mut tracker = PointerTracker::new();
        tracker.on_pointer_down(B, PointerKind::Touch, Point::new(1.0, 1.0));
        tracker.on_pointer_down(A, PointerKind::Pen, Point::new(2.0, 2.0));

        let ids: SmallVec<[PointerId; 2]> = tracker.touch_pointers().iter().map(|p| p.id).collect();
        assert_eq!(ids.as_slice(), &[B, A]);
    }

    #[test]
    fn duplicate_down_keeps_single_record() {
        let mut tracker = PointerTracker::new();
        tracker.on_pointer_down(A, PointerKind::Touch, Point::new(1.0, 1.0));
        tracker.on_pointer_down(A, PointerKind::Touch, Point::new(5.0, 5.0));

        assert_eq!(tracker.down_count(), 1);
        assert_eq!(tracker.get(A).map(|p| p.last), Some(Point::new(1.0, 1.0)));
    }

    #[test]
    fn mouse_counts_once_and_has_no_record() {
        let mut tracker = PointerTracker::new();
        tracker.on_pointer_down(A, PointerKind::Mouse, Point::ZERO);
        tracker.on_pointer_down(B, PointerKind::Mouse, Point::ZERO);

        assert!(tracker.is_mouse_down());
        assert_eq!(tracker.down_count(), 1);
        assert!(tracker.touch_pointers().is_empty());

        tracker.on_pointer_up(A, PointerKind::Mouse);
        assert_eq!(tracker.down_count(), 0);
    }

    #[test]
    fn move_updates_last_position() {
        let mut tracker = PointerTracker::new();
        tracker.on_pointer_down(A, PointerKind::Touch, Point::new(1.0, 1.0));
        tracker.on_pointer_move(A, Point::new(3.0, 4.0));

        assert_eq!(tracker.get(A).map(|p| p.last), Some(Point::new(3.0, 4.0)));
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut tracker = PointerTracker::new();
        tracker.on_pointer_down(A, PointerKind::Touch, Point::ZERO);

        tracker.on_pointer_move(B, Point::new(9.0, 9.0));
        tracker.on_pointer_up(B, PointerKind::Touch);
        assert!(!tracker.record(B, Point::ZERO));

        assert_eq!(tracker.down_count(), 1);
        assert_eq!(tracker.get(A).map(|p| p.last), Some(Point::ZERO));
    }

    #[test]
    fn up_removes_record() {
        let mut tracker = PointerTracker::new();
        tracker.on_pointer_down(A, PointerKind::Touch, Point::ZERO);
        tracker.on_pointer_down(B, PointerKind::Touch, Point::ZERO);

        tracker.on_pointer_up(A, PointerKind::Touch);
        assert!(tracker.get(A).is_none());
        assert_eq!(tracker.touch_pointers().len(), 1);
    }

    #[test]
    fn clear_forgets_everything() {
        let mut tracker = PointerTracker::new();
        tracker.on_pointer_down(A, PointerKind::Mouse, Point::ZERO);
        tracker.on_pointer_down(B, PointerKind::Touch, Point::ZERO);

        tracker.clear();
        assert_eq!(tracker.down_count(), 0);
        assert!(!tracker.is_mouse_down());
    }
}
