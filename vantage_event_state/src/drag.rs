// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state helper: follow one pointer and compute movement deltas.
//!
//! ## Usage
//!
//! 1) Start tracking with [`DragState::start`], giving the pointer and its position.
//! 2) On each move of that pointer, check [`DragState::pending_delta`] against
//!    a threshold if needed, then call [`DragState::update`] to consume the delta.
//! 3) Use [`DragState::retarget`] to continue the same drag with another pointer.
//! 4) End the drag with [`DragState::end`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use vantage_event_state::drag::DragState;
//! use vantage_event_state::pointer::PointerId;
//!
//! let mut drag = DragState::default();
//!
//! drag.start(PointerId(7), Point::new(10.0, 20.0));
//! assert!(drag.is_tracking(PointerId(7)));
//! assert!(!drag.has_moved());
//!
//! // Move to (15, 25): delta is (5, 5).
//! let delta = drag.update(Point::new(15.0, 25.0)).unwrap();
//! assert_eq!(delta.x, 5.0);
//! assert_eq!(delta.y, 5.0);
//! assert!(drag.has_moved());
//!
//! let total = drag.total_offset(Point::new(15.0, 25.0)).unwrap();
//! assert_eq!(total.x, 5.0);
//! ```

use kurbo::{Point, Vec2};

use crate::pointer::PointerId;

/// Tracks a single-pointer drag.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragState {
    /// Pointer driving the drag.
    pub pointer: Option<PointerId>,
    /// Position where tracking started.
    pub start_pos: Option<Point>,
    /// Last consumed pointer position.
    pub last_pos: Option<Point>,
    moved: bool,
}

impl DragState {
    /// Starts tracking `pointer` from `pos`.
    pub fn start(&mut self, pointer: PointerId, pos: Point) {
        self.pointer = Some(pointer);
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        self.moved = false;
    }

    /// Continues tracking with a different pointer, resuming from `pos`.
    ///
    /// The start position is kept; the moved flag is cleared so the new
    /// pointer must cross any threshold again.
    pub fn retarget(&mut self, pointer: PointerId, pos: Point) {
        self.pointer = Some(pointer);
        self.last_pos = Some(pos);
        if self.start_pos.is_none() {
            self.start_pos = Some(pos);
        }
        self.moved = false;
    }

    /// Returns `true` if `pointer` is the one being tracked.
    pub fn is_tracking(&self, pointer: PointerId) -> bool {
        self.pointer == Some(pointer) && self.last_pos.is_some()
    }

    /// Delta from the last consumed position to `pos`, without consuming it.
    pub fn pending_delta(&self, pos: Point) -> Option<Vec2> {
        self.last_pos.map(|last| pos - last)
    }

    /// Consumes the movement to `pos`, returning the delta since the last update.
    ///
    /// Marks the drag as moved.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        let delta = self.pending_delta(pos)?;
        self.last_pos = Some(pos);
        self.moved = true;
        Some(delta)
    }

    /// Total offset of `current_pos` from the start position.
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start_pos| current_pos - start_pos)
    }

    /// Clears the moved flag without ending the drag.
    pub fn settle(&mut self) {
        self.moved = false;
    }

    /// Ends the drag and resets all state.
    pub fn end(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` while a pointer is being tracked.
    pub fn is_dragging(&self) -> bool {
        self.last_pos.is_some()
    }

    /// Returns `true` once movement has been consumed since the last
    /// start, retarget or settle.
    pub fn has_moved(&self) -> bool {
        self.moved
    }
}
