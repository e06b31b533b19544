// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click recognition with a movement threshold.
//!
//! A click is a press and release of a single pointer that never travels
//! `threshold` pixels or more on either axis. Pressing a second pointer, or
//! pressing while the caller considers the view busy (for example still
//! coasting after a fling), rules the click out.
//!
//! ```
//! use kurbo::Point;
//! use vantage_event_state::click::ClickState;
//!
//! let mut click = ClickState::default();
//! click.on_down(Point::new(10.0, 10.0), 1, true);
//! click.on_move(Point::new(12.0, 11.0), 5.0);
//! assert_eq!(click.on_up(0), Some(Point::new(10.0, 10.0)));
//!
//! click.on_down(Point::new(10.0, 10.0), 1, true);
//! click.on_move(Point::new(16.0, 10.0), 5.0);
//! assert_eq!(click.on_up(0), None);
//! ```

use kurbo::Point;

/// Tracks whether the current press can still become a click.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ClickState {
    origin: Option<Point>,
    available: bool,
}

impl ClickState {
    /// Records a press at `pos`.
    ///
    /// `down_count` is the number of pointers down including this one; a
    /// click is only possible for the first pointer. `eligible` lets the
    /// caller veto the click up front.
    pub fn on_down(&mut self, pos: Point, down_count: usize, eligible: bool) {
        if down_count == 1 {
            self.origin = Some(pos);
            self.available = eligible;
        } else {
            self.available = false;
        }
    }

    /// Cancels the click once `pos` is `threshold` pixels or more away from
    /// the press on either axis.
    pub fn on_move(&mut self, pos: Point, threshold: f64) {
        if !self.available {
            return;
        }
        if let Some(origin) = self.origin {
            let delta = pos - origin;
            if delta.x.abs() >= threshold || delta.y.abs() >= threshold {
                self.available = false;
            }
        }
    }

    /// Records a release; returns the press position if this completes a click.
    ///
    /// `down_count` is the number of pointers still down after the release.
    pub fn on_up(&mut self, down_count: usize) -> Option<Point> {
        if self.available && down_count == 0 {
            self.available = false;
            self.origin
        } else {
            None
        }
    }

    /// Whether a click is still possible.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Where the current press started.
    #[must_use]
    pub fn origin(&self) -> Option<Point> {
        self.origin
    }

    /// Forgets the current press.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_pointer_cancels_click() {
        let mut click = ClickState::default();
        click.on_down(Point::ZERO, 1, true);
        click.on_down(Point::new(50.0, 0.0), 2, true);
        assert_eq!(click.on_up(1), None);
        assert_eq!(click.on_up(0), None);
    }

    #[test]
    fn ineligible_press_never_clicks() {
        let mut click = ClickState::default();
        click.on_down(Point::ZERO, 1, false);
        assert!(!click.is_available());
        assert_eq!(click.on_up(0), None);
    }

    #[test]
    fn threshold_is_inclusive() {
        let mut click = ClickState::default();
        click.on_down(Point::ZERO, 1, true);
        click.on_move(Point::new(0.0, -4.9), 5.0);
        assert!(click.is_available());
        click.on_move(Point::new(0.0, -5.0), 5.0);
        assert!(!click.is_available());
    }

    #[test]
    fn click_fires_once() {
        let mut click = ClickState::default();
        click.on_down(Point::new(3.0, 4.0), 1, true);
        assert_eq!(click.on_up(0), Some(Point::new(3.0, 4.0)));
        assert_eq!(click.on_up(0), None);
        assert_eq!(click.origin(), Some(Point::new(3.0, 4.0)));

        click.clear();
        assert_eq!(click.origin(), None);
    }
}
