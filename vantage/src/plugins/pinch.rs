// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-finger pinch: zoom by finger spread, pan by finger travel.

use kurbo::{Point, Vec2};
use tracing::{debug, trace};

use crate::input::PointerEvent;
use crate::{MoveKind, Viewport, ViewportEvent, ViewportPlugin, ZoomKind};

/// Options for [`Pinch`].
///
/// Each finger's press position counts as its first sample, so the first
/// move after the second finger lands already zooms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchOptions {
    /// Multiplier on zoom speed.
    pub percent: f64,
    /// Disable panning by moving both fingers.
    pub no_drag: bool,
    /// Keep this world point centered while zooming, instead of anchoring
    /// the zoom under the fingers.
    pub center: Option<Point>,
}

impl Default for PinchOptions {
    fn default() -> Self {
        Self {
            percent: 1.0,
            no_drag: false,
            center: None,
        }
    }
}

/// Pinch-to-zoom using the first two touch pointers.
///
/// Armed once two pointers are down. Each move of either finger zooms by
/// the change in finger distance, relative to the screen width, and keeps
/// the world point under the fingers' midpoint in place. Moving both
/// fingers together pans unless [`PinchOptions::no_drag`] is set.
#[derive(Clone, Debug, Default)]
pub struct Pinch {
    options: PinchOptions,
    armed: bool,
    pinching: bool,
    last_center: Option<Point>,
}

impl Pinch {
    /// Creates a pinch plugin.
    #[must_use]
    pub fn new(options: PinchOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// The options in effect.
    #[must_use]
    pub fn options(&self) -> &PinchOptions {
        &self.options
    }

    /// Whether two pointers are down and a pinch may be in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.armed
    }

    /// Whether the current gesture has emitted `pinch-start`.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.pinching
    }

    fn zoom(&self, viewport: &mut Viewport, last_dist: f64, dist: f64, point: Point) {
        let screen_width = viewport.transform().screen_width();
        if screen_width <= 0.0 {
            return;
        }
        let anchor = match self.options.center {
            Some(_) => None,
            None => Some(viewport.to_world(point)),
        };
        let scale = viewport.transform().scale();
        let change = (dist - last_dist) / screen_width * scale.x * self.options.percent;
        let next = scale + Vec2::new(change, change);
        if next.x <= 0.0 || next.y <= 0.0 {
            return;
        }
        viewport.transform_mut().set_scale(next);
        trace!(change, scale = next.x, "pinch zoom");
        viewport.emit(ViewportEvent::Zoomed {
            kind: ZoomKind::Pinch,
        });
        viewport.apply_clamp_zoom();

        if let Some(center) = self.options.center {
            viewport.move_center(center);
        } else if let Some(anchor) = anchor {
            let moved = viewport.to_screen(anchor);
            viewport.transform_mut().translate(point - moved);
            viewport.emit(ViewportEvent::Moved {
                kind: MoveKind::Pinch,
            });
        }
    }
}

impl ViewportPlugin for Pinch {
    fn down(&mut self, viewport: &mut Viewport, _event: &PointerEvent) -> bool {
        if viewport.input().count() >= 2 {
            self.armed = true;
            return true;
        }
        false
    }

    fn pointer_move(&mut self, viewport: &mut Viewport, event: &PointerEvent) -> bool {
        if !self.armed {
            return false;
        }
        let (first, second) = match viewport.input().touches() {
            [first, second, ..] => (*first, *second),
            _ => return false,
        };
        let (a, b) = if first.id == event.id {
            (event.position, second.last)
        } else if second.id == event.id {
            (first.last, event.position)
        } else {
            return false;
        };

        if !self.pinching {
            self.pinching = true;
            debug!("pinch started");
            viewport.emit(ViewportEvent::PinchStart);
        }

        let last_dist = (second.last - first.last).hypot();
        let dist = (b - a).hypot();
        let point = a.midpoint(b);
        self.zoom(viewport, last_dist, dist, point);

        if !self.options.no_drag {
            if let Some(last) = self.last_center {
                viewport.transform_mut().translate(point - last);
                viewport.emit(ViewportEvent::Moved {
                    kind: MoveKind::Pinch,
                });
            }
        }
        self.last_center = Some(point);
        viewport.set_dirty(true);
        true
    }

    fn up(&mut self, viewport: &mut Viewport, _event: &PointerEvent) -> bool {
        if viewport.input().touches().len() > 1 {
            return false;
        }
        // Disarm even without movement so a resting second finger does not
        // leave the gesture marked active.
        self.armed = false;
        self.last_center = None;
        if self.pinching {
            self.pinching = false;
            debug!("pinch ended");
            viewport.emit(ViewportEvent::PinchEnd);
            return true;
        }
        false
    }

    fn pause(&mut self) {
        self.armed = false;
        self.pinching = false;
        self.last_center = None;
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::*;
    use crate::plugins::test_support::{close, count, drained, viewport};

    fn touch(id: u64, x: f64, y: f64) -> PointerEvent {
        PointerEvent::touch(id, Point::new(x, y), 0.0)
    }

    #[test]
    fn single_touch_does_not_arm() {
        let mut vp = viewport();
        vp.pinch(PinchOptions::default());
        vp.pointer_down(&touch(1, 100.0, 100.0));
        vp.pointer_move(&touch(1, 150.0, 100.0));

        assert!(!vp.plugins().pinch().is_some_and(Pinch::is_active));
        assert_eq!(vp.transform().scale_x(), 1.0);
        assert_eq!(count(&drained(&mut vp), "pinch-start"), 0);
    }

    #[test]
    fn spreading_fingers_zooms_in() {
        let mut vp = viewport();
        vp.pinch(PinchOptions::default());
        vp.pointer_down(&touch(1, 100.0, 100.0));
        vp.pointer_down(&touch(2, 200.0, 100.0));
        // Press positions are the first samples, so the first move zooms.
        vp.pointer_move(&touch(1, 50.0, 100.0));

        assert!(close(vp.transform().scale_x(), 1.0625));
        assert!(close(vp.transform().scale_y(), 1.0625));
        assert!(vp.is_dirty());
    }

    #[test]
    fn foreign_pointer_is_ignored() {
        let mut vp = viewport();
        vp.pinch(PinchOptions::default());
        vp.pointer_down(&touch(1, 100.0, 100.0));
        vp.pointer_down(&touch(2, 200.0, 100.0));
        vp.pointer_down(&touch(3, 300.0, 100.0));
        vp.drain_events().for_each(drop);

        vp.pointer_move(&touch(3, 400.0, 100.0));
        assert_eq!(vp.transform().scale_x(), 1.0);
        assert_eq!(count(&drained(&mut vp), "pinch-start"), 0);
    }

    #[test]
    fn fixed_center_stays_centered() {
        let mut vp = viewport();
        let center = Point::new(400.0, 300.0);
        vp.pinch(PinchOptions {
            center: Some(center),
            no_drag: true,
            ..PinchOptions::default()
        });
        vp.pointer_down(&touch(1, 100.0, 100.0));
        vp.pointer_down(&touch(2, 200.0, 100.0));
        vp.pointer_move(&touch(2, 300.0, 100.0));

        let c = vp.center();
        assert!(close(c.x, center.x) && close(c.y, center.y), "center kept: {c:?}");
    }

    #[test]
    fn two_finger_pan_follows_midpoint() {
        let mut vp = viewport();
        vp.pinch(PinchOptions::default());
        vp.pointer_down(&touch(1, 100.0, 100.0));
        vp.pointer_down(&touch(2, 200.0, 100.0));
        // The second move restores the finger distance and shifts the midpoint down.
        vp.pointer_move(&touch(1, 100.0, 120.0));
        vp.pointer_move(&touch(2, 200.0, 120.0));

        let moved = drained(&mut vp)
            .iter()
            .filter(|e| e.move_kind() == Some(MoveKind::Pinch))
            .count();
        assert!(moved >= 3, "anchor and pan moves are reported");
        assert!(vp.transform().y() > 0.0, "view followed the fingers down");
    }

    #[test]
    fn lifting_a_finger_ends_the_pinch_once() {
        let mut vp = viewport();
        vp.pinch(PinchOptions::default());
        vp.pointer_down(&touch(1, 100.0, 100.0));
        vp.pointer_down(&touch(2, 200.0, 100.0));
        vp.pointer_move(&touch(1, 90.0, 100.0));
        vp.pointer_move(&touch(2, 210.0, 100.0));
        vp.pointer_up(&touch(1, 90.0, 100.0));
        vp.pointer_up(&touch(2, 210.0, 100.0));

        let events = drained(&mut vp);
        assert_eq!(count(&events, "pinch-start"), 1);
        assert_eq!(count(&events, "pinch-end"), 1);
        assert!(!vp.plugins().pinch().is_some_and(Pinch::is_active));
    }
}
