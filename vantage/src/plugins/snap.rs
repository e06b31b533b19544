// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glide the view to a fixed point.

use kurbo::{Point, Vec2};
use tracing::debug;

use crate::input::{PointerEvent, WheelEvent};
use crate::{Ease, MoveKind, Viewport, ViewportEvent, ViewportPlugin};

/// Positions closer than this, in world units, count as arrived.
const EPSILON: f64 = 1e-6;

/// Options for [`Snap`].
#[derive(Clone, Copy, Debug)]
pub struct SnapOptions {
    /// Snap the top-left corner to the target instead of the center.
    pub top_left: bool,
    /// Friction applied to deceleration once the last pointer lifts.
    pub friction: f64,
    /// Duration of the snap in milliseconds.
    pub time: f64,
    /// Curve of the snap.
    pub ease: Ease,
    /// Pause snapping while pointers are down.
    pub interrupt: bool,
    /// Remove the plugin once the snap completes.
    pub remove_on_complete: bool,
    /// Remove the plugin on a press or wheel.
    pub remove_on_interrupt: bool,
    /// Start snapping on creation instead of waiting for the view to move.
    pub force_start: bool,
}

impl Default for SnapOptions {
    fn default() -> Self {
        Self {
            top_left: false,
            friction: 0.8,
            time: 1000.0,
            ease: Ease::InOutSine,
            interrupt: true,
            remove_on_complete: false,
            remove_on_interrupt: false,
            force_start: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Snapping {
    start: Point,
    delta: Vec2,
    time: f64,
}

/// Moves the center (or the top-left corner) to a target point.
///
/// Unless removed on completion, the plugin snaps back whenever the view
/// drifts from the target.
#[derive(Clone, Debug)]
pub struct Snap {
    target: Point,
    options: SnapOptions,
    snapping: Option<Snapping>,
}

impl Snap {
    /// Creates a snap plugin aiming at `target` in world units.
    #[must_use]
    pub fn new(target: Point, options: SnapOptions) -> Self {
        Self {
            target,
            options,
            snapping: None,
        }
    }

    /// The options in effect.
    #[must_use]
    pub fn options(&self) -> &SnapOptions {
        &self.options
    }

    /// The point being snapped to.
    #[must_use]
    pub fn target(&self) -> Point {
        self.target
    }

    /// Whether a snap is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.snapping.is_some()
    }

    fn current(&self, viewport: &Viewport) -> Point {
        if self.options.top_left {
            viewport.transform().corner()
        } else {
            viewport.center()
        }
    }

    /// Starts a snap from the view's current position.
    pub fn start(&mut self, viewport: &mut Viewport) {
        let start = self.current(viewport);
        self.snapping = Some(Snapping {
            start,
            delta: self.target - start,
            time: 0.0,
        });
        debug!(x = self.target.x, y = self.target.y, "snap started");
        viewport.emit(ViewportEvent::SnapStart);
    }
}

impl ViewportPlugin for Snap {
    fn down(&mut self, viewport: &mut Viewport, _event: &PointerEvent) -> bool {
        if self.options.remove_on_interrupt {
            viewport.remove_plugin("snap");
        } else if self.options.interrupt {
            self.snapping = None;
        }
        false
    }

    fn up(&mut self, viewport: &mut Viewport, _event: &PointerEvent) -> bool {
        if viewport.input().count() != 0 {
            return false;
        }
        let friction = self.options.friction;
        if let Some(decelerate) = viewport.plugins_mut().decelerate_mut() {
            if decelerate.is_active() {
                decelerate.set_percent_change_x(friction);
                decelerate.set_percent_change_y(friction);
            }
        }
        false
    }

    fn wheel(&mut self, viewport: &mut Viewport, _event: &WheelEvent) -> bool {
        if self.options.remove_on_interrupt {
            viewport.remove_plugin("snap");
        }
        false
    }

    fn update(&mut self, viewport: &mut Viewport, elapsed: f64) {
        if self.options.interrupt && viewport.input().count() != 0 {
            return;
        }
        let Some(snapping) = self.snapping.as_mut() else {
            let offset = self.target - self.current(viewport);
            if offset.x.abs() > EPSILON || offset.y.abs() > EPSILON {
                self.start(viewport);
            }
            return;
        };
        snapping.time += elapsed;
        let finished = snapping.time >= self.options.time;
        let next = if finished {
            self.target
        } else {
            let percent = self.options.ease.apply(snapping.time, 0.0, 1.0, self.options.time);
            snapping.start + snapping.delta * percent
        };
        if self.options.top_left {
            viewport.move_corner(next);
        } else {
            viewport.move_center(next);
        }
        viewport.emit(ViewportEvent::Moved {
            kind: MoveKind::Snap,
        });
        if finished {
            self.snapping = None;
            if self.options.remove_on_complete {
                viewport.remove_plugin("snap");
            }
            debug!("snap ended");
            viewport.emit(ViewportEvent::SnapEnd);
        }
    }

    fn pause(&mut self) {
        self.snapping = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugins::DecelerateOptions;
    use crate::plugins::test_support::{close, count, drained, viewport};

    fn run(vp: &mut Viewport, ms: f64) {
        let mut t = 0.0;
        while t < ms {
            vp.update(16.0);
            t += 16.0;
        }
    }

    #[test]
    fn glides_to_target_and_ends() {
        let mut vp = viewport();
        let target = Point::new(800.0, 600.0);
        vp.snap(target, SnapOptions::default());
        vp.update(16.0);
        assert!(vp.plugins().get("snap").is_some());

        run(&mut vp, 1100.0);
        assert_eq!(vp.center(), target);
        let events = drained(&mut vp);
        assert_eq!(count(&events, "snap-start"), 1);
        assert_eq!(count(&events, "snap-end"), 1);
    }

    #[test]
    fn halfway_follows_the_curve() {
        let mut vp = viewport();
        let start = vp.center();
        vp.snap(
            Point::new(start.x + 100.0, start.y),
            SnapOptions {
                ease: Ease::Linear,
                force_start: true,
                time: 100.0,
                ..SnapOptions::default()
            },
        );
        vp.update(50.0);
        assert!(close(vp.center().x, start.x + 50.0));
    }

    #[test]
    fn remove_on_complete_removes_itself() {
        let mut vp = viewport();
        vp.snap(
            Point::new(0.0, 0.0),
            SnapOptions {
                top_left: true,
                force_start: true,
                remove_on_complete: true,
                time: 32.0,
                ..SnapOptions::default()
            },
        );
        vp.move_corner(Point::new(50.0, 50.0));
        run(&mut vp, 64.0);

        assert!(vp.plugins().get("snap").is_none());
        assert_eq!(vp.transform().corner(), Point::ZERO);
        let events = drained(&mut vp);
        assert_eq!(count(&events, "snap-remove"), 1);
        assert_eq!(count(&events, "snap-end"), 1);
    }

    #[test]
    fn pointers_hold_the_snap() {
        let mut vp = viewport();
        vp.snap(Point::new(0.0, 0.0), SnapOptions::default());
        vp.pointer_down(&PointerEvent::touch(1, Point::new(10.0, 10.0), 0.0));
        let before = vp.center();
        run(&mut vp, 200.0);
        assert_eq!(vp.center(), before);
    }

    #[test]
    fn remove_on_interrupt() {
        let mut vp = viewport();
        vp.snap(
            Point::new(0.0, 0.0),
            SnapOptions {
                remove_on_interrupt: true,
                ..SnapOptions::default()
            },
        );
        vp.pointer_wheel(&WheelEvent::vertical(Point::new(5.0, 5.0), 1.0));
        assert!(vp.plugins().get("snap").is_none());
    }

    #[test]
    fn release_applies_snap_friction() {
        let mut vp = viewport();
        vp.decelerate(DecelerateOptions::default())
            .snap(Point::new(0.0, 0.0), SnapOptions::default());
        let touch = PointerEvent::touch(1, Point::new(10.0, 10.0), 0.0);
        vp.pointer_down(&touch);
        if let Some(d) = vp.plugins_mut().decelerate_mut() {
            d.activate(Some(1.0), Some(1.0));
        }
        vp.pointer_up(&touch);
        let pc = vp.plugins().decelerate().map(|d| d.percent_change());
        assert_eq!(pc, Some(Vec2::new(0.8, 0.8)));
    }
}
