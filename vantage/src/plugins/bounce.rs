// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ease the view back inside its bounds after it was pushed out.

use kurbo::{Rect, Vec2};
use tracing::debug;

use super::tween::Tween;
use crate::input::PointerEvent;
use crate::options::{Sides, Underflow};
use crate::{Ease, MoveKind, Viewport, ViewportEvent, ViewportPlugin};

/// Options for [`Bounce`].
#[derive(Clone, Copy, Debug)]
pub struct BounceOptions {
    /// Edges that bounce.
    pub sides: Sides,
    /// Friction applied to deceleration while out of bounds.
    pub friction: f64,
    /// Duration of the bounce in milliseconds.
    pub time: f64,
    /// Curve of the bounce.
    pub ease: Ease,
    /// Placement on an axis whose bounds are smaller than the screen.
    pub underflow: Underflow,
    /// Bounds in world units; the world rectangle when `None`.
    pub bounce_box: Option<Rect>,
}

impl Default for BounceOptions {
    fn default() -> Self {
        Self {
            sides: Sides::ALL,
            friction: 0.5,
            time: 150.0,
            ease: Ease::InOutSine,
            underflow: Underflow::CENTER,
            bounce_box: None,
        }
    }
}

/// Animates the view back into bounds once nothing else is moving it.
#[derive(Clone, Debug, Default)]
pub struct Bounce {
    options: BounceOptions,
    to_x: Option<Tween>,
    to_y: Option<Tween>,
}

impl Bounce {
    /// Creates a bounce plugin.
    #[must_use]
    pub fn new(options: BounceOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// The options in effect.
    #[must_use]
    pub fn options(&self) -> &BounceOptions {
        &self.options
    }

    /// Whether a bounce is in progress on either axis.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.to_x.is_some() || self.to_y.is_some()
    }

    fn bounds(&self, viewport: &Viewport) -> Rect {
        self.options
            .bounce_box
            .unwrap_or_else(|| viewport.transform().world_rect())
    }

    /// Starts bounce tweens where the view is out of bounds and idle.
    fn check(&mut self, viewport: &mut Viewport) {
        let sides = self.options.sides;
        let bounds = self.bounds(viewport);
        let oob = viewport.transform().out_of_bounds_in(bounds);
        let out_x = (oob.left && sides.contains(Sides::LEFT))
            || (oob.right && sides.contains(Sides::RIGHT));
        let out_y = (oob.top && sides.contains(Sides::TOP))
            || (oob.bottom && sides.contains(Sides::BOTTOM));

        let friction = self.options.friction;
        let mut velocity = Vec2::ZERO;
        if let Some(decelerate) = viewport.plugins_mut().decelerate_mut() {
            let base = decelerate.options().friction;
            let v = decelerate.velocity();
            let pc = decelerate.percent_change();
            if (v.x != 0.0 && pc.x == base) || (v.y != 0.0 && pc.y == base) {
                if out_x {
                    decelerate.set_percent_change_x(friction);
                }
                if out_y {
                    decelerate.set_percent_change_y(friction);
                }
            }
            velocity = v;
        }

        let plugins = viewport.plugins();
        let gesturing = plugins.drag().is_some_and(|d| d.is_active())
            || plugins.pinch().is_some_and(|p| p.is_active());
        if gesturing {
            return;
        }

        let t = viewport.transform();
        let (scale_x, scale_y) = (t.scale_x(), t.scale_y());
        if self.to_x.is_none() && velocity.x == 0.0 {
            let extent = bounds.width() * scale_x;
            let target = if extent < t.screen_width() && out_x {
                Some(
                    self.options
                        .underflow
                        .horizontal
                        .offset(t.screen_width(), extent)
                        - bounds.x0 * scale_x,
                )
            } else if oob.left && sides.contains(Sides::LEFT) {
                Some(-oob.top_left.x)
            } else if oob.right && sides.contains(Sides::RIGHT) {
                Some(-oob.bottom_right.x)
            } else {
                None
            };
            if let Some(x) = target.filter(|x| *x != t.x()) {
                debug!(from = t.x(), to = x, "bounce x started");
                self.to_x = Some(Tween::new(t.x(), x, self.options.time));
                viewport.emit(ViewportEvent::BounceXStart);
            }
        }

        let t = viewport.transform();
        if self.to_y.is_none() && velocity.y == 0.0 {
            let extent = bounds.height() * scale_y;
            let target = if extent < t.screen_height() && out_y {
                Some(
                    self.options
                        .underflow
                        .vertical
                        .offset(t.screen_height(), extent)
                        - bounds.y0 * scale_y,
                )
            } else if oob.top && sides.contains(Sides::TOP) {
                Some(-oob.top_left.y)
            } else if oob.bottom && sides.contains(Sides::BOTTOM) {
                Some(-oob.bottom_right.y)
            } else {
                None
            };
            if let Some(y) = target.filter(|y| *y != t.y()) {
                debug!(from = t.y(), to = y, "bounce y started");
                self.to_y = Some(Tween::new(t.y(), y, self.options.time));
                viewport.emit(ViewportEvent::BounceYStart);
            }
        }
    }

    fn cancel(&mut self) {
        self.to_x = None;
        self.to_y = None;
    }
}

impl ViewportPlugin for Bounce {
    fn down(&mut self, _viewport: &mut Viewport, _event: &PointerEvent) -> bool {
        self.cancel();
        false
    }

    fn up(&mut self, viewport: &mut Viewport, _event: &PointerEvent) -> bool {
        self.check(viewport);
        false
    }

    fn update(&mut self, viewport: &mut Viewport, elapsed: f64) {
        self.check(viewport);
        let ease = self.options.ease;
        if let Some(tween) = self.to_x.as_mut() {
            viewport.emit(ViewportEvent::Moved {
                kind: MoveKind::BounceX,
            });
            match tween.step(elapsed, ease) {
                Some(x) => viewport.transform_mut().set_x(x),
                None => {
                    viewport.transform_mut().set_x(tween.end);
                    self.to_x = None;
                    debug!("bounce x ended");
                    viewport.emit(ViewportEvent::BounceXEnd);
                }
            }
        }
        if let Some(tween) = self.to_y.as_mut() {
            viewport.emit(ViewportEvent::Moved {
                kind: MoveKind::BounceY,
            });
            match tween.step(elapsed, ease) {
                Some(y) => viewport.transform_mut().set_y(y),
                None => {
                    viewport.transform_mut().set_y(tween.end);
                    self.to_y = None;
                    debug!("bounce y ended");
                    viewport.emit(ViewportEvent::BounceYEnd);
                }
            }
        }
    }

    fn reset(&mut self, viewport: &mut Viewport) {
        self.cancel();
        self.check(viewport);
    }

    fn pause(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};

    use super::*;
    use crate::plugins::test_support::{count, drained, viewport};
    use crate::plugins::{DecelerateOptions, DragOptions};

    fn settle(vp: &mut Viewport) {
        for _ in 0..20 {
            vp.update(16.0);
        }
    }

    #[test]
    fn returns_inside_after_time() {
        let mut vp = viewport();
        vp.bounce(BounceOptions::default());
        vp.move_corner(Point::new(-100.0, 0.0));
        assert!(vp.plugins().bounce().is_some_and(Bounce::is_active));

        vp.update(75.0);
        let halfway = vp.transform().x();
        assert!(halfway > 0.0 && halfway < 100.0, "mid-tween: {halfway}");

        settle(&mut vp);
        assert_eq!(vp.transform().x(), 0.0);
        let events = drained(&mut vp);
        assert_eq!(count(&events, "bounce-x-start"), 1);
        assert_eq!(count(&events, "bounce-x-end"), 1);
        assert_eq!(count(&events, "bounce-y-start"), 0);
    }

    #[test]
    fn disabled_side_does_not_bounce() {
        let mut vp = viewport();
        vp.bounce(BounceOptions {
            sides: Sides::RIGHT | Sides::VERTICAL,
            ..BounceOptions::default()
        });
        vp.move_corner(Point::new(-100.0, 0.0));
        settle(&mut vp);
        assert_eq!(vp.transform().corner(), Point::new(-100.0, 0.0));
    }

    #[test]
    fn bounce_box_and_bottom_edge() {
        let mut vp = viewport();
        vp.bounce(BounceOptions {
            bounce_box: Some(Rect::new(0.0, 0.0, 1000.0, 800.0)),
            ..BounceOptions::default()
        });
        vp.move_corner(Point::new(0.0, 400.0));
        settle(&mut vp);
        assert_eq!(vp.transform().bottom(), 800.0);
    }

    #[test]
    fn small_world_bounces_to_underflow() {
        let mut vp = viewport();
        vp.resize(Size::new(800.0, 600.0), Some(Size::new(400.0, 300.0)));
        vp.bounce(BounceOptions::default());
        vp.move_corner(Point::new(-10.0, 0.0));
        settle(&mut vp);
        assert_eq!(vp.transform().position(), Vec2::new(200.0, 150.0));
    }

    #[test]
    fn press_cancels_bounce() {
        let mut vp = viewport();
        vp.drag(DragOptions::default()).bounce(BounceOptions::default());
        vp.move_corner(Point::new(-100.0, 0.0));
        vp.pointer_down(&PointerEvent::mouse(Point::new(10.0, 10.0), 0.0));
        assert!(!vp.plugins().bounce().is_some_and(Bounce::is_active));
    }

    #[test]
    fn out_of_bounds_deceleration_uses_bounce_friction() {
        let mut vp = viewport();
        vp.decelerate(DecelerateOptions::default())
            .bounce(BounceOptions::default());
        if let Some(d) = vp.plugins_mut().decelerate_mut() {
            d.activate(Some(1.0), None);
        }
        vp.update(16.0);
        let pc = vp.plugins().decelerate().map(|d| d.percent_change().x);
        assert_eq!(pc, Some(0.5));
    }
}
