// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keep a moving target centered.

use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use core::cell::Cell;
use core::fmt::Debug;

use kurbo::{Point, Vec2};

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::{MoveKind, Viewport, ViewportEvent, ViewportPlugin};

/// Something the viewport can follow.
///
/// Returning `None` means the target is gone; following becomes a no-op
/// until it returns a position again.
pub trait FollowTarget: Debug {
    /// World position of the target.
    fn position(&self) -> Option<Point>;
}

impl FollowTarget for Point {
    fn position(&self) -> Option<Point> {
        Some(*self)
    }
}

impl FollowTarget for Rc<Cell<Point>> {
    fn position(&self) -> Option<Point> {
        Some(self.get())
    }
}

impl FollowTarget for Weak<Cell<Point>> {
    fn position(&self) -> Option<Point> {
        self.upgrade().map(|cell| cell.get())
    }
}

/// Options for [`Follow`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FollowOptions {
    /// Maximum center travel per update in world units; zero snaps
    /// straight to the target.
    pub speed: f64,
    /// Ramp speed up and down by this much per millisecond.
    pub acceleration: Option<f64>,
    /// Only follow once the target leaves a circle of this radius around
    /// the center.
    pub radius: Option<f64>,
}

/// Moves the view's center toward a target every update.
#[derive(Debug)]
pub struct Follow {
    target: Box<dyn FollowTarget>,
    options: FollowOptions,
    velocity: Vec2,
}

impl Follow {
    /// Creates a follow plugin.
    #[must_use]
    pub fn new(target: impl FollowTarget + 'static, options: FollowOptions) -> Self {
        Self {
            target: Box::new(target),
            options,
            velocity: Vec2::ZERO,
        }
    }

    /// The options in effect.
    #[must_use]
    pub fn options(&self) -> &FollowOptions {
        &self.options
    }

    /// Follows `target` instead.
    pub fn set_target(&mut self, target: impl FollowTarget + 'static) {
        self.target = Box::new(target);
        self.velocity = Vec2::ZERO;
    }

    /// Where the center should end up this update, or `None` to stay put.
    fn goal(&self, center: Point) -> Option<Point> {
        let target = self.target.position()?;
        let Some(radius) = self.options.radius else {
            return Some(target);
        };
        let offset = target - center;
        if offset.hypot() <= radius {
            return None;
        }
        let angle = offset.atan2();
        Some(target - Vec2::new(angle.cos(), angle.sin()) * radius)
    }

    /// Per-axis speed after accelerating toward, or braking before, a goal
    /// `distance` away.
    fn accelerate(&mut self, acceleration: f64, distance: f64, elapsed: f64) -> Vec2 {
        let braking = self.velocity.hypot2() / (2.0 * acceleration);
        let step = acceleration * elapsed;
        self.velocity = if distance > braking {
            Vec2::new(
                (self.velocity.x + step).min(self.options.speed),
                (self.velocity.y + step).min(self.options.speed),
            )
        } else {
            Vec2::new(
                (self.velocity.x - step).max(0.0),
                (self.velocity.y - step).max(0.0),
            )
        };
        self.velocity
    }
}

impl ViewportPlugin for Follow {
    fn update(&mut self, viewport: &mut Viewport, elapsed: f64) {
        let center = viewport.center();
        let Some(goal) = self.goal(center) else {
            return;
        };
        let delta = goal - center;
        if delta == Vec2::ZERO {
            return;
        }
        let next = if self.options.speed > 0.0 {
            let speed = match self.options.acceleration {
                Some(acceleration) if acceleration > 0.0 => {
                    self.accelerate(acceleration, delta.hypot(), elapsed)
                }
                _ => Vec2::new(self.options.speed, self.options.speed),
            };
            let angle = delta.atan2();
            let change = Vec2::new(angle.cos() * speed.x, angle.sin() * speed.y);
            Point::new(
                if change.x.abs() > delta.x.abs() { goal.x } else { center.x + change.x },
                if change.y.abs() > delta.y.abs() { goal.y } else { center.y + change.y },
            )
        } else {
            goal
        };
        viewport.move_center(next);
        viewport.emit(ViewportEvent::Moved {
            kind: MoveKind::Follow,
        });
    }
}
