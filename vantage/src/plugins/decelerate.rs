// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Momentum after a drag is released.

use alloc::vec::Vec;

use kurbo::Vec2;
use tracing::{debug, trace};

use crate::input::PointerEvent;
use crate::plugins::drag::single_pointer_gesture;
use crate::{MoveKind, Viewport, ViewportEvent, ViewportPlugin};

/// Samples older than this (milliseconds) do not contribute to the release
/// velocity.
const SAMPLE_WINDOW_MS: f64 = 100.0;
const MAX_SAMPLES: usize = 60;

/// Options for [`Decelerate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecelerateOptions {
    /// Fraction of velocity kept per update.
    ///
    /// A registered bounce plugin substitutes its own friction while the
    /// view is out of bounds.
    pub friction: f64,
    /// Speed, in pixels per millisecond, under which movement stops.
    pub min_speed: f64,
}

impl Default for DecelerateOptions {
    fn default() -> Self {
        Self {
            friction: 0.95,
            min_speed: 0.01,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Sample {
    position: Vec2,
    time: f64,
}

/// Keeps the viewport moving after release, slowing by friction.
#[derive(Clone, Debug, Default)]
pub struct Decelerate {
    options: DecelerateOptions,
    samples: Vec<Sample>,
    velocity: Vec2,
    percent_change: Vec2,
}

impl Decelerate {
    /// Creates a decelerate plugin.
    #[must_use]
    pub fn new(options: DecelerateOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// The options in effect.
    #[must_use]
    pub fn options(&self) -> &DecelerateOptions {
        &self.options
    }

    /// Whether the viewport is still moving.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.velocity != Vec2::ZERO
    }

    /// Current velocity in pixels per millisecond.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Per-axis fraction of velocity kept per update.
    #[must_use]
    pub fn percent_change(&self) -> Vec2 {
        self.percent_change
    }

    /// Starts a programmatic deceleration with the given velocities, in
    /// pixels per millisecond. `None` leaves an axis untouched.
    pub fn activate(&mut self, x: Option<f64>, y: Option<f64>) {
        if let Some(x) = x {
            self.velocity.x = x;
            self.percent_change.x = self.options.friction;
        }
        if let Some(y) = y {
            self.velocity.y = y;
            self.percent_change.y = self.options.friction;
        }
    }

    /// Replaces the horizontal friction.
    pub fn set_percent_change_x(&mut self, value: f64) {
        self.percent_change.x = value;
    }

    /// Replaces the vertical friction.
    pub fn set_percent_change_y(&mut self, value: f64) {
        self.percent_change.y = value;
    }

    /// Stops horizontal movement.
    pub fn stop_x(&mut self) {
        self.velocity.x = 0.0;
    }

    /// Stops vertical movement.
    pub fn stop_y(&mut self) {
        self.velocity.y = 0.0;
    }

    /// Stops all movement and forgets recorded samples.
    pub fn stop(&mut self) {
        self.samples.clear();
        self.velocity = Vec2::ZERO;
    }

    /// A clamp moved the view horizontally from `original` to `current`.
    /// The newest sample follows so the release velocity ignores the jump.
    pub(crate) fn on_clamp_x(&mut self, original: f64, current: f64) {
        if let Some(last) = self.samples.last_mut() {
            if last.position.x == original {
                last.position.x = current;
            }
        }
    }

    /// Vertical counterpart of [`Self::on_clamp_x`].
    pub(crate) fn on_clamp_y(&mut self, original: f64, current: f64) {
        if let Some(last) = self.samples.last_mut() {
            if last.position.y == original {
                last.position.y = current;
            }
        }
    }
}

impl ViewportPlugin for Decelerate {
    fn down(&mut self, _viewport: &mut Viewport, _event: &PointerEvent) -> bool {
        self.stop();
        false
    }

    fn pointer_move(&mut self, viewport: &mut Viewport, event: &PointerEvent) -> bool {
        if !single_pointer_gesture(viewport) {
            return false;
        }
        self.samples.push(Sample {
            position: viewport.transform().position(),
            time: event.time_ms,
        });
        if self.samples.len() > MAX_SAMPLES {
            self.samples.drain(..MAX_SAMPLES / 2);
        }
        false
    }

    fn up(&mut self, viewport: &mut Viewport, event: &PointerEvent) -> bool {
        if viewport.input().count() != 0 {
            return false;
        }
        let now = event.time_ms;
        let recent = self
            .samples
            .iter()
            .find(|s| s.time >= now - SAMPLE_WINDOW_MS)
            .copied();
        self.samples.clear();
        let Some(sample) = recent else {
            return false;
        };
        let dt = now - sample.time;
        if dt > 0.0 {
            self.velocity = (viewport.transform().position() - sample.position) / dt;
            self.percent_change = Vec2::new(self.options.friction, self.options.friction);
            debug!(vx = self.velocity.x, vy = self.velocity.y, "deceleration started");
        }
        false
    }

    fn update(&mut self, viewport: &mut Viewport, elapsed: f64) {
        if !self.is_active() {
            return;
        }
        viewport.transform_mut().translate(self.velocity * elapsed);
        self.velocity.x *= self.percent_change.x;
        self.velocity.y *= self.percent_change.y;
        if self.velocity.x.abs() < self.options.min_speed {
            self.velocity.x = 0.0;
        }
        if self.velocity.y.abs() < self.options.min_speed {
            self.velocity.y = 0.0;
        }
        trace!(vx = self.velocity.x, vy = self.velocity.y, "decelerate step");
        viewport.emit(ViewportEvent::Moved {
            kind: MoveKind::Decelerate,
        });
    }

    fn reset(&mut self, _viewport: &mut Viewport) {
        self.stop();
    }

    fn pause(&mut self) {
        self.stop();
    }
}
