// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Eased scalar interpolation shared by time-driven plugins.

use crate::Ease;

/// One eased scalar moving from `start` to `end` over `duration` ms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Tween {
    pub(crate) start: f64,
    pub(crate) end: f64,
    pub(crate) time: f64,
    pub(crate) duration: f64,
}

impl Tween {
    pub(crate) fn new(start: f64, end: f64, duration: f64) -> Self {
        Self {
            start,
            end,
            time: 0.0,
            duration,
        }
    }

    /// Advances by `elapsed` and returns the new value, or `None` once the
    /// tween has reached its end.
    pub(crate) fn step(&mut self, elapsed: f64, ease: Ease) -> Option<f64> {
        self.time += elapsed;
        if self.time >= self.duration {
            return None;
        }
        Some(ease.apply(self.time, self.start, self.end - self.start, self.duration))
    }
}
