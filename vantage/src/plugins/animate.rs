// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tween the center and zoom to a destination, once.

use kurbo::{Point, Vec2};
use tracing::debug;

use crate::input::PointerEvent;
use crate::{Ease, MoveKind, Viewport, ViewportEvent, ViewportPlugin, ZoomKind};

/// Options for [`Animate`].
///
/// Zoom targets are read in order of precedence: `scale`, then
/// `scale_x`/`scale_y`, then `width`/`height`.
#[derive(Clone, Copy, Debug)]
pub struct AnimateOptions {
    /// Duration in milliseconds.
    pub time: f64,
    /// World point to center on; the center is kept when `None`.
    pub position: Option<Point>,
    /// Visible width to end at, in world units.
    pub width: Option<f64>,
    /// Visible height to end at, in world units.
    pub height: Option<f64>,
    /// Uniform scale to end at.
    pub scale: Option<f64>,
    /// Horizontal scale to end at.
    pub scale_x: Option<f64>,
    /// Vertical scale to end at.
    pub scale_y: Option<f64>,
    /// Curve of the animation.
    pub ease: Ease,
    /// Remove the plugin, abandoning the animation, on a press.
    pub remove_on_interrupt: bool,
}

impl Default for AnimateOptions {
    fn default() -> Self {
        Self {
            time: 1000.0,
            position: None,
            width: None,
            height: None,
            scale: None,
            scale_x: None,
            scale_y: None,
            ease: Ease::Linear,
            remove_on_interrupt: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Extent {
    start: f64,
    end: f64,
}

impl Extent {
    fn at(self, percent: f64) -> f64 {
        self.start + (self.end - self.start) * percent
    }
}

/// Animates the view to a position and/or zoom, then removes itself and
/// emits `animate-end`.
#[derive(Clone, Debug)]
pub struct Animate {
    options: AnimateOptions,
    start_center: Point,
    width: Option<Extent>,
    height: Option<Extent>,
    time: f64,
}

impl Animate {
    /// Creates an animation starting from `viewport`'s current state.
    #[must_use]
    pub fn new(viewport: &Viewport, options: AnimateOptions) -> Self {
        let t = viewport.transform();
        let screen = t.screen_size();
        let (width, height) = match (options.scale, options.scale_x, options.scale_y) {
            (Some(scale), _, _) => (Some(screen.width / scale), None),
            (None, None, None) => (options.width, options.height),
            (None, sx, sy) => (sx.map(|s| screen.width / s), sy.map(|s| screen.height / s)),
        };
        Self {
            options,
            start_center: viewport.center(),
            width: width.map(|end| Extent {
                start: t.world_screen_width(),
                end,
            }),
            height: height.map(|end| Extent {
                start: t.world_screen_height(),
                end,
            }),
            time: 0.0,
        }
    }

    /// The options in effect.
    #[must_use]
    pub fn options(&self) -> &AnimateOptions {
        &self.options
    }

    /// Milliseconds elapsed since the animation started.
    #[must_use]
    pub fn elapsed(&self) -> f64 {
        self.time
    }

    fn apply(&self, viewport: &mut Viewport, percent: f64) {
        let keep_center = self.options.position.is_none();
        let width = self.width.map(|e| e.at(percent));
        let height = self.height.map(|e| e.at(percent));
        if width.is_some() || height.is_some() {
            viewport.fit_extent(width, height, keep_center);
        }
        if let Some(position) = self.options.position {
            let center = self.start_center + (position - self.start_center) * percent;
            viewport.move_center(center);
        }
    }

    fn complete(&self, viewport: &mut Viewport) {
        viewport.remove_plugin("animate");
        self.apply(viewport, 1.0);
        debug!("animation ended");
        viewport.emit(ViewportEvent::AnimateEnd);
    }
}

impl ViewportPlugin for Animate {
    fn down(&mut self, viewport: &mut Viewport, _event: &PointerEvent) -> bool {
        if self.options.remove_on_interrupt {
            viewport.remove_plugin("animate");
        }
        false
    }

    fn update(&mut self, viewport: &mut Viewport, elapsed: f64) {
        self.time += elapsed;
        let position = viewport.transform().position();
        let scale = viewport.transform().scale();
        if self.time >= self.options.time {
            self.complete(viewport);
        } else {
            let percent = self
                .options
                .ease
                .apply(self.time, 0.0, 1.0, self.options.time);
            self.apply(viewport, percent);
        }
        if viewport.transform().position() != position && self.options.position.is_some() {
            viewport.emit(ViewportEvent::Moved {
                kind: MoveKind::Animate,
            });
        }
        if viewport.transform().scale() != scale {
            viewport.emit(ViewportEvent::Zoomed {
                kind: ZoomKind::Animate,
            });
        }
    }
}
