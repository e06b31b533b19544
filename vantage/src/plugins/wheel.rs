// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel zoom.

use kurbo::{Point, Vec2};
use tracing::trace;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::input::{PointerEvent, WheelEvent};
use crate::options::Direction;
use crate::{MoveKind, Viewport, ViewportEvent, ViewportPlugin, ZoomKind};

/// Options for [`Wheel`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelOptions {
    /// Zoom speed; each wheel step scales by `2^((1 + percent) * step)`.
    pub percent: f64,
    /// Spread each zoom over this many updates.
    pub smooth: Option<u32>,
    /// A press cancels a smoothed zoom in progress.
    pub interrupt: bool,
    /// Zoom in on wheel down instead of wheel up.
    pub reverse: bool,
    /// Keep this world point centered instead of zooming about the pointer.
    pub center: Option<Point>,
    /// Pixels per line for line-mode deltas.
    pub line_height: f64,
    /// Axes that scale.
    pub axis: Direction,
    /// Treat ctrl+wheel as a trackpad pinch.
    pub trackpad_pinch: bool,
    /// Zoom on wheel; when off, the wheel pans instead.
    pub wheel_zoom: bool,
}

impl Default for WheelOptions {
    fn default() -> Self {
        Self {
            percent: 0.1,
            smooth: None,
            interrupt: true,
            reverse: false,
            center: None,
            line_height: 20.0,
            axis: Direction::All,
            trackpad_pinch: false,
            wheel_zoom: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Smoothing {
    /// Scale added per update.
    step: Vec2,
    /// Screen point the zoom is anchored at.
    anchor: Point,
    count: u32,
}

/// Zooms the viewport with the mouse wheel or a trackpad pinch.
#[derive(Clone, Debug, Default)]
pub struct Wheel {
    options: WheelOptions,
    smoothing: Option<Smoothing>,
}

impl Wheel {
    /// Creates a wheel plugin.
    #[must_use]
    pub fn new(options: WheelOptions) -> Self {
        Self {
            options,
            smoothing: None,
        }
    }

    /// The options in effect.
    #[must_use]
    pub fn options(&self) -> &WheelOptions {
        &self.options
    }

    /// Whether a smoothed zoom is in progress.
    #[must_use]
    pub fn is_smoothing(&self) -> bool {
        self.smoothing.is_some()
    }

    /// Sets the scale and keeps the anchor (or the configured center) in place.
    fn apply_scale(&self, viewport: &mut Viewport, scale: Vec2, anchor: Point) {
        let world = viewport.to_world(anchor);
        if !viewport.transform_mut().set_scale(scale) {
            return;
        }
        viewport.emit(ViewportEvent::Zoomed {
            kind: ZoomKind::Wheel,
        });
        viewport.apply_clamp_zoom();
        match self.options.center {
            Some(center) => viewport.move_center(center),
            None => {
                let moved = viewport.to_screen(world);
                viewport.transform_mut().translate(anchor - moved);
            }
        }
    }

    fn scaled(&self, scale: Vec2, change: f64) -> Vec2 {
        let axis = self.options.axis;
        Vec2::new(
            if axis.has_x() { scale.x * change } else { scale.x },
            if axis.has_y() { scale.y * change } else { scale.y },
        )
    }

    fn zoom(&mut self, viewport: &mut Viewport, event: &WheelEvent) {
        let sign = if self.options.reverse { -1.0 } else { 1.0 };
        let step = sign * -event.dy * event.line_scale(self.options.line_height) / 500.0;
        let change = 2.0_f64.powf((1.0 + self.options.percent) * step);
        let scale = viewport.transform().scale();
        match self.options.smooth.filter(|frames| *frames > 0) {
            Some(frames) => {
                let remaining = self.smoothing.map_or(Vec2::ZERO, |s| {
                    s.step * f64::from(frames.saturating_sub(s.count))
                });
                let target = self.scaled(scale + remaining, change);
                self.smoothing = Some(Smoothing {
                    step: (target - scale) / f64::from(frames),
                    anchor: event.position,
                    count: 0,
                });
            }
            None => {
                let next = self.scaled(scale, change);
                trace!(change, "wheel zoom");
                self.apply_scale(viewport, next, event.position);
            }
        }
    }

    fn trackpad_pinch(&self, viewport: &mut Viewport, event: &WheelEvent) {
        let step = -event.dy * event.line_scale(self.options.line_height) / 200.0;
        let change = 2.0_f64.powf((1.0 + self.options.percent) * step);
        let next = self.scaled(viewport.transform().scale(), change);
        trace!(change, "trackpad pinch");
        self.apply_scale(viewport, next, event.position);
    }

    fn pan(&self, viewport: &mut Viewport, event: &WheelEvent) {
        let sign = if self.options.reverse { 1.0 } else { -1.0 };
        let delta = event.delta() * event.line_scale(self.options.line_height) * sign;
        let axis = self.options.axis;
        viewport.transform_mut().translate(Vec2::new(
            if axis.has_x() { delta.x } else { 0.0 },
            if axis.has_y() { delta.y } else { 0.0 },
        ));
    }
}

impl ViewportPlugin for Wheel {
    fn down(&mut self, _viewport: &mut Viewport, _event: &PointerEvent) -> bool {
        if self.options.interrupt {
            self.smoothing = None;
        }
        false
    }

    fn wheel(&mut self, viewport: &mut Viewport, event: &WheelEvent) -> bool {
        if event.ctrl && self.options.trackpad_pinch {
            self.trackpad_pinch(viewport, event);
        } else if self.options.wheel_zoom {
            self.zoom(viewport, event);
        } else {
            self.pan(viewport, event);
        }
        viewport.emit(ViewportEvent::Moved {
            kind: MoveKind::Wheel,
        });
        viewport.emit(ViewportEvent::Wheel {
            dx: event.dx,
            dy: event.dy,
            dz: event.dz,
        });
        true
    }

    fn update(&mut self, viewport: &mut Viewport, _elapsed: f64) {
        let Some(mut smoothing) = self.smoothing else {
            return;
        };
        let next = viewport.transform().scale() + smoothing.step;
        self.apply_scale(viewport, next, smoothing.anchor);
        viewport.emit(ViewportEvent::Moved {
            kind: MoveKind::Wheel,
        });
        smoothing.count += 1;
        let frames = self.options.smooth.unwrap_or(0);
        self.smoothing = (smoothing.count < frames).then_some(smoothing);
    }

    fn pause(&mut self) {
        self.smoothing = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugins::ClampZoomOptions;
    use crate::plugins::test_support::{close, count, drained, viewport};

    fn wheel_up(x: f64, y: f64) -> WheelEvent {
        WheelEvent::vertical(Point::new(x, y), -100.0)
    }

    #[test]
    fn zooms_about_the_pointer() {
        let mut vp = viewport();
        vp.wheel(WheelOptions::default());
        let anchor = Point::new(200.0, 150.0);
        let world = vp.to_world(anchor);
        vp.pointer_wheel(&wheel_up(anchor.x, anchor.y));

        let expected = 2.0_f64.powf(1.1 * 0.2);
        assert!(close(vp.transform().scale_x(), expected));
        let after = vp.to_screen(world);
        assert!(close(after.x, anchor.x) && close(after.y, anchor.y));

        let events = drained(&mut vp);
        assert_eq!(count(&events, "zoomed"), 1);
        assert_eq!(count(&events, "wheel"), 1);
    }

    #[test]
    fn reverse_and_axis() {
        let mut vp = viewport();
        vp.wheel(WheelOptions {
            reverse: true,
            axis: Direction::Y,
            ..WheelOptions::default()
        });
        vp.pointer_wheel(&wheel_up(0.0, 0.0));
        assert_eq!(vp.transform().scale_x(), 1.0);
        assert!(vp.transform().scale_y() < 1.0);
    }

    #[test]
    fn smoothing_spreads_over_frames() {
        let mut vp = viewport();
        vp.wheel(WheelOptions {
            smooth: Some(4),
            ..WheelOptions::default()
        });
        vp.pointer_wheel(&wheel_up(400.0, 300.0));
        assert_eq!(vp.transform().scale_x(), 1.0, "nothing until update");

        for _ in 0..4 {
            vp.update(16.0);
        }
        assert!(close(vp.transform().scale_x(), 2.0_f64.powf(0.22)));
        assert!(!vp.plugins().wheel().is_some_and(Wheel::is_smoothing));
    }

    #[test]
    fn trackpad_pinch_is_more_sensitive() {
        let mut vp = viewport();
        vp.wheel(WheelOptions {
            trackpad_pinch: true,
            ..WheelOptions::default()
        });
        vp.pointer_wheel(&WheelEvent {
            ctrl: true,
            ..WheelEvent::vertical(Point::new(10.0, 10.0), -20.0)
        });
        assert!(close(vp.transform().scale_x(), 2.0_f64.powf(1.1 * 0.1)));
    }

    #[test]
    fn respects_clamp_zoom() {
        let mut vp = viewport();
        vp.wheel(WheelOptions::default())
            .clamp_zoom(ClampZoomOptions::scale(0.5, 1.05));
        vp.pointer_wheel(&wheel_up(0.0, 0.0));
        assert_eq!(vp.transform().scale_x(), 1.05);
    }

    #[test]
    fn pans_when_zoom_disabled() {
        let mut vp = viewport();
        vp.wheel(WheelOptions {
            wheel_zoom: false,
            ..WheelOptions::default()
        });
        vp.pointer_wheel(&WheelEvent::vertical(Point::new(1.0, 1.0), 40.0));
        assert_eq!(vp.transform().position(), Vec2::new(0.0, -40.0));
    }
}
