// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glide the zoom to a fixed visible size.

use kurbo::{Point, Vec2};
use tracing::debug;

use crate::input::{PointerEvent, WheelEvent};
use crate::{Ease, Viewport, ViewportEvent, ViewportPlugin, ZoomKind};

/// Options for [`SnapZoom`].
///
/// Give `width`, `height` or both, in world units to show across the
/// screen. With only one of them, both axes use the scale it implies.
#[derive(Clone, Copy, Debug)]
pub struct SnapZoomOptions {
    /// Visible width to zoom to; zero leaves it to `height`.
    pub width: f64,
    /// Visible height to zoom to; zero leaves it to `width`.
    pub height: f64,
    /// Duration in milliseconds. Zero applies the zoom immediately.
    pub time: f64,
    /// Curve of the zoom.
    pub ease: Ease,
    /// Keep this world point centered instead of the current center.
    pub center: Option<Point>,
    /// Pause zooming while pointers are down.
    pub interrupt: bool,
    /// Remove the plugin once the zoom completes.
    pub remove_on_complete: bool,
    /// Remove the plugin on a press or wheel.
    pub remove_on_interrupt: bool,
    /// Start zooming on creation.
    pub force_start: bool,
    /// Zoom about the top-left corner and leave the position alone.
    pub no_move: bool,
}

impl Default for SnapZoomOptions {
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            time: 1000.0,
            ease: Ease::InOutSine,
            center: None,
            interrupt: true,
            remove_on_complete: false,
            remove_on_interrupt: false,
            force_start: false,
            no_move: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Snapping {
    start: Vec2,
    time: f64,
}

/// Zooms to show a given width and/or height.
#[derive(Clone, Debug)]
pub struct SnapZoom {
    options: SnapZoomOptions,
    target: Option<Vec2>,
    snapping: Option<Snapping>,
}

impl SnapZoom {
    /// Creates a snap-zoom plugin for `viewport`'s screen size.
    #[must_use]
    pub fn new(viewport: &Viewport, options: SnapZoomOptions) -> Self {
        let mut plugin = Self {
            options,
            target: None,
            snapping: None,
        };
        plugin.resolve_target(viewport);
        plugin
    }

    /// The options in effect.
    #[must_use]
    pub fn options(&self) -> &SnapZoomOptions {
        &self.options
    }

    /// The scale being zoomed to, if a width or height was given.
    #[must_use]
    pub fn target_scale(&self) -> Option<Vec2> {
        self.target
    }

    /// Whether a zoom is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.snapping.is_some()
    }

    fn resolve_target(&mut self, viewport: &Viewport) {
        let screen = viewport.transform().screen_size();
        let x = (self.options.width > 0.0).then(|| screen.width / self.options.width);
        let y = (self.options.height > 0.0).then(|| screen.height / self.options.height);
        self.target = match (x, y) {
            (Some(x), Some(y)) => Some(Vec2::new(x, y)),
            (Some(s), None) | (None, Some(s)) => Some(Vec2::new(s, s)),
            (None, None) => None,
        };
    }

    /// Starts zooming from the current scale.
    pub fn start(&mut self, viewport: &mut Viewport) {
        if self.target.is_none() {
            return;
        }
        self.snapping = Some(Snapping {
            start: viewport.transform().scale(),
            time: 0.0,
        });
        debug!(scale = ?self.target, "snap zoom started");
        viewport.emit(ViewportEvent::SnapZoomStart);
    }

    /// Sets the target scale at once, without a tween.
    pub(crate) fn apply_now(&self, viewport: &mut Viewport) {
        if let Some(target) = self.target {
            let anchor = self.anchor(viewport);
            Self::zoom_to(viewport, target, anchor);
        }
    }

    /// World point kept at the screen center while zooming.
    fn anchor(&self, viewport: &Viewport) -> Option<Point> {
        match (self.options.no_move, self.options.center) {
            (true, _) => None,
            (false, Some(center)) => Some(center),
            (false, None) => Some(viewport.center()),
        }
    }

    fn zoom_to(viewport: &mut Viewport, scale: Vec2, anchor: Option<Point>) {
        if viewport.transform_mut().set_scale(scale) {
            viewport.emit(ViewportEvent::Zoomed {
                kind: ZoomKind::SnapZoom,
            });
        }
        viewport.apply_clamp_zoom();
        if let Some(anchor) = anchor {
            viewport.move_center(anchor);
        }
    }

    fn step(&mut self, viewport: &mut Viewport, target: Vec2, elapsed: f64) {
        let anchor = self.anchor(viewport);
        let Some(snapping) = self.snapping.as_mut() else {
            return;
        };

        snapping.time += elapsed;
        let finished = snapping.time >= self.options.time;
        let scale = if finished {
            target
        } else {
            let (ease, time) = (self.options.ease, self.options.time);
            let delta = target - snapping.start;
            Vec2::new(
                ease.apply(snapping.time, snapping.start.x, delta.x, time),
                ease.apply(snapping.time, snapping.start.y, delta.y, time),
            )
        };
        Self::zoom_to(viewport, scale, anchor);

        if finished {
            self.snapping = None;
            if self.options.remove_on_complete {
                viewport.remove_plugin("snap-zoom");
            }
            debug!("snap zoom ended");
            viewport.emit(ViewportEvent::SnapZoomEnd);
        }
    }
}

impl ViewportPlugin for SnapZoom {
    fn down(&mut self, viewport: &mut Viewport, _event: &PointerEvent) -> bool {
        if self.options.remove_on_interrupt {
            viewport.remove_plugin("snap-zoom");
        } else if self.options.interrupt {
            self.snapping = None;
        }
        false
    }

    fn wheel(&mut self, viewport: &mut Viewport, _event: &WheelEvent) -> bool {
        if self.options.remove_on_interrupt {
            viewport.remove_plugin("snap-zoom");
        }
        false
    }

    fn update(&mut self, viewport: &mut Viewport, elapsed: f64) {
        if self.options.interrupt && viewport.input().count() != 0 {
            return;
        }
        let Some(target) = self.target else {
            return;
        };
        if self.snapping.is_none() {
            if viewport.transform().scale() != target {
                self.start(viewport);
            }
            return;
        }
        self.step(viewport, target, elapsed);
    }

    fn resize(&mut self, viewport: &mut Viewport) {
        self.snapping = None;
        self.resolve_target(viewport);
    }

    fn reset(&mut self, _viewport: &mut Viewport) {
        self.snapping = None;
    }

    fn resume(&mut self) {
        self.snapping = None;
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Size;

    use super::*;
    use crate::Plugin;
    use crate::plugins::ClampZoomOptions;
    use crate::plugins::test_support::{close, count, drained, viewport};

    fn run(vp: &mut Viewport, frames: usize) {
        for _ in 0..frames {
            vp.update(16.0);
        }
    }

    #[test]
    fn one_dimension_sets_both_scales() {
        let vp = viewport();
        let zoom = SnapZoom::new(
            &vp,
            SnapZoomOptions {
                width: 400.0,
                ..SnapZoomOptions::default()
            },
        );
        assert_eq!(zoom.target_scale(), Some(Vec2::new(2.0, 2.0)));

        let none = SnapZoom::new(&vp, SnapZoomOptions::default());
        assert_eq!(none.target_scale(), None);
    }

    #[test]
    fn zooms_keeping_the_center() {
        let mut vp = viewport();
        let center = vp.center();
        vp.snap_zoom(SnapZoomOptions {
            width: 400.0,
            height: 150.0,
            ..SnapZoomOptions::default()
        });
        run(&mut vp, 70);

        assert_eq!(vp.transform().scale(), Vec2::new(2.0, 4.0));
        let after = vp.center();
        assert!(close(after.x, center.x) && close(after.y, center.y));
        let events = drained(&mut vp);
        assert_eq!(count(&events, "snap-zoom-start"), 1);
        assert_eq!(count(&events, "snap-zoom-end"), 1);
    }

    #[test]
    fn zero_time_applies_immediately() {
        let mut vp = viewport();
        vp.snap_zoom(SnapZoomOptions {
            width: 1600.0,
            time: 0.0,
            remove_on_complete: true,
            ..SnapZoomOptions::default()
        });
        assert_eq!(vp.transform().scale_x(), 0.5);
        assert!(vp.plugins().get("snap-zoom").is_none());
    }

    #[test]
    fn clamp_zoom_limits_each_step() {
        let mut vp = viewport();
        vp.clamp_zoom(ClampZoomOptions::scale(0.5, 1.5))
            .snap_zoom(SnapZoomOptions {
                width: 200.0,
                remove_on_complete: true,
                ..SnapZoomOptions::default()
            });
        run(&mut vp, 70);
        assert_eq!(vp.transform().scale_x(), 1.5);
        assert!(vp.plugins().get("snap-zoom").is_none());
    }

    #[test]
    fn resize_recomputes_target() {
        let mut vp = viewport();
        vp.snap_zoom(SnapZoomOptions {
            width: 400.0,
            ..SnapZoomOptions::default()
        });
        vp.resize(Size::new(1200.0, 600.0), None);
        let target = vp
            .plugins()
            .get("snap-zoom")
            .and_then(Plugin::as_snap_zoom)
            .and_then(SnapZoom::target_scale);
        assert_eq!(target, Some(Vec2::new(3.0, 3.0)));
    }
}
