// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoom limits.

use kurbo::Vec2;
use tracing::trace;

use crate::{Viewport, ViewportEvent, ViewportPlugin, ZoomKind};

/// Options for [`ClampZoom`].
///
/// Widths and heights are in world units visible on screen: `min_width`
/// is how far in the view may zoom, `max_width` how far out. When any of
/// them is set, `min_scale` and `max_scale` are ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ClampZoomOptions {
    /// Narrowest visible width.
    pub min_width: Option<f64>,
    /// Shortest visible height.
    pub min_height: Option<f64>,
    /// Widest visible width.
    pub max_width: Option<f64>,
    /// Tallest visible height.
    pub max_height: Option<f64>,
    /// Smallest scale.
    pub min_scale: Option<f64>,
    /// Largest scale.
    pub max_scale: Option<f64>,
}

impl ClampZoomOptions {
    /// Clamps scale to `[min, max]`.
    #[must_use]
    pub fn scale(min: f64, max: f64) -> Self {
        Self {
            min_scale: Some(min),
            max_scale: Some(max),
            ..Self::default()
        }
    }

    fn has_extent_limits(&self) -> bool {
        self.min_width.is_some()
            || self.min_height.is_some()
            || self.max_width.is_some()
            || self.max_height.is_some()
    }
}

/// Keeps the scale within limits.
///
/// Zooming code elsewhere (pinch, wheel, the viewport's zoom methods) calls
/// [`Viewport::apply_clamp_zoom`], which runs [`ClampZoom::clamp`] when this
/// plugin is registered and not paused.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClampZoom {
    options: ClampZoomOptions,
}

impl ClampZoom {
    /// Creates a clamp-zoom plugin.
    #[must_use]
    pub fn new(options: ClampZoomOptions) -> Self {
        Self { options }
    }

    /// The options in effect.
    #[must_use]
    pub fn options(&self) -> &ClampZoomOptions {
        &self.options
    }

    /// Applies the limits now. Returns whether the scale changed.
    pub fn clamp(&self, viewport: &mut Viewport) -> bool {
        let o = &self.options;
        let mut changed = false;
        if o.has_extent_limits() {
            let limits = [
                (o.min_width, true, true),
                (o.max_width, true, false),
                (o.min_height, false, true),
                (o.max_height, false, false),
            ];
            for (limit, horizontal, is_min) in limits {
                let Some(limit) = limit else { continue };
                let t = viewport.transform();
                let visible = if horizontal {
                    t.world_screen_width()
                } else {
                    t.world_screen_height()
                };
                let violated = if is_min { visible < limit } else { visible > limit };
                if !violated || limit <= 0.0 {
                    continue;
                }
                let scale = t.scale();
                let next = if horizontal {
                    let sx = t.find_fit_width(limit);
                    Vec2::new(sx, scale.y * sx / scale.x)
                } else {
                    let sy = t.find_fit_height(limit);
                    Vec2::new(scale.x * sy / scale.y, sy)
                };
                if viewport.transform_mut().set_scale(next) {
                    changed = true;
                }
            }
        } else {
            let limit = |mut scale: f64| {
                if let Some(min) = o.min_scale {
                    scale = scale.max(min);
                }
                if let Some(max) = o.max_scale {
                    scale = scale.min(max);
                }
                scale
            };
            let current = viewport.transform().scale();
            let next = Vec2::new(limit(current.x), limit(current.y));
            if next != current && viewport.transform_mut().set_scale(next) {
                changed = true;
            }
        }
        if changed {
            trace!(scale = viewport.transform().scale_x(), "zoom clamped");
            viewport.emit(ViewportEvent::Zoomed {
                kind: ZoomKind::ClampZoom,
            });
        }
        changed
    }
}

impl ViewportPlugin for ClampZoom {
    fn update(&mut self, viewport: &mut Viewport, _elapsed: f64) {
        self.clamp(viewport);
    }

    fn resize(&mut self, viewport: &mut Viewport) {
        self.clamp(viewport);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugins::test_support::{close, count, drained, viewport};

    #[test]
    fn scale_limits_apply_to_set_zoom() {
        let mut vp = viewport();
        vp.clamp_zoom(ClampZoomOptions::scale(0.5, 2.0));
        vp.set_zoom(5.0, false);
        assert_eq!(vp.transform().scale(), Vec2::new(2.0, 2.0));

        vp.set_zoom(0.1, true);
        assert_eq!(vp.transform().scale_x(), 0.5);
        assert_eq!(count(&drained(&mut vp), "zoomed"), 2);
    }

    #[test]
    fn min_width_limits_zooming_in() {
        let mut vp = viewport();
        vp.clamp_zoom(ClampZoomOptions {
            min_width: Some(400.0),
            ..ClampZoomOptions::default()
        });
        vp.set_zoom(4.0, false);
        assert!(close(vp.transform().world_screen_width(), 400.0));
        assert!(close(vp.transform().scale_y(), 2.0), "y follows x proportionally");
    }

    #[test]
    fn max_height_limits_zooming_out() {
        let mut vp = viewport();
        vp.clamp_zoom(ClampZoomOptions {
            max_height: Some(1200.0),
            ..ClampZoomOptions::default()
        });
        vp.set_zoom(0.25, false);
        assert!(close(vp.transform().scale_y(), 0.5));
        assert!(close(vp.transform().scale_x(), 0.5));
    }

    #[test]
    fn scale_limits_apply_to_each_axis() {
        let mut vp = viewport();
        vp.transform_mut().set_scale(Vec2::new(1.5, 4.0));
        let clamp = ClampZoom::new(ClampZoomOptions::scale(0.5, 2.0));
        assert!(clamp.clamp(&mut vp));
        assert_eq!(vp.transform().scale(), Vec2::new(1.5, 2.0));

        vp.transform_mut().set_scale(Vec2::new(0.25, 1.0));
        assert!(clamp.clamp(&mut vp));
        assert_eq!(vp.transform().scale(), Vec2::new(0.5, 1.0));
        assert_eq!(count(&drained(&mut vp), "zoomed"), 2);
    }

    #[test]
    fn within_limits_is_untouched() {
        let mut vp = viewport();
        let clamp = ClampZoom::new(ClampZoomOptions::scale(0.5, 2.0));
        assert!(!clamp.clamp(&mut vp));
        assert!(drained(&mut vp).is_empty());
    }
}
