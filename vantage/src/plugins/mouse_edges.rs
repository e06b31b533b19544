// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll while the mouse hovers near the screen edges.

use kurbo::{Point, Vec2};
use tracing::debug;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::input::PointerEvent;
use crate::{MoveKind, Viewport, ViewportEvent, ViewportPlugin};

/// Scroll speeds are given per frame at this rate.
const FRAMES_PER_MS: f64 = 60.0 / 1000.0;

/// Options for [`MouseEdges`].
///
/// Zones are in screen pixels. `radius` takes precedence over `distance`,
/// which takes precedence over the per-edge widths.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MouseEdgesOptions {
    /// Scroll whenever the mouse is at least this far from the screen center.
    pub radius: Option<f64>,
    /// Width of a scroll zone along every edge.
    pub distance: Option<f64>,
    /// Width of the top zone.
    pub top: Option<f64>,
    /// Width of the bottom zone.
    pub bottom: Option<f64>,
    /// Width of the left zone.
    pub left: Option<f64>,
    /// Width of the right zone.
    pub right: Option<f64>,
    /// Scroll speed in world units per frame at 60 frames per second.
    pub speed: f64,
    /// Scroll away from the edge instead of toward it.
    pub reverse: bool,
    /// Stop dead when leaving a zone instead of handing off to decelerate.
    pub no_decelerate: bool,
    /// With `radius`, scroll along the nearest axis or diagonal only.
    pub linear: bool,
    /// Keep scrolling while mouse buttons are held.
    pub allow_buttons: bool,
}

impl Default for MouseEdgesOptions {
    fn default() -> Self {
        Self {
            radius: None,
            distance: None,
            top: None,
            bottom: None,
            left: None,
            right: None,
            speed: 8.0,
            reverse: false,
            no_decelerate: false,
            linear: false,
            allow_buttons: false,
        }
    }
}

/// Edge lines of the scroll zones, resolved against the screen size.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Zones {
    left: Option<f64>,
    right: Option<f64>,
    top: Option<f64>,
    bottom: Option<f64>,
}

/// Scrolls the view while a hovering mouse sits in an edge zone.
#[derive(Clone, Debug, Default)]
pub struct MouseEdges {
    options: MouseEdgesOptions,
    zones: Zones,
    /// Unit scroll direction of the view's center; zero outside the zones.
    direction: Vec2,
}

impl MouseEdges {
    /// Creates a mouse-edges plugin for `viewport`'s screen size.
    #[must_use]
    pub fn new(viewport: &Viewport, options: MouseEdgesOptions) -> Self {
        let mut plugin = Self {
            options,
            ..Self::default()
        };
        plugin.resolve_zones(viewport);
        plugin
    }

    /// The options in effect.
    #[must_use]
    pub fn options(&self) -> &MouseEdgesOptions {
        &self.options
    }

    /// Whether the mouse is in a scroll zone.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.direction != Vec2::ZERO
    }

    fn sign(&self) -> f64 {
        if self.options.reverse { 1.0 } else { -1.0 }
    }

    fn resolve_zones(&mut self, viewport: &Viewport) {
        let size = viewport.transform().screen_size();
        let o = &self.options;
        self.zones = match o.distance {
            Some(d) => Zones {
                left: Some(d),
                top: Some(d),
                right: Some(size.width - d),
                bottom: Some(size.height - d),
            },
            None => Zones {
                left: o.left,
                top: o.top,
                right: o.right.map(|r| size.width - r),
                bottom: o.bottom.map(|b| size.height - b),
            },
        };
    }

    fn radial(&self, viewport: &Viewport, radius: f64, at: Point) -> Option<Vec2> {
        let size = viewport.transform().screen_size();
        let center = Point::new(size.width / 2.0, size.height / 2.0);
        let offset = center - at;
        if offset.hypot2() < radius * radius {
            return None;
        }
        let angle = offset.atan2();
        let (mut x, mut y) = (angle.cos(), angle.sin());
        if self.options.linear {
            x = x.round();
            y = y.round();
        }
        Some(Vec2::new(x, y) * self.sign())
    }

    fn axis(low: Option<f64>, high: Option<f64>, at: f64) -> f64 {
        match (low, high) {
            (Some(low), _) if at < low => 1.0,
            (_, Some(high)) if at > high => -1.0,
            _ => 0.0,
        }
    }

    /// Hands the remaining scroll on the axes in `leaving` to decelerate.
    fn hand_off(&self, viewport: &mut Viewport, leaving: Vec2) {
        if self.options.no_decelerate || leaving == Vec2::ZERO {
            return;
        }
        let scale = viewport.transform().scale();
        let speed = self.options.speed;
        let Some(decelerate) = viewport.plugins_mut().decelerate_mut() else {
            return;
        };
        // Center travel of `d * speed` world units per frame is a position
        // change of `-d * speed * scale` pixels per frame.
        let velocity = |d: f64, s: f64| (d != 0.0).then(|| -d * speed * s * FRAMES_PER_MS);
        decelerate.activate(velocity(leaving.x, scale.x), velocity(leaving.y, scale.y));
    }
}

impl ViewportPlugin for MouseEdges {
    fn down(&mut self, _viewport: &mut Viewport, _event: &PointerEvent) -> bool {
        if !self.options.allow_buttons {
            self.direction = Vec2::ZERO;
        }
        false
    }

    fn pointer_move(&mut self, viewport: &mut Viewport, event: &PointerEvent) -> bool {
        if !event.kind.is_mouse() || (!self.options.allow_buttons && !event.buttons.is_empty()) {
            return false;
        }
        let was_active = self.is_active();
        let at = event.position;
        let next = match self.options.radius {
            Some(radius) => self.radial(viewport, radius, at).unwrap_or(Vec2::ZERO),
            None => {
                let z = self.zones;
                Vec2::new(
                    Self::axis(z.left, z.right, at.x),
                    Self::axis(z.top, z.bottom, at.y),
                ) * self.sign()
            }
        };
        let leaving = Vec2::new(
            if next.x == 0.0 { self.direction.x } else { 0.0 },
            if next.y == 0.0 { self.direction.y } else { 0.0 },
        );
        self.hand_off(viewport, leaving);
        self.direction = next;

        match (was_active, self.is_active()) {
            (false, true) => {
                debug!(x = at.x, y = at.y, "mouse edge scroll started");
                viewport.emit(ViewportEvent::MouseEdgeStart);
            }
            (true, false) => {
                debug!("mouse edge scroll ended");
                viewport.emit(ViewportEvent::MouseEdgeEnd);
            }
            _ => {}
        }
        false
    }

    fn update(&mut self, viewport: &mut Viewport, elapsed: f64) {
        if !self.is_active() {
            return;
        }
        let step = self.options.speed * elapsed * FRAMES_PER_MS;
        let center = viewport.center() + self.direction * step;
        viewport.move_center(center);
        viewport.emit(ViewportEvent::Moved {
            kind: MoveKind::MouseEdges,
        });
    }

    fn resize(&mut self, viewport: &mut Viewport) {
        self.resolve_zones(viewport);
    }

    fn pause(&mut self) {
        self.direction = Vec2::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugins::DecelerateOptions;
    use crate::plugins::test_support::{close, count, drained, viewport};

    fn hover(x: f64, y: f64) -> PointerEvent {
        PointerEvent::hover(Point::new(x, y), 0.0)
    }

    #[test]
    fn left_zone_scrolls_left() {
        let mut vp = viewport();
        vp.mouse_edges(MouseEdgesOptions {
            distance: Some(20.0),
            ..MouseEdgesOptions::default()
        });
        let before = vp.center();
        vp.pointer_move(&hover(5.0, 300.0));
        vp.update(16.0);

        let after = vp.center();
        assert!(close(after.x - before.x, -8.0 * 16.0 * FRAMES_PER_MS));
        assert_eq!(after.y, before.y);
        let events = drained(&mut vp);
        assert_eq!(count(&events, "mouse-edge-start"), 1);
        assert_eq!(count(&events, "moved"), 1);
    }

    #[test]
    fn leaving_the_zone_ends_and_hands_off() {
        let mut vp = viewport();
        vp.decelerate(DecelerateOptions::default())
            .mouse_edges(MouseEdgesOptions {
                right: Some(50.0),
                ..MouseEdgesOptions::default()
            });
        vp.pointer_move(&hover(790.0, 300.0));
        vp.pointer_move(&hover(400.0, 300.0));

        let velocity = vp.plugins().decelerate().map(|d| d.velocity().x);
        assert!(velocity.is_some_and(|v| v < 0.0), "view keeps sliding: {velocity:?}");
        assert_eq!(count(&drained(&mut vp), "mouse-edge-end"), 1);
    }

    #[test]
    fn buttons_pause_scrolling() {
        let mut vp = viewport();
        vp.mouse_edges(MouseEdgesOptions {
            distance: Some(20.0),
            ..MouseEdgesOptions::default()
        });
        vp.pointer_move(&PointerEvent::mouse(Point::new(5.0, 5.0), 0.0));
        let before = vp.center();
        vp.update(16.0);
        assert_eq!(vp.center(), before);
    }

    #[test]
    fn radius_scrolls_outward() {
        let mut vp = viewport();
        vp.mouse_edges(MouseEdgesOptions {
            radius: Some(100.0),
            linear: true,
            ..MouseEdgesOptions::default()
        });
        vp.pointer_move(&hover(400.0, 590.0));
        let before = vp.center();
        vp.update(16.0);
        let after = vp.center();
        assert_eq!(after.x, before.x);
        assert!(after.y > before.y, "scrolls toward the bottom edge");
    }
}
