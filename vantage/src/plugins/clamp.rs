// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keep the view inside world bounds.

use crate::input::PointerEvent;
use crate::options::{Bound, Direction, Underflow};
use crate::{MoveKind, Viewport, ViewportEvent, ViewportPlugin};

/// Options for [`Clamp`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClampOptions {
    /// Limit for the view's left edge.
    pub left: Bound,
    /// Limit for the view's right edge.
    pub right: Bound,
    /// Limit for the view's top edge.
    pub top: Bound,
    /// Limit for the view's bottom edge.
    pub bottom: Bound,
    /// Placement on an axis whose world is smaller than the screen.
    pub underflow: Underflow,
}

impl ClampOptions {
    /// Clamps the edges of `direction`'s axes to the world.
    #[must_use]
    pub fn direction(direction: Direction) -> Self {
        let x = Bound::from(direction.has_x());
        let y = Bound::from(direction.has_y());
        Self {
            left: x,
            right: x,
            top: y,
            bottom: y,
            underflow: Underflow::CENTER,
        }
    }
}

impl Default for ClampOptions {
    fn default() -> Self {
        Self::direction(Direction::All)
    }
}

/// Corrects the position so the view stays within its bounds.
///
/// The correction is a pure function of the transform and the options, so
/// applying it twice changes nothing the second time.
#[derive(Clone, Debug, Default)]
pub struct Clamp {
    options: ClampOptions,
}

impl Clamp {
    /// Creates a clamp plugin.
    #[must_use]
    pub fn new(options: ClampOptions) -> Self {
        Self { options }
    }

    /// The options in effect.
    #[must_use]
    pub fn options(&self) -> &ClampOptions {
        &self.options
    }

    /// Applies the correction now.
    pub fn clamp(&self, viewport: &mut Viewport) {
        let o = self.options;
        if o.left.is_set() || o.right.is_set() {
            let t = viewport.transform();
            let original = t.x();
            let (screen, extent) = (t.screen_width(), t.screen_world_width());
            let mut hit_edge = false;
            let mut x = original;
            if extent < screen {
                x = o.underflow.horizontal.offset(screen, extent);
            } else {
                if let Some(left) = o.left.resolve(0.0) {
                    if t.left() < left {
                        x = -left * t.scale_x();
                        hit_edge = true;
                    }
                }
                if let Some(right) = o.right.resolve(t.world_width()) {
                    if t.right() > right {
                        x = -right * t.scale_x() + screen;
                        hit_edge = true;
                    }
                }
            }
            if x != original {
                viewport.transform_mut().set_x(x);
                if let Some(decelerate) = viewport.plugins_mut().decelerate_mut() {
                    if hit_edge {
                        decelerate.stop_x();
                    }
                    decelerate.on_clamp_x(original, x);
                }
                viewport.emit(ViewportEvent::Moved {
                    kind: MoveKind::ClampX,
                });
            }
        }
        if o.top.is_set() || o.bottom.is_set() {
            let t = viewport.transform();
            let original = t.y();
            let (screen, extent) = (t.screen_height(), t.screen_world_height());
            let mut hit_edge = false;
            let mut y = original;
            if extent < screen {
                y = o.underflow.vertical.offset(screen, extent);
            } else {
                if let Some(top) = o.top.resolve(0.0) {
                    if t.top() < top {
                        y = -top * t.scale_y();
                        hit_edge = true;
                    }
                }
                if let Some(bottom) = o.bottom.resolve(t.world_height()) {
                    if t.bottom() > bottom {
                        y = -bottom * t.scale_y() + screen;
                        hit_edge = true;
                    }
                }
            }
            if y != original {
                viewport.transform_mut().set_y(y);
                if let Some(decelerate) = viewport.plugins_mut().decelerate_mut() {
                    if hit_edge {
                        decelerate.stop_y();
                    }
                    decelerate.on_clamp_y(original, y);
                }
                viewport.emit(ViewportEvent::Moved {
                    kind: MoveKind::ClampY,
                });
            }
        }
    }
}

impl ViewportPlugin for Clamp {
    fn pointer_move(&mut self, viewport: &mut Viewport, _event: &PointerEvent) -> bool {
        self.clamp(viewport);
        false
    }

    fn update(&mut self, viewport: &mut Viewport, _elapsed: f64) {
        self.clamp(viewport);
    }

    fn resize(&mut self, viewport: &mut Viewport) {
        self.clamp(viewport);
    }

    fn reset(&mut self, viewport: &mut Viewport) {
        self.clamp(viewport);
    }
}
