// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-pointer drag to pan, plus wheel scrolling when no wheel plugin is
//! registered.

use kurbo::Vec2;
use tracing::debug;
use vantage_event_state::drag::DragState;

use crate::input::{PointerEvent, WheelEvent};
use crate::options::{Direction, MouseButtons, Underflow};
use crate::{MoveKind, Viewport, ViewportEvent, ViewportPlugin};

/// Options for [`Drag`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragOptions {
    /// Axes that follow the pointer.
    pub direction: Direction,
    /// Whether pressing and moving drags at all. Turning this off leaves
    /// only wheel scrolling.
    pub press_drag: bool,
    /// Scroll on wheel events when no wheel plugin is registered.
    pub wheel: bool,
    /// Wheel scroll speed multiplier.
    pub wheel_scroll: f64,
    /// Scroll with the wheel delta instead of against it.
    pub reverse: bool,
    /// Clamp wheel scrolling to the world on these axes.
    pub clamp_wheel: Option<Direction>,
    /// Placement on a clamped axis whose world is smaller than the screen.
    pub underflow: Underflow,
    /// Multiplier on pointer movement.
    pub factor: f64,
    /// Mouse buttons that start a drag.
    pub mouse_buttons: MouseButtons,
    /// Pixels per line for line-mode wheel deltas.
    pub line_height: f64,
}

impl Default for DragOptions {
    fn default() -> Self {
        Self {
            direction: Direction::All,
            press_drag: true,
            wheel: true,
            wheel_scroll: 1.0,
            reverse: false,
            clamp_wheel: None,
            underflow: Underflow::CENTER,
            factor: 1.0,
            mouse_buttons: MouseButtons::ALL,
            line_height: 20.0,
        }
    }
}

/// Pans the viewport by pointer movement.
///
/// Movement starts once the pointer travels the viewport's threshold on an
/// enabled axis; from then on every move pans. With several pointers down
/// the drag yields to a registered pinch, and when a pinch drops back to one
/// finger the drag resumes with the remaining pointer.
#[derive(Clone, Debug, Default)]
pub struct Drag {
    options: DragOptions,
    state: DragState,
}

impl Drag {
    /// Creates a drag plugin.
    #[must_use]
    pub fn new(options: DragOptions) -> Self {
        Self {
            options,
            state: DragState::default(),
        }
    }

    /// The options in effect.
    #[must_use]
    pub fn options(&self) -> &DragOptions {
        &self.options
    }

    /// Whether the current drag has moved the viewport.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state.has_moved()
    }

    /// Whether a pointer is being followed, moved or not.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.state.is_dragging()
    }

    fn accepts(&self, viewport: &Viewport, event: &PointerEvent) -> bool {
        if !single_pointer_gesture(viewport) {
            return false;
        }
        !event.kind.is_mouse() || event.buttons.intersects(self.options.mouse_buttons)
    }

    fn axis_mask(&self, delta: Vec2) -> Vec2 {
        Vec2::new(
            if self.options.direction.has_x() { delta.x } else { 0.0 },
            if self.options.direction.has_y() { delta.y } else { 0.0 },
        )
    }

    /// Keeps wheel scrolling inside the world on the `clamp_wheel` axes.
    fn clamp(&self, viewport: &mut Viewport, axes: Direction) {
        let underflow = self.options.underflow;
        if axes.has_x() {
            let t = viewport.transform();
            let (screen, extent) = (t.screen_width(), t.screen_world_width());
            let mut stop = false;
            let x = if extent < screen {
                Some(underflow.horizontal.offset(screen, extent))
            } else if t.left() < 0.0 {
                stop = true;
                Some(0.0)
            } else if t.right() > t.world_width() {
                stop = true;
                Some(-t.world_width() * t.scale_x() + screen)
            } else {
                None
            };
            if let Some(x) = x {
                viewport.transform_mut().set_x(x);
            }
            if stop {
                if let Some(decelerate) = viewport.plugins_mut().decelerate_mut() {
                    decelerate.stop_x();
                }
            }
        }
        if axes.has_y() {
            let t = viewport.transform();
            let (screen, extent) = (t.screen_height(), t.screen_world_height());
            let mut stop = false;
            let y = if extent < screen {
                Some(underflow.vertical.offset(screen, extent))
            } else if t.top() < 0.0 {
                stop = true;
                Some(0.0)
            } else if t.bottom() > t.world_height() {
                stop = true;
                Some(-t.world_height() * t.scale_y() + screen)
            } else {
                None
            };
            if let Some(y) = y {
                viewport.transform_mut().set_y(y);
            }
            if stop {
                if let Some(decelerate) = viewport.plugins_mut().decelerate_mut() {
                    decelerate.stop_y();
                }
            }
        }
    }
}

/// One pointer down, or several with no pinch plugin to claim them.
pub(crate) fn single_pointer_gesture(viewport: &Viewport) -> bool {
    match viewport.input().count() {
        1 => true,
        0 => false,
        _ => viewport.plugins().pinch().is_none(),
    }
}

impl ViewportPlugin for Drag {
    fn down(&mut self, viewport: &mut Viewport, event: &PointerEvent) -> bool {
        if !self.options.press_drag {
            return false;
        }
        if self.accepts(viewport, event) {
            self.state.start(event.id, event.position);
            true
        } else {
            self.state.end();
            false
        }
    }

    fn pointer_move(&mut self, viewport: &mut Viewport, event: &PointerEvent) -> bool {
        if !self.options.press_drag || !self.state.is_tracking(event.id) {
            return false;
        }
        if !single_pointer_gesture(viewport) {
            self.state.settle();
            return false;
        }
        let Some(pending) = self.state.pending_delta(event.position) else {
            return false;
        };
        let threshold = viewport.options().threshold;
        let direction = self.options.direction;
        let crossed = (direction.has_x() && pending.x.abs() >= threshold)
            || (direction.has_y() && pending.y.abs() >= threshold);
        if !self.state.has_moved() && !crossed {
            return false;
        }

        let starting = !self.state.has_moved();
        let Some(delta) = self.state.update(event.position) else {
            return false;
        };
        let delta = self.axis_mask(delta) * self.options.factor;
        viewport.transform_mut().translate(delta);
        if starting {
            debug!(x = event.position.x, y = event.position.y, "drag started");
            viewport.emit(ViewportEvent::DragStart {
                screen: event.position,
                world: viewport.to_world(event.position),
            });
        }
        viewport.emit(ViewportEvent::Moved {
            kind: MoveKind::Drag,
        });
        true
    }

    fn up(&mut self, viewport: &mut Viewport, _event: &PointerEvent) -> bool {
        if let [remaining] = viewport.input().touches() {
            // A pinch dropped to one finger: carry on with it.
            self.state.retarget(remaining.id, remaining.last);
            return true;
        }
        if !self.state.is_dragging() {
            return false;
        }
        let moved = self.state.has_moved();
        let last = self.state.last_pos;
        self.state.end();
        match last {
            Some(screen) if moved => {
                debug!(x = screen.x, y = screen.y, "drag ended");
                viewport.emit(ViewportEvent::DragEnd {
                    screen,
                    world: viewport.to_world(screen),
                });
                true
            }
            _ => false,
        }
    }

    fn wheel(&mut self, viewport: &mut Viewport, event: &WheelEvent) -> bool {
        if !self.options.wheel || viewport.plugins().wheel().is_some() {
            return false;
        }
        let sign = if self.options.reverse { 1.0 } else { -1.0 };
        let step = event.line_scale(self.options.line_height) * self.options.wheel_scroll * sign;
        let delta = self.axis_mask(event.delta()) * step;
        viewport.transform_mut().translate(delta);
        if let Some(axes) = self.options.clamp_wheel {
            self.clamp(viewport, axes);
        }
        viewport.emit(ViewportEvent::WheelScroll);
        viewport.emit(ViewportEvent::Moved {
            kind: MoveKind::Wheel,
        });
        true
    }

    fn resume(&mut self) {
        self.state.end();
    }
}
