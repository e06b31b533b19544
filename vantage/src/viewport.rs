// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The viewport: transform, input state, plugins and the event queue.

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::{Drain, Vec};

use kurbo::{Point, Rect, Size, Vec2};
use tracing::{debug, trace};
use vantage_view2d::{OutOfBounds, ViewTransform};

use crate::input::{InputManager, PointerEvent, WheelEvent};
use crate::manager::{self, PluginManager};
use crate::plugin::{BUILTIN_ORDER, Plugin};
use crate::plugins::{
    Animate, AnimateOptions, Bounce, BounceOptions, Clamp, ClampOptions, ClampZoom,
    ClampZoomOptions, Decelerate, DecelerateOptions, Drag, DragOptions, Follow, FollowOptions,
    FollowTarget, MouseEdges, MouseEdgesOptions, Pinch, PinchOptions, Snap, SnapOptions,
    SnapZoom, SnapZoomOptions, Wheel, WheelOptions,
};
use crate::{MoveKind, ViewportEvent, ZoomKind};

/// Construction options for a [`Viewport`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportOptions {
    /// Size of the viewport on screen, in pixels.
    pub screen_size: Size,
    /// Size of the world in world units. When `None`, the world size is
    /// the content size set with [`Viewport::set_content_size`].
    pub world_size: Option<Size>,
    /// Pixels a pointer must travel before a press counts as a drag rather
    /// than a click.
    pub threshold: f64,
    /// When `true`, wheel handlers never ask the host to suppress the
    /// native wheel behavior.
    pub passive_wheel: bool,
    /// When `true`, pointer handlers ask the host to stop propagation of
    /// events a plugin claimed.
    pub stop_propagation: bool,
    /// Fixed hit area in world units, instead of the visible bounds.
    pub force_hit_area: Option<Rect>,
}

impl ViewportOptions {
    /// Default options for a viewport of `screen_size` pixels.
    #[must_use]
    pub fn new(screen_size: Size) -> Self {
        Self {
            screen_size,
            world_size: None,
            threshold: 5.0,
            passive_wheel: true,
            stop_propagation: false,
            force_hit_area: None,
        }
    }
}

/// Position and scale at the end of a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Snapshot {
    position: Vec2,
    scale: Vec2,
}

impl Snapshot {
    fn of(transform: &ViewTransform) -> Self {
        Self {
            position: transform.position(),
            scale: transform.scale(),
        }
    }
}

/// A pannable, zoomable window onto a world.
///
/// The viewport owns a [`ViewTransform`], the input state, an ordered set
/// of plugins and a queue of [`ViewportEvent`]s. The host feeds it pointer
/// and wheel events, calls [`update`](Self::update) once per frame, reads
/// the transform back for rendering and drains the events.
///
/// ```
/// use kurbo::{Point, Size};
/// use vantage::plugins::{DecelerateOptions, DragOptions};
/// use vantage::{PointerEvent, Viewport, ViewportOptions};
///
/// let mut viewport = Viewport::new(ViewportOptions::new(Size::new(800.0, 600.0)));
/// viewport
///     .drag(DragOptions::default())
///     .decelerate(DecelerateOptions::default());
///
/// viewport.pointer_down(&PointerEvent::mouse(Point::new(400.0, 300.0), 0.0));
/// viewport.pointer_move(&PointerEvent::mouse(Point::new(380.0, 300.0), 16.0));
/// viewport.pointer_up(&PointerEvent::mouse(Point::new(380.0, 300.0), 32.0));
/// viewport.update(16.0);
///
/// assert!(viewport.transform().x() < 0.0);
/// assert!(viewport.drain_events().any(|e| e.name() == "drag-end"));
/// ```
#[derive(Debug)]
pub struct Viewport {
    options: ViewportOptions,
    transform: ViewTransform,
    pub(crate) input: InputManager,
    pub(crate) plugins: PluginManager,
    events: Vec<ViewportEvent>,
    last_frame: Option<Snapshot>,
    moving: bool,
    zooming: bool,
    dirty: bool,
    paused: bool,
    visible: bool,
}

impl Viewport {
    /// Creates a viewport with no plugins.
    #[must_use]
    pub fn new(options: ViewportOptions) -> Self {
        let mut transform = ViewTransform::new(options.screen_size);
        transform.set_world_size(options.world_size);
        Self {
            options,
            transform,
            input: InputManager::default(),
            plugins: PluginManager::new(),
            events: Vec::new(),
            last_frame: None,
            moving: false,
            zooming: false,
            dirty: true,
            paused: false,
            visible: true,
        }
    }

    /// The options the viewport was created with.
    #[must_use]
    pub fn options(&self) -> &ViewportOptions {
        &self.options
    }

    /// The transform.
    #[must_use]
    pub fn transform(&self) -> &ViewTransform {
        &self.transform
    }

    /// The transform, mutably.
    ///
    /// Changes made here bypass the plugins; use [`move_center`](Self::move_center)
    /// and the other setters on the viewport to let them react.
    pub fn transform_mut(&mut self) -> &mut ViewTransform {
        &mut self.transform
    }

    /// Pointer bookkeeping.
    #[must_use]
    pub fn input(&self) -> &InputManager {
        &self.input
    }

    /// The plugin registry.
    #[must_use]
    pub fn plugins(&self) -> &PluginManager {
        &self.plugins
    }

    /// The plugin registry, mutably.
    pub fn plugins_mut(&mut self) -> &mut PluginManager {
        &mut self.plugins
    }

    // --- events ---

    /// Queues an event for the host.
    pub fn emit(&mut self, event: ViewportEvent) {
        trace!(event = %event, "emit");
        self.events.push(event);
    }

    /// Events queued since the last drain, oldest first.
    #[must_use]
    pub fn pending_events(&self) -> &[ViewportEvent] {
        &self.events
    }

    /// Removes and yields the queued events, oldest first.
    pub fn drain_events(&mut self) -> Drain<'_, ViewportEvent> {
        self.events.drain(..)
    }

    // --- plugins ---

    /// Removes the plugin registered under `name`, emitting
    /// `{name}-remove` if there was one.
    ///
    /// A plugin may remove itself from inside one of its hooks; it is
    /// dropped once the hook returns, and `None` is returned.
    pub fn remove_plugin(&mut self, name: &str) -> Option<Plugin> {
        let removed = self.plugins.remove_entry(name)?;
        let name = match BUILTIN_ORDER.iter().find(|builtin| **builtin == name) {
            Some(builtin) => Cow::Borrowed(*builtin),
            None => Cow::Owned(String::from(name)),
        };
        self.emit(ViewportEvent::PluginRemoved { name });
        removed
    }

    fn add_builtin(&mut self, plugin: Plugin) -> &mut Self {
        self.plugins.add_builtin(plugin);
        self
    }

    /// Adds a [`Drag`] plugin, replacing any existing one.
    pub fn drag(&mut self, options: DragOptions) -> &mut Self {
        self.add_builtin(Plugin::Drag(Drag::new(options)))
    }

    /// Adds a [`Pinch`] plugin, replacing any existing one.
    pub fn pinch(&mut self, options: PinchOptions) -> &mut Self {
        self.add_builtin(Plugin::Pinch(Pinch::new(options)))
    }

    /// Adds a [`Wheel`] plugin, replacing any existing one.
    pub fn wheel(&mut self, options: WheelOptions) -> &mut Self {
        self.add_builtin(Plugin::Wheel(Wheel::new(options)))
    }

    /// Adds a [`Decelerate`] plugin, replacing any existing one.
    pub fn decelerate(&mut self, options: DecelerateOptions) -> &mut Self {
        self.add_builtin(Plugin::Decelerate(Decelerate::new(options)))
    }

    /// Adds a [`Bounce`] plugin, replacing any existing one.
    pub fn bounce(&mut self, options: BounceOptions) -> &mut Self {
        self.add_builtin(Plugin::Bounce(Bounce::new(options)))
    }

    /// Adds a [`Clamp`] plugin, replacing any existing one.
    pub fn clamp(&mut self, options: ClampOptions) -> &mut Self {
        self.add_builtin(Plugin::Clamp(Clamp::new(options)))
    }

    /// Adds a [`ClampZoom`] plugin, replacing any existing one.
    pub fn clamp_zoom(&mut self, options: ClampZoomOptions) -> &mut Self {
        self.add_builtin(Plugin::ClampZoom(ClampZoom::new(options)))
    }

    /// Adds a [`Snap`] plugin aiming at `target`, replacing any existing one.
    pub fn snap(&mut self, target: Point, options: SnapOptions) -> &mut Self {
        let mut snap = Snap::new(target, options);
        if options.force_start {
            snap.start(self);
        }
        self.add_builtin(Plugin::Snap(snap))
    }

    /// Adds a [`SnapZoom`] plugin, replacing any existing one.
    ///
    /// With a zero `time` the zoom is applied at once, and the plugin is
    /// not kept if it would remove itself on completion.
    pub fn snap_zoom(&mut self, options: SnapZoomOptions) -> &mut Self {
        let mut snap_zoom = SnapZoom::new(self, options);
        if options.time <= 0.0 {
            snap_zoom.apply_now(self);
            if options.remove_on_complete {
                return self;
            }
        } else if options.force_start {
            snap_zoom.start(self);
        }
        self.add_builtin(Plugin::SnapZoom(snap_zoom))
    }

    /// Adds a [`Follow`] plugin tracking `target`, replacing any existing one.
    pub fn follow(
        &mut self,
        target: impl FollowTarget + 'static,
        options: FollowOptions,
    ) -> &mut Self {
        self.add_builtin(Plugin::Follow(Follow::new(target, options)))
    }

    /// Adds a [`MouseEdges`] plugin, replacing any existing one.
    pub fn mouse_edges(&mut self, options: MouseEdgesOptions) -> &mut Self {
        let mouse_edges = MouseEdges::new(self, options);
        self.add_builtin(Plugin::MouseEdges(mouse_edges))
    }

    /// Starts an [`Animate`] from the current state, replacing any running one.
    pub fn animate(&mut self, options: AnimateOptions) -> &mut Self {
        let animate = Animate::new(self, options);
        self.add_builtin(Plugin::Animate(animate))
    }

    /// Runs the clamp-zoom plugin's correction, if one is active. Returns
    /// whether the scale changed.
    pub fn apply_clamp_zoom(&mut self) -> bool {
        match self.plugins.clamp_zoom().copied() {
            Some(clamp_zoom) => clamp_zoom.clamp(self),
            None => false,
        }
    }

    // --- input ---

    fn accepts_input(&self) -> bool {
        !self.paused && self.visible
    }

    /// Handles a pointer press. Returns whether the host should stop
    /// propagating the event.
    pub fn pointer_down(&mut self, event: &PointerEvent) -> bool {
        if !self.accepts_input() {
            return false;
        }
        let busy = self.plugins.decelerate().is_some_and(Decelerate::is_active)
            || self.plugins.bounce().is_some_and(Bounce::is_active);
        self.input.press(event, !busy);
        let claimed = manager::dispatch(self, false, |plugin, viewport| {
            plugin.down(viewport, event)
        });
        claimed && self.options.stop_propagation
    }

    /// Handles a pointer move. Returns whether the host should stop
    /// propagating the event.
    pub fn pointer_move(&mut self, event: &PointerEvent) -> bool {
        if !self.accepts_input() {
            return false;
        }
        let claimed = manager::dispatch(self, false, |plugin, viewport| {
            plugin.pointer_move(viewport, event)
        });
        self.input.record_move(event, self.options.threshold);
        claimed && self.options.stop_propagation
    }

    /// Handles a pointer release, emitting `clicked` when the press did not
    /// travel. Returns whether the host should stop propagating the event.
    pub fn pointer_up(&mut self, event: &PointerEvent) -> bool {
        if !self.accepts_input() {
            return false;
        }
        self.input.release(event);
        let claimed = manager::dispatch(self, false, |plugin, viewport| {
            plugin.up(viewport, event)
        });
        if let Some(screen) = self.input.take_click() {
            let world = self.to_world(screen);
            debug!(x = screen.x, y = screen.y, "clicked");
            self.emit(ViewportEvent::Clicked { screen, world });
        }
        claimed && self.options.stop_propagation
    }

    /// Handles a wheel event over the screen rectangle. Returns whether the
    /// host should suppress the native wheel behavior.
    pub fn pointer_wheel(&mut self, event: &WheelEvent) -> bool {
        if !self.accepts_input() {
            return false;
        }
        let screen = Rect::from_origin_size(Point::ORIGIN, self.transform.screen_size());
        if !screen.contains(event.position) {
            return false;
        }
        let claimed = manager::dispatch(self, false, |plugin, viewport| {
            plugin.wheel(viewport, event)
        });
        claimed && !self.options.passive_wheel
    }

    /// Forgets every tracked pointer, for hosts that lost an `up` event.
    pub fn clear_input(&mut self) {
        debug!(pointers = self.input.count(), "input cleared");
        self.input.clear();
    }

    // --- frames ---

    /// Advances every unpaused plugin by `elapsed` milliseconds, then emits
    /// `moved-end`/`zoomed-end` on the first still frame after motion and
    /// `frame-end`.
    pub fn update(&mut self, elapsed: f64) {
        if self.paused {
            return;
        }
        manager::dispatch(self, false, |plugin, viewport| {
            plugin.update(viewport, elapsed);
            false
        });

        let now = Snapshot::of(&self.transform);
        if let Some(last) = self.last_frame {
            if last.position != now.position {
                self.moving = true;
            } else if self.moving {
                self.moving = false;
                self.emit(ViewportEvent::MovedEnd);
            }
            if last.scale != now.scale {
                self.zooming = true;
            } else if self.zooming {
                self.zooming = false;
                self.emit(ViewportEvent::ZoomedEnd);
            }
        }
        if self.last_frame != Some(now) {
            self.dirty = true;
        }
        self.last_frame = Some(now);
        self.emit(ViewportEvent::FrameEnd);
    }

    /// Changes the screen size and, if given, the world size, then lets
    /// the plugins adjust.
    pub fn resize(&mut self, screen_size: Size, world_size: Option<Size>) {
        debug!(?screen_size, ?world_size, "resize");
        self.transform.set_screen_size(screen_size);
        if world_size.is_some() {
            self.transform.set_world_size(world_size);
        }
        self.broadcast_resize();
    }

    /// Sets the explicit world size; `None` falls back to the content size.
    pub fn set_world_size(&mut self, size: Option<Size>) {
        self.transform.set_world_size(size);
        self.broadcast_resize();
    }

    /// Sets the content size, which is the world size unless one is set.
    pub fn set_content_size(&mut self, size: Size) {
        self.transform.set_content_size(size);
        self.broadcast_resize();
    }

    fn broadcast_resize(&mut self) {
        manager::dispatch(self, true, |plugin, viewport| {
            plugin.resize(viewport);
            false
        });
        self.dirty = true;
    }

    fn broadcast_reset(&mut self) {
        manager::dispatch(self, true, |plugin, viewport| {
            plugin.reset(viewport);
            false
        });
        self.dirty = true;
    }

    /// Whether the transform changed since the flag was last cleared.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Sets or clears the dirty flag; hosts clear it after rendering.
    pub fn set_dirty(&mut self, dirty: bool) {
        self.dirty = dirty;
    }

    /// Whether input and updates are suspended.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Suspends or resumes input and updates. Pausing forgets the tracked
    /// pointers.
    pub fn set_paused(&mut self, paused: bool) {
        debug!(paused, "viewport pause toggled");
        self.paused = paused;
        self.last_frame = None;
        self.moving = false;
        self.zooming = false;
        if paused {
            self.input.clear();
        }
    }

    /// Whether the viewport accepts input.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Shows or hides the viewport. Hidden viewports ignore input and
    /// forget the tracked pointers.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        if !visible {
            self.input.clear();
        }
    }

    // --- coordinates ---

    /// Converts a screen point to world units.
    #[must_use]
    pub fn to_world(&self, screen: Point) -> Point {
        self.transform.to_world(screen)
    }

    /// Converts a world point to screen pixels.
    #[must_use]
    pub fn to_screen(&self, world: Point) -> Point {
        self.transform.to_screen(world)
    }

    /// World point at the center of the screen.
    #[must_use]
    pub fn center(&self) -> Point {
        self.transform.center()
    }

    /// World point at the top-left of the screen.
    #[must_use]
    pub fn corner(&self) -> Point {
        self.transform.corner()
    }

    /// The visible part of the world.
    #[must_use]
    pub fn visible_bounds(&self) -> Rect {
        self.transform.visible_bounds()
    }

    /// World rectangle that accepts input.
    #[must_use]
    pub fn hit_area(&self) -> Rect {
        self.options
            .force_hit_area
            .unwrap_or_else(|| self.transform.visible_bounds())
    }

    /// Which edges of the view lie outside the world.
    #[must_use]
    pub fn out_of_bounds(&self) -> OutOfBounds {
        self.transform.out_of_bounds()
    }

    /// Centers the view on `center` in world units.
    pub fn move_center(&mut self, center: Point) {
        self.transform.set_center(center);
        self.broadcast_reset();
    }

    /// Puts `corner` in world units at the screen's top-left.
    pub fn move_corner(&mut self, corner: Point) {
        self.transform.set_corner(corner);
        self.broadcast_reset();
    }

    /// Moves the view so its left edge is at `left` in world units.
    pub fn set_left(&mut self, left: f64) {
        self.transform.set_left(left);
        self.broadcast_reset();
    }

    /// Moves the view so its right edge is at `right` in world units.
    pub fn set_right(&mut self, right: f64) {
        self.transform.set_right(right);
        self.broadcast_reset();
    }

    /// Moves the view so its top edge is at `top` in world units.
    pub fn set_top(&mut self, top: f64) {
        self.transform.set_top(top);
        self.broadcast_reset();
    }

    /// Moves the view so its bottom edge is at `bottom` in world units.
    pub fn set_bottom(&mut self, bottom: f64) {
        self.transform.set_bottom(bottom);
        self.broadcast_reset();
    }

    /// Moves, and with `resize_to_fit` zooms out, the least needed for
    /// `rect` to be on screen.
    pub fn ensure_visible(&mut self, rect: Rect, resize_to_fit: bool) {
        let t = &self.transform;
        if resize_to_fit
            && (rect.width() > t.world_screen_width() || rect.height() > t.world_screen_height())
        {
            self.fit(true, rect.size());
            self.emit(ViewportEvent::Zoomed {
                kind: ZoomKind::EnsureVisible,
            });
        }

        let mut moved = false;
        if rect.x0 < self.transform.left() {
            self.set_left(rect.x0);
            moved = true;
        } else if rect.x1 > self.transform.right() {
            self.set_right(rect.x1);
            moved = true;
        }
        if rect.y0 < self.transform.top() {
            self.set_top(rect.y0);
            moved = true;
        } else if rect.y1 > self.transform.bottom() {
            self.set_bottom(rect.y1);
            moved = true;
        }
        if moved {
            self.emit(ViewportEvent::Moved {
                kind: MoveKind::EnsureVisible,
            });
        }
    }

    // --- zoom ---

    /// Sets a uniform scale, keeping the center in place if `keep_center`.
    pub fn set_zoom(&mut self, scale: f64, keep_center: bool) {
        let center = keep_center.then(|| self.center());
        self.transform.set_uniform_scale(scale);
        self.apply_clamp_zoom();
        if let Some(center) = center {
            self.move_center(center);
        }
    }

    /// Changes the scale by `percent` of itself, so `0.5` zooms in by half.
    pub fn zoom_percent(&mut self, percent: f64, keep_center: bool) {
        let scale = self.transform.scale_x();
        self.set_zoom(scale + scale * percent, keep_center);
    }

    /// Widens the visible area by `change` world units; negative zooms in.
    pub fn zoom(&mut self, change: f64, keep_center: bool) {
        let width = self.transform.world_screen_width() + change;
        self.fit_width(width, keep_center);
    }

    /// Zooms so `width` world units span the screen.
    pub fn fit_width(&mut self, width: f64, keep_center: bool) {
        self.fit_extent(Some(width), None, keep_center);
    }

    /// Zooms so `height` world units span the screen.
    pub fn fit_height(&mut self, height: f64, keep_center: bool) {
        self.fit_extent(None, Some(height), keep_center);
    }

    /// Zooms per axis so the given extents span the screen. With one
    /// extent, both axes take its scale.
    pub(crate) fn fit_extent(&mut self, width: Option<f64>, height: Option<f64>, keep_center: bool) {
        let t = &self.transform;
        let scale = match (
            width.map(|w| t.find_fit_width(w)),
            height.map(|h| t.find_fit_height(h)),
        ) {
            (Some(x), Some(y)) => Vec2::new(x, y),
            (Some(s), None) | (None, Some(s)) => Vec2::new(s, s),
            (None, None) => return,
        };
        let center = keep_center.then(|| self.center());
        self.transform.set_scale(scale);
        self.apply_clamp_zoom();
        if let Some(center) = center {
            self.move_center(center);
        }
    }

    /// Zooms so the whole world fits on screen.
    pub fn fit_world(&mut self, keep_center: bool) {
        let size = self.transform.world_size();
        self.fit(keep_center, size);
    }

    /// Zooms uniformly so `size` world units fit on screen.
    pub fn fit(&mut self, keep_center: bool, size: Size) {
        let center = keep_center.then(|| self.center());
        let scale = self.transform.find_fit(size);
        self.transform.set_uniform_scale(scale);
        self.apply_clamp_zoom();
        if let Some(center) = center {
            self.move_center(center);
        }
    }

    /// Scale that would fit `width` world units across the screen.
    #[must_use]
    pub fn find_fit_width(&self, width: f64) -> f64 {
        self.transform.find_fit_width(width)
    }

    /// Scale that would fit `height` world units down the screen.
    #[must_use]
    pub fn find_fit_height(&self, height: f64) -> f64 {
        self.transform.find_fit_height(height)
    }

    /// Largest uniform scale at which `size` fits on screen.
    #[must_use]
    pub fn find_fit(&self, size: Size) -> f64 {
        self.transform.find_fit(size)
    }

    /// Smallest uniform scale at which `size` covers the screen.
    #[must_use]
    pub fn find_cover(&self, size: Size) -> f64 {
        self.transform.find_cover(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugins::test_support::{count, drained, viewport};

    #[test]
    fn update_reports_motion_edges() {
        let mut vp = viewport();
        vp.update(16.0);
        assert!(vp.is_dirty(), "first frame is always dirty");
        vp.set_dirty(false);

        vp.transform_mut().translate(Vec2::new(-10.0, 0.0));
        vp.update(16.0);
        assert!(vp.is_dirty());
        vp.update(16.0);
        vp.update(16.0);

        let events = drained(&mut vp);
        assert_eq!(count(&events, "moved-end"), 1);
        assert_eq!(count(&events, "zoomed-end"), 0);
        assert_eq!(count(&events, "frame-end"), 4);
    }

    #[test]
    fn click_without_travel() {
        let mut vp = viewport();
        let down = PointerEvent::mouse(Point::new(100.0, 100.0), 0.0);
        vp.pointer_down(&down);
        vp.pointer_move(&PointerEvent::mouse(Point::new(102.0, 101.0), 5.0));
        vp.pointer_up(&down);
        let events = drained(&mut vp);
        assert_eq!(
            events,
            [ViewportEvent::Clicked {
                screen: Point::new(100.0, 100.0),
                world: Point::new(100.0, 100.0),
            }]
        );
    }

    #[test]
    fn paused_viewport_ignores_input_and_frames() {
        let mut vp = viewport();
        vp.drag(DragOptions::default());
        vp.pointer_down(&PointerEvent::mouse(Point::new(10.0, 10.0), 0.0));
        vp.set_paused(true);
        assert_eq!(vp.input().count(), 0, "pausing clears pointers");

        vp.pointer_down(&PointerEvent::mouse(Point::new(10.0, 10.0), 0.0));
        vp.update(16.0);
        assert_eq!(vp.input().count(), 0);
        assert!(drained(&mut vp).is_empty());
    }

    #[test]
    fn wheel_outside_screen_is_ignored() {
        let mut vp = viewport();
        vp.wheel(WheelOptions::default());
        vp.pointer_wheel(&WheelEvent::vertical(Point::new(900.0, 10.0), -100.0));
        assert_eq!(vp.transform().scale_x(), 1.0);
    }

    #[test]
    fn removal_emits_event_once() {
        let mut vp = viewport();
        vp.drag(DragOptions::default());
        assert!(vp.remove_plugin("drag").is_some());
        assert!(vp.remove_plugin("drag").is_none());
        let events = drained(&mut vp);
        assert_eq!(
            events,
            [ViewportEvent::PluginRemoved {
                name: Cow::Borrowed("drag")
            }]
        );
    }

    #[test]
    fn ensure_visible_moves_the_least() {
        let mut vp = viewport();
        vp.ensure_visible(Rect::new(900.0, 100.0, 1000.0, 200.0), false);
        assert_eq!(vp.transform().right(), 1000.0);
        assert_eq!(vp.transform().top(), 0.0);

        vp.ensure_visible(Rect::new(0.0, 0.0, 1600.0, 1200.0), true);
        assert_eq!(vp.transform().scale_x(), 0.5);
        let events = drained(&mut vp);
        assert_eq!(count(&events, "zoomed"), 1);
        assert_eq!(count(&events, "moved"), 2);
    }

    #[test]
    fn fit_helpers() {
        let mut vp = viewport();
        vp.fit_world(false);
        assert_eq!(vp.transform().scale(), Vec2::new(0.5, 0.5));

        vp.fit_height(300.0, true);
        assert_eq!(vp.transform().scale(), Vec2::new(2.0, 2.0));

        vp.zoom(400.0, false);
        assert_eq!(vp.transform().world_screen_width(), 800.0);

        vp.zoom_percent(0.5, false);
        assert_eq!(vp.transform().scale_x(), 1.5);
        assert_eq!(vp.find_cover(Size::new(1600.0, 600.0)), 1.0);
    }

    #[test]
    fn hit_area_defaults_to_visible_bounds() {
        let mut vp = viewport();
        vp.move_corner(Point::new(100.0, 50.0));
        assert_eq!(vp.hit_area(), Rect::new(100.0, 50.0, 900.0, 650.0));

        let forced = Viewport::new(ViewportOptions {
            force_hit_area: Some(Rect::new(0.0, 0.0, 10.0, 10.0)),
            ..ViewportOptions::new(Size::new(800.0, 600.0))
        });
        assert_eq!(forced.hit_area(), Rect::new(0.0, 0.0, 10.0, 10.0));
    }
}
