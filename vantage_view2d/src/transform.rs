// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Position and scale of a pannable, zoomable view over a world plane.
///
/// The model matches a transformable scene-graph node: `position` is where
/// the world origin lands in screen pixels and `scale` is the per-axis zoom.
/// A world point `w` maps to the screen point `w * scale + position`.
///
/// Besides the transform itself, `ViewTransform` tracks:
/// - The screen size in pixels.
/// - An optional explicit world size. When unset, the world size falls back
///   to the content size supplied by the host (typically the bounds of the
///   content drawn into the view).
///
/// Scale components are always finite and non-zero; setters that would
/// violate this leave the transform unchanged and return `false`.
#[derive(Clone, Debug)]
pub struct ViewTransform {
    screen_size: Size,
    world_size: Option<Size>,
    content_size: Size,
    position: Vec2,
    scale: Vec2,
    world_to_screen: Affine,
    screen_to_world: Affine,
}

impl ViewTransform {
    /// Creates a transform for a screen of `screen_size` pixels.
    ///
    /// - Initial scale is `(1.0, 1.0)`.
    /// - Initial position is zero (world origin at the screen's top-left).
    /// - No explicit world size; the content size starts empty.
    #[must_use]
    pub fn new(screen_size: Size) -> Self {
        let mut transform = Self {
            screen_size,
            world_size: None,
            content_size: Size::ZERO,
            position: Vec2::ZERO,
            scale: Vec2::new(1.0, 1.0),
            world_to_screen: Affine::IDENTITY,
            screen_to_world: Affine::IDENTITY,
        };
        transform.rebuild_transforms();
        transform
    }

    /// Returns the screen size in pixels.
    #[must_use]
    pub fn screen_size(&self) -> Size {
        self.screen_size
    }

    /// Sets the screen size in pixels.
    pub fn set_screen_size(&mut self, size: Size) {
        self.screen_size = size;
    }

    /// Screen width in pixels.
    #[must_use]
    pub fn screen_width(&self) -> f64 {
        self.screen_size.width
    }

    /// Screen height in pixels.
    #[must_use]
    pub fn screen_height(&self) -> f64 {
        self.screen_size.height
    }

    /// Returns the effective world size.
    ///
    /// This is the explicit world size when one is set, otherwise the
    /// content size.
    #[must_use]
    pub fn world_size(&self) -> Size {
        self.world_size.unwrap_or(self.content_size)
    }

    /// Returns the explicit world size, if any.
    #[must_use]
    pub fn explicit_world_size(&self) -> Option<Size> {
        self.world_size
    }

    /// Sets or clears the explicit world size.
    pub fn set_world_size(&mut self, size: Option<Size>) {
        self.world_size = size;
    }

    /// Returns the content size used when no explicit world size is set.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Sets the size of the content in world units.
    pub fn set_content_size(&mut self, size: Size) {
        self.content_size = size;
    }

    /// World width in world units.
    #[must_use]
    pub fn world_width(&self) -> f64 {
        self.world_size().width
    }

    /// World height in world units.
    #[must_use]
    pub fn world_height(&self) -> f64 {
        self.world_size().height
    }

    /// Returns the screen-space position of the world origin.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Horizontal position of the world origin in screen pixels.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.position.x
    }

    /// Vertical position of the world origin in screen pixels.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// Sets the screen-space position of the world origin.
    pub fn set_position(&mut self, position: Vec2) {
        if self.position == position {
            return;
        }
        self.position = position;
        self.rebuild_transforms();
    }

    /// Sets the horizontal position.
    pub fn set_x(&mut self, x: f64) {
        self.set_position(Vec2::new(x, self.position.y));
    }

    /// Sets the vertical position.
    pub fn set_y(&mut self, y: f64) {
        self.set_position(Vec2::new(self.position.x, y));
    }

    /// Moves the world by `delta` screen pixels.
    pub fn translate(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO {
            return;
        }
        self.set_position(self.position + delta);
    }

    /// Returns the per-axis scale.
    #[must_use]
    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    /// Horizontal scale.
    #[must_use]
    pub fn scale_x(&self) -> f64 {
        self.scale.x
    }

    /// Vertical scale.
    #[must_use]
    pub fn scale_y(&self) -> f64 {
        self.scale.y
    }

    /// Sets the per-axis scale.
    ///
    /// Returns `false` and leaves the scale untouched if either component is
    /// zero or not finite.
    pub fn set_scale(&mut self, scale: Vec2) -> bool {
        if !is_valid_scale(scale.x) || !is_valid_scale(scale.y) {
            return false;
        }
        if self.scale != scale {
            self.scale = scale;
            self.rebuild_transforms();
        }
        true
    }

    /// Sets both scale components to `scale`.
    pub fn set_uniform_scale(&mut self, scale: f64) -> bool {
        self.set_scale(Vec2::new(scale, scale))
    }

    /// Sets the horizontal scale, keeping the vertical one.
    pub fn set_scale_x(&mut self, scale_x: f64) -> bool {
        self.set_scale(Vec2::new(scale_x, self.scale.y))
    }

    /// Sets the vertical scale, keeping the horizontal one.
    pub fn set_scale_y(&mut self, scale_y: f64) -> bool {
        self.set_scale(Vec2::new(self.scale.x, scale_y))
    }

    /// Affine mapping world coordinates to screen coordinates.
    ///
    /// Renderers use this to position the content.
    #[must_use]
    pub fn world_to_screen(&self) -> Affine {
        self.world_to_screen
    }

    /// Affine mapping screen coordinates to world coordinates.
    #[must_use]
    pub fn screen_to_world(&self) -> Affine {
        self.screen_to_world
    }

    /// Converts a screen-space point into world coordinates.
    #[must_use]
    pub fn to_world(&self, pt: Point) -> Point {
        self.screen_to_world * pt
    }

    /// Converts a world-space point into screen coordinates.
    #[must_use]
    pub fn to_screen(&self, pt: Point) -> Point {
        self.world_to_screen * pt
    }

    /// Converts a screen-space rectangle into world coordinates.
    #[must_use]
    pub fn to_world_rect(&self, rect: Rect) -> Rect {
        // Axis-aligned scale and translation only, so mapping the two corners
        // is enough; `Rect::from_points` normalizes flipped axes.
        Rect::from_points(self.to_world(rect.origin()), self.to_world(rect_max(rect)))
    }

    /// Converts a world-space rectangle into screen coordinates.
    #[must_use]
    pub fn to_screen_rect(&self, rect: Rect) -> Rect {
        Rect::from_points(
            self.to_screen(rect.origin()),
            self.to_screen(rect_max(rect)),
        )
    }

    /// Screen width measured in world units.
    #[must_use]
    pub fn world_screen_width(&self) -> f64 {
        self.screen_size.width / self.scale.x
    }

    /// Screen height measured in world units.
    #[must_use]
    pub fn world_screen_height(&self) -> f64 {
        self.screen_size.height / self.scale.y
    }

    /// World width measured in screen pixels.
    #[must_use]
    pub fn screen_world_width(&self) -> f64 {
        self.world_width() * self.scale.x
    }

    /// World height measured in screen pixels.
    #[must_use]
    pub fn screen_world_height(&self) -> f64 {
        self.world_height() * self.scale.y
    }

    /// World coordinate of the screen's left edge.
    #[must_use]
    pub fn left(&self) -> f64 {
        -self.position.x / self.scale.x
    }

    /// World coordinate of the screen's right edge.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.left() + self.world_screen_width()
    }

    /// World coordinate of the screen's top edge.
    #[must_use]
    pub fn top(&self) -> f64 {
        -self.position.y / self.scale.y
    }

    /// World coordinate of the screen's bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top() + self.world_screen_height()
    }

    /// Moves the view so its left edge sits at world coordinate `left`.
    pub fn set_left(&mut self, left: f64) {
        self.set_x(-left * self.scale.x);
    }

    /// Moves the view so its right edge sits at world coordinate `right`.
    pub fn set_right(&mut self, right: f64) {
        self.set_x(-right * self.scale.x + self.screen_size.width);
    }

    /// Moves the view so its top edge sits at world coordinate `top`.
    pub fn set_top(&mut self, top: f64) {
        self.set_y(-top * self.scale.y);
    }

    /// Moves the view so its bottom edge sits at world coordinate `bottom`.
    pub fn set_bottom(&mut self, bottom: f64) {
        self.set_y(-bottom * self.scale.y + self.screen_size.height);
    }

    /// World-space point at the center of the screen.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            self.world_screen_width() / 2.0 - self.position.x / self.scale.x,
            self.world_screen_height() / 2.0 - self.position.y / self.scale.y,
        )
    }

    /// Moves the view so `center` (world space) is at the screen's center.
    pub fn set_center(&mut self, center: Point) {
        self.set_position(Vec2::new(
            (self.world_screen_width() / 2.0 - center.x) * self.scale.x,
            (self.world_screen_height() / 2.0 - center.y) * self.scale.y,
        ));
    }

    /// World-space point at the screen's top-left corner.
    #[must_use]
    pub fn corner(&self) -> Point {
        Point::new(self.left(), self.top())
    }

    /// Moves the view so `corner` (world space) is at the screen's top-left.
    pub fn set_corner(&mut self, corner: Point) {
        self.set_position(Vec2::new(
            -corner.x * self.scale.x,
            -corner.y * self.scale.y,
        ));
    }

    /// The world-space rectangle currently visible on screen.
    #[must_use]
    pub fn visible_bounds(&self) -> Rect {
        Rect::new(self.left(), self.top(), self.right(), self.bottom())
    }

    /// The world rectangle, `(0, 0)` to the world size.
    #[must_use]
    pub fn world_rect(&self) -> Rect {
        Rect::from_origin_size(Point::ORIGIN, self.world_size())
    }

    /// Reports which edges of the view fall outside the world rectangle.
    #[must_use]
    pub fn out_of_bounds(&self) -> OutOfBounds {
        self.out_of_bounds_in(self.world_rect())
    }

    /// Reports which edges of the view fall outside `bounds` (world space).
    #[must_use]
    pub fn out_of_bounds_in(&self, bounds: Rect) -> OutOfBounds {
        OutOfBounds {
            left: self.left() < bounds.x0,
            right: self.right() > bounds.x1,
            top: self.top() < bounds.y0,
            bottom: self.bottom() > bounds.y1,
            top_left: Point::new(bounds.x0 * self.scale.x, bounds.y0 * self.scale.y),
            bottom_right: Point::new(
                bounds.x1 * self.scale.x - self.screen_size.width,
                bounds.y1 * self.scale.y - self.screen_size.height,
            ),
        }
    }

    /// Scale that fits `width` world units across the screen.
    ///
    /// Does not change the transform. Non-positive widths return the current
    /// horizontal scale.
    #[must_use]
    pub fn find_fit_width(&self, width: f64) -> f64 {
        if width > 0.0 {
            self.screen_size.width / width
        } else {
            self.scale.x
        }
    }

    /// Scale that fits `height` world units down the screen.
    ///
    /// Does not change the transform. Non-positive heights return the current
    /// vertical scale.
    #[must_use]
    pub fn find_fit_height(&self, height: f64) -> f64 {
        if height > 0.0 {
            self.screen_size.height / height
        } else {
            self.scale.y
        }
    }

    /// Largest uniform scale at which `size` fits entirely on screen.
    #[must_use]
    pub fn find_fit(&self, size: Size) -> f64 {
        self.find_fit_width(size.width)
            .min(self.find_fit_height(size.height))
    }

    /// Smallest uniform scale at which `size` covers the whole screen.
    #[must_use]
    pub fn find_cover(&self, size: Size) -> f64 {
        self.find_fit_width(size.width)
            .max(self.find_fit_height(size.height))
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewTransformDebugInfo {
        ViewTransformDebugInfo {
            screen_size: self.screen_size,
            world_size: self.world_size(),
            explicit_world_size: self.world_size.is_some(),
            position: self.position,
            scale: self.scale,
            visible_bounds: self.visible_bounds(),
        }
    }

    fn rebuild_transforms(&mut self) {
        // World → screen: scale per axis, then translate by position.
        self.world_to_screen =
            Affine::translate(self.position) * Affine::scale_non_uniform(self.scale.x, self.scale.y);
        self.screen_to_world = self.world_to_screen.inverse();
    }
}

fn is_valid_scale(value: f64) -> bool {
    value.is_finite() && value != 0.0
}

fn rect_max(rect: Rect) -> Point {
    Point::new(rect.x1, rect.y1)
}

/// Which edges of the view lie outside a bounding rectangle.
///
/// Produced by [`ViewTransform::out_of_bounds`] and
/// [`ViewTransform::out_of_bounds_in`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OutOfBounds {
    /// The view's left edge is left of the bounds.
    pub left: bool,
    /// The view's right edge is right of the bounds.
    pub right: bool,
    /// The view's top edge is above the bounds.
    pub top: bool,
    /// The view's bottom edge is below the bounds.
    pub bottom: bool,
    /// Negated position that aligns the bounds' top-left with the screen's.
    pub top_left: Point,
    /// Negated position that aligns the bounds' bottom-right with the screen's.
    pub bottom_right: Point,
}

impl OutOfBounds {
    /// Returns `true` if any edge is out of bounds.
    #[must_use]
    pub fn any(&self) -> bool {
        self.left || self.right || self.top || self.bottom
    }
}

/// Debug snapshot of a [`ViewTransform`].
#[derive(Clone, Copy, Debug)]
pub struct ViewTransformDebugInfo {
    /// Screen size in pixels.
    pub screen_size: Size,
    /// Effective world size.
    pub world_size: Size,
    /// Whether the world size was set explicitly.
    pub explicit_world_size: bool,
    /// Screen-space position of the world origin.
    pub position: Vec2,
    /// Per-axis scale.
    pub scale: Vec2,
    /// World-space rectangle visible on screen.
    pub visible_bounds: Rect,
}
