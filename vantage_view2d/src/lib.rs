// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vantage View 2D: transform state for a pannable, zoomable viewport.
//!
//! This crate provides a small, headless model of a viewport's transform:
//! - Position and per-axis scale of the world relative to the screen.
//! - Screen size, and a world size that is either explicit or derived from
//!   the size of the content.
//! - Coordinate conversion between screen (pixel) and world space.
//! - Edge, center and corner accessors, visible bounds, out-of-bounds
//!   reports, and fit/cover scale helpers.
//!
//! It does **not** own a scene graph, a renderer or any input handling.
//! Interactive behavior (drag, pinch, wheel, inertia, clamping) lives in the
//! `vantage` crate, which mutates a [`ViewTransform`] in response to input.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use vantage_view2d::ViewTransform;
//!
//! let mut view = ViewTransform::new(Size::new(800.0, 600.0));
//! view.set_world_size(Some(Size::new(1600.0, 1200.0)));
//!
//! // Zoom out so the whole world fits, then center on it.
//! let fit = view.find_fit(view.world_size());
//! view.set_uniform_scale(fit);
//! view.set_center(Point::new(800.0, 600.0));
//!
//! // A click in the middle of the screen lands in the middle of the world.
//! let world = view.to_world(Point::new(400.0, 300.0));
//! assert!((world.x - 800.0).abs() < 1e-9);
//! assert!((world.y - 600.0).abs() < 1e-9);
//! ```
//!
//! ## Design notes
//!
//! - Scale is per axis so that fitting a width and a height independently is
//!   expressible, but most callers keep it uniform.
//! - Rotation is not modeled.
//! - Setters never fail loudly: a zero or non-finite scale is rejected and
//!   the transform is left unchanged.
//!
//! This crate is `no_std`.

#![no_std]

mod align;
mod transform;

pub use align::Align;
pub use transform::{OutOfBounds, ViewTransform, ViewTransformDebugInfo};
