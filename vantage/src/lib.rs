// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vantage: plugin-based pan and zoom interaction for a 2D viewport.
//!
//! A [`Viewport`] owns a [`ViewTransform`] (position and per-axis scale),
//! the pointers currently down, an ordered set of plugins and a queue of
//! [`ViewportEvent`]s. Plugins cooperate on the one transform:
//!
//! - Gestures: [`drag`](plugins::Drag), [`pinch`](plugins::Pinch),
//!   [`wheel`](plugins::Wheel), [`mouse-edges`](plugins::MouseEdges).
//! - Motion over time: [`decelerate`](plugins::Decelerate),
//!   [`bounce`](plugins::Bounce), [`snap`](plugins::Snap),
//!   [`snap-zoom`](plugins::SnapZoom), [`follow`](plugins::Follow),
//!   [`animate`](plugins::Animate).
//! - Constraints: [`clamp`](plugins::Clamp),
//!   [`clamp-zoom`](plugins::ClampZoom).
//!
//! The crate draws nothing and reads no clock. The host translates its
//! pointer and wheel events into [`PointerEvent`] and [`WheelEvent`], calls
//! [`Viewport::update`] once per frame with the elapsed milliseconds, reads
//! [`Viewport::transform`] back for rendering and drains the events.
//!
//! ## Plugin order
//!
//! Plugins run in registration order for every input event and frame. The
//! builder methods on [`Viewport`] place built-ins in the fixed order of
//! [`BUILTIN_ORDER`], so gestures move the view first, animations follow
//! and the constraints correct the result last.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use vantage::plugins::{ClampZoomOptions, PinchOptions};
//! use vantage::{PointerEvent, Viewport, ViewportOptions};
//!
//! let mut viewport = Viewport::new(ViewportOptions {
//!     world_size: Some(Size::new(1600.0, 1200.0)),
//!     ..ViewportOptions::new(Size::new(800.0, 600.0))
//! });
//! viewport
//!     .clamp_zoom(ClampZoomOptions::scale(0.5, 2.0))
//!     .pinch(PinchOptions::default());
//!
//! // Two fingers spread apart by 100px.
//! viewport.pointer_down(&PointerEvent::touch(1, Point::new(350.0, 300.0), 0.0));
//! viewport.pointer_down(&PointerEvent::touch(2, Point::new(450.0, 300.0), 0.0));
//! viewport.pointer_move(&PointerEvent::touch(2, Point::new(550.0, 300.0), 16.0));
//! viewport.update(16.0);
//!
//! assert_eq!(viewport.transform().scale_x(), 1.125);
//! let names: Vec<_> = viewport.drain_events().map(|e| e.name()).collect();
//! assert_eq!(names[0], "pinch-start");
//! ```
//!
//! ## Features
//!
//! - `std` (default): use the standard library.
//! - `libm`: floating point through `libm`, for `no_std` targets.
//!
//! Diagnostics go through `tracing`; this crate never installs a subscriber.
//!
//! This crate is `no_std` and uses `alloc`.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod ease;
mod event;
mod input;
mod manager;
mod options;
mod plugin;
pub mod plugins;
mod viewport;

pub use ease::{Ease, EaseFn};
pub use event::{MoveKind, ViewportEvent, ZoomKind};
pub use input::{DeltaMode, InputManager, PointerEvent, PointerId, PointerKind, WheelEvent};
pub use manager::PluginManager;
pub use options::{Bound, Direction, MouseButtons, ParseOptionError, Sides, Underflow};
pub use plugin::{BUILTIN_ORDER, Plugin, ViewportPlugin};
pub use viewport::{Viewport, ViewportOptions};

pub use vantage_view2d::{Align, OutOfBounds, ViewTransform};
