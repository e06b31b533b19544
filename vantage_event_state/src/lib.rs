// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vantage Event State: pointer bookkeeping for viewport interactions.
//!
//! This crate provides small state machines that track pointer input across
//! events, independent of any particular windowing or event system:
//!
//! - [`pointer`]: Which pointers are down and their last known positions.
//! - [`click`]: Click recognition with a movement threshold.
//! - [`drag`]: Single-pointer drag tracking with movement deltas.
//!
//! Each manager accepts plain positions and pointer ids and answers queries
//! or produces deltas; none of them know about the viewport being driven.
//! The `vantage` crate composes them into its input manager.
//!
//! ## Pointer tracking
//!
//! ```rust
//! use kurbo::Point;
//! use vantage_event_state::pointer::{PointerId, PointerKind, PointerTracker};
//!
//! let mut pointers = PointerTracker::new();
//! pointers.on_pointer_down(PointerId(0), PointerKind::Mouse, Point::new(5.0, 5.0));
//! pointers.on_pointer_down(PointerId(1), PointerKind::Touch, Point::new(50.0, 5.0));
//!
//! // The mouse counts as a pointer but has no touch record.
//! assert_eq!(pointers.down_count(), 2);
//! assert_eq!(pointers.touch_pointers().len(), 1);
//! ```
//!
//! ## Drag tracking
//!
//! ```rust
//! use kurbo::Point;
//! use vantage_event_state::drag::DragState;
//! use vantage_event_state::pointer::PointerId;
//!
//! let mut drag = DragState::default();
//! drag.start(PointerId(1), Point::new(10.0, 10.0));
//! let delta = drag.update(Point::new(15.0, 12.0)).unwrap();
//! assert_eq!((delta.x, delta.y), (5.0, 2.0));
//! ```
//!
//! This crate is `no_std` compatible.

#![no_std]

pub mod click;
pub mod drag;
pub mod pointer;
