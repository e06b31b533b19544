// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Semantic events produced by the viewport and its plugins.
//!
//! Events are queued on the [`Viewport`](crate::Viewport) as they happen and
//! drained by the host with [`Viewport::drain_events`](crate::Viewport::drain_events).
//! Each event has a stable [`name`](ViewportEvent::name), and `moved`/`zoomed`
//! carry the source of the change.

use alloc::borrow::Cow;
use alloc::format;
use core::fmt;

use kurbo::Point;

/// What moved the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs, reason = "variants are named after their source")]
pub enum MoveKind {
    Drag,
    Pinch,
    Wheel,
    Decelerate,
    BounceX,
    BounceY,
    ClampX,
    ClampY,
    Snap,
    SnapZoom,
    Follow,
    MouseEdges,
    Animate,
    EnsureVisible,
}

impl MoveKind {
    /// The conventional type string, for example `"bounce-x"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Drag => "drag",
            Self::Pinch => "pinch",
            Self::Wheel => "wheel",
            Self::Decelerate => "decelerate",
            Self::BounceX => "bounce-x",
            Self::BounceY => "bounce-y",
            Self::ClampX => "clamp-x",
            Self::ClampY => "clamp-y",
            Self::Snap => "snap",
            Self::SnapZoom => "snap-zoom",
            Self::Follow => "follow",
            Self::MouseEdges => "mouse-edges",
            Self::Animate => "animate",
            Self::EnsureVisible => "ensureVisible",
        }
    }
}

/// What zoomed the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs, reason = "variants are named after their source")]
pub enum ZoomKind {
    Pinch,
    Wheel,
    ClampZoom,
    SnapZoom,
    Animate,
    EnsureVisible,
}

impl ZoomKind {
    /// The conventional type string, for example `"clamp-zoom"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pinch => "pinch",
            Self::Wheel => "wheel",
            Self::ClampZoom => "clamp-zoom",
            Self::SnapZoom => "snap-zoom",
            Self::Animate => "animate",
            Self::EnsureVisible => "ensureVisible",
        }
    }
}

/// An event emitted by the viewport.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewportEvent {
    /// The position changed.
    Moved {
        /// Source of the change.
        kind: MoveKind,
    },
    /// The scale changed.
    Zoomed {
        /// Source of the change.
        kind: ZoomKind,
    },
    /// A frame passed without movement after the viewport had been moving.
    MovedEnd,
    /// A frame passed without scale change after the viewport had been zooming.
    ZoomedEnd,
    /// A press and release without significant movement.
    Clicked {
        /// Press position in screen pixels.
        screen: Point,
        /// Press position in world units.
        world: Point,
    },
    /// A drag crossed the movement threshold.
    DragStart {
        /// Pointer position in screen pixels.
        screen: Point,
        /// Pointer position in world units.
        world: Point,
    },
    /// A drag that had moved was released.
    DragEnd {
        /// Last pointer position in screen pixels.
        screen: Point,
        /// Last pointer position in world units.
        world: Point,
    },
    /// A two-finger pinch started.
    PinchStart,
    /// A two-finger pinch ended.
    PinchEnd,
    /// A horizontal bounce tween started.
    BounceXStart,
    /// A horizontal bounce tween finished.
    BounceXEnd,
    /// A vertical bounce tween started.
    BounceYStart,
    /// A vertical bounce tween finished.
    BounceYEnd,
    /// A snap tween started.
    SnapStart,
    /// A snap tween finished.
    SnapEnd,
    /// A snap-zoom tween started.
    SnapZoomStart,
    /// A snap-zoom tween finished.
    SnapZoomEnd,
    /// The wheel plugin handled a wheel event.
    Wheel {
        /// Horizontal wheel delta.
        dx: f64,
        /// Vertical wheel delta.
        dy: f64,
        /// Depth wheel delta.
        dz: f64,
    },
    /// The drag plugin scrolled on a wheel event.
    WheelScroll,
    /// The mouse entered an edge scroll zone.
    MouseEdgeStart,
    /// The mouse left every edge scroll zone.
    MouseEdgeEnd,
    /// An animation completed.
    AnimateEnd,
    /// A plugin was removed.
    PluginRemoved {
        /// Name the plugin was registered under.
        name: Cow<'static, str>,
    },
    /// [`Viewport::update`](crate::Viewport::update) finished a frame.
    FrameEnd,
}

impl ViewportEvent {
    /// The stable event name, for example `"bounce-x-start"` or
    /// `"snap-remove"`.
    #[must_use]
    pub fn name(&self) -> Cow<'static, str> {
        let name = match self {
            Self::Moved { .. } => "moved",
            Self::Zoomed { .. } => "zoomed",
            Self::MovedEnd => "moved-end",
            Self::ZoomedEnd => "zoomed-end",
            Self::Clicked { .. } => "clicked",
            Self::DragStart { .. } => "drag-start",
            Self::DragEnd { .. } => "drag-end",
            Self::PinchStart => "pinch-start",
            Self::PinchEnd => "pinch-end",
            Self::BounceXStart => "bounce-x-start",
            Self::BounceXEnd => "bounce-x-end",
            Self::BounceYStart => "bounce-y-start",
            Self::BounceYEnd => "bounce-y-end",
            Self::SnapStart => "snap-start",
            Self::SnapEnd => "snap-end",
            Self::SnapZoomStart => "snap-zoom-start",
            Self::SnapZoomEnd => "snap-zoom-end",
            Self::Wheel { .. } => "wheel",
            Self::WheelScroll => "wheel-scroll",
            Self::MouseEdgeStart => "mouse-edge-start",
            Self::MouseEdgeEnd => "mouse-edge-end",
            Self::AnimateEnd => "animate-end",
            Self::PluginRemoved { name } => return Cow::Owned(format!("{name}-remove")),
            Self::FrameEnd => "frame-end",
        };
        Cow::Borrowed(name)
    }

    /// Returns the move source if this is a `moved` event.
    #[must_use]
    pub fn move_kind(&self) -> Option<MoveKind> {
        match self {
            Self::Moved { kind } => Some(*kind),
            _ => None,
        }
    }

    /// Returns the zoom source if this is a `zoomed` event.
    #[must_use]
    pub fn zoom_kind(&self) -> Option<ZoomKind> {
        match self {
            Self::Zoomed { kind } => Some(*kind),
            _ => None,
        }
    }
}

impl fmt::Display for ViewportEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Moved { kind } => write!(f, "moved ({})", kind.as_str()),
            Self::Zoomed { kind } => write!(f, "zoomed ({})", kind.as_str()),
            _ => f.write_str(&self.name()),
        }
    }
}
