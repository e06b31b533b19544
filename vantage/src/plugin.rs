// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The plugin capability trait and the closed set of built-in plugins.

use alloc::boxed::Box;
use core::fmt::Debug;

use crate::Viewport;
use crate::input::{PointerEvent, WheelEvent};
use crate::plugins::{
    Animate, Bounce, Clamp, ClampZoom, Decelerate, Drag, Follow, MouseEdges, Pinch, Snap,
    SnapZoom, Wheel,
};

/// Behavior attached to a [`Viewport`].
///
/// Every hook has a no-op default, so a plugin implements only what it
/// reacts to. While a hook runs the plugin is detached from the viewport's
/// registry and receives the viewport mutably: it may move or zoom the
/// view, emit events and reach other plugins, but it will not find itself
/// by name.
///
/// Input hooks return `true` to claim the event. The viewport turns a
/// claim into a request to stop native handling only when its options ask
/// for that.
///
/// ```
/// use kurbo::Size;
/// use vantage::{Plugin, PointerEvent, Viewport, ViewportOptions, ViewportPlugin};
///
/// #[derive(Debug, Default)]
/// struct Presses(u32);
///
/// impl ViewportPlugin for Presses {
///     fn down(&mut self, _viewport: &mut Viewport, _event: &PointerEvent) -> bool {
///         self.0 += 1;
///         false
///     }
/// }
///
/// let mut viewport = Viewport::new(ViewportOptions::new(Size::new(800.0, 600.0)));
/// viewport.plugins_mut().add("presses", Plugin::Custom(Box::new(Presses::default())));
/// assert!(viewport.plugins().get("presses").is_some());
/// ```
pub trait ViewportPlugin: Debug {
    /// A pointer went down. The pointer is already tracked.
    fn down(&mut self, _viewport: &mut Viewport, _event: &PointerEvent) -> bool {
        false
    }

    /// A pointer moved. The tracker still holds its previous position.
    fn pointer_move(&mut self, _viewport: &mut Viewport, _event: &PointerEvent) -> bool {
        false
    }

    /// A pointer went up. The pointer is no longer tracked.
    fn up(&mut self, _viewport: &mut Viewport, _event: &PointerEvent) -> bool {
        false
    }

    /// A wheel event landed on the viewport.
    fn wheel(&mut self, _viewport: &mut Viewport, _event: &WheelEvent) -> bool {
        false
    }

    /// Advances time by `elapsed` milliseconds.
    fn update(&mut self, _viewport: &mut Viewport, _elapsed: f64) {}

    /// The screen or world size changed.
    fn resize(&mut self, _viewport: &mut Viewport) {}

    /// The transform was set programmatically.
    fn reset(&mut self, _viewport: &mut Viewport) {}

    /// The plugin was paused.
    fn pause(&mut self) {}

    /// The plugin was resumed.
    fn resume(&mut self) {}
}

/// A plugin registered on a viewport.
///
/// Built-in plugins are variants so that plugins can inspect each other
/// (for example, bounce reads drag and pinch activity); anything else goes
/// through [`Plugin::Custom`].
#[derive(Debug)]
#[allow(missing_docs, reason = "variants are named after the plugin they hold")]
pub enum Plugin {
    Drag(Drag),
    Pinch(Pinch),
    Wheel(Wheel),
    Follow(Follow),
    MouseEdges(MouseEdges),
    Decelerate(Decelerate),
    Animate(Animate),
    Bounce(Bounce),
    SnapZoom(SnapZoom),
    ClampZoom(ClampZoom),
    Snap(Snap),
    Clamp(Clamp),
    /// A host-defined plugin.
    Custom(Box<dyn ViewportPlugin>),
}

/// Canonical names of the built-in plugins, in dispatch order.
pub const BUILTIN_ORDER: [&str; 12] = [
    "drag",
    "pinch",
    "wheel",
    "follow",
    "mouse-edges",
    "decelerate",
    "animate",
    "bounce",
    "snap-zoom",
    "clamp-zoom",
    "snap",
    "clamp",
];

impl Plugin {
    /// The name the viewport's builder methods register this plugin under,
    /// or `None` for custom plugins.
    #[must_use]
    pub fn builtin_name(&self) -> Option<&'static str> {
        let name = match self {
            Self::Drag(_) => "drag",
            Self::Pinch(_) => "pinch",
            Self::Wheel(_) => "wheel",
            Self::Follow(_) => "follow",
            Self::MouseEdges(_) => "mouse-edges",
            Self::Decelerate(_) => "decelerate",
            Self::Animate(_) => "animate",
            Self::Bounce(_) => "bounce",
            Self::SnapZoom(_) => "snap-zoom",
            Self::ClampZoom(_) => "clamp-zoom",
            Self::Snap(_) => "snap",
            Self::Clamp(_) => "clamp",
            Self::Custom(_) => return None,
        };
        Some(name)
    }

    /// Position of this plugin in [`BUILTIN_ORDER`].
    pub(crate) fn builtin_rank(&self) -> Option<usize> {
        let name = self.builtin_name()?;
        BUILTIN_ORDER.iter().position(|n| *n == name)
    }

    /// The plugin as a trait object.
    pub fn as_dyn_mut(&mut self) -> &mut dyn ViewportPlugin {
        match self {
            Self::Drag(p) => p,
            Self::Pinch(p) => p,
            Self::Wheel(p) => p,
            Self::Follow(p) => p,
            Self::MouseEdges(p) => p,
            Self::Decelerate(p) => p,
            Self::Animate(p) => p,
            Self::Bounce(p) => p,
            Self::SnapZoom(p) => p,
            Self::ClampZoom(p) => p,
            Self::Snap(p) => p,
            Self::Clamp(p) => p,
            Self::Custom(p) => p.as_mut(),
        }
    }

    /// The drag plugin, if this is one.
    #[must_use]
    pub fn as_drag(&self) -> Option<&Drag> {
        match self {
            Self::Drag(p) => Some(p),
            _ => None,
        }
    }

    /// The pinch plugin, if this is one.
    #[must_use]
    pub fn as_pinch(&self) -> Option<&Pinch> {
        match self {
            Self::Pinch(p) => Some(p),
            _ => None,
        }
    }

    /// The wheel plugin, if this is one.
    #[must_use]
    pub fn as_wheel(&self) -> Option<&Wheel> {
        match self {
            Self::Wheel(p) => Some(p),
            _ => None,
        }
    }

    /// The decelerate plugin, if this is one.
    #[must_use]
    pub fn as_decelerate(&self) -> Option<&Decelerate> {
        match self {
            Self::Decelerate(p) => Some(p),
            _ => None,
        }
    }

    /// The decelerate plugin, mutably, if this is one.
    pub fn as_decelerate_mut(&mut self) -> Option<&mut Decelerate> {
        match self {
            Self::Decelerate(p) => Some(p),
            _ => None,
        }
    }

    /// The bounce plugin, if this is one.
    #[must_use]
    pub fn as_bounce(&self) -> Option<&Bounce> {
        match self {
            Self::Bounce(p) => Some(p),
            _ => None,
        }
    }

    /// The clamp-zoom plugin, if this is one.
    #[must_use]
    pub fn as_clamp_zoom(&self) -> Option<&ClampZoom> {
        match self {
            Self::ClampZoom(p) => Some(p),
            _ => None,
        }
    }

    /// The snap plugin, if this is one.
    #[must_use]
    pub fn as_snap(&self) -> Option<&Snap> {
        match self {
            Self::Snap(p) => Some(p),
            _ => None,
        }
    }

    /// The snap-zoom plugin, if this is one.
    #[must_use]
    pub fn as_snap_zoom(&self) -> Option<&SnapZoom> {
        match self {
            Self::SnapZoom(p) => Some(p),
            _ => None,
        }
    }

    /// The animate plugin, if this is one.
    #[must_use]
    pub fn as_animate(&self) -> Option<&Animate> {
        match self {
            Self::Animate(p) => Some(p),
            _ => None,
        }
    }
}
