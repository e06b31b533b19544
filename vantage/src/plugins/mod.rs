// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Built-in plugins.
//!
//! Each plugin comes with an options struct whose `Default` holds the
//! documented defaults; override fields with struct update syntax:
//!
//! ```
//! use vantage::plugins::DecelerateOptions;
//!
//! let options = DecelerateOptions { friction: 0.9, ..Default::default() };
//! assert_eq!(options.min_speed, 0.01);
//! ```

mod animate;
mod bounce;
mod clamp;
mod clamp_zoom;
mod decelerate;
mod drag;
mod follow;
mod mouse_edges;
mod pinch;
mod snap;
mod snap_zoom;
mod tween;
mod wheel;

pub use animate::{Animate, AnimateOptions};
pub use bounce::{Bounce, BounceOptions};
pub use clamp::{Clamp, ClampOptions};
pub use clamp_zoom::{ClampZoom, ClampZoomOptions};
pub use decelerate::{Decelerate, DecelerateOptions};
pub use drag::{Drag, DragOptions};
pub use follow::{Follow, FollowOptions, FollowTarget};
pub use mouse_edges::{MouseEdges, MouseEdgesOptions};
pub use pinch::{Pinch, PinchOptions};
pub use snap::{Snap, SnapOptions};
pub use snap_zoom::{SnapZoom, SnapZoomOptions};
pub use wheel::{Wheel, WheelOptions};

#[cfg(test)]
pub(crate) mod test_support {
    use kurbo::Size;

    use crate::{Viewport, ViewportEvent, ViewportOptions};
    use alloc::vec::Vec;

    /// An 800×600 screen over a 1600×1200 world.
    pub(crate) fn viewport() -> Viewport {
        Viewport::new(ViewportOptions {
            world_size: Some(Size::new(1600.0, 1200.0)),
            ..ViewportOptions::new(Size::new(800.0, 600.0))
        })
    }

    pub(crate) fn drained(viewport: &mut Viewport) -> Vec<ViewportEvent> {
        viewport.drain_events().collect()
    }

    pub(crate) fn count(events: &[ViewportEvent], name: &str) -> usize {
        events.iter().filter(|e| e.name() == name).count()
    }

    pub(crate) fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }
}
