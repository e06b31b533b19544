// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Placement of content along one axis when it is smaller than the screen.
///
/// Clamping and bouncing consult this when the world, scaled to screen
/// pixels, does not fill the screen on an axis and therefore cannot be
/// pushed against both edges at once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Align {
    /// Pin the content to the left (or top) of the screen.
    Start,
    /// Center the content within the screen.
    #[default]
    Center,
    /// Pin the content to the right (or bottom) of the screen.
    End,
}

impl Align {
    /// Returns the screen-space position that places content of length
    /// `extent` inside `available` pixels.
    ///
    /// ```
    /// use vantage_view2d::Align;
    ///
    /// assert_eq!(Align::Start.offset(800.0, 200.0), 0.0);
    /// assert_eq!(Align::Center.offset(800.0, 200.0), 300.0);
    /// assert_eq!(Align::End.offset(800.0, 200.0), 600.0);
    /// ```
    #[must_use]
    pub fn offset(self, available: f64, extent: f64) -> f64 {
        match self {
            Self::Start => 0.0,
            Self::Center => (available - extent) / 2.0,
            Self::End => available - extent,
        }
    }
}
