// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Option vocabulary shared by several plugins, with string parsing.
//!
//! Each type parses the compact string forms hosts commonly keep in
//! configuration files, for example `"top-bottom"` for [`Sides`] or
//! `"bottom-right"` for [`Underflow`].

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use bitflags::bitflags;
use vantage_view2d::Align;

/// Error returned when a string-form option is not recognized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOptionError {
    /// What was being parsed, for example `"easing"`.
    pub kind: &'static str,
    /// The rejected input.
    pub input: String,
}

impl ParseOptionError {
    pub(crate) fn new(kind: &'static str, input: &str) -> Self {
        Self {
            kind,
            input: input.to_string(),
        }
    }
}

impl fmt::Display for ParseOptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized {} `{}`", self.kind, self.input)
    }
}

impl core::error::Error for ParseOptionError {}

/// Splits `"top-bottom left"` style lists into lowercase-insensitive tokens.
fn tokens(s: &str) -> impl Iterator<Item = &str> {
    s.split(|c: char| c == '-' || c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
}

/// Axes a plugin acts on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Both axes.
    #[default]
    All,
    /// Horizontal only.
    X,
    /// Vertical only.
    Y,
}

impl Direction {
    /// Whether the horizontal axis is included.
    #[must_use]
    pub fn has_x(self) -> bool {
        matches!(self, Self::All | Self::X)
    }

    /// Whether the vertical axis is included.
    #[must_use]
    pub fn has_y(self) -> bool {
        matches!(self, Self::All | Self::Y)
    }
}

impl FromStr for Direction {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "x" => Ok(Self::X),
            "y" => Ok(Self::Y),
            _ => Err(ParseOptionError::new("direction", s)),
        }
    }
}

bitflags! {
    /// Screen edges a constraint applies to.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Sides: u8 {
        /// Left edge.
        const LEFT = 1;
        /// Right edge.
        const RIGHT = 1 << 1;
        /// Top edge.
        const TOP = 1 << 2;
        /// Bottom edge.
        const BOTTOM = 1 << 3;
        /// Left and right.
        const HORIZONTAL = Self::LEFT.bits() | Self::RIGHT.bits();
        /// Top and bottom.
        const VERTICAL = Self::TOP.bits() | Self::BOTTOM.bits();
        /// Every edge.
        const ALL = Self::HORIZONTAL.bits() | Self::VERTICAL.bits();
    }
}

impl Default for Sides {
    fn default() -> Self {
        Self::ALL
    }
}

impl FromStr for Sides {
    type Err = ParseOptionError;

    /// Parses `all`, `horizontal`, `vertical`, or a combination of `top`,
    /// `bottom`, `left` and `right` such as `top-bottom-right`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut sides = Self::empty();
        for token in tokens(s) {
            sides |= match token.to_ascii_lowercase().as_str() {
                "all" => Self::ALL,
                "horizontal" => Self::HORIZONTAL,
                "vertical" => Self::VERTICAL,
                "left" => Self::LEFT,
                "right" => Self::RIGHT,
                "top" => Self::TOP,
                "bottom" => Self::BOTTOM,
                _ => return Err(ParseOptionError::new("sides", s)),
            };
        }
        if sides.is_empty() {
            return Err(ParseOptionError::new("sides", s));
        }
        Ok(sides)
    }
}

bitflags! {
    /// Mouse buttons, using the DOM `buttons` bit layout.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct MouseButtons: u8 {
        /// Primary button.
        const LEFT = 1;
        /// Secondary button.
        const RIGHT = 1 << 1;
        /// Auxiliary (wheel) button.
        const MIDDLE = 1 << 2;
        /// Any of the three.
        const ALL = Self::LEFT.bits() | Self::RIGHT.bits() | Self::MIDDLE.bits();
    }
}

impl Default for MouseButtons {
    fn default() -> Self {
        Self::ALL
    }
}

impl FromStr for MouseButtons {
    type Err = ParseOptionError;

    /// Parses `all` or a combination of `left`, `middle` and `right`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut buttons = Self::empty();
        for token in tokens(s) {
            buttons |= match token.to_ascii_lowercase().as_str() {
                "all" => Self::ALL,
                "left" => Self::LEFT,
                "middle" => Self::MIDDLE,
                "right" => Self::RIGHT,
                _ => return Err(ParseOptionError::new("mouse buttons", s)),
            };
        }
        if buttons.is_empty() {
            return Err(ParseOptionError::new("mouse buttons", s));
        }
        Ok(buttons)
    }
}

/// Where content smaller than the screen is placed, per axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Underflow {
    /// Horizontal placement.
    pub horizontal: Align,
    /// Vertical placement.
    pub vertical: Align,
}

impl Underflow {
    /// Centered on both axes.
    pub const CENTER: Self = Self {
        horizontal: Align::Center,
        vertical: Align::Center,
    };
}

impl FromStr for Underflow {
    type Err = ParseOptionError;

    /// Parses `center`, or any of `top`/`bottom` with any of `left`/`right`,
    /// for example `top-left`. Axes not mentioned stay centered.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut underflow = Self::CENTER;
        let mut any = false;
        for token in tokens(s) {
            any = true;
            match token.to_ascii_lowercase().as_str() {
                "center" => {}
                "left" => underflow.horizontal = Align::Start,
                "right" => underflow.horizontal = Align::End,
                "top" => underflow.vertical = Align::Start,
                "bottom" => underflow.vertical = Align::End,
                _ => return Err(ParseOptionError::new("underflow", s)),
            }
        }
        if !any {
            return Err(ParseOptionError::new("underflow", s));
        }
        Ok(underflow)
    }
}

/// Limit for one edge of a clamp.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Bound {
    /// The edge is not clamped.
    #[default]
    Free,
    /// Clamp to the matching edge of the world.
    World,
    /// Clamp to this world coordinate.
    At(f64),
}

impl Bound {
    /// Resolves the bound against the world edge on the same side.
    #[must_use]
    pub fn resolve(self, world_edge: f64) -> Option<f64> {
        match self {
            Self::Free => None,
            Self::World => Some(world_edge),
            Self::At(value) => Some(value),
        }
    }

    /// Whether the edge is clamped at all.
    #[must_use]
    pub fn is_set(self) -> bool {
        !matches!(self, Self::Free)
    }
}

impl From<bool> for Bound {
    fn from(value: bool) -> Self {
        if value { Self::World } else { Self::Free }
    }
}

impl From<f64> for Bound {
    fn from(value: f64) -> Self {
        Self::At(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sides_parse_keywords_and_lists() {
        assert_eq!("all".parse::<Sides>(), Ok(Sides::ALL));
        assert_eq!("horizontal".parse::<Sides>(), Ok(Sides::LEFT | Sides::RIGHT));
        assert_eq!("vertical".parse::<Sides>(), Ok(Sides::VERTICAL));
        assert_eq!("top-bottom-right".parse::<Sides>(), Ok(Sides::TOP | Sides::BOTTOM | Sides::RIGHT));
        assert!("sideways".parse::<Sides>().is_err());
        assert!("".parse::<Sides>().is_err());
    }

    #[test]
    fn underflow_parse() {
        assert_eq!("center".parse::<Underflow>(), Ok(Underflow::CENTER));
        let u: Underflow = "top-left".parse().unwrap();
        assert_eq!(u.horizontal, Align::Start);
        assert_eq!(u.vertical, Align::Start);
        let u: Underflow = "bottom".parse().unwrap();
        assert_eq!(u.horizontal, Align::Center);
        assert_eq!(u.vertical, Align::End);
    }

    #[test]
    fn direction_and_buttons_parse() {
        assert_eq!("X".parse::<Direction>(), Ok(Direction::X));
        assert!(Direction::All.has_x() && Direction::All.has_y());
        assert!(!Direction::Y.has_x());
        assert_eq!("left-right".parse::<MouseButtons>(), Ok(MouseButtons::LEFT | MouseButtons::RIGHT));
        assert!("thumb".parse::<MouseButtons>().is_err());
    }

    #[test]
    fn parse_error_message_names_input() {
        let err = "diagonal".parse::<Direction>().unwrap_err();
        assert_eq!(alloc::format!("{err}"), "unrecognized direction `diagonal`");
    }

    #[test]
    fn bound_resolution() {
        assert_eq!(Bound::Free.resolve(10.0), None);
        assert_eq!(Bound::World.resolve(10.0), Some(10.0));
        assert_eq!(Bound::At(3.0).resolve(10.0), Some(3.0));
        assert_eq!(Bound::from(true), Bound::World);
        assert!(!Bound::from(false).is_set());
    }
}
