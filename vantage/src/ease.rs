// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easing curves for time-driven plugins.
//!
//! Curves use the classic `(t, b, c, d)` signature: elapsed time, start
//! value, total change and duration. Every named curve is `b + c * f(t / d)`
//! for a normalized `f` with `f(0) = 0` and `f(1) = 1`.
//!
//! ```
//! use vantage::Ease;
//!
//! let ease: Ease = "easeInOutSine".parse().unwrap();
//! assert_eq!(ease.apply(0.0, 10.0, 90.0, 150.0), 10.0);
//! assert!((ease.apply(75.0, 10.0, 90.0, 150.0) - 55.0).abs() < 1e-9);
//! assert_eq!(ease.apply(150.0, 10.0, 90.0, 150.0), 100.0);
//! ```

use core::f64::consts::PI;
use core::str::FromStr;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::options::ParseOptionError;

/// Custom easing function with the `(t, b, c, d)` signature.
pub type EaseFn = fn(f64, f64, f64, f64) -> f64;

/// An easing curve.
#[derive(Clone, Copy, Debug, Default)]
#[allow(missing_docs, reason = "variant names are the conventional curve names")]
pub enum Ease {
    #[default]
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    InQuart,
    OutQuart,
    InOutQuart,
    InQuint,
    OutQuint,
    InOutQuint,
    InSine,
    OutSine,
    InOutSine,
    InExpo,
    OutExpo,
    InOutExpo,
    InCirc,
    OutCirc,
    InOutCirc,
    InBack,
    OutBack,
    InOutBack,
    InElastic,
    OutElastic,
    InOutElastic,
    InBounce,
    OutBounce,
    InOutBounce,
    /// A caller-supplied curve.
    Custom(EaseFn),
}

const NAMES: &[(&str, Ease)] = &[
    ("linear", Ease::Linear),
    ("easeInQuad", Ease::InQuad),
    ("easeOutQuad", Ease::OutQuad),
    ("easeInOutQuad", Ease::InOutQuad),
    ("easeInCubic", Ease::InCubic),
    ("easeOutCubic", Ease::OutCubic),
    ("easeInOutCubic", Ease::InOutCubic),
    ("easeInQuart", Ease::InQuart),
    ("easeOutQuart", Ease::OutQuart),
    ("easeInOutQuart", Ease::InOutQuart),
    ("easeInQuint", Ease::InQuint),
    ("easeOutQuint", Ease::OutQuint),
    ("easeInOutQuint", Ease::InOutQuint),
    ("easeInSine", Ease::InSine),
    ("easeOutSine", Ease::OutSine),
    ("easeInOutSine", Ease::InOutSine),
    ("easeInExpo", Ease::InExpo),
    ("easeOutExpo", Ease::OutExpo),
    ("easeInOutExpo", Ease::InOutExpo),
    ("easeInCirc", Ease::InCirc),
    ("easeOutCirc", Ease::OutCirc),
    ("easeInOutCirc", Ease::InOutCirc),
    ("easeInBack", Ease::InBack),
    ("easeOutBack", Ease::OutBack),
    ("easeInOutBack", Ease::InOutBack),
    ("easeInElastic", Ease::InElastic),
    ("easeOutElastic", Ease::OutElastic),
    ("easeInOutElastic", Ease::InOutElastic),
    ("easeInBounce", Ease::InBounce),
    ("easeOutBounce", Ease::OutBounce),
    ("easeInOutBounce", Ease::InOutBounce),
];

impl Ease {
    /// Evaluates the curve at time `t` of `d`, from `b` by change `c`.
    ///
    /// Times outside `[0, d]` are clamped; a non-positive duration yields
    /// the end value. Custom curves receive the arguments unchanged.
    #[must_use]
    pub fn apply(self, t: f64, b: f64, c: f64, d: f64) -> f64 {
        if let Self::Custom(f) = self {
            return f(t, b, c, d);
        }
        if d <= 0.0 {
            return b + c;
        }
        b + c * self.progress((t / d).clamp(0.0, 1.0))
    }

    /// The conventional name of the curve, or `None` for custom curves.
    #[must_use]
    pub fn name(self) -> Option<&'static str> {
        NAMES
            .iter()
            .find(|(_, ease)| ease.same_curve(self))
            .map(|(name, _)| *name)
    }

    fn same_curve(self, other: Self) -> bool {
        !matches!(self, Self::Custom(_))
            && core::mem::discriminant(&self) == core::mem::discriminant(&other)
    }

    /// Normalized curve on `[0, 1]`.
    fn progress(self, x: f64) -> f64 {
        const BACK: f64 = 1.70158;
        const BACK_IN_OUT: f64 = BACK * 1.525;
        const ELASTIC: f64 = (2.0 * PI) / 3.0;
        const ELASTIC_IN_OUT: f64 = (2.0 * PI) / 4.5;

        match self {
            Self::Linear | Self::Custom(_) => x,
            Self::InQuad => ease_in(x, 2),
            Self::OutQuad => ease_out(x, 2),
            Self::InOutQuad => ease_in_out(x, 2),
            Self::InCubic => ease_in(x, 3),
            Self::OutCubic => ease_out(x, 3),
            Self::InOutCubic => ease_in_out(x, 3),
            Self::InQuart => ease_in(x, 4),
            Self::OutQuart => ease_out(x, 4),
            Self::InOutQuart => ease_in_out(x, 4),
            Self::InQuint => ease_in(x, 5),
            Self::OutQuint => ease_out(x, 5),
            Self::InOutQuint => ease_in_out(x, 5),
            Self::InSine => 1.0 - (x * PI / 2.0).cos(),
            Self::OutSine => (x * PI / 2.0).sin(),
            Self::InOutSine => -((PI * x).cos() - 1.0) / 2.0,
            Self::InExpo => {
                if x == 0.0 {
                    0.0
                } else {
                    2_f64.powf(10.0 * x - 10.0)
                }
            }
            Self::OutExpo => {
                if x == 1.0 {
                    1.0
                } else {
                    1.0 - 2_f64.powf(-10.0 * x)
                }
            }
            Self::InOutExpo => {
                if x == 0.0 || x == 1.0 {
                    x
                } else if x < 0.5 {
                    2_f64.powf(20.0 * x - 10.0) / 2.0
                } else {
                    (2.0 - 2_f64.powf(-20.0 * x + 10.0)) / 2.0
                }
            }
            Self::InCirc => 1.0 - (1.0 - x * x).max(0.0).sqrt(),
            Self::OutCirc => (1.0 - (x - 1.0) * (x - 1.0)).max(0.0).sqrt(),
            Self::InOutCirc => {
                if x < 0.5 {
                    (1.0 - (1.0 - 4.0 * x * x).max(0.0).sqrt()) / 2.0
                } else {
                    let u = -2.0 * x + 2.0;
                    ((1.0 - u * u).max(0.0).sqrt() + 1.0) / 2.0
                }
            }
            Self::InBack => (BACK + 1.0) * x * x * x - BACK * x * x,
            Self::OutBack => {
                let u = x - 1.0;
                1.0 + (BACK + 1.0) * u * u * u + BACK * u * u
            }
            Self::InOutBack => {
                if x < 0.5 {
                    let u = 2.0 * x;
                    (u * u * ((BACK_IN_OUT + 1.0) * u - BACK_IN_OUT)) / 2.0
                } else {
                    let u = 2.0 * x - 2.0;
                    (u * u * ((BACK_IN_OUT + 1.0) * u + BACK_IN_OUT) + 2.0) / 2.0
                }
            }
            Self::InElastic => {
                if x == 0.0 || x == 1.0 {
                    x
                } else {
                    -2_f64.powf(10.0 * x - 10.0) * ((10.0 * x - 10.75) * ELASTIC).sin()
                }
            }
            Self::OutElastic => {
                if x == 0.0 || x == 1.0 {
                    x
                } else {
                    2_f64.powf(-10.0 * x) * ((10.0 * x - 0.75) * ELASTIC).sin() + 1.0
                }
            }
            Self::InOutElastic => {
                if x == 0.0 || x == 1.0 {
                    x
                } else if x < 0.5 {
                    -(2_f64.powf(20.0 * x - 10.0) * ((20.0 * x - 11.125) * ELASTIC_IN_OUT).sin())
                        / 2.0
                } else {
                    (2_f64.powf(-20.0 * x + 10.0) * ((20.0 * x - 11.125) * ELASTIC_IN_OUT).sin())
                        / 2.0
                        + 1.0
                }
            }
            Self::InBounce => 1.0 - bounce_out(1.0 - x),
            Self::OutBounce => bounce_out(x),
            Self::InOutBounce => {
                if x < 0.5 {
                    (1.0 - bounce_out(1.0 - 2.0 * x)) / 2.0
                } else {
                    (1.0 + bounce_out(2.0 * x - 1.0)) / 2.0
                }
            }
        }
    }
}

fn ease_in(x: f64, power: i32) -> f64 {
    x.powi(power)
}

fn ease_out(x: f64, power: i32) -> f64 {
    1.0 - (1.0 - x).powi(power)
}

fn ease_in_out(x: f64, power: i32) -> f64 {
    if x < 0.5 {
        2_f64.powi(power - 1) * x.powi(power)
    } else {
        1.0 - (-2.0 * x + 2.0).powi(power) / 2.0
    }
}

fn bounce_out(x: f64) -> f64 {
    const N: f64 = 7.5625;
    const D: f64 = 2.75;
    if x < 1.0 / D {
        N * x * x
    } else if x < 2.0 / D {
        let u = x - 1.5 / D;
        N * u * u + 0.75
    } else if x < 2.5 / D {
        let u = x - 2.25 / D;
        N * u * u + 0.9375
    } else {
        let u = x - 2.625 / D;
        N * u * u + 0.984375
    }
}

impl FromStr for Ease {
    type Err = ParseOptionError;

    /// Parses conventional names such as `linear` or `easeInOutSine`,
    /// ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        NAMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|(_, ease)| *ease)
            .ok_or_else(|| ParseOptionError::new("easing", s))
    }
}
