//! # Input Sanitization & Validation
//!
//! This module turns one trimmed line of user input into a typed value, or
//! into a [`Rejection`] that explains why the line was refused. It performs
//! no I/O; [`crate::utils::Terminal`] prints the rejection and asks again.
//!
//! ## Features
//! - Numeric parsing for every integer primitive and for `f32`/`f64`
//!   via the [`Numeric`] trait
//! - Inclusive range checks with [`Bounds`], built from Rust range syntax
//! - Non-empty string checks
//! - Case-insensitive matching against a list of options
//!
//! Floating-point input always uses `.` as decimal separator, independent
//! of the host locale.
//!
//! ## Examples
//!
//! ### Bounds from range syntax
//! ```rust
//! use prompter::utils::Bounds;
//!
//! let any: Bounds<i32> = (..).into();
//! let at_least_five: Bounds<i32> = (5..).into();
//! let dice: Bounds<i32> = (1..=6).into();
//!
//! assert!(any.contains(&-40));
//! assert!(!at_least_five.contains(&4));
//! assert!(dice.contains(&6));
//! ```
use std::{
    fmt::Display,
    ops::{RangeFrom, RangeFull, RangeInclusive, RangeToInclusive},
    str::FromStr,
};

/// Inclusive bounds `[min, max]` for a numeric request.
///
/// A missing side is unbounded. Build it with the constructors or from
/// `..`, `min..`, `..=max` and `min..=max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<T> {
    pub min: Option<T>,
    pub max: Option<T>,
}

impl<T> Bounds<T> {
    pub fn unbounded() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    pub fn at_least(min: T) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    pub fn at_most(max: T) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    pub fn between(min: T, max: T) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }
}

impl<T: PartialOrd> Bounds<T> {
    /// Returns `true` if `value` lies within both bounds.
    pub fn contains(&self, value: &T) -> bool {
        self.min.as_ref().is_none_or(|min| value >= min)
            && self.max.as_ref().is_none_or(|max| value <= max)
    }

    /// Returns `true` when no value can ever satisfy these bounds (`min > max`).
    pub fn is_empty(&self) -> bool {
        matches!((&self.min, &self.max), (Some(min), Some(max)) if min > max)
    }
}

impl<T> Default for Bounds<T> {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl<T> From<RangeFull> for Bounds<T> {
    fn from(_: RangeFull) -> Self {
        Self::unbounded()
    }
}

impl<T> From<RangeFrom<T>> for Bounds<T> {
    fn from(value: RangeFrom<T>) -> Self {
        Self::at_least(value.start)
    }
}

impl<T> From<RangeToInclusive<T>> for Bounds<T> {
    fn from(value: RangeToInclusive<T>) -> Self {
        Self::at_most(value.end)
    }
}

impl<T> From<RangeInclusive<T>> for Bounds<T> {
    fn from(value: RangeInclusive<T>) -> Self {
        let (min, max) = value.into_inner();
        Self::between(min, max)
    }
}

/// The flavour of number a request expects, used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    Integer,
    Decimal,
}

impl Display for NumberKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer => write!(f, "an integer"),
            Self::Decimal => write!(f, "a decimal number (use '.' as separator)"),
        }
    }
}

/// A number that can be requested from the terminal.
///
/// Implemented for all integer primitives, `f32` and `f64`.
pub trait Numeric: FromStr + PartialOrd + Copy {
    const KIND: NumberKind;

    /// Renders a bound for a diagnostic message.
    fn render(&self, decimal_places: usize) -> String;

    /// Values that parse but must still be refused (NaN and infinities).
    fn is_admissible(&self) -> bool {
        true
    }
}

/// Implements [`Numeric`] for a list of primitive types.
///
/// # Example
/// ```rust,ignore
/// numeric_impl!(integer: i32, u8);
/// numeric_impl!(decimal: f64);
/// ```
macro_rules! numeric_impl {
    (integer: $($t:ty),+) => {
        $(
            impl Numeric for $t {
                const KIND: NumberKind = NumberKind::Integer;

                fn render(&self, _decimal_places: usize) -> String {
                    self.to_string()
                }
            }
        )+
    };
    (decimal: $($t:ty),+) => {
        $(
            impl Numeric for $t {
                const KIND: NumberKind = NumberKind::Decimal;

                fn render(&self, decimal_places: usize) -> String {
                    format!("{:.*}", decimal_places, self)
                }

                fn is_admissible(&self) -> bool {
                    self.is_finite()
                }
            }
        )+
    };
}

numeric_impl!(integer: i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
numeric_impl!(decimal: f32, f64);

/// Why a line of user input was refused.
///
/// Each variant renders as exactly one diagnostic line:
/// - [`NotNumber`]: could not parse as the expected kind of number.
/// - [`BelowMinimum`]: parsed, but smaller than the minimum.
/// - [`AboveMaximum`]: parsed, but greater than the maximum.
/// - [`Empty`]: nothing but whitespace was entered.
/// - [`NotAnOption`]: did not match any of the offered options.
#[derive(Debug, PartialEq)]
pub(crate) enum Rejection {
    NotNumber(NumberKind),
    BelowMinimum(String),
    AboveMaximum(String),
    Empty,
    NotAnOption,
}

impl Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotNumber(kind) => write!(f, "The value is not {}, try again!", kind),
            Self::BelowMinimum(min) => write!(
                f,
                "The number must be greater than or equal to \"{}\", try again!",
                min
            ),
            Self::AboveMaximum(max) => write!(
                f,
                "The number must be less than or equal to \"{}\", try again!",
                max
            ),
            Self::Empty => write!(f, "The value must not be empty, try again!"),
            Self::NotAnOption => write!(f, "The selection must be one of the options, try again!"),
        }
    }
}

impl<T: Numeric> Bounds<T> {
    /// Checks the minimum first, then the maximum.
    pub(crate) fn check(&self, value: T, decimal_places: usize) -> Result<T, Rejection> {
        if let Some(min) = &self.min {
            if value < *min {
                return Err(Rejection::BelowMinimum(min.render(decimal_places)));
            }
        }
        if let Some(max) = &self.max {
            if value > *max {
                return Err(Rejection::AboveMaximum(max.render(decimal_places)));
            }
        }
        Ok(value)
    }
}

/// Parses `input` as `T` and checks it against `bounds`.
pub(crate) fn parse_number<T: Numeric>(
    input: &str,
    bounds: &Bounds<T>,
    decimal_places: usize,
) -> Result<T, Rejection> {
    let number = match input.parse::<T>() {
        Ok(n) if n.is_admissible() => n,
        _ => return Err(Rejection::NotNumber(T::KIND)),
    };

    bounds.check(number, decimal_places)
}

pub(crate) fn non_empty(input: &str) -> Result<&str, Rejection> {
    let clean_input = input.trim();

    if clean_input.is_empty() {
        Err(Rejection::Empty)
    } else {
        Ok(clean_input)
    }
}

/// Returns the index of the first option equal to `input`, ignoring case.
pub(crate) fn match_option<S: AsRef<str>>(input: &str, options: &[S]) -> Result<usize, Rejection> {
    let wanted = input.to_lowercase();

    options
        .iter()
        .position(|option| option.as_ref().to_lowercase() == wanted)
        .ok_or(Rejection::NotAnOption)
}
