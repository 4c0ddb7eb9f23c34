//! # Input Sanitization & Validation
//!
//! This module holds the validation side of the prompt loops: a set of
//! composable filters (`Sanitize`) and the typed parse helpers the
//! [`crate::utils::Terminal`] readers are built on. Filters run in order
//! and short-circuit on the first failure, returning the diagnostic that is
//! shown to the user before the prompt repeats.
//!
//! ## Features
//! - Integer (`i32`) and double (`f64`) parsing via [`DesiredType`]
//! - Inclusive range validation with [`Sanitize::IsBetween`] and
//!   [`Sanitize::IsBetweenDouble`]
//! - Case-insensitive Y/N confirmation with [`Sanitize::YesNo`]
//! - Full-string regular expression matching with [`Sanitize::MatchPattern`]
//! - Diagnostics worded exactly as they are printed
//!
//! ## Examples
//!
//! ### Compose filters
//! ```rust
//! use safeinput::utils::{DesiredType, Sanitize};
//!
//! let filters = [
//!     Sanitize::NonEmpty,
//!     Sanitize::IsType(DesiredType::Integer),
//!     Sanitize::IsBetween(1, 10),
//! ];
//!
//! assert_eq!(Sanitize::execute("7", &filters).unwrap(), "7");
//! assert_eq!(
//!     Sanitize::execute("15", &filters).unwrap_err().to_string(),
//!     "Input out of range. Please enter an integer between 1 and 10."
//! );
//! ```
//!
//! ### Typed helpers
//! ```rust
//! use safeinput::utils::sanitize::{parse_double, parse_int, parse_yes_no};
//!
//! assert_eq!(parse_int("-42").unwrap(), -42);
//! assert_eq!(parse_double("2.5").unwrap(), 2.5);
//! assert!(parse_yes_no("n").is_ok_and(|yes| !yes));
//! ```
use std::fmt::{self, Display};

use thiserror::Error;

use crate::utils::pattern::FullMatch;

/// Represents a validation filter that can be applied to one unit of input.
///
/// - `NonEmpty`: the input has at least one character above `U+0020`.
/// - `IsType`: the input parses as the given [`DesiredType`].
/// - `IsBetween`: the input is an integer within `[low, high]`.
/// - `IsBetweenDouble`: the input is a double within `[low, high]`.
/// - `YesNo`: the input is `Y` or `N`, in either case.
/// - `MatchPattern`: the whole input matches a regular expression.
#[derive(Debug, Clone)]
pub enum Sanitize {
    NonEmpty,
    IsType(DesiredType),
    IsBetween(i32, i32),
    IsBetweenDouble(f64, f64),
    YesNo,
    MatchPattern(FullMatch),
}

/// Trait for input validation.
/// Any type that implements this can validate a string input and return
/// either `Ok(())` if the input is valid or a [`FilterErrorNot`] on failure.
trait Validate {
    fn validate(&self, input: &str) -> Result<(), FilterErrorNot>;
}

/// Represents the reason one input was rejected.
///
/// The `Display` output is the diagnostic line printed before the prompt
/// is shown again. None of these end a read; they only cause a retry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterErrorNot {
    #[error("Input must not be empty.")]
    Empty,

    #[error("Invalid input. Please enter {}.", .0.with_article())]
    Type(DesiredType),

    #[error(
        "Input out of range. Please enter {} between {} and {}.",
        .ty.with_article(),
        .low,
        .high
    )]
    OutOfRange {
        ty: DesiredType,
        low: Bound,
        high: Bound,
    },

    #[error("Invalid input. Please enter Y or N.")]
    YesNo,

    #[error("Invalid input. Please match the pattern: {0}.")]
    Pattern(String),
}

impl FilterErrorNot {
    /// Whether the loop should print this rejection.
    /// Blank lines are retried silently.
    pub fn is_reported(&self) -> bool {
        !matches!(self, Self::Empty)
    }
}

/// A range bound as it appears in prompts and diagnostics.
///
/// Doubles always carry a fractional part (`1.0`, `0.5`) so an integer
/// range and a double range read differently on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    Integer(i32),
    Double(f64),
}

impl Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{}", n),
            Self::Double(n) => write!(f, "{:?}", n),
        }
    }
}

impl From<i32> for Bound {
    fn from(value: i32) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Bound {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

/// Represents the numeric type the input should be parsed into.
///
/// Used together with [`Sanitize::IsType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesiredType {
    Integer,
    Double,
}

impl DesiredType {
    /// The type name with its indefinite article, as used in diagnostics.
    pub fn with_article(&self) -> &'static str {
        match self {
            Self::Integer => "an integer",
            Self::Double => "a double",
        }
    }

    fn parse(&self, input: &str) -> Result<(), FilterErrorNot> {
        match self {
            Self::Integer => parse_int(input).map(|_| ()),
            Self::Double => parse_double(input).map(|_| ()),
        }
    }
}

impl Display for DesiredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => write!(f, "integer"),
            Self::Double => write!(f, "double"),
        }
    }
}

/// Parses a 32-bit signed integer.
pub fn parse_int(input: &str) -> Result<i32, FilterErrorNot> {
    input
        .parse::<i32>()
        .map_err(|_| FilterErrorNot::Type(DesiredType::Integer))
}

/// Parses a finite double. `NaN` and infinities are rejected.
pub fn parse_double(input: &str) -> Result<f64, FilterErrorNot> {
    match input.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(FilterErrorNot::Type(DesiredType::Double)),
    }
}

/// Inclusive range check for integers.
pub fn check_between(value: i32, low: i32, high: i32) -> Result<i32, FilterErrorNot> {
    if (low..=high).contains(&value) {
        Ok(value)
    } else {
        Err(FilterErrorNot::OutOfRange {
            ty: DesiredType::Integer,
            low: low.into(),
            high: high.into(),
        })
    }
}

/// Inclusive range check for doubles.
pub fn check_between_double(value: f64, low: f64, high: f64) -> Result<f64, FilterErrorNot> {
    if value >= low && value <= high {
        Ok(value)
    } else {
        Err(FilterErrorNot::OutOfRange {
            ty: DesiredType::Double,
            low: low.into(),
            high: high.into(),
        })
    }
}

/// `Y`/`y` is `true`, `N`/`n` is `false`. Surrounding whitespace is not
/// ignored.
pub fn parse_yes_no(input: &str) -> Result<bool, FilterErrorNot> {
    if input.eq_ignore_ascii_case("y") {
        Ok(true)
    } else if input.eq_ignore_ascii_case("n") {
        Ok(false)
    } else {
        Err(FilterErrorNot::YesNo)
    }
}

impl Sanitize {
    /// Executes all provided filters against the given answer.
    ///
    /// - Stops and returns the first error encountered.
    /// - Returns the answer unchanged if all filters pass.
    pub fn execute(answer: &str, filters: &[Sanitize]) -> Result<String, FilterErrorNot> {
        for filter in filters {
            filter.validate(answer)?;
        }
        Ok(answer.to_string())
    }
}

impl Validate for Sanitize {
    fn validate(&self, input: &str) -> Result<(), FilterErrorNot> {
        match self {
            Sanitize::NonEmpty => {
                if input.trim_matches(|c: char| c <= ' ').is_empty() {
                    Err(FilterErrorNot::Empty)
                } else {
                    Ok(())
                }
            }
            Sanitize::IsType(ty) => ty.parse(input),
            Sanitize::IsBetween(low, high) => {
                check_between(parse_int(input)?, *low, *high).map(|_| ())
            }
            Sanitize::IsBetweenDouble(low, high) => {
                check_between_double(parse_double(input)?, *low, *high).map(|_| ())
            }
            Sanitize::YesNo => parse_yes_no(input).map(|_| ()),
            Sanitize::MatchPattern(pattern) => {
                if pattern.is_match(input) {
                    Ok(())
                } else {
                    Err(FilterErrorNot::Pattern(pattern.as_str().to_string()))
                }
            }
        }
    }
}
