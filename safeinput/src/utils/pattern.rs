//! # FullMatch
//!
//! A regular expression that only accepts an input when the *whole* input
//! matches, not just a substring of it. The source pattern is kept so it can
//! be echoed back in diagnostics.
//!
//! ```rust
//! use safeinput::utils::FullMatch;
//!
//! let letters = FullMatch::new("[A-Za-z]+").unwrap();
//! assert!(letters.is_match("Hello"));
//! assert!(!letters.is_match("Hello123"));
//! assert_eq!(letters.as_str(), "[A-Za-z]+");
//! ```
use std::fmt::Display;
use std::str::FromStr;

use regex::Regex;

/// A compiled, whole-input regular expression.
#[derive(Debug, Clone)]
pub struct FullMatch {
    source: String,
    regex: Regex,
}

impl FullMatch {
    /// Compiles `pattern` anchored at both ends.
    ///
    /// Patterns that already start with `^` or end with `$` keep working;
    /// the extra anchors are redundant, not conflicting.
    pub fn new(pattern: &str) -> Result<FullMatch, regex::Error> {
        let regex = Regex::new(&format!("^(?:{})$", pattern))?;

        Ok(FullMatch {
            source: pattern.to_string(),
            regex,
        })
    }

    pub fn is_match(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }

    /// The pattern as the caller wrote it, without the added anchors.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl Display for FullMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl FromStr for FullMatch {
    type Err = regex::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FullMatch::new(s)
    }
}

impl TryFrom<&str> for FullMatch {
    type Error = regex::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        FullMatch::new(value)
    }
}
