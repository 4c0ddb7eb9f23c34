//! # Terminal Input Helper
//!
//! This module provides the prompt loops. Each reader writes a prompt,
//! reads one unit of input, validates it and either returns the typed value
//! or prints a one-line diagnostic and asks again. There is no retry limit.
//!
//! The validation itself lives in [`crate::utils::sanitize`].
//!
//! ## Features
//! - Works over any [`BufRead`] input and [`Write`] output, so a session can
//!   run against standard input or against an in-memory buffer in tests.
//! - Typed readers for non-empty lines, integers, doubles, inclusive ranges,
//!   Y/N confirmations and full-string regex matches.
//! - A generic [`Terminal::ask`] that loops over any list of [`Sanitize`]
//!   filters.
//! - End of input is reported as [`TerminalError::Exhausted`] instead of
//!   blocking or looping forever.
//!
//! ## Read units
//! - *line*: the next line, with its `\n` or `\r\n` terminator removed.
//!   Bytes that are not valid UTF-8 are replaced with `U+FFFD`, so they
//!   are rejected or accepted by validation rather than ending the read.
//! - *token*: the first whitespace-delimited token of the next non-blank
//!   line. Blank lines are skipped without a new prompt. The rest of the
//!   token's line is discarded whether or not the token is accepted.
//!
//! ## Usage
//!
//! ### Example 1: Standard input
//! ```rust,no_run
//! use safeinput::utils::Terminal;
//!
//! let mut terminal = Terminal::stdio();
//! let age = terminal.read_ranged_int("Enter your age", 0, 130)?;
//! let sure = terminal.read_yes_no("Is that right?")?;
//!
//! println!("Age: {} ({})", age, if sure { "confirmed" } else { "unsure" });
//! # Ok::<(), safeinput::utils::TerminalError>(())
//! ```
//!
//! ### Example 2: Scripted input
//! ```rust
//! use safeinput::utils::Terminal;
//!
//! let mut terminal = Terminal::new("abc\n5\n".as_bytes(), Vec::new());
//! assert_eq!(terminal.read_int("Enter your age").unwrap(), 5);
//!
//! let (_, output) = terminal.into_parts();
//! assert_eq!(
//!     String::from_utf8(output).unwrap(),
//!     "Enter your age: Invalid input. Please enter an integer.\nEnter your age: "
//! );
//! ```

use crate::utils::header;
use crate::utils::pattern::FullMatch;
use crate::utils::sanitize::{self, Bound, FilterErrorNot, Sanitize};
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use thiserror::Error;
use tracing::{debug, warn};

/// Result type alias for terminal reads.
pub type TerminalResult<T> = Result<T, TerminalError>;

/// Errors that end a read.
///
/// Rejected input is never one of these; it is reported and retried.
#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("no more input available")]
    Exhausted,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("invalid range: low bound {low} is greater than high bound {high}")]
    InvalidRange { low: Bound, high: Bound },
}

impl TerminalError {
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted)
    }
}

#[derive(Debug, Clone, Copy)]
enum Unit {
    Line,
    Token,
}

/// A prompt session over one input and one output.
///
/// The terminal never opens or closes its streams; pass `&mut reader` to
/// keep using a reader after the session, or call [`Terminal::into_parts`].
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl Terminal<StdinLock<'static>, Stdout> {
    /// A terminal over locked standard input and standard output.
    pub fn stdio() -> Self {
        Terminal::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Terminal { input, output }
    }

    /// Returns the input and output, e.g. to inspect what a test session printed.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// The output prompts are written to, for echoing results in between reads.
    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    /// Reads lines until one has a character above `U+0020` and returns it
    /// untrimmed. Blank lines re-prompt without a diagnostic.
    pub fn read_non_empty_line(&mut self, prompt: &str) -> TerminalResult<String> {
        let filters = [Sanitize::NonEmpty];
        self.prompt_until(&format!("{}: ", prompt), Unit::Line, |line| {
            Sanitize::execute(line, &filters)
        })
    }

    /// Reads a token until it parses as an `i32`.
    pub fn read_int(&mut self, prompt: &str) -> TerminalResult<i32> {
        self.prompt_until(&format!("{}: ", prompt), Unit::Token, sanitize::parse_int)
    }

    /// Reads a token until it parses as a finite `f64`.
    pub fn read_double(&mut self, prompt: &str) -> TerminalResult<f64> {
        self.prompt_until(&format!("{}: ", prompt), Unit::Token, sanitize::parse_double)
    }

    /// Reads a token until it is an integer within `[low, high]`.
    ///
    /// The prompt is shown as `{prompt} [{low} - {high}]: `.
    pub fn read_ranged_int(&mut self, prompt: &str, low: i32, high: i32) -> TerminalResult<i32> {
        if low > high {
            return Err(TerminalError::InvalidRange {
                low: low.into(),
                high: high.into(),
            });
        }

        let prompt = ranged_prompt(prompt, low.into(), high.into());
        self.prompt_until(&prompt, Unit::Token, |token| {
            sanitize::check_between(sanitize::parse_int(token)?, low, high)
        })
    }

    /// Reads a token until it is a double within `[low, high]`.
    pub fn read_ranged_double(
        &mut self,
        prompt: &str,
        low: f64,
        high: f64,
    ) -> TerminalResult<f64> {
        // also catches NaN bounds
        if !(low <= high) {
            return Err(TerminalError::InvalidRange {
                low: low.into(),
                high: high.into(),
            });
        }

        let prompt = ranged_prompt(prompt, low.into(), high.into());
        self.prompt_until(&prompt, Unit::Token, |token| {
            sanitize::check_between_double(sanitize::parse_double(token)?, low, high)
        })
    }

    /// Reads lines until one is `Y` or `N` (any case).
    pub fn read_yes_no(&mut self, prompt: &str) -> TerminalResult<bool> {
        self.prompt_until(
            &format!("{} [Y/N]: ", prompt),
            Unit::Line,
            sanitize::parse_yes_no,
        )
    }

    /// Reads lines until one fully matches `pattern`.
    ///
    /// The pattern is compiled once, before the first prompt.
    pub fn read_matching_string(&mut self, prompt: &str, pattern: &str) -> TerminalResult<String> {
        let pattern = FullMatch::new(pattern)?;
        self.read_full_match(prompt, &pattern)
    }

    /// Same as [`Terminal::read_matching_string`] with an already compiled pattern.
    pub fn read_full_match(&mut self, prompt: &str, pattern: &FullMatch) -> TerminalResult<String> {
        let filters = [Sanitize::MatchPattern(pattern.clone())];
        self.prompt_until(&format!("{}: ", prompt), Unit::Line, |line| {
            Sanitize::execute(line, &filters)
        })
    }

    /// Reads lines until one passes every filter, in order.
    ///
    /// # Example
    /// ```rust
    /// use safeinput::utils::{DesiredType, Sanitize, Terminal};
    ///
    /// let mut terminal = Terminal::new("0\n12\n".as_bytes(), std::io::sink());
    /// let threads = terminal
    ///     .ask(
    ///         "Scan threads",
    ///         &[Sanitize::IsType(DesiredType::Integer), Sanitize::IsBetween(1, 16)],
    ///     )
    ///     .unwrap();
    ///
    /// assert_eq!(threads, "12");
    /// ```
    pub fn ask(&mut self, prompt: &str, filters: &[Sanitize]) -> TerminalResult<String> {
        self.prompt_until(&format!("{}: ", prompt), Unit::Line, |line| {
            Sanitize::execute(line, filters)
        })
    }

    /// Writes the 60-column banner to this terminal's output.
    pub fn print_centered_header(&mut self, message: &str) -> TerminalResult<()> {
        header::print_centered_header(&mut self.output, message)?;
        Ok(())
    }

    fn prompt_until<T, F>(&mut self, prompt: &str, unit: Unit, mut accept: F) -> TerminalResult<T>
    where
        F: FnMut(&str) -> Result<T, FilterErrorNot>,
    {
        let mut attempts: u32 = 0;

        loop {
            self.output.write_all(prompt.as_bytes())?;
            self.output.flush()?;

            let input = match unit {
                Unit::Line => self.read_line()?,
                Unit::Token => self.read_token()?,
            };
            attempts = attempts.saturating_add(1);

            match accept(&input) {
                Ok(value) => {
                    debug!(attempts, "input accepted");
                    break Ok(value);
                }
                Err(e) => {
                    debug!(reason = %e, attempts, "input rejected");
                    if e.is_reported() {
                        writeln!(self.output, "{}", e)?;
                    }
                }
            }
        }
    }

    fn read_line(&mut self) -> TerminalResult<String> {
        let mut bytes = Vec::new();

        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            warn!("input exhausted while waiting for an answer");
            return Err(TerminalError::Exhausted);
        }

        if bytes.last() == Some(&b'\n') {
            bytes.pop();
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
        }
        // invalid UTF-8 becomes U+FFFD and is validated like any other answer
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn read_token(&mut self) -> TerminalResult<String> {
        loop {
            let line = self.read_line()?;
            if let Some(token) = line.split_whitespace().next() {
                break Ok(token.to_string());
            }
        }
    }
}

fn ranged_prompt(prompt: &str, low: Bound, high: Bound) -> String {
    format!("{} [{} - {}]: ", prompt, low, high)
}
