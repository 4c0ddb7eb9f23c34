//! # SafeInput
//!
//! Prompt-and-retry helpers for interactive console programs. Every reader
//! writes a prompt, reads one line or token, validates it and, on failure,
//! prints a one-line diagnostic and asks again until the answer is valid.
//!
//! ## Features
//!
//! - **Typed readers** - non-empty lines, `i32`, `f64`, inclusive ranges,
//!   Y/N confirmations and full-string regular expression matches
//! - **Composable filters** - [`utils::Sanitize`] lists for custom prompts
//!   through [`utils::Terminal::ask`]
//! - **Injectable streams** - any `BufRead`/`Write` pair, so sessions can be
//!   scripted in tests
//! - **Header banner** - a 60-column centered title
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use safeinput::utils::Terminal;
//!
//! let mut terminal = Terminal::stdio();
//!
//! let name = terminal.read_non_empty_line("Enter your first name")?;
//! let level = terminal.read_ranged_int("Enter an integer between 1 and 10", 1, 10)?;
//! let ssn = terminal.read_matching_string("Enter your SSN (XXX-XX-XXXX)", r"^\d{3}-\d{2}-\d{4}$")?;
//!
//! terminal.print_centered_header(&format!("{} / {} / {}", name, level, ssn))?;
//! # Ok::<(), safeinput::utils::TerminalError>(())
//! ```
//!
//! ## Error Handling
//!
//! Invalid answers never end a read. A read only fails when the input runs
//! out, the streams fail, or the caller passes an unusable range or pattern:
//!
//! ```rust
//! use safeinput::utils::{Terminal, TerminalError};
//!
//! let mut terminal = Terminal::new("abc\n".as_bytes(), std::io::sink());
//!
//! match terminal.read_int("Enter your age") {
//!     Ok(age) => println!("Age: {}", age),
//!     Err(TerminalError::Exhausted) => eprintln!("No more input"),
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```
//!
//! ## Logging
//!
//! Rejections, acceptances and end of input are emitted as `tracing`
//! events under the `safeinput` target. The library never installs a
//! subscriber.

pub mod utils;
