//! # Centered Header
//!
//! Prints a three-line banner, [`HEADER_WIDTH`] columns wide:
//!
//! ```text
//! ************************************************************
//! ***                Message Centered Here                 ***
//! ************************************************************
//! ```
//!
//! The padding on each side is `(HEADER_WIDTH - len - 6) / 2`. When
//! `len + 6` is odd one more space goes on the right, so the extra column
//! always lands before the closing border.
//!
//! Messages longer than `HEADER_WIDTH - 6` characters are not rejected;
//! they get no padding and the middle row runs past the borders.
use std::io::{self, Write};

/// Total width of every banner row.
pub const HEADER_WIDTH: usize = 60;

/// Border printed at both ends of the message row.
pub const HEADER_BORDER: &str = "***";

/// Renders the banner, each row terminated by `\n`.
pub fn centered_header(message: &str) -> String {
    let len = message.chars().count();
    let framed = len + 2 * HEADER_BORDER.len();
    let padding = HEADER_WIDTH.saturating_sub(framed) / 2;
    let odd = if framed % 2 != 0 { " " } else { "" };
    let stars = "*".repeat(HEADER_WIDTH);
    let pad = " ".repeat(padding);

    format!(
        "{stars}\n{border}{pad}{message}{pad}{odd}{border}\n{stars}\n",
        border = HEADER_BORDER,
    )
}

/// Writes the banner to `out`.
pub fn print_centered_header<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    out.write_all(centered_header(message).as_bytes())?;
    out.flush()
}
