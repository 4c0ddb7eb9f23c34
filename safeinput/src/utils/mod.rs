pub mod sanitize;
pub use sanitize::{DesiredType, FilterErrorNot, Sanitize};

pub mod pattern;
pub use pattern::FullMatch;

pub mod terminal;
pub use terminal::{Terminal, TerminalError, TerminalResult};

pub mod header;
pub use header::{HEADER_BORDER, HEADER_WIDTH, centered_header, print_centered_header};
