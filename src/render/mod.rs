//! Rendering of log lines: ANSI styles and the column formatter.

pub mod formatter;
pub mod style;

pub use formatter::{Formatter, Layout, BADGE_WIDTH};
pub use style::{Style, RESET};
