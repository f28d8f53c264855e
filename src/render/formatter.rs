//! Line Formatter
//!
//! Renders one log line:
//!
//! ```text
//! <badge> <file> <function> <line> <message>\n
//! ```
//!
//! The badge column is always [`BADGE_WIDTH`] columns wide. File, function and
//! line are padded on the right to fixed widths; padding is written after the
//! style reset so it is never coloured, and longer values are never clipped.

use std::fmt::{self, Write as _};

use crate::filter::Severity;
use crate::render::Style;
use crate::site::CallSite;

/// Width of the level badge column, separator included
pub const BADGE_WIDTH: usize = 8;

/// Longest level tag
const TAG_WIDTH: usize = 5;

/// Style of the file column
pub const FILE_STYLE: Style = Style::new().fg(Style::YELLOW);

/// Style of the function column
pub const FUNCTION_STYLE: Style = Style::new().bold().fg(Style::WHITE);

/// Style of the line number column
pub const LINE_STYLE: Style = Style::new().fg(Style::CYAN);

/// Column widths of the location prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Layout {
    pub file_width: usize,
    pub function_width: usize,
    pub line_width: usize,
}

impl Layout {
    pub const fn new(file_width: usize, function_width: usize, line_width: usize) -> Self {
        Self {
            file_width,
            function_width,
            line_width,
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(
            crate::config::DEFAULT_FILE_WIDTH,
            crate::config::DEFAULT_FUNCTION_WIDTH,
            crate::config::DEFAULT_LINE_WIDTH,
        )
    }
}

/// Renders records into text lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Formatter {
    layout: Layout,
    color: bool,
}

impl Formatter {
    /// Create a formatter
    pub const fn new(layout: Layout, color: bool) -> Self {
        Self { layout, color }
    }

    pub const fn layout(&self) -> Layout {
        self.layout
    }

    pub const fn uses_color(&self) -> bool {
        self.color
    }

    /// Render a leveled line
    ///
    /// # Examples
    /// ```
    /// use dbglevel::render::{Formatter, Layout};
    /// use dbglevel::{CallSite, Severity};
    ///
    /// let formatter = Formatter::new(Layout::new(6, 4, 2), false);
    /// let site = CallSite::new("a.rs", "run", 7);
    /// let line = formatter.render(Some(Severity::Warning), &site, format_args!("hi {}", 1));
    /// assert_eq!(line, " WARN   a.rs   run  7  hi 1\n");
    /// ```
    pub fn render(
        &self,
        level: Option<Severity>,
        site: &CallSite,
        message: fmt::Arguments<'_>,
    ) -> String {
        let capacity = 64 + self.layout.file_width + self.layout.function_width;
        let mut out = String::with_capacity(capacity);
        self.render_into(&mut out, level, site, message);
        out
    }

    /// Render into an existing buffer
    ///
    /// `level` is `None` for unleveled lines, which get a blank badge column.
    pub fn render_into(
        &self,
        out: &mut String,
        level: Option<Severity>,
        site: &CallSite,
        message: fmt::Arguments<'_>,
    ) {
        match level {
            Some(level) => self.badge(out, level),
            None => pad(out, 0, BADGE_WIDTH),
        }
        self.field(out, &FILE_STYLE, site.file, self.layout.file_width);
        self.field(out, &FUNCTION_STYLE, site.function, self.layout.function_width);
        self.field(out, &LINE_STYLE, &site.line.to_string(), self.layout.line_width);
        let _ = out.write_fmt(message);
        out.push('\n');
    }

    fn badge(&self, out: &mut String, level: Severity) {
        let tag = level.tag();
        let text = format!(" {tag} ");
        self.styled(out, &level.style(), &text);
        pad(out, tag.len(), TAG_WIDTH);
        out.push(' ');
    }

    fn field(&self, out: &mut String, style: &Style, text: &str, width: usize) {
        self.styled(out, style, text);
        pad(out, text.chars().count(), width);
        out.push(' ');
    }

    fn styled(&self, out: &mut String, style: &Style, text: &str) {
        if self.color {
            style.paint_into(out, text);
        } else {
            out.push_str(text);
        }
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(Layout::default(), true)
    }
}

fn pad(out: &mut String, used: usize, width: usize) {
    for _ in used..width {
        out.push(' ');
    }
}
