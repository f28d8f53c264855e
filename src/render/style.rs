//! Terminal Styles
//!
//! ANSI select-graphic-rendition sequences (`ESC [ <params> m`) used to
//! colour the fields of a rendered line.

use std::fmt::Write as _;

/// Escape sequence that resets every attribute
pub const RESET: &str = "\x1b[0m";

/// A set of SGR attributes plus an optional foreground colour
///
/// Parameters are always emitted in the same order (reverse, bold, colour)
/// so a style renders identically every time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    reverse: bool,
    bold: bool,
    fg: Option<u8>,
}

impl Style {
    pub const RED: u8 = 31;
    pub const YELLOW: u8 = 33;
    pub const CYAN: u8 = 36;
    pub const WHITE: u8 = 37;

    /// Create an empty style
    pub const fn new() -> Self {
        Self {
            reverse: false,
            bold: false,
            fg: None,
        }
    }

    pub const fn reverse(mut self) -> Self {
        self.reverse = true;
        self
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Set the foreground colour (an SGR colour code such as [`Style::RED`])
    pub const fn fg(mut self, color: u8) -> Self {
        self.fg = Some(color);
        self
    }

    /// SGR parameter list, e.g. `"7;1;31"`
    pub fn params(&self) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(3);
        if self.reverse {
            parts.push("7".to_string());
        }
        if self.bold {
            parts.push("1".to_string());
        }
        if let Some(color) = self.fg {
            parts.push(color.to_string());
        }
        if parts.is_empty() {
            "0".to_string()
        } else {
            parts.join(";")
        }
    }

    /// Append `text` wrapped in this style and a reset
    pub fn paint_into(&self, out: &mut String, text: &str) {
        let _ = write!(out, "\x1b[{}m{text}{RESET}", self.params());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_order_is_fixed() {
        let style = Style::new().fg(Style::RED).bold().reverse();
        assert_eq!(style.params(), "7;1;31");
        assert_eq!(Style::new().bold().fg(Style::WHITE).params(), "1;37");
        assert_eq!(Style::new().fg(Style::CYAN).params(), "36");
    }

    #[test]
    fn test_empty_style_resets() {
        assert_eq!(Style::new().params(), "0");
    }

    #[test]
    fn test_paint_wraps_with_reset() {
        let mut out = String::from(">");
        Style::new().fg(Style::YELLOW).paint_into(&mut out, "main.rs");
        assert_eq!(out, ">\x1b[33mmain.rs\x1b[0m");
    }
}
