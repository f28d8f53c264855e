//! Severity Scale
//!
//! This module provides the ordered severity levels used by every log call.
//! Lower ranks are more important: `Fatal` (1) is the most severe level and
//! `Trace` (6) the most verbose. Two sentinels, `None` (0) and `Undefined`
//! (-1), exist for calls that carry no usable level; the selector never
//! permits them.

use serde::{Deserialize, Serialize};

use crate::render::Style;

/// Severity of a log line
///
/// The numeric rank is what the selector matches on: a call at rank `L` is
/// permitted by a term with cutoff `N` when `1 <= L <= N`.
///
/// # Examples
/// ```
/// use dbglevel::Severity;
///
/// assert!(Severity::Fatal < Severity::Trace);
/// assert_eq!(Severity::Warning.rank(), 3);
/// assert_eq!(Severity::Warning.tag(), "WARN");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(i8)]
pub enum Severity {
    /// No level could be determined
    Undefined = -1,
    /// Explicitly no level
    None = 0,
    /// Unrecoverable failure
    Fatal = 1,
    /// Recoverable failure
    Error = 2,
    /// Something unexpected that does not prevent progress
    Warning = 3,
    /// Normal operational messages
    Info = 4,
    /// Detail useful while debugging
    Debug = 5,
    /// Everything else
    Trace = 6,
}

impl Severity {
    /// Most severe level that can be selected
    pub const MOST_SEVERE: Severity = Severity::Fatal;

    /// Least severe level that can be selected, also the default cutoff
    pub const LEAST_SEVERE: Severity = Severity::Trace;

    /// All selectable levels, most severe first
    pub const SELECTABLE: [Severity; 6] = [
        Severity::Fatal,
        Severity::Error,
        Severity::Warning,
        Severity::Info,
        Severity::Debug,
        Severity::Trace,
    ];

    /// Numeric rank of the level
    #[inline]
    pub const fn rank(self) -> i8 {
        self as i8
    }

    /// Build a level from its numeric rank
    ///
    /// Ranks outside `-1..=6` map to `Undefined`.
    pub const fn from_rank(rank: i32) -> Severity {
        match rank {
            0 => Severity::None,
            1 => Severity::Fatal,
            2 => Severity::Error,
            3 => Severity::Warning,
            4 => Severity::Info,
            5 => Severity::Debug,
            6 => Severity::Trace,
            _ => Severity::Undefined,
        }
    }

    /// Parse a single level digit as written in a selector term
    ///
    /// Only `'1'..='6'` are accepted.
    pub const fn from_digit(c: char) -> Option<Severity> {
        match c {
            '1' => Some(Severity::Fatal),
            '2' => Some(Severity::Error),
            '3' => Some(Severity::Warning),
            '4' => Some(Severity::Info),
            '5' => Some(Severity::Debug),
            '6' => Some(Severity::Trace),
            _ => None,
        }
    }

    /// Whether the selector can ever permit this level
    #[inline]
    pub const fn is_selectable(self) -> bool {
        let rank = self.rank();
        rank >= Severity::MOST_SEVERE.rank() && rank <= Severity::LEAST_SEVERE.rank()
    }

    /// Five character display tag
    ///
    /// Sentinel levels are displayed as `TRACE`.
    pub const fn tag(self) -> &'static str {
        match self {
            Severity::Fatal => "FATAL",
            Severity::Error => "ERROR",
            Severity::Warning => "WARN",
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
            Severity::Trace | Severity::None | Severity::Undefined => "TRACE",
        }
    }

    /// Terminal style of the level badge
    pub const fn style(self) -> Style {
        match self {
            Severity::Fatal => Style::new().reverse().bold().fg(Style::RED),
            Severity::Error => Style::new().bold().fg(Style::RED),
            Severity::Warning => Style::new().bold().fg(Style::YELLOW),
            Severity::Info => Style::new().bold().fg(Style::CYAN),
            Severity::Debug => Style::new().bold().fg(Style::WHITE),
            Severity::Trace | Severity::None | Severity::Undefined => {
                Style::new().reverse().fg(Style::WHITE)
            }
        }
    }
}

impl Default for Severity {
    /// Default to the most permissive selectable level
    fn default() -> Self {
        Severity::LEAST_SEVERE
    }
}

impl From<i32> for Severity {
    fn from(rank: i32) -> Self {
        Severity::from_rank(rank)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    /// Parse a level from its name or its rank
    ///
    /// Accepts `fatal`, `error`, `warn`/`warning`, `info`, `debug`, `trace`
    /// and `none` in any case, or a rank between 0 and 6.
    ///
    /// # Examples
    /// ```
    /// use dbglevel::Severity;
    ///
    /// assert_eq!("warning".parse::<Severity>().unwrap(), Severity::Warning);
    /// assert_eq!("2".parse::<Severity>().unwrap(), Severity::Error);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "fatal" => Ok(Severity::Fatal),
            "error" => Ok(Severity::Error),
            "warn" | "warning" => Ok(Severity::Warning),
            "info" => Ok(Severity::Info),
            "debug" => Ok(Severity::Debug),
            "trace" => Ok(Severity::Trace),
            "none" => Ok(Severity::None),
            other => match other.parse::<i32>() {
                Ok(rank @ 0..=6) => Ok(Severity::from_rank(rank)),
                _ => Err(format!(
                    "Invalid severity: '{s}'. Valid values are fatal, error, warning, info, debug, trace, none or 0-6"
                )),
            },
        }
    }
}
