//! Configuration
//!
//! Everything a [`Logger`](crate::Logger) needs besides the selector itself:
//! where the selector comes from, column widths, the output stream and the
//! colour policy. Defaults are constants; [`Config::from_env`] overrides them
//! from the `DEBUG_*` environment variables.

use serde::{Deserialize, Serialize};

use crate::filter::compiler::DEFAULT_SIZE_LIMIT;
use crate::filter::Severity;
use crate::render::Layout;
use crate::sink::SinkKind;

/// Environment variable holding the selector expression
pub const SELECTOR_VAR: &str = "DEBUG";

/// Environment variable selecting fixed threshold mode
pub const LEVEL_VAR: &str = "DEBUG_LEVEL";

/// Environment variable overriding the file column width
pub const FILE_WIDTH_VAR: &str = "DEBUG_SPACING_FILE";

/// Environment variable overriding the function column width
pub const FUNCTION_WIDTH_VAR: &str = "DEBUG_SPACING_FUNCTION";

/// Environment variable overriding the line column width
pub const LINE_WIDTH_VAR: &str = "DEBUG_SPACING_LINE";

/// Environment variable selecting the output stream
pub const OUT_VAR: &str = "DEBUG_OUT";

/// Environment variable selecting the colour policy
pub const COLOR_VAR: &str = "DEBUG_COLOR";

pub const DEFAULT_FILE_WIDTH: usize = 12;
pub const DEFAULT_FUNCTION_WIDTH: usize = 15;
pub const DEFAULT_LINE_WIDTH: usize = 4;

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid column width in {var}: '{value}'")]
    InvalidWidth { var: &'static str, value: String },

    #[error("Invalid output stream: '{value}' (expected stdout or stderr)")]
    InvalidSink { value: String },

    #[error("Invalid color mode: '{value}' (expected auto, always or never)")]
    InvalidColor { value: String },

    #[error("Invalid level: '{value}'")]
    InvalidLevel { value: String },
}

/// When to emit ANSI styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Only when the sink is a terminal
    Auto,
    /// Always
    #[default]
    Always,
    /// Never
    Never,
}

impl std::str::FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" | "" => Ok(ColorMode::Auto),
            "always" | "1" | "true" => Ok(ColorMode::Always),
            "never" | "0" | "false" => Ok(ColorMode::Never),
            _ => Err(format!("Invalid color mode: '{s}'")),
        }
    }
}

/// Logger configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Environment variable the selector is read from
    pub selector_var: String,

    /// Explicit selector expression, used instead of the environment
    pub selector: Option<String>,

    /// Fixed threshold: when set, the selector is bypassed and every site
    /// passes at this level or more severe
    pub threshold: Option<Severity>,

    /// Column widths
    pub layout: Layout,

    /// Output stream
    pub sink: SinkKind,

    /// Colour policy
    pub color: ColorMode,

    /// Size limit of the compiled selector, in bytes
    pub regex_size_limit: usize,
}

impl Config {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Read overrides from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read overrides through `lookup`, which maps a variable name to its value
    ///
    /// # Examples
    /// ```
    /// use dbglevel::{Config, SinkKind};
    ///
    /// let config = Config::from_lookup(|name| match name {
    ///     "DEBUG_OUT" => Some("stderr".to_string()),
    ///     "DEBUG_SPACING_FILE" => Some("20".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    /// assert_eq!(config.sink, SinkKind::Stderr);
    /// assert_eq!(config.layout.file_width, 20);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let set = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        if let Some(value) = set(LEVEL_VAR) {
            let level = value
                .parse::<Severity>()
                .map_err(|_| ConfigError::InvalidLevel { value: value.clone() })?;
            config.threshold = Some(level);
        }
        if let Some(value) = set(FILE_WIDTH_VAR) {
            config.layout.file_width = parse_width(FILE_WIDTH_VAR, &value)?;
        }
        if let Some(value) = set(FUNCTION_WIDTH_VAR) {
            config.layout.function_width = parse_width(FUNCTION_WIDTH_VAR, &value)?;
        }
        if let Some(value) = set(LINE_WIDTH_VAR) {
            config.layout.line_width = parse_width(LINE_WIDTH_VAR, &value)?;
        }
        if let Some(value) = set(OUT_VAR) {
            config.sink = value
                .parse()
                .map_err(|_| ConfigError::InvalidSink { value: value.clone() })?;
        }
        if let Some(value) = set(COLOR_VAR) {
            config.color = value
                .parse()
                .map_err(|_| ConfigError::InvalidColor { value: value.clone() })?;
        }
        Ok(config)
    }

    /// Use an explicit selector expression instead of the environment
    pub fn with_selector<S: Into<String>>(mut self, selector: S) -> Self {
        self.selector = Some(selector.into());
        self
    }

    /// Read the selector from another environment variable
    pub fn with_selector_var<S: Into<String>>(mut self, var: S) -> Self {
        self.selector_var = var.into();
        self
    }

    /// Bypass the selector with a fixed threshold
    pub fn with_threshold(mut self, threshold: Severity) -> Self {
        self.threshold = Some(threshold);
        self
    }

    /// Set the column widths
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Set the output stream
    pub fn with_sink(mut self, sink: SinkKind) -> Self {
        self.sink = sink;
        self
    }

    /// Set the colour policy
    pub fn with_color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }

    /// Set the size limit of the compiled selector
    pub fn with_regex_size_limit(mut self, limit: usize) -> Self {
        self.regex_size_limit = limit;
        self
    }

    /// The selector expression currently in effect
    ///
    /// The explicit selector wins; otherwise the environment variable is read.
    pub fn selector_expression(&self) -> Option<String> {
        match &self.selector {
            Some(selector) => Some(selector.clone()),
            None => std::env::var(&self.selector_var).ok(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            selector_var: SELECTOR_VAR.to_string(),
            selector: None,
            threshold: None,
            layout: Layout::default(),
            sink: SinkKind::default(),
            color: ColorMode::default(),
            regex_size_limit: DEFAULT_SIZE_LIMIT,
        }
    }
}

fn parse_width(var: &'static str, value: &str) -> Result<usize, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidWidth {
        var,
        value: value.to_string(),
    })
}
