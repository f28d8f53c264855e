//! Output Formatting
//!
//! Utilities for formatting CLI output in different formats.

use std::str::FromStr;

use serde::Serialize;

use crate::cli::{CliError, CliResult};

/// Output format of the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(CliError::invalid_input(format!(
                "Unsupported format: {s}. Supported formats: text, json"
            ))),
        }
    }
}

/// Render `data` as pretty JSON
pub fn to_json<T>(data: &T) -> CliResult<String>
where
    T: Serialize,
{
    Ok(serde_json::to_string_pretty(data)?)
}

/// Format success message
pub fn success_message(message: &str) -> String {
    format!("✓ {message}")
}

/// Format error message
pub fn error_message(message: &str) -> String {
    format!("✗ {message}")
}

/// Format warning message
pub fn warning_message(message: &str) -> String {
    format!("⚠ {message}")
}
