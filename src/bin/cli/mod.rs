//! CLI Module
//!
//! Command-line interface implementation for dbglevel.

pub mod commands;
pub mod output;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Selector error: {0}")]
    Filter(#[from] dbglevel::FilterError),

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
}

impl CliError {
    /// Create an invalid input error
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}
