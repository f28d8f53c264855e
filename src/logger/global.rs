//! Global Logger
//!
//! The process-wide [`Logger`] used by the logging macros. It is either
//! installed explicitly with [`init`] or built from the environment on the
//! first macro call.

use std::sync::OnceLock;

use crate::config::Config;
use crate::filter::{FilterError, Result};
use crate::logger::Logger;

/// Global logger instance - shared by every call site
static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Install the global logger
///
/// The selector is compiled immediately, so a broken expression is returned
/// as an error instead of terminating the process later.
///
/// # Errors
/// [`FilterError::Compile`] if the selector is invalid,
/// [`FilterError::AlreadyInitialized`] if a logger is already installed
/// (including one created implicitly by an earlier macro call).
pub fn init(config: Config) -> Result<()> {
    let logger = Logger::try_new(config)?;
    GLOBAL_LOGGER
        .set(logger)
        .map_err(|_| FilterError::AlreadyInitialized)
}

/// Install the global logger configured from the `DEBUG_*` environment
///
/// Unlike the implicit logger created by the first macro call, malformed
/// variables are returned as [`FilterError::Config`] instead of being
/// replaced by defaults.
pub fn init_from_env() -> Result<()> {
    init(Config::from_env()?)
}

/// Get the global logger, creating it from the environment if needed
pub fn logger() -> &'static Logger {
    GLOBAL_LOGGER.get_or_init(|| {
        let config = Config::from_env().unwrap_or_else(|error| {
            crate::internal_warn!("{error}, using default configuration");
            Config::default()
        });
        Logger::new(config)
    })
}
