//! Internal diagnostics for dbglevel
//!
//! Messages about the facility itself (bad selector terms, configuration
//! problems) go straight to standard error with a `[DBGLEVEL ...]` prefix and
//! never through the sink. Warnings and errors are always written; debug
//! messages only when the `DBGLEVEL_LOG` environment variable is set to
//! "debug" or "trace".

/// Environment variable enabling internal debug messages
pub const INTERNAL_LOG_VAR: &str = "DBGLEVEL_LOG";

/// Internal debug logging macro
/// Only outputs in debug builds, when DBGLEVEL_LOG is set to "debug" or "trace"
#[macro_export]
macro_rules! internal_debug {
    ($($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            if ::std::env::var($crate::internal_log::INTERNAL_LOG_VAR)
                .map(|s| s == "debug" || s == "trace")
                .unwrap_or(false)
            {
                eprintln!("[DBGLEVEL DEBUG] {}", format!($($arg)*));
            }
        }
    };
}

/// Internal warn logging macro
/// Always outputs to stderr
#[macro_export]
macro_rules! internal_warn {
    ($($arg:tt)*) => {
        eprintln!("[DBGLEVEL WARN] {}", format!($($arg)*));
    };
}

/// Internal error logging macro
/// Always outputs to stderr
#[macro_export]
macro_rules! internal_error {
    ($($arg:tt)*) => {
        eprintln!("[DBGLEVEL ERROR] {}", format!($($arg)*));
    };
}
