//! `dbglevel` - Environment-Selected Debug Logging
//!
//! A leveled debug-logging facility whose output is chosen at run time by a
//! small pattern language in the `DEBUG` environment variable, and which
//! compiles away entirely when the `enabled` feature is off.
//!
//! ## Features
//!
//! - **Opt-in**: nothing is printed unless `DEBUG` is set
//! - **Site filtering**: select calls by source file or function name
//! - **Leveled**: fatal, error, warning, info, debug, trace
//! - **Compiled once**: the selector becomes a single regular expression
//! - **Zero cost when disabled**: every macro is behind a `const` flag
//!
//! ## Quick Start
//!
//! ```rust
//! use dbglevel::Severity;
//!
//! fn wonderful() {
//!     dbglevel::debug!("Something happened");
//! }
//!
//! fn marvelous() {
//!     dbglevel::warning!("Something {} happened", "wrong");
//! }
//!
//! dbglevel::debug_out!("Hello {} !", "world");
//! dbglevel::level!(Severity::Error, "Oh damn");
//! wonderful();
//! marvelous();
//! dbglevel::log_line!(Severity::Error).push("Hello ").push(3);
//! ```
//!
//! ## Selector language
//!
//! `DEBUG` holds `;`-separated terms, all OR'd together:
//!
//! - `*`: everything
//! - `3:*`: warning and more severe, everywhere
//! - `2:src/net/*.rs`: error and fatal from matching files
//! - `wonderful`: any level from the function `wonderful`
//! - `3:*;1:special`: the union of both terms
//!
//! A term matches either the call's file path or its function name. In
//! patterns `*` matches any sequence; everything else is literal.
//!
//! ## Architecture
//!
//! - **`Severity`**: the ordered level scale and its display styles
//! - **`SelectorCompiler`**: parses `DEBUG` into a `CompiledSelector`
//! - **`CompiledSelector::allows`**: the per-call yes/no decision
//! - **`Formatter`**: renders the badge, padded location columns and message
//! - **`Sink`**: stdout, stderr or a custom writer, one locked write per line
//! - **`Logger`**: owns all of the above and caches the compiled selector

pub mod config;
pub mod filter;
pub mod internal_log;
pub mod logger;
pub mod macros;
pub mod render;
pub mod sink;
pub mod site;

pub use config::{ColorMode, Config, ConfigError};
pub use filter::{
    ActiveFilter, CompiledSelector, Diagnostic, FilterError, Result, SelectorCompiler,
    SelectorTerm, Severity, SitePattern,
};
pub use logger::{init, init_from_env, logger, LineWriter, Logger};
pub use render::{Formatter, Layout, Style};
pub use sink::{CapturedOutput, Sink, SinkKind};
pub use site::CallSite;

/// Whether logging is compiled in (the `enabled` feature)
pub const ENABLED: bool = cfg!(feature = "enabled");

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get the version of the `dbglevel` library
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
