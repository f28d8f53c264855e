//! Level Filter Engine
//!
//! This module turns the `DEBUG` environment variable into a matcher that
//! decides, for every log call, whether it may emit. The pipeline is:
//!
//! - **`Severity`**: ordered levels, fatal (1) to trace (6)
//! - **`SelectorTerm`**: one `;`-separated clause, `[N:]PATTERN`
//! - **`SelectorCompiler`**: joins all terms into one anchored alternation
//! - **`CompiledSelector::allows`**: tests `"<rank>:<file>"` then `"<rank>:<function>"`

pub mod compiler;
pub mod matcher;
pub mod severity;
pub mod term;


pub use compiler::{build_pattern, CompiledSelector, SelectorCompiler, SelectorReport};
pub use matcher::ActiveFilter;
pub use severity::Severity;
pub use term::{Diagnostic, SelectorTerm, SitePattern};

use crate::config::ConfigError;

/// Errors that can occur while configuring the facility
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    #[error("Invalid selector expression {pattern:?}: {source}")]
    Compile {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("The global logger has already been initialized")]
    AlreadyInitialized,

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, FilterError>;
