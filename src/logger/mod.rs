//! Logger Facade
//!
//! A [`Logger`] owns a [`Config`], a [`Sink`] and the filter compiled from the
//! selector. The filter is compiled at most once, on the first call that
//! needs it, and cached for the lifetime of the logger: changing the
//! environment afterwards has no effect until [`Logger::reload`] is called.
//!
//! A selector that cannot be compiled on that lazy path is fatal: the error is
//! written to standard error and the process exits with status 1.
//! [`Logger::try_new`] compiles eagerly and returns the error instead.

pub mod global;
pub mod line;

pub use global::{init, init_from_env, logger};
pub use line::LineWriter;

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::{ColorMode, Config};
use crate::filter::{ActiveFilter, Result, SelectorCompiler, Severity};
use crate::render::Formatter;
use crate::sink::Sink;
use crate::site::CallSite;

/// Exit status used when the selector cannot be compiled
pub const FATAL_EXIT_CODE: i32 = 1;

enum FilterState {
    Pending,
    Ready(Option<Arc<ActiveFilter>>),
}

/// Leveled, site-filtered logger
pub struct Logger {
    config: Config,
    sink: Sink,
    formatter: Formatter,
    state: RwLock<FilterState>,
}

impl Logger {
    /// Create a logger writing to the configured stream
    ///
    /// The selector is compiled lazily.
    pub fn new(config: Config) -> Self {
        let sink = Sink::from(config.sink);
        Self::with_sink(config, sink)
    }

    /// Create a logger writing to `sink` instead of the configured stream
    pub fn with_sink(config: Config, sink: Sink) -> Self {
        let color = match config.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => sink.is_terminal(),
        };
        let formatter = Formatter::new(config.layout, color);
        Self {
            config,
            sink,
            formatter,
            state: RwLock::new(FilterState::Pending),
        }
    }

    /// Create a logger and compile its selector immediately
    pub fn try_new(config: Config) -> Result<Self> {
        let logger = Self::new(config);
        logger.reload()?;
        Ok(logger)
    }

    /// Same as [`Logger::try_new`] with a custom sink
    pub fn try_with_sink(config: Config, sink: Sink) -> Result<Self> {
        let logger = Self::with_sink(config, sink);
        logger.reload()?;
        Ok(logger)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    /// The active filter, compiling it on first use
    ///
    /// `None` means logging is disabled.
    pub fn filter(&self) -> Option<Arc<ActiveFilter>> {
        if let FilterState::Ready(filter) = &*self.state.read() {
            return filter.clone();
        }

        let mut state = self.state.write();
        if let FilterState::Ready(filter) = &*state {
            return filter.clone();
        }
        let filter = match self.build_filter() {
            Ok(filter) => filter,
            Err(error) => {
                crate::internal_error!("{error}");
                std::process::exit(FATAL_EXIT_CODE);
            }
        };
        *state = FilterState::Ready(filter.clone());
        filter
    }

    /// Re-read the configuration source and recompile the filter
    ///
    /// On error the previous filter stays in place.
    pub fn reload(&self) -> Result<()> {
        let filter = self.build_filter()?;
        *self.state.write() = FilterState::Ready(filter);
        Ok(())
    }

    /// Whether any filter is configured
    pub fn is_active(&self) -> bool {
        crate::ENABLED && self.filter().is_some()
    }

    /// Whether a call at `level` from `site` would emit
    pub fn enabled(&self, level: Severity, site: &CallSite) -> bool {
        crate::ENABLED
            && self
                .filter()
                .is_some_and(|filter| filter.allows(level, site))
    }

    /// Log at `level` from `site`
    pub fn log(&self, level: Severity, site: &CallSite, message: fmt::Arguments<'_>) {
        if self.enabled(level, site) {
            self.emit(Some(level), site, message);
        }
    }

    /// Log an unleveled line, emitted whenever a filter is configured
    pub fn log_unleveled(&self, site: &CallSite, message: fmt::Arguments<'_>) {
        if self.is_active() {
            self.emit(None, site, message);
        }
    }

    /// Start a line assembled piece by piece
    ///
    /// The line is written once, by [`LineWriter::finish`] or on drop.
    pub fn line(&self, level: Severity, site: CallSite) -> LineWriter<'_> {
        let enabled = self.enabled(level, &site);
        LineWriter::new(self, level, site, enabled)
    }

    pub(crate) fn emit(
        &self,
        level: Option<Severity>,
        site: &CallSite,
        message: fmt::Arguments<'_>,
    ) {
        let line = self.formatter.render(level, site, message);
        self.sink.write_line(&line);
    }

    fn build_filter(&self) -> Result<Option<Arc<ActiveFilter>>> {
        if let Some(threshold) = self.config.threshold {
            crate::internal_debug!("fixed threshold {threshold}, selector bypassed");
            return Ok(Some(Arc::new(ActiveFilter::Threshold(threshold))));
        }

        let Some(expression) = self.config.selector_expression() else {
            return Ok(None);
        };
        let compiled = SelectorCompiler::new()
            .with_size_limit(self.config.regex_size_limit)
            .compile(&expression)?;
        let Some(selector) = compiled else {
            return Ok(None);
        };

        for diagnostic in selector.diagnostics() {
            crate::internal_warn!("{diagnostic}");
        }
        crate::internal_debug!("compiled selector {}", selector.pattern());
        tracing::debug!(
            terms = selector.terms().len(),
            pattern = selector.pattern(),
            "compiled debug selector"
        );
        Ok(Some(Arc::new(ActiveFilter::Selector(selector))))
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let compiled = matches!(&*self.state.read(), FilterState::Ready(_));
        f.debug_struct("Logger")
            .field("config", &self.config)
            .field("sink", &self.sink)
            .field("compiled", &compiled)
            .finish()
    }
}
