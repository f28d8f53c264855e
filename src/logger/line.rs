//! Line Writer
//!
//! Assembles one log line from several pieces, stream style, and writes it
//! exactly once: on [`LineWriter::finish`], or when the writer goes out of
//! scope. When the call is filtered out nothing is accumulated.

use std::fmt::{self, Display, Write};

use crate::filter::Severity;
use crate::logger::Logger;
use crate::site::CallSite;

/// Accumulates a message and emits it as a single line
///
/// # Examples
/// ```
/// use dbglevel::{ColorMode, Config, Logger, Severity, Sink};
///
/// let (sink, captured) = Sink::capture();
/// let logger = Logger::with_sink(Config::new().with_selector("*").with_color(ColorMode::Never), sink);
///
/// logger
///     .line(Severity::Error, dbglevel::call_site!())
///     .push("Hello ")
///     .push(3)
///     .finish();
///
/// assert!(captured.contents().ends_with("Hello 3\n"));
/// ```
pub struct LineWriter<'a> {
    logger: Option<&'a Logger>,
    level: Severity,
    site: CallSite,
    buffer: Option<String>,
}

impl<'a> LineWriter<'a> {
    pub(crate) fn new(logger: &'a Logger, level: Severity, site: CallSite, enabled: bool) -> Self {
        Self {
            logger: Some(logger),
            level,
            site,
            buffer: enabled.then(String::new),
        }
    }

    /// A writer that never emits, used when logging is compiled out
    #[doc(hidden)]
    pub fn disabled(level: Severity, site: CallSite) -> Self {
        Self {
            logger: None,
            level,
            site,
            buffer: None,
        }
    }

    /// Whether this line will be written
    pub fn is_enabled(&self) -> bool {
        self.buffer.is_some()
    }

    /// Append a value
    pub fn push<T: Display>(mut self, value: T) -> Self {
        self.append(value);
        self
    }

    /// Append a value through a mutable reference
    pub fn append<T: Display>(&mut self, value: T) -> &mut Self {
        if let Some(buffer) = self.buffer.as_mut() {
            let _ = write!(buffer, "{value}");
        }
        self
    }

    /// Write the line now
    pub fn finish(mut self) {
        self.flush();
    }

    fn flush(&mut self) {
        if let (Some(logger), Some(message)) = (self.logger, self.buffer.take()) {
            logger.emit(Some(self.level), &self.site, format_args!("{message}"));
        }
    }
}

impl Write for LineWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if let Some(buffer) = self.buffer.as_mut() {
            buffer.push_str(s);
        }
        Ok(())
    }
}

impl Drop for LineWriter<'_> {
    fn drop(&mut self) {
        self.flush();
    }
}

impl fmt::Debug for LineWriter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineWriter")
            .field("level", &self.level)
            .field("site", &self.site)
            .field("pending", &self.buffer)
            .finish()
    }
}
