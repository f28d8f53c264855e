//! Logging macros
//!
//! Every macro captures its [`CallSite`](crate::CallSite) with
//! [`call_site!`](crate::call_site) and goes through the global logger, or
//! through an explicit one given as `logger: <expr>,`. With the `enabled`
//! feature off they expand to a branch on a `false` constant.

/// Log within an explicit severity
///
/// The level may be a [`Severity`](crate::Severity) or an `i32` rank.
///
/// # Examples
/// ```
/// use dbglevel::Severity;
///
/// dbglevel::level!(Severity::Warning, "Something {} happened", "wrong");
/// dbglevel::level!(2, "Oh damn");
/// ```
#[macro_export]
macro_rules! level {
    (logger: $logger:expr, $level:expr, $($arg:tt)+) => {
        if $crate::ENABLED {
            ($logger).log(
                ::std::convert::Into::<$crate::Severity>::into($level),
                &$crate::call_site!(),
                ::std::format_args!($($arg)+),
            );
        }
    };
    ($level:expr, $($arg:tt)+) => {
        $crate::level!(logger: $crate::logger(), $level, $($arg)+)
    };
}

/// Log at fatal level
#[macro_export]
macro_rules! fatal {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::level!(logger: $logger, $crate::Severity::Fatal, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::level!($crate::Severity::Fatal, $($arg)+)
    };
}

/// Log at error level
#[macro_export]
macro_rules! error {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::level!(logger: $logger, $crate::Severity::Error, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::level!($crate::Severity::Error, $($arg)+)
    };
}

/// Log at warning level
#[macro_export]
macro_rules! warning {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::level!(logger: $logger, $crate::Severity::Warning, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::level!($crate::Severity::Warning, $($arg)+)
    };
}

/// Log at info level
#[macro_export]
macro_rules! info {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::level!(logger: $logger, $crate::Severity::Info, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::level!($crate::Severity::Info, $($arg)+)
    };
}

/// Log at debug level
#[macro_export]
macro_rules! debug {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::level!(logger: $logger, $crate::Severity::Debug, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::level!($crate::Severity::Debug, $($arg)+)
    };
}

/// Log at trace level
#[macro_export]
macro_rules! trace {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::level!(logger: $logger, $crate::Severity::Trace, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::level!($crate::Severity::Trace, $($arg)+)
    };
}

/// Log an unleveled line
///
/// Shown whenever logging is configured at all, whatever the site; the badge
/// column is left blank.
///
/// # Examples
/// ```
/// dbglevel::debug_out!("Hello {} !", "world");
/// ```
#[macro_export]
macro_rules! debug_out {
    (logger: $logger:expr, $($arg:tt)+) => {
        if $crate::ENABLED {
            ($logger).log_unleveled(&$crate::call_site!(), ::std::format_args!($($arg)+));
        }
    };
    ($($arg:tt)+) => {
        $crate::debug_out!(logger: $crate::logger(), $($arg)+)
    };
}

/// Start a [`LineWriter`](crate::LineWriter) at the given level
///
/// # Examples
/// ```
/// use dbglevel::Severity;
///
/// dbglevel::log_line!(Severity::Error).push("Hello ").push(3);
/// ```
#[macro_export]
macro_rules! log_line {
    (logger: $logger:expr, $level:expr) => {
        if $crate::ENABLED {
            ($logger).line(
                ::std::convert::Into::<$crate::Severity>::into($level),
                $crate::call_site!(),
            )
        } else {
            $crate::LineWriter::disabled(
                ::std::convert::Into::<$crate::Severity>::into($level),
                $crate::call_site!(),
            )
        }
    };
    ($level:expr) => {
        $crate::log_line!(logger: $crate::logger(), $level)
    };
}

#[cfg(test)]
mod tests {
    use crate::config::{ColorMode, Config};
    use crate::render::Layout;
    use crate::sink::{CapturedOutput, Sink};
    use crate::{Logger, Severity};

    fn logger(selector: &str) -> (Logger, CapturedOutput) {
        let (sink, captured) = Sink::capture();
        let config = Config::new()
            .with_selector(selector)
            .with_color(ColorMode::Never)
            .with_layout(Layout::new(0, 0, 0));
        (Logger::with_sink(config, sink), captured)
    }

    fn wonderful(logger: &Logger) {
        crate::debug!(logger: logger, "Something happened");
    }

    fn marvelous(logger: &Logger) {
        crate::warning!(logger: logger, "Something {} happened", "wrong");
    }

    #[test]
    fn test_function_selector() {
        let (logger, captured) = logger("wonderful");
        wonderful(&logger);
        marvelous(&logger);
        let lines = captured.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with(" DEBUG  "));
        assert!(lines[0].contains(" wonderful "));
        assert!(lines[0].ends_with("Something happened"));
    }

    #[test]
    fn test_file_selector() {
        let (logger, captured) = logger("3:*macros.rs");
        wonderful(&logger);
        marvelous(&logger);
        let lines = captured.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("Something wrong happened"));
    }

    #[test]
    fn test_every_level_macro() {
        let (logger, captured) = logger("*");
        crate::fatal!(logger: &logger, "f");
        crate::error!(logger: &logger, "e");
        crate::warning!(logger: &logger, "w");
        crate::info!(logger: &logger, "i");
        crate::debug!(logger: &logger, "d");
        crate::trace!(logger: &logger, "t");
        crate::level!(logger: &logger, 2, "rank");
        crate::level!(logger: &logger, Severity::None, "never");
        let tags: Vec<String> = captured
            .lines()
            .iter()
            .map(|line| line.split_whitespace().next().unwrap_or_default().to_string())
            .collect();
        assert_eq!(tags, vec!["FATAL", "ERROR", "WARN", "INFO", "DEBUG", "TRACE", "ERROR"]);
    }

    #[test]
    fn test_debug_out_and_log_line() {
        let (logger, captured) = logger("1:elsewhere");
        crate::debug_out!(logger: &logger, "Hello {} !", "world");
        crate::log_line!(logger: &logger, Severity::Fatal).push("filtered");
        let lines = captured.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("        src/macros.rs test_debug_out_and_log_line "));
        assert!(lines[0].ends_with(" Hello world !"));
    }
}
