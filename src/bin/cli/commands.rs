//! Command handlers
//!
//! `compile` and `check` inspect a selector without logging anything;
//! `demo` goes through the global logger exactly like an application would.

use serde::Serialize;
use tracing::{debug, info};

use dbglevel::config::SELECTOR_VAR;
use dbglevel::{CompiledSelector, Severity};

use crate::cli::output::{self, OutputFormat};
use crate::cli::CliResult;

/// Result of `check`
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub expression: Option<String>,
    pub level: Severity,
    pub file: String,
    pub function: String,
    pub allowed: bool,
}

/// Resolve the expression to inspect: the argument, or `DEBUG`
pub fn resolve_expression(expr: Option<String>) -> Option<String> {
    expr.or_else(|| std::env::var(SELECTOR_VAR).ok())
}

/// Show how an expression compiles
pub fn compile(expr: Option<String>, format: OutputFormat) -> CliResult<String> {
    let expression = resolve_expression(expr).unwrap_or_default();
    debug!(expression = %expression, "compiling selector");

    let Some(selector) = CompiledSelector::compile(&expression)? else {
        return Ok(match format {
            OutputFormat::Json => output::to_json(&serde_json::json!({ "enabled": false }))?,
            OutputFormat::Text => output::warning_message("selector is empty, logging is disabled"),
        });
    };

    match format {
        OutputFormat::Json => output::to_json(&selector.report()),
        OutputFormat::Text => {
            let mut lines = Vec::new();
            for (index, term) in selector.terms().iter().enumerate() {
                lines.push(format!(
                    "term {index}: level <= {} ({}), site {}",
                    term.cutoff.rank(),
                    term.cutoff,
                    term.pattern
                ));
            }
            for diagnostic in selector.diagnostics() {
                lines.push(output::warning_message(&diagnostic.to_string()));
            }
            lines.push(format!("regex: {}", selector.pattern()));
            Ok(lines.join("\n"))
        }
    }
}

/// Tell whether a call would be emitted
pub fn check(
    expr: Option<String>,
    level: Severity,
    file: String,
    function: Option<String>,
    format: OutputFormat,
) -> CliResult<String> {
    let expression = resolve_expression(expr);
    let function = function.unwrap_or_default();
    let allowed = match CompiledSelector::compile(expression.as_deref().unwrap_or_default())? {
        Some(selector) => selector.allows(level, &file, &function),
        None => false,
    };
    info!(%level, file = %file, function = %function, allowed, "checked call site");

    let report = CheckReport {
        expression,
        level,
        file,
        function,
        allowed,
    };
    match format {
        OutputFormat::Json => output::to_json(&report),
        OutputFormat::Text => {
            let subject = format!("{} from {} {}", report.level, report.file, report.function);
            Ok(if report.allowed {
                output::success_message(&format!("{} is shown", subject.trim_end()))
            } else {
                output::error_message(&format!("{} is hidden", subject.trim_end()))
            })
        }
    }
}

fn wonderful() {
    dbglevel::debug!("Something happened");
}

fn marvelous() {
    dbglevel::warning!("Something {} happened", "wrong");
}

/// Emit one line per level through the global logger
///
/// The logger is installed from the environment first, so malformed
/// `DEBUG_*` values are reported instead of silently replaced.
pub fn demo() -> CliResult<()> {
    dbglevel::init_from_env()?;
    dbglevel::debug_out!("Hello {} !", "world");
    dbglevel::level!(Severity::Error, "Oh damn");
    wonderful();
    marvelous();
    for level in Severity::SELECTABLE {
        dbglevel::level!(level, "level {} ({})", level.rank(), level);
    }
    dbglevel::log_line!(Severity::Error).push("Hello ").push(3);
    Ok(())
}
