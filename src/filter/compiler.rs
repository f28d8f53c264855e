//! Selector Compiler
//!
//! Turns a whole `DEBUG` configuration string into a single anchored
//! alternation. Every term becomes a fragment `[1-N]:<pattern>`; the
//! fragments are OR'd together and matched against candidates of the form
//! `"<rank>:<site>"`.

use regex::{Regex, RegexBuilder};
use serde::Serialize;

use crate::filter::{Diagnostic, FilterError, Result, SelectorTerm};

/// Separator between terms
pub const TERM_SEPARATOR: char = ';';

/// Default upper bound on the size of the compiled program, in bytes
pub const DEFAULT_SIZE_LIMIT: usize = 10 * (1 << 20);

/// Compiles configuration strings into [`CompiledSelector`]s
///
/// # Examples
/// ```
/// use dbglevel::filter::SelectorCompiler;
///
/// let selector = SelectorCompiler::new().compile("3:*;1:special").unwrap().unwrap();
/// assert_eq!(selector.pattern(), "^(?:[1-3]:.*|[1-1]:special)$");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SelectorCompiler {
    size_limit: usize,
}

impl SelectorCompiler {
    /// Create a compiler with the default size limit
    pub fn new() -> Self {
        Self {
            size_limit: DEFAULT_SIZE_LIMIT,
        }
    }

    /// Set the size limit of the compiled regular expression
    pub fn with_size_limit(mut self, size_limit: usize) -> Self {
        self.size_limit = size_limit;
        self
    }

    /// Compile a configuration string
    ///
    /// Returns `Ok(None)` when the configuration is empty, meaning logging is
    /// disabled. Malformed level prefixes are recorded as diagnostics on the
    /// result; only a failure to build the final expression is an error.
    pub fn compile(&self, config: &str) -> Result<Option<CompiledSelector>> {
        if config.trim().is_empty() {
            return Ok(None);
        }

        let mut terms = Vec::new();
        let mut diagnostics = Vec::new();
        for raw in config.split(TERM_SEPARATOR).map(str::trim).filter(|raw| !raw.is_empty()) {
            let (term, diagnostic) = SelectorTerm::parse(raw);
            terms.push(term);
            diagnostics.extend(diagnostic);
        }

        // Only separators, e.g. ";;"
        if terms.is_empty() {
            return Ok(None);
        }

        let pattern = build_pattern(&terms);
        let regex = RegexBuilder::new(&pattern)
            .size_limit(self.size_limit)
            .build()
            .map_err(|source| FilterError::Compile {
                pattern: pattern.clone(),
                source,
            })?;

        Ok(Some(CompiledSelector {
            source: config.to_string(),
            terms,
            diagnostics,
            regex,
        }))
    }
}

impl Default for SelectorCompiler {
    fn default() -> Self {
        Self::new()
    }
}

/// Join the term fragments into one anchored alternation
pub fn build_pattern(terms: &[SelectorTerm]) -> String {
    let fragments: Vec<String> = terms.iter().map(SelectorTerm::to_regex).collect();
    format!("^(?:{})$", fragments.join("|"))
}

/// The union of all selector terms of one configuration
#[derive(Debug, Clone)]
pub struct CompiledSelector {
    source: String,
    terms: Vec<SelectorTerm>,
    diagnostics: Vec<Diagnostic>,
    pub(crate) regex: Regex,
}

impl CompiledSelector {
    /// Compile with the default compiler
    pub fn compile(config: &str) -> Result<Option<CompiledSelector>> {
        SelectorCompiler::new().compile(config)
    }

    /// The configuration string this selector was built from
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Parsed terms, in configuration order
    pub fn terms(&self) -> &[SelectorTerm] {
        &self.terms
    }

    /// Warnings produced while parsing
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// The generated regular expression
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Summary suitable for serialisation
    pub fn report(&self) -> SelectorReport<'_> {
        SelectorReport {
            source: &self.source,
            terms: &self.terms,
            diagnostics: &self.diagnostics,
            pattern: self.pattern(),
        }
    }
}

/// Serialisable view of a [`CompiledSelector`]
#[derive(Debug, Serialize)]
pub struct SelectorReport<'a> {
    pub source: &'a str,
    pub terms: &'a [SelectorTerm],
    pub diagnostics: &'a [Diagnostic],
    pub pattern: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{Severity, SitePattern};

    #[test]
    fn test_empty_config_disables() {
        assert!(CompiledSelector::compile("").unwrap().is_none());
        assert!(CompiledSelector::compile("   ").unwrap().is_none());
        assert!(CompiledSelector::compile(";;").unwrap().is_none());
    }

    #[test]
    fn test_single_wildcard() {
        let selector = CompiledSelector::compile("*").unwrap().unwrap();
        assert_eq!(selector.pattern(), "^(?:[1-6]:.*)$");
        assert_eq!(selector.terms().len(), 1);
        assert!(selector.diagnostics().is_empty());
    }

    #[test]
    fn test_alternation_keeps_order() {
        let selector = CompiledSelector::compile("2:foo.c;bar;4:*").unwrap().unwrap();
        assert_eq!(selector.pattern(), r"^(?:[1-2]:foo\.c|[1-6]:bar|[1-4]:.*)$");
        assert_eq!(
            selector.terms()[1],
            SelectorTerm::new(Severity::Trace, SitePattern::Glob("bar".to_string()))
        );
    }

    #[test]
    fn test_empty_terms_are_skipped() {
        let selector = CompiledSelector::compile(";2:foo;;3:bar;").unwrap().unwrap();
        assert_eq!(selector.terms().len(), 2);
    }

    #[test]
    fn test_terms_are_trimmed() {
        let selector = CompiledSelector::compile("2:foo ; 3:bar").unwrap().unwrap();
        assert_eq!(selector.pattern(), "^(?:[1-2]:foo|[1-3]:bar)$");
    }

    #[test]
    fn test_invalid_digit_is_a_diagnostic() {
        let selector = CompiledSelector::compile("9:foo;2:bar").unwrap().unwrap();
        assert_eq!(selector.diagnostics().len(), 1);
        assert_eq!(selector.terms()[0].cutoff, Severity::Trace);
        assert_eq!(selector.pattern(), "^(?:[1-6]:foo|[1-2]:bar)$");
    }

    #[test]
    fn test_size_limit_failure_is_an_error() {
        let long_pattern = (0..200).map(|i| format!("site{i}*x")).collect::<Vec<_>>().join(";");
        let result = SelectorCompiler::new().with_size_limit(16).compile(&long_pattern);
        match result {
            Err(FilterError::Compile { pattern, .. }) => assert!(pattern.starts_with("^(?:")),
            other => panic!("expected compile error, got {other:?}"),
        }
    }

    #[test]
    fn test_source_is_kept() {
        let selector = CompiledSelector::compile("3:*;1:special").unwrap().unwrap();
        assert_eq!(selector.source(), "3:*;1:special");
        let report = serde_json::to_value(selector.report()).unwrap();
        assert_eq!(report["pattern"], "^(?:[1-3]:.*|[1-1]:special)$");
    }
}
