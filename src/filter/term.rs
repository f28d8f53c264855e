//! Selector Terms
//!
//! One `;`-separated clause of the `DEBUG` configuration. A term binds an
//! optional level prefix (`N:`) to a site pattern:
//!
//! | Term          | Cutoff   | Pattern        |
//! |---------------|----------|----------------|
//! | `*`           | trace    | any site       |
//! | `*:PATTERN`   | trace    | `PATTERN`      |
//! | `N:*`, `N:`   | `N`      | any site       |
//! | `N`           | `N`      | any site       |
//! | `N:PATTERN`   | `N`      | `PATTERN`      |
//! | `PATTERN`     | trace    | `PATTERN`      |
//!
//! In a pattern `*` matches any sequence of characters; everything else,
//! including path separators and regex metacharacters, is literal.

use serde::Serialize;

use crate::filter::Severity;

/// Pattern part of a selector term
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "glob")]
pub enum SitePattern {
    /// Matches every call site
    Any,
    /// Literal text where `*` matches any sequence
    Glob(String),
}

impl SitePattern {
    /// Build a pattern from the text after the level prefix
    pub fn new(text: &str) -> Self {
        if text.is_empty() || text == "*" {
            SitePattern::Any
        } else {
            SitePattern::Glob(text.to_string())
        }
    }

    /// Regular expression equivalent of the pattern
    pub fn to_regex(&self) -> String {
        match self {
            SitePattern::Any => ".*".to_string(),
            SitePattern::Glob(glob) => glob
                .split('*')
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join(".*"),
        }
    }
}

impl std::fmt::Display for SitePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SitePattern::Any => f.write_str("*"),
            SitePattern::Glob(glob) => f.write_str(glob),
        }
    }
}

/// Non-fatal problem found while parsing a term
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Diagnostic {
    /// The level prefix is not a digit between 1 and 6
    InvalidLevel {
        /// The raw term
        term: String,
        /// The offending prefix
        found: String,
    },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::InvalidLevel { term, found } => write!(
                f,
                "invalid level '{found}' in selector term '{term}' (expected 1-6), using {}",
                Severity::LEAST_SEVERE
            ),
        }
    }
}

/// One compiled clause of the selector
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SelectorTerm {
    /// Least severe level this term lets through
    pub cutoff: Severity,
    /// Sites this term applies to
    pub pattern: SitePattern,
}

impl SelectorTerm {
    /// Create a term from its parts
    pub fn new(cutoff: Severity, pattern: SitePattern) -> Self {
        Self { cutoff, pattern }
    }

    /// Parse one raw term
    ///
    /// Never fails: a malformed level prefix produces a [`Diagnostic`] and
    /// the term falls back to the trace cutoff.
    ///
    /// # Examples
    /// ```
    /// use dbglevel::filter::{SelectorTerm, SitePattern};
    /// use dbglevel::Severity;
    ///
    /// let (term, diagnostic) = SelectorTerm::parse("2:net/*.rs");
    /// assert_eq!(term.cutoff, Severity::Error);
    /// assert_eq!(term.pattern, SitePattern::Glob("net/*.rs".to_string()));
    /// assert!(diagnostic.is_none());
    /// ```
    pub fn parse(raw: &str) -> (SelectorTerm, Option<Diagnostic>) {
        // Multi-digit prefixes such as `07:` or `10:` are malformed levels
        if let Some((prefix, pattern)) = raw.split_once(':') {
            if prefix.len() > 1 && prefix.bytes().all(|b| b.is_ascii_digit()) {
                return Self::invalid_level(raw, prefix.to_string(), pattern);
            }
        }

        let mut chars = raw.chars();
        let first = chars.next();
        let rest = chars.as_str();

        match first {
            Some('*') if rest.is_empty() => {
                (Self::new(Severity::LEAST_SEVERE, SitePattern::Any), None)
            }
            Some(prefix) if rest.starts_with(':') => {
                let pattern = &rest[1..];
                if prefix == '*' {
                    return (Self::new(Severity::LEAST_SEVERE, SitePattern::new(pattern)), None);
                }
                match Severity::from_digit(prefix) {
                    Some(cutoff) => (Self::new(cutoff, SitePattern::new(pattern)), None),
                    None => Self::invalid_level(raw, prefix.to_string(), pattern),
                }
            }
            Some(single) if rest.is_empty() => match Severity::from_digit(single) {
                Some(cutoff) => (Self::new(cutoff, SitePattern::Any), None),
                None => (Self::new(Severity::LEAST_SEVERE, SitePattern::new(raw)), None),
            },
            _ => (Self::new(Severity::LEAST_SEVERE, SitePattern::new(raw)), None),
        }
    }

    fn invalid_level(
        raw: &str,
        found: String,
        pattern: &str,
    ) -> (SelectorTerm, Option<Diagnostic>) {
        let diagnostic = Diagnostic::InvalidLevel {
            term: raw.to_string(),
            found,
        };
        (Self::new(Severity::LEAST_SEVERE, SitePattern::new(pattern)), Some(diagnostic))
    }

    /// Regular expression fragment `[1-N]:<pattern>` for this term
    pub fn to_regex(&self) -> String {
        format!(
            "[{}-{}]:{}",
            Severity::MOST_SEVERE.rank(),
            self.cutoff.rank(),
            self.pattern.to_regex()
        )
    }
}

impl std::fmt::Display for SelectorTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.cutoff.rank(), self.pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_ok(raw: &str) -> SelectorTerm {
        let (term, diagnostic) = SelectorTerm::parse(raw);
        assert!(diagnostic.is_none(), "unexpected diagnostic for {raw}");
        term
    }

    #[test]
    fn test_lone_wildcard() {
        let term = parse_ok("*");
        assert_eq!(term.cutoff, Severity::Trace);
        assert_eq!(term.pattern, SitePattern::Any);
        assert_eq!(term.to_regex(), "[1-6]:.*");
    }

    #[test]
    fn test_level_wildcard() {
        let term = parse_ok("3:*");
        assert_eq!(term.cutoff, Severity::Warning);
        assert_eq!(term.pattern, SitePattern::Any);
        assert_eq!(term.to_regex(), "[1-3]:.*");
    }

    #[test]
    fn test_level_with_empty_pattern() {
        assert_eq!(parse_ok("4:"), parse_ok("4:*"));
    }

    #[test]
    fn test_bare_digit() {
        assert_eq!(parse_ok("2"), parse_ok("2:*"));
    }

    #[test]
    fn test_star_level_prefix() {
        let term = parse_ok("*:foo.c");
        assert_eq!(term.cutoff, Severity::Trace);
        assert_eq!(term.pattern, SitePattern::Glob("foo.c".to_string()));
    }

    #[test]
    fn test_level_pattern() {
        let term = parse_ok("2:src/net/*.rs");
        assert_eq!(term.cutoff, Severity::Error);
        assert_eq!(term.to_regex(), r"[1-2]:src/net/.*\.rs");
    }

    #[test]
    fn test_bare_pattern() {
        let term = parse_ok("wonderful");
        assert_eq!(term.cutoff, Severity::Trace);
        assert_eq!(term.pattern, SitePattern::Glob("wonderful".to_string()));
        assert_eq!(term.to_regex(), "[1-6]:wonderful");
    }

    #[test]
    fn test_digit_led_pattern_is_not_a_level() {
        let term = parse_ok("3d_engine.rs");
        assert_eq!(term.cutoff, Severity::Trace);
        assert_eq!(term.pattern, SitePattern::Glob("3d_engine.rs".to_string()));
    }

    #[test]
    fn test_invalid_level_digit() {
        let (term, diagnostic) = SelectorTerm::parse("9:foo");
        assert_eq!(term.cutoff, Severity::Trace);
        assert_eq!(term.pattern, SitePattern::Glob("foo".to_string()));
        assert_eq!(
            diagnostic,
            Some(Diagnostic::InvalidLevel {
                term: "9:foo".to_string(),
                found: "9".to_string()
            })
        );

        let (_, diagnostic) = SelectorTerm::parse("0:*");
        assert!(matches!(diagnostic, Some(Diagnostic::InvalidLevel { found, .. }) if found == "0"));
    }

    #[test]
    fn test_multi_digit_level_prefix() {
        for (raw, prefix) in [("07:foo", "07"), ("10:foo", "10"), ("66:foo", "66")] {
            let (term, diagnostic) = SelectorTerm::parse(raw);
            assert_eq!(term.cutoff, Severity::Trace);
            assert_eq!(term.pattern, SitePattern::Glob("foo".to_string()));
            assert_eq!(
                diagnostic,
                Some(Diagnostic::InvalidLevel {
                    term: raw.to_string(),
                    found: prefix.to_string()
                })
            );
        }

        let (term, diagnostic) = SelectorTerm::parse("12:");
        assert_eq!(term.pattern, SitePattern::Any);
        assert!(diagnostic.unwrap().to_string().contains("invalid level '12'"));
    }

    #[test]
    fn test_diagnostic_names_character() {
        let (_, diagnostic) = SelectorTerm::parse("x:foo");
        let message = diagnostic.unwrap().to_string();
        assert!(message.contains("'x'"));
        assert!(message.contains("x:foo"));
    }

    #[test]
    fn test_metacharacters_are_literal() {
        let term = parse_ok("a+b(c)");
        assert_eq!(term.to_regex(), r"[1-6]:a\+b\(c\)");
    }

    #[test]
    fn test_display() {
        assert_eq!(parse_ok("*").to_string(), "6:*");
        assert_eq!(parse_ok("2:foo*").to_string(), "2:foo*");
    }
}
