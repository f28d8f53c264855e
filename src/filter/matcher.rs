//! Selector Matcher
//!
//! Decides whether a call at a given level from a given site may emit. The
//! candidate `"<rank>:<file>"` is tried first, then `"<rank>:<function>"`,
//! so a single term can name either a source file or a routine.

use std::fmt::Write as _;

use crate::filter::{CompiledSelector, Severity};
use crate::site::CallSite;

impl CompiledSelector {
    /// Whether a call at `level` from `file`/`function` is allowed
    ///
    /// Empty file or function names never match.
    ///
    /// # Examples
    /// ```
    /// use dbglevel::filter::CompiledSelector;
    /// use dbglevel::Severity;
    ///
    /// let selector = CompiledSelector::compile("2:foo.c").unwrap().unwrap();
    /// assert!(selector.allows(Severity::Error, "foo.c", "main"));
    /// assert!(!selector.allows(Severity::Info, "foo.c", "main"));
    /// assert!(!selector.allows(Severity::Error, "bar.c", "main"));
    /// ```
    pub fn allows(&self, level: Severity, file: &str, function: &str) -> bool {
        if !level.is_selectable() {
            return false;
        }
        let mut candidate = String::with_capacity(4 + file.len().max(function.len()));
        [file, function]
            .into_iter()
            .filter(|key| !key.is_empty())
            .any(|key| {
                candidate.clear();
                let _ = write!(candidate, "{}:{key}", level.rank());
                self.regex.is_match(&candidate)
            })
    }

    /// Same as [`CompiledSelector::allows`] for a [`CallSite`]
    #[inline]
    pub fn allows_site(&self, level: Severity, site: &CallSite) -> bool {
        self.allows(level, site.file, site.function)
    }
}

/// The filter a logger evaluates for every call
#[derive(Debug, Clone)]
pub enum ActiveFilter {
    /// Site-aware selector compiled from `DEBUG`
    Selector(CompiledSelector),
    /// Fixed threshold, every site: a call passes when `1 <= level <= threshold`
    Threshold(Severity),
}

impl ActiveFilter {
    /// Whether a call at `level` from `site` is allowed
    pub fn allows(&self, level: Severity, site: &CallSite) -> bool {
        match self {
            ActiveFilter::Selector(selector) => selector.allows_site(level, site),
            ActiveFilter::Threshold(threshold) => level.is_selectable() && level <= *threshold,
        }
    }

    /// The compiled selector, if this filter uses one
    pub fn selector(&self) -> Option<&CompiledSelector> {
        match self {
            ActiveFilter::Selector(selector) => Some(selector),
            ActiveFilter::Threshold(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selector(config: &str) -> CompiledSelector {
        CompiledSelector::compile(config).unwrap().unwrap()
    }

    #[test]
    fn test_wildcard_allows_everything() {
        let selector = selector("*");
        for level in Severity::SELECTABLE {
            assert!(selector.allows(level, "src/anything.rs", "whatever"));
        }
    }

    #[test]
    fn test_level_and_file() {
        let selector = selector("2:foo.c");
        assert!(selector.allows(Severity::Error, "foo.c", "main"));
        assert!(selector.allows(Severity::Fatal, "foo.c", "main"));
        assert!(!selector.allows(Severity::Info, "foo.c", "main"));
        assert!(!selector.allows(Severity::Error, "bar.c", "main"));
    }

    #[test]
    fn test_function_name_is_second_key() {
        let selector = selector("5:wonderful");
        assert!(selector.allows(Severity::Debug, "example.c", "wonderful"));
        assert!(!selector.allows(Severity::Debug, "example.c", "marvelous"));
        assert!(!selector.allows(Severity::Trace, "example.c", "wonderful"));
    }

    #[test]
    fn test_union_of_terms() {
        let selector = selector("3:*;1:special");
        assert!(selector.allows(Severity::Warning, "any.rs", "any"));
        assert!(selector.allows(Severity::Fatal, "special", "main"));
        assert!(!selector.allows(Severity::Info, "special", "main"));
    }

    #[test]
    fn test_whole_candidate_must_match() {
        let selector = selector("2:foo.c");
        assert!(!selector.allows(Severity::Error, "src/foo.c", "main"));
        assert!(!selector.allows(Severity::Error, "foo.cc", "main"));

        let selector = self::selector("2:*foo.c");
        assert!(selector.allows(Severity::Error, "src/foo.c", "main"));
    }

    #[test]
    fn test_dot_is_literal() {
        let selector = selector("a.c");
        assert!(selector.allows(Severity::Trace, "a.c", ""));
        assert!(!selector.allows(Severity::Trace, "abc", ""));
    }

    #[test]
    fn test_sentinels_never_pass() {
        let selector = selector("*");
        assert!(!selector.allows(Severity::None, "foo.c", "main"));
        assert!(!selector.allows(Severity::Undefined, "foo.c", "main"));
    }

    #[test]
    fn test_missing_identity_never_matches() {
        let selector = selector("*");
        assert!(!selector.allows(Severity::Error, "", ""));
        assert!(selector.allows(Severity::Error, "", "main"));
    }

    #[test]
    fn test_threshold_filter_ignores_site() {
        let filter = ActiveFilter::Threshold(Severity::Warning);
        let site = CallSite::new("foo.c", "main", 1);
        assert!(filter.allows(Severity::Fatal, &site));
        assert!(filter.allows(Severity::Warning, &site));
        assert!(!filter.allows(Severity::Info, &site));
        assert!(!filter.allows(Severity::None, &site));
        assert!(filter.selector().is_none());
    }
}
