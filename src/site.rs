//! Call Sites
//!
//! The identity of a log statement: source file, enclosing function and line.
//! File and function are what selector terms match against; the line number
//! is only displayed.

use serde::Serialize;

/// Where a log statement lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CallSite {
    /// Source file, as reported by `file!()`
    pub file: &'static str,
    /// Name of the enclosing function, without its module path
    pub function: &'static str,
    /// Line number, as reported by `line!()`
    pub line: u32,
}

impl CallSite {
    /// Create a call site
    pub const fn new(file: &'static str, function: &'static str, line: u32) -> Self {
        Self { file, function, line }
    }

    /// A site with no identity; it never matches a selector
    pub const fn unknown() -> Self {
        Self::new("", "", 0)
    }
}

impl std::fmt::Display for CallSite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{} ({})", self.file, self.line, self.function)
    }
}

/// Reduce a type path produced by [`function_path!`](crate::function_path)
/// to the bare function name
///
/// Closure segments are skipped, so a call inside a closure reports the
/// function that contains it.
///
/// # Examples
/// ```
/// use dbglevel::site::short_function_name;
///
/// assert_eq!(short_function_name("app::net::connect::__f"), "connect");
/// assert_eq!(short_function_name("app::main::{{closure}}::__f"), "main");
/// ```
pub fn short_function_name(path: &'static str) -> &'static str {
    let path = path.strip_suffix("::__f").unwrap_or(path);
    path.rsplit("::")
        .find(|segment| !segment.is_empty() && !segment.starts_with("{{"))
        .unwrap_or(path)
}

/// Full type path of the enclosing function (internal helper)
#[doc(hidden)]
#[macro_export]
macro_rules! function_path {
    () => {{
        fn __f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        type_name_of(__f)
    }};
}

/// Build the [`CallSite`] of the current statement
///
/// # Examples
/// ```
/// fn connect() -> dbglevel::CallSite {
///     dbglevel::call_site!()
/// }
///
/// let site = connect();
/// assert_eq!(site.function, "connect");
/// assert!(site.file.ends_with(".rs"));
/// ```
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new(
            ::std::file!(),
            $crate::site::short_function_name($crate::function_path!()),
            ::std::line!(),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_function_name() {
        assert_eq!(short_function_name("crate::module::func::__f"), "func");
        assert_eq!(short_function_name("func::__f"), "func");
        assert_eq!(
            short_function_name("crate::Type::method::{{closure}}::{{closure}}::__f"),
            "method"
        );
        assert_eq!(short_function_name("plain"), "plain");
    }

    #[test]
    fn test_call_site_macro() {
        let site = crate::call_site!();
        assert_eq!(site.function, "test_call_site_macro");
        assert!(site.file.ends_with("site.rs"));
        assert!(site.line > 0);
    }

    #[test]
    fn test_call_site_in_closure() {
        let make = || crate::call_site!();
        assert_eq!(make().function, "test_call_site_in_closure");
    }

    #[test]
    fn test_unknown_site() {
        let site = CallSite::unknown();
        assert!(site.file.is_empty());
        assert!(site.function.is_empty());
    }
}
