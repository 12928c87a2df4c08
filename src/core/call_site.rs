//! Source location of a logging call

use std::panic::Location;

/// Where a log record was produced.
///
/// Built at the call boundary: the logging macros fill all three fields via
/// [`call_site!`](crate::call_site), while method-style calls go through
/// `#[track_caller]` and only know the file and line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub file: &'static str,
    pub function: &'static str,
    pub line: u32,
}

impl CallSite {
    /// Placeholder used when the enclosing function cannot be determined
    pub const UNKNOWN_FUNCTION: &'static str = "?";

    pub const fn new(file: &'static str, function: &'static str, line: u32) -> Self {
        Self {
            file,
            function,
            line,
        }
    }

    /// Location of the code that called the current `#[track_caller]` function
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self::new(location.file(), Self::UNKNOWN_FUNCTION, location.line())
    }

    /// File name without its directories
    pub fn file_name(&self) -> &'static str {
        self.file
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(self.file)
    }
}

/// Reduce a `type_name` of a nested `fn f() {}` to the enclosing function name.
#[doc(hidden)]
pub fn __enclosing_function(type_name: &'static str) -> &'static str {
    let mut path = type_name.strip_suffix("::f").unwrap_or(type_name);
    while let Some(stripped) = path.strip_suffix("::{{closure}}") {
        path = stripped;
    }
    match path.rfind("::") {
        Some(pos) => &path[pos + 2..],
        None => path,
    }
}
