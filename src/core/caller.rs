//! Call-site capture
//!
//! Public entry points are `#[track_caller]` and resolve the location once,
//! at the boundary, then hand it down explicitly. Internal helpers never
//! inspect the stack, so adding or removing a helper layer cannot shift the
//! reported call site.

use std::fmt;
use std::panic::Location;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallerInfo {
    /// Path of the enclosing function (`crate::module::function`), when the
    /// call went through one of the logging macros.
    pub function: Option<&'static str>,
    pub file: &'static str,
    pub line: u32,
}

impl CallerInfo {
    pub const fn new(function: Option<&'static str>, file: &'static str, line: u32) -> Self {
        Self {
            function,
            file,
            line,
        }
    }

    /// Location of the nearest caller not marked `#[track_caller]`.
    #[track_caller]
    #[inline]
    pub fn here() -> Self {
        Self::from_location(Location::caller())
    }

    pub fn from_location(location: &'static Location<'static>) -> Self {
        Self::new(None, location.file(), location.line())
    }

    /// Function path if known, otherwise the source file.
    pub fn scope(&self) -> &'static str {
        self.function.unwrap_or(self.file)
    }

    /// `scope [line]`, as shown on the console.
    pub fn console_label(&self) -> String {
        format!("{} [{}]", self.scope(), self.line)
    }

    /// `scope[line]`, as written to log files.
    pub fn file_label(&self) -> String {
        format!("{}[{}]", self.scope(), self.line)
    }
}

impl fmt::Display for CallerInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.scope(), self.line)
    }
}

/// Strip the helper item name appended by [`function_path!`](crate::function_path).
#[doc(hidden)]
pub fn trim_function_path(raw: &'static str) -> &'static str {
    raw.strip_suffix("::__here").unwrap_or(raw)
}
