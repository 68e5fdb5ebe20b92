//! Call-site metadata and the prefix built from it.
//!
//! Every emitted message starts with `[<file name>:<line>] <function> – `.
//! The [`callsite!`](crate::callsite!) macro fills a [`CallSite`] from the
//! location it is expanded at.

use std::fmt::Write as _;
use std::path::is_separator;

/// Where a log call was made
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite<'a> {
    /// Name of the calling function
    pub function: &'a str,
    /// Source path of the calling file (only the last component is printed)
    pub file: &'a str,
    /// Line of the call
    pub line: u32,
}

impl<'a> CallSite<'a> {
    /// Create a call site from explicit values
    pub const fn new(function: &'a str, file: &'a str, line: u32) -> Self {
        Self {
            function,
            file,
            line,
        }
    }

    /// Last path component of `file`
    pub fn file_name(&self) -> &'a str {
        file_name(self.file)
    }

    /// The `[<file name>:<line>] <function> – ` prefix
    pub fn prefix(&self) -> String {
        let mut prefix = String::new();
        self.write_prefix(&mut prefix);
        prefix
    }

    /// Prefix followed by `message`
    pub fn format_message(&self, message: &str) -> String {
        let capacity = self.file.len() + self.function.len() + message.len() + 16;
        let mut line = String::with_capacity(capacity);
        self.write_prefix(&mut line);
        line.push_str(message);
        line
    }

    fn write_prefix(&self, out: &mut String) {
        // Writing into a String cannot fail
        let _ = write!(out, "[{}:{}] {} – ", self.file_name(), self.line, self.function);
    }
}

/// Last non-empty component of a path, or `""` when there is none
///
/// Directory components and trailing separators are discarded, so
/// `"/a/b/c/MyFile.ext"` yields `"MyFile.ext"`.
pub fn file_name(path: &str) -> &str {
    path.rsplit(is_separator)
        .find(|segment| !segment.is_empty())
        .unwrap_or("")
}

/// Reduce the type name of an item nested in a function to that function's name
///
/// Used by [`function_name!`](crate::function_name!). Closure and async
/// block segments are skipped so the name of the enclosing `fn` is returned.
#[doc(hidden)]
pub fn function_from_type_name(type_name: &'static str) -> &'static str {
    let mut path = type_name.strip_suffix("::__callsite_marker").unwrap_or(type_name);
    while let Some(outer) = path.strip_suffix("::{{closure}}") {
        path = outer;
    }
    path.rsplit("::").next().unwrap_or(path)
}

/// Name of the function this macro is expanded in
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __callsite_marker() {}
        $crate::callsite::function_from_type_name(::std::any::type_name_of_val(&__callsite_marker))
    }};
}

/// [`CallSite`] for the location this macro is expanded at
#[macro_export]
macro_rules! callsite {
    () => {
        $crate::CallSite::new($crate::function_name!(), ::std::file!(), ::std::line!())
    };
}
