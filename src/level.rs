//! Severity tags used to pick a sink method.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a single emission
///
/// There is no ordering between levels; a level only selects which sink
/// method receives the message.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Informational message
    Info,
    /// Something unexpected that did not stop the caller
    Warning,
    /// Developer diagnostics
    Debug,
    /// A failure reported by the caller
    Error,
}

impl Level {
    /// All levels, in the order the facade exposes them
    pub const ALL: [Level; 4] = [Level::Info, Level::Warning, Level::Debug, Level::Error];

    /// Lowercase name of the level
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "info",
            Level::Warning => "warning",
            Level::Debug => "debug",
            Level::Error => "error",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Level> for log::Level {
    fn from(level: Level) -> Self {
        match level {
            Level::Info => log::Level::Info,
            Level::Warning => log::Level::Warn,
            Level::Debug => log::Level::Debug,
            Level::Error => log::Level::Error,
        }
    }
}
