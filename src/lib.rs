//! Leveled logging helpers with subsystem, category and call-site prefixes.
//!
//! Each message is prefixed with `[<file>:<line>] <function> – ` and written
//! to a [`LogSink`] handle scoped to a subsystem and a category. Logging is
//! off until it is switched on.
//!
//! ```
//! oslog_helper::set_logging_enabled(true);
//!
//! oslog_helper::info!("App launched");
//! oslog_helper::debug!("User tapped button", subsystem = "com.mycompany.mytool", category = "UI");
//! oslog_helper::warning!("Low disk space", category = "Storage");
//! ```

use std::error::Error as StdError;
use std::fmt;
use std::sync::{Arc, OnceLock};

pub mod callsite;
pub mod config;
pub mod facade;
pub mod level;
pub mod logging;
pub mod sink;

// Re-export key types
pub use callsite::CallSite;
pub use config::Config;
pub use facade::{Logger, Options};
pub use level::Level;
pub use logging::LogCrateSink;
pub use sink::{LogSink, Privacy, SinkHandle};

/// Custom error type for the library
#[derive(Debug)]
pub enum Error {
    /// JSON serialization/deserialization error
    Json(serde_json::Error),
    /// Invalid parameter error
    InvalidParam(String),
    /// The global logger was already set up
    AlreadyInitialized,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Json(err) => write!(f, "JSON error: {}", err),
            Error::InvalidParam(msg) => write!(f, "Invalid parameter: {}", msg),
            Error::AlreadyInitialized => write!(f, "Global logger already initialized"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Json(err) => Some(err),
            Error::InvalidParam(_) => None,
            Error::AlreadyInitialized => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

/// Type alias for library results
pub type Result<T> = std::result::Result<T, Error>;

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Install the process-wide logger
///
/// Must run before anything touches [`global`]; afterwards the global
/// logger is fixed and this returns [`Error::AlreadyInitialized`].
pub fn init(config: Config, sink: Arc<dyn LogSink>) -> Result<()> {
    config.validate()?;
    GLOBAL
        .set(Logger::from_config(config, sink))
        .map_err(|_| Error::AlreadyInitialized)
}

/// The process-wide logger, created with defaults on first use
pub fn global() -> &'static Logger {
    GLOBAL.get_or_init(Logger::default)
}

/// Turn process-wide logging on or off
pub fn set_logging_enabled(enabled: bool) {
    global().set_enabled(enabled);
}

/// Whether process-wide logging is on
pub fn logging_enabled() -> bool {
    global().is_enabled()
}

/// Subsystem the global logger uses when a call does not name one
pub fn default_subsystem() -> &'static str {
    global().default_subsystem()
}

/// Log an informational message with the caller's location
///
/// Accepts the message followed by optional `subsystem = ..` and
/// `category = ..` overrides. A leading `to = <logger>` targets an explicit
/// [`Logger`] instead of the global one.
#[macro_export]
macro_rules! info {
    ($($args:tt)+) => {
        $crate::__emit!($crate::Level::Info, $($args)+)
    };
}

/// Log a warning with the caller's location
#[macro_export]
macro_rules! warning {
    ($($args:tt)+) => {
        $crate::__emit!($crate::Level::Warning, $($args)+)
    };
}

/// Log a debug message with the caller's location
#[macro_export]
macro_rules! debug {
    ($($args:tt)+) => {
        $crate::__emit!($crate::Level::Debug, $($args)+)
    };
}

/// Log an error with the caller's location
#[macro_export]
macro_rules! error {
    ($($args:tt)+) => {
        $crate::__emit!($crate::Level::Error, $($args)+)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __emit {
    ($level:expr, to = $logger:expr, $message:expr $(, $key:ident = $value:expr)* $(,)?) => {
        ($logger).log(
            $level,
            ::core::convert::AsRef::<str>::as_ref(&$message),
            $crate::Options::new()$(.$key($value))*,
            $crate::callsite!(),
        )
    };
    ($level:expr, $message:expr $(, $key:ident = $value:expr)* $(,)?) => {
        $crate::__emit!($level, to = $crate::global(), $message $(, $key = $value)*)
    };
}
