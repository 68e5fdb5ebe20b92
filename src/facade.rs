//! The leveled logging facade.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::callsite::CallSite;
use crate::config::Config;
use crate::level::Level;
use crate::logging::LogCrateSink;
use crate::sink::{LogSink, Privacy};

/// Optional per-call subsystem and category
///
/// Anything left unset falls back to the logger's defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options<'a> {
    subsystem: Option<&'a str>,
    category: Option<&'a str>,
}

impl<'a> Options<'a> {
    /// No overrides
    pub const fn new() -> Self {
        Self {
            subsystem: None,
            category: None,
        }
    }

    /// Log under `subsystem` instead of the default one
    pub const fn subsystem(mut self, subsystem: &'a str) -> Self {
        self.subsystem = Some(subsystem);
        self
    }

    /// Log under `category` instead of the default one
    pub const fn category(mut self, category: &'a str) -> Self {
        self.category = Some(category);
        self
    }
}

/// Leveled logger writing `[<file>:<line>] <function> – <message>` lines to a sink
///
/// Nothing happens while the logger is disabled: no formatting and no sink
/// access. The flag is read once per call with relaxed ordering, so a
/// toggle racing with an emission may or may not affect it.
pub struct Logger {
    enabled: AtomicBool,
    default_subsystem: String,
    default_category: String,
    sink: Arc<dyn LogSink>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(Arc::new(LogCrateSink))
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("enabled", &self.is_enabled())
            .field("default_subsystem", &self.default_subsystem)
            .field("default_category", &self.default_category)
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// Disabled logger with default settings writing to `sink`
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self::from_config(Config::default(), sink)
    }

    /// Logger configured from `config` writing to `sink`
    pub fn from_config(config: Config, sink: Arc<dyn LogSink>) -> Self {
        Self {
            enabled: AtomicBool::new(config.enabled),
            default_subsystem: config.default_subsystem,
            default_category: config.default_category,
            sink,
        }
    }

    /// Whether emissions currently reach the sink
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Turn logging on or off
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    /// Subsystem used when a call does not supply one
    pub fn default_subsystem(&self) -> &str {
        &self.default_subsystem
    }

    /// Category used when a call does not supply one
    pub fn default_category(&self) -> &str {
        &self.default_category
    }

    /// Emit `message` at `level`
    pub fn log(&self, level: Level, message: &str, options: Options<'_>, site: CallSite<'_>) {
        if !self.is_enabled() {
            return;
        }

        let subsystem = options.subsystem.unwrap_or(self.default_subsystem.as_str());
        let category = options.category.unwrap_or(self.default_category.as_str());

        let handle = self.sink.open(subsystem, category);
        handle.write(level, &site.format_message(message), Privacy::Public);
    }

    /// Emit an informational message
    pub fn info(&self, message: &str, options: Options<'_>, site: CallSite<'_>) {
        self.log(Level::Info, message, options, site);
    }

    /// Emit a warning
    pub fn warning(&self, message: &str, options: Options<'_>, site: CallSite<'_>) {
        self.log(Level::Warning, message, options, site);
    }

    /// Emit a debug message
    pub fn debug(&self, message: &str, options: Options<'_>, site: CallSite<'_>) {
        self.log(Level::Debug, message, options, site);
    }

    /// Emit an error
    pub fn error(&self, message: &str, options: Options<'_>, site: CallSite<'_>) {
        self.log(Level::Error, message, options, site);
    }
}
