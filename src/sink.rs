//! Sink traits the facade writes through.
//!
//! A [`LogSink`] hands out a [`SinkHandle`] scoped to a subsystem and a
//! category. The handle exposes one method per [`Level`].

use serde::{Deserialize, Serialize};

use crate::level::Level;

/// Disclosure annotation attached to every message handed to a sink
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Privacy {
    /// Message may be shown as is
    #[default]
    Public,
    /// Message content should be redacted by the sink
    Private,
}

/// Handle scoped to a `(subsystem, category)` pair
pub trait SinkHandle {
    /// Write an informational message
    fn info(&self, message: &str, privacy: Privacy);

    /// Write a warning
    fn warning(&self, message: &str, privacy: Privacy);

    /// Write a debug message
    fn debug(&self, message: &str, privacy: Privacy);

    /// Write an error
    fn error(&self, message: &str, privacy: Privacy);

    /// Dispatch to the method matching `level`
    fn write(&self, level: Level, message: &str, privacy: Privacy) {
        match level {
            Level::Info => self.info(message, privacy),
            Level::Warning => self.warning(message, privacy),
            Level::Debug => self.debug(message, privacy),
            Level::Error => self.error(message, privacy),
        }
    }
}

/// Backend that creates handles per `(subsystem, category)`
///
/// Handles may be cheap per-call values or cached by the implementation.
/// Delivery is best effort: a sink never reports failures back.
pub trait LogSink: Send + Sync {
    /// Open a handle for the given subsystem and category
    fn open(&self, subsystem: &str, category: &str) -> Box<dyn SinkHandle + '_>;
}
