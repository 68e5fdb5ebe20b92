//! Sink backed by the `log` crate
//!
//! Messages are handed to whatever `log` backend the application installed
//! (`env_logger` and friends). The record target is
//! `<subsystem>::<category>`, so backends that filter by target prefix can
//! select a whole subsystem or a single category.

use log::Record;

use crate::sink::{LogSink, Privacy, SinkHandle};

/// Text written in place of a private message
pub const REDACTED: &str = "<private>";

/// [`LogSink`] that forwards to `log::logger()`
#[derive(Debug, Clone, Copy, Default)]
pub struct LogCrateSink;

impl LogSink for LogCrateSink {
    fn open(&self, subsystem: &str, category: &str) -> Box<dyn SinkHandle + '_> {
        Box::new(LogCrateHandle {
            target: target(subsystem, category),
        })
    }
}

/// Record target used for a subsystem and category
pub fn target(subsystem: &str, category: &str) -> String {
    format!("{}::{}", subsystem, category)
}

struct LogCrateHandle {
    target: String,
}

impl LogCrateHandle {
    fn emit(&self, level: log::Level, message: &str, privacy: Privacy) {
        if level > log::max_level() {
            return;
        }

        let text = match privacy {
            Privacy::Public => message,
            Privacy::Private => REDACTED,
        };

        log::logger().log(
            &Record::builder()
                .args(format_args!("{}", text))
                .level(level)
                .target(&self.target)
                .build(),
        );
    }
}

impl SinkHandle for LogCrateHandle {
    fn info(&self, message: &str, privacy: Privacy) {
        self.emit(log::Level::Info, message, privacy);
    }

    fn warning(&self, message: &str, privacy: Privacy) {
        self.emit(log::Level::Warn, message, privacy);
    }

    fn debug(&self, message: &str, privacy: Privacy) {
        self.emit(log::Level::Debug, message, privacy);
    }

    fn error(&self, message: &str, privacy: Privacy) {
        self.emit(log::Level::Error, message, privacy);
    }
}
