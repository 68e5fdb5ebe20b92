use log::LevelFilter;
use oslog_helper::{Config, LogCrateSink, LogSink, Logger, Privacy};
use std::sync::Arc;

/// Test that facade output reaches an installed `log` backend
#[test]
fn test_log_crate_sink_forwards_records() {
    // Setup a simple logger that writes to memory
    assert!(test_logger::setup(LevelFilter::Debug));

    let logger = Logger::from_config(Config::default().enabled(true), Arc::new(LogCrateSink));
    oslog_helper::warning!(to = &logger, "Low disk space", category = "Storage");
    oslog_helper::debug!(to = &logger, "User tapped button", subsystem = "com.mycompany.mytool", category = "UI");

    let logs = test_logger::logs();
    assert!(logs.contains(
        "WARN com.example.app::Storage - [test_logging.rs:12] test_log_crate_sink_forwards_records – Low disk space"
    ));
    assert!(logs.contains(
        "DEBUG com.mycompany.mytool::UI - [test_logging.rs:13] test_log_crate_sink_forwards_records – User tapped button"
    ));
}

/// Test that nothing reaches the backend while the facade is disabled
#[test]
fn test_disabled_facade_writes_nothing() {
    assert!(test_logger::setup(LevelFilter::Debug));

    let logger = Logger::from_config(Config::with_subsystem("com.disabled.test"), Arc::new(LogCrateSink));
    oslog_helper::error!(to = &logger, "should never appear");

    assert!(!test_logger::logs().contains("should never appear"));
}

/// Test that private messages are redacted by the log sink
#[test]
fn test_private_messages_are_redacted() {
    assert!(test_logger::setup(LevelFilter::Debug));

    let sink = LogCrateSink;
    sink.open("com.redaction.test", "Secrets")
        .info("hunter2 password", Privacy::Private);

    let logs = test_logger::logs();
    assert!(logs.contains("INFO com.redaction.test::Secrets - <private>"));
    assert!(!logs.contains("hunter2"));
}

// Simple logger implementation for testing
mod test_logger {
    use log::{Level, LevelFilter, Metadata, Record};
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, Ordering};

    static LOGGER: TestLogger = TestLogger;
    static INITIALIZED: AtomicBool = AtomicBool::new(false);
    static SETUP: Mutex<()> = Mutex::new(());
    static LOGS: Mutex<String> = Mutex::new(String::new());

    struct TestLogger;

    impl log::Log for TestLogger {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= Level::Debug
        }

        fn log(&self, record: &Record) {
            if self.enabled(record.metadata()) {
                let mut log_buffer = LOGS.lock().unwrap();
                let msg = format!("{} {} - {}\n", record.level(), record.target(), record.args());
                log_buffer.push_str(&msg);
            }
        }

        fn flush(&self) {}
    }

    pub fn setup(level: LevelFilter) -> bool {
        let _guard = SETUP.lock().unwrap();
        if INITIALIZED.load(Ordering::Relaxed) {
            return true;
        }

        if log::set_logger(&LOGGER)
            .map(|()| log::set_max_level(level))
            .is_err()
        {
            return false;
        }

        INITIALIZED.store(true, Ordering::Relaxed);
        true
    }

    pub fn logs() -> String {
        LOGS.lock().unwrap().clone()
    }
}
