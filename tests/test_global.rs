use oslog_helper::{Config, Error, LogSink, Privacy, SinkHandle};
use std::sync::{Arc, Mutex};

/// Sink that records `subsystem/category: message` lines
#[derive(Default)]
struct LineSink {
    lines: Mutex<Vec<String>>,
}

struct LineHandle<'a> {
    sink: &'a LineSink,
    scope: String,
}

impl LineHandle<'_> {
    fn push(&self, level: &str, message: &str) {
        self.sink
            .lines
            .lock()
            .unwrap()
            .push(format!("{} {}: {}", level, self.scope, message));
    }
}

impl SinkHandle for LineHandle<'_> {
    fn info(&self, message: &str, _privacy: Privacy) {
        self.push("info", message);
    }

    fn warning(&self, message: &str, _privacy: Privacy) {
        self.push("warning", message);
    }

    fn debug(&self, message: &str, _privacy: Privacy) {
        self.push("debug", message);
    }

    fn error(&self, message: &str, _privacy: Privacy) {
        self.push("error", message);
    }
}

impl LogSink for LineSink {
    fn open(&self, subsystem: &str, category: &str) -> Box<dyn SinkHandle + '_> {
        Box::new(LineHandle {
            sink: self,
            scope: format!("{}/{}", subsystem, category),
        })
    }
}

fn check_space() {
    oslog_helper::warning!("Low disk space", category = "Storage");
}

/// The global logger is process-wide, so everything runs in one test
#[test]
fn test_global_facade() {
    let sink = Arc::new(LineSink::default());
    oslog_helper::init(Config::with_subsystem("com.mycompany.mytool"), sink.clone()).unwrap();

    assert!(matches!(
        oslog_helper::init(Config::default(), sink.clone()),
        Err(Error::AlreadyInitialized)
    ));
    assert_eq!(oslog_helper::default_subsystem(), "com.mycompany.mytool");

    // Off by default
    assert!(!oslog_helper::logging_enabled());
    oslog_helper::info!("before enabling");
    assert!(sink.lines.lock().unwrap().is_empty());

    oslog_helper::set_logging_enabled(true);
    assert!(oslog_helper::logging_enabled());
    oslog_helper::info!("App launched");
    let launch_line = line!() - 1;
    check_space();
    oslog_helper::debug!("User tapped button", subsystem = "com.mycompany.ui", category = "UI");

    oslog_helper::set_logging_enabled(false);
    oslog_helper::error!("after disabling");

    let lines = sink.lines.lock().unwrap().clone();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        format!(
            "info com.mycompany.mytool/General: [test_global.rs:{}] test_global_facade – App launched",
            launch_line
        )
    );
    assert!(lines[1].starts_with("warning com.mycompany.mytool/Storage: [test_global.rs:"));
    assert!(lines[1].ends_with("] check_space – Low disk space"));
    assert!(lines[2].starts_with("debug com.mycompany.ui/UI: "));
}

#[test]
fn test_invalid_config_is_rejected_before_install() {
    let result = oslog_helper::init(Config::with_subsystem(""), Arc::new(LineSink::default()));
    assert!(matches!(result, Err(Error::InvalidParam(_))));
}
