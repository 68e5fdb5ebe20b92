use log::LevelFilter;
use oslog_helper::{Config, LogCrateSink};
use std::sync::Arc;

fn check_space() {
    oslog_helper::warning!("Low disk space", category = "Storage");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize simple logging with env_logger
    env_logger::Builder::from_default_env()
        .filter_level(LevelFilter::Debug)
        .init();

    oslog_helper::init(Config::with_subsystem("com.mycompany.mytool"), Arc::new(LogCrateSink))?;

    oslog_helper::info!("Not shown, logging is still off");

    oslog_helper::set_logging_enabled(true);
    oslog_helper::info!("App launched");
    oslog_helper::debug!("User tapped button", subsystem = "com.mycompany.mytool", category = "UI");
    check_space();
    oslog_helper::error!(format!("Failed to open {}", "settings.json"), category = "Config");

    println!("Try RUST_LOG=com.mycompany.mytool::UI=debug to see a single category");

    Ok(())
}
