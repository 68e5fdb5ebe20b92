//! Logger configuration.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Subsystem used when neither the caller nor the configuration names one
pub const FALLBACK_SUBSYSTEM: &str = "com.example.app";

/// Category used when the caller does not name one
pub const DEFAULT_CATEGORY: &str = "General";

/// Settings for a [`Logger`](crate::Logger)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Whether emissions reach the sink at all
    #[serde(default)]
    pub enabled: bool,

    /// Subsystem used when a call does not supply one
    #[serde(default = "default_subsystem")]
    pub default_subsystem: String,

    /// Category used when a call does not supply one
    #[serde(default = "default_category")]
    pub default_category: String,
}

fn default_subsystem() -> String {
    FALLBACK_SUBSYSTEM.to_string()
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enabled: false,
            default_subsystem: default_subsystem(),
            default_category: default_category(),
        }
    }
}

impl Config {
    /// Disabled configuration with the given default subsystem
    pub fn with_subsystem(subsystem: impl Into<String>) -> Self {
        Self {
            default_subsystem: subsystem.into(),
            ..Self::default()
        }
    }

    /// Builder-style toggle of `enabled`
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject empty default identifiers
    pub fn validate(&self) -> Result<()> {
        if self.default_subsystem.is_empty() {
            return Err(Error::InvalidParam(
                "default_subsystem must not be empty".to_string(),
            ));
        }
        if self.default_category.is_empty() {
            return Err(Error::InvalidParam(
                "default_category must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
