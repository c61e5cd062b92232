//! Configuration management

use serde::{Deserialize, Serialize};

/// Environment variable overriding [`Config::log_level`]
pub const LOG_LEVEL_ENV: &str = "CONFIGREPO_LOG";

/// Environment variable overriding [`Config::root_location`]
pub const ROOT_LOCATION_ENV: &str = "CONFIGREPO_ROOT_LOCATION";

/// Validation host configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log level
    pub log_level: String,
    /// Location handed to the top-level validation call
    pub root_location: String,
}

impl Config {
    /// Default configuration with overrides read from the process environment
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(level) = lookup(LOG_LEVEL_ENV).filter(|v| !v.trim().is_empty()) {
            config.log_level = level;
        }
        if let Some(root) = lookup(ROOT_LOCATION_ENV).filter(|v| !v.trim().is_empty()) {
            config.root_location = root;
        }
        config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            root_location: "config-repo".to_string(),
        }
    }
}
