//! Load — config loading from file and environment variables.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::parser::format::DisplayFormat;

use super::model::WatchConfig;

impl WatchConfig {
    /// Load configuration from file or environment variables
    /// Priority: Environment Variables > Config File > Defaults
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let config_path = std::env::var("WATCHER_CONFIG_FILE")
            .unwrap_or_else(|_| "/etc/fishtail/watcher.toml".to_string());

        let mut config = if Path::new(&config_path).exists() {
            tracing::info!("Loading configuration from: {}", config_path);
            Self::from_file(&config_path)?
        } else {
            tracing::info!("Config file not found at {}, using environment variables", config_path);
            Self::from_env()
        };

        // Environment variables override file config for critical settings
        if let Ok(log_file) = std::env::var("WATCHER_LOG_FILE") {
            config.log_file = log_file;
        }
        if let Ok(version) = std::env::var("WATCHER_SERVER_VERSION") {
            config.server_version = version;
        }
        if let Ok(locale) = std::env::var("WATCHER_LOCALE") {
            config.locale = locale;
        }

        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: WatchConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from environment variables with sensible defaults
    pub fn from_env() -> Self {
        let defaults = WatchConfig::default();
        Self {
            log_file: std::env::var("WATCHER_LOG_FILE").unwrap_or(defaults.log_file),
            server_version: std::env::var("WATCHER_SERVER_VERSION").unwrap_or(defaults.server_version),
            locale: std::env::var("WATCHER_LOCALE").unwrap_or(defaults.locale),
            delimiter: std::env::var("WATCHER_DELIMITER").unwrap_or(defaults.delimiter),
            from_start: std::env::var("WATCHER_FROM_START")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.from_start),
            poll_interval_ms: std::env::var("WATCHER_POLL_INTERVAL_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.poll_interval_ms),
            display: std::env::var("WATCHER_DISPLAY")
                .ok()
                .and_then(|s| match s.as_str() {
                    "compact" => Some(DisplayFormat::Compact),
                    "detailed" => Some(DisplayFormat::Detailed),
                    _ => None,
                })
                .unwrap_or(defaults.display),
            filter_pattern: std::env::var("WATCHER_FILTER_PATTERN").ok(),
            filter_mode: defaults.filter_mode,
            filter_case_sensitive: defaults.filter_case_sensitive,
        }
    }
}
