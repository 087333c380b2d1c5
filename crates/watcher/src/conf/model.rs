//! Model — WatchConfig and validation.

use serde::{Deserialize, Serialize};

use crate::filter::engine::MatchMode;
use crate::parser::format::DisplayFormat;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    /// The server.log to follow.
    pub log_file: String,
    /// Version reported by the monitored server; selects the record
    /// grammar. Empty means unknown.
    pub server_version: String,
    /// Language tag for level display labels.
    pub locale: String,
    /// Block delimiter line for the bracket grammar.
    pub delimiter: String,
    /// Replay the existing file content instead of starting at the end.
    pub from_start: bool,
    /// How long to wait before re-checking the file for appended data.
    pub poll_interval_ms: u64,
    pub display: DisplayFormat,
    /// Optional regex applied to display units before the sink.
    pub filter_pattern: Option<String>,
    pub filter_mode: MatchMode,
    pub filter_case_sensitive: bool,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            log_file: "/opt/payara/glassfish/domains/domain1/logs/server.log".to_string(),
            server_version: "".to_string(),
            locale: "en".to_string(),
            delimiter: "".to_string(),
            from_start: false,
            poll_interval_ms: 500,
            display: DisplayFormat::Compact,
            filter_pattern: None,
            filter_mode: MatchMode::Include,
            filter_case_sensitive: false,
        }
    }
}

impl WatchConfig {
    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.log_file.is_empty() {
            return Err("log_file must not be empty".to_string());
        }
        if self.poll_interval_ms == 0 {
            return Err("poll_interval_ms must be > 0".to_string());
        }
        if let Some(pattern) = &self.filter_pattern {
            if pattern.is_empty() {
                return Err("filter_pattern must not be empty when set".to_string());
            }
        }
        Ok(())
    }
}
