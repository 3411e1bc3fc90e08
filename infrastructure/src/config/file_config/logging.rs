//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL transcript of every debate event
    pub transcript: Option<String>,
    /// Directory for daily-rotated JSON diagnostic logs
    pub log_dir: Option<String>,
}
