//! Backend configuration from TOML (`[backend]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Where participant responses come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendMode {
    /// The HTTP chat backend
    #[default]
    Remote,
    /// Pre-written answers, no network
    Canned,
}

/// Raw backend configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBackendConfig {
    pub mode: BackendMode,
    /// Base URL of the debate backend
    pub base_url: String,
    /// Per-request HTTP timeout
    pub timeout_seconds: u64,
    /// Artificial delay for canned responses
    pub simulated_latency_ms: u64,
    /// Custom canned response table (JSON); the built-in one otherwise
    pub canned_table: Option<String>,
}

impl Default for FileBackendConfig {
    fn default() -> Self {
        Self {
            mode: BackendMode::Remote,
            base_url: "http://localhost:8000".to_string(),
            timeout_seconds: 60,
            simulated_latency_ms: 0,
            canned_table: None,
        }
    }
}

impl FileBackendConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }
}
