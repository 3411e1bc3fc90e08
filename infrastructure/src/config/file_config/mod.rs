//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod backend;
mod debate;
mod logging;
mod output;
mod repl;
mod retry;

pub use backend::{BackendMode, FileBackendConfig};
pub use debate::{FileDebateConfig, FileParticipantConfig};
pub use logging::FileLoggingConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use repl::FileReplConfig;
pub use retry::FileRetryConfig;

use debate_domain::DomainError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    #[error("backend.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("backend.base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("retry.multiplier cannot be 0")]
    InvalidMultiplier,

    #[error("debate.rounds must be at least 1")]
    InvalidRounds,

    #[error("debate.participants: {0}")]
    InvalidRoster(DomainError),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Backend selection and HTTP settings
    pub backend: FileBackendConfig,
    /// Retry policy for backend requests
    pub retry: FileRetryConfig,
    /// Rounds, stagger and roster
    pub debate: FileDebateConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Transcript and diagnostic log locations
    pub logging: FileLoggingConfig,
    /// Interactive session settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if self.backend.timeout_seconds == 0 {
            issues.push(ConfigValidationError::InvalidTimeout);
        }
        // The paper is always synthesized remotely, so the URL matters in
        // canned mode too.
        if self.backend.base_url.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyBaseUrl);
        }
        if self.retry.multiplier == 0 {
            issues.push(ConfigValidationError::InvalidMultiplier);
        }
        if self.debate.rounds == 0 {
            issues.push(ConfigValidationError::InvalidRounds);
        }
        if let Err(e) = self.debate.to_registry() {
            issues.push(ConfigValidationError::InvalidRoster(e));
        }

        issues
    }
}
