//! Configuration file loading for ai-debate
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `AI_DEBATE_*`, `__` separating nested keys
//! 2. `--config <path>` specified file
//! 3. Project root: `./debate.toml` or `./.debate.toml`
//! 4. Global: `$XDG_CONFIG_HOME/ai-debate/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    BackendMode, ConfigValidationError, FileBackendConfig, FileConfig, FileDebateConfig,
    FileLoggingConfig, FileOutputConfig, FileOutputFormat, FileParticipantConfig, FileReplConfig,
    FileRetryConfig,
};
pub use loader::ConfigLoader;
