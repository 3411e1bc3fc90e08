//! Infrastructure layer for ai-debate
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod backend;
pub mod canned;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use backend::HttpTransport;
pub use canned::{CannedResponseGenerator, CannedTable, CannedTableError};
pub use config::{
    BackendMode, ConfigLoader, ConfigValidationError, FileBackendConfig, FileConfig,
    FileDebateConfig, FileLoggingConfig, FileOutputConfig, FileOutputFormat, FileReplConfig,
    FileRetryConfig,
};
pub use logging::JsonlConversationLogger;
