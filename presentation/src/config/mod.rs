//! Presentation-level configuration
//!
//! Configuration for output formatting and the interactive session.

use debate_domain::OutputFormat;
use std::path::PathBuf;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Full,
            color: true,
        }
    }
}

impl OutputConfig {
    /// Turn colored output off for the whole process when disabled
    pub fn apply_color(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }

    /// Progress would corrupt machine-readable output
    pub fn allows_progress(&self) -> bool {
        self.format != OutputFormat::Json
    }

    /// Whether the rendered output includes a synthesized paper
    pub fn needs_paper(&self) -> bool {
        self.format == OutputFormat::Paper
    }
}

/// Interactive session configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplConfig {
    /// Show progress indicators
    pub show_progress: bool,
    /// Path to history file; `~/` is expanded
    pub history_file: Option<String>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}

impl ReplConfig {
    /// Where line history is kept: the configured file, else
    /// `<data dir>/ai-debate/history.txt`
    pub fn history_path(&self) -> Option<PathBuf> {
        match &self.history_file {
            Some(path) => match path.strip_prefix("~/") {
                Some(rest) => dirs::home_dir().map(|home| home.join(rest)),
                None => Some(PathBuf::from(path)),
            },
            None => dirs::data_dir().map(|p| p.join("ai-debate").join("history.txt")),
        }
    }
}
