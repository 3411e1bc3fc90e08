//! Output format value object

use serde::{Deserialize, Serialize};

/// How a finished debate is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Every round plus the paper, when one was generated (default)
    #[default]
    Full,
    /// Only the per-participant transcript
    Transcript,
    /// Only the research paper
    Paper,
    /// Session and paper as JSON
    Json,
}
