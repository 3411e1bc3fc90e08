//! Response records

use serde::{Deserialize, Serialize};

/// Text shown for a participant whose request failed after retries
pub const FAILED_RESPONSE_TEXT: &str = "Failed to load response. Please try again.";

/// A cited source attached to a response
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Source {
    pub title: String,
    pub url: String,
}

impl Source {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

/// Lifecycle of a single record: `Pending -> Fulfilled | Failed`, both terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatus {
    Pending,
    Fulfilled,
    Failed,
}

/// One participant's response for one round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseRecord {
    pub text: String,
    #[serde(default)]
    pub sources: Vec<Source>,
    pub status: RecordStatus,
    /// Underlying error for failed records
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResponseRecord {
    /// Placeholder shown while the request is in flight
    pub fn pending(placeholder: impl Into<String>) -> Self {
        Self {
            text: placeholder.into(),
            sources: Vec::new(),
            status: RecordStatus::Pending,
            error: None,
        }
    }

    pub fn fulfilled(text: impl Into<String>, sources: Vec<Source>) -> Self {
        Self {
            text: text.into(),
            sources,
            status: RecordStatus::Fulfilled,
            error: None,
        }
    }

    /// Participant-local failure with the standard placeholder text
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            text: FAILED_RESPONSE_TEXT.to_string(),
            sources: Vec::new(),
            status: RecordStatus::Failed,
            error: Some(error.into()),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == RecordStatus::Pending
    }

    pub fn is_fulfilled(&self) -> bool {
        self.status == RecordStatus::Fulfilled
    }

    pub fn is_failed(&self) -> bool {
        self.status == RecordStatus::Failed
    }
}
