//! Backend transport port
//!
//! Defines the interface for sending requests to the debate backend.

use async_trait::async_trait;
use debate_domain::PerspectiveInput;
use serde::Serialize;
use thiserror::Error;

/// Chat endpoint, relative to the backend base URL
pub const CHAT_ENDPOINT: &str = "/api/routes/chat/";

/// Research paper endpoint, relative to the backend base URL
pub const RESEARCH_PAPER_ENDPOINT: &str = "/api/routes/chat/research_paper";

/// Errors reported by a transport for a single attempt
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Rate limited by backend (HTTP 429)")]
    RateLimited,

    #[error("HTTP {status}: {detail}")]
    Status { status: u16, detail: String },

    #[error("Network error: {0}")]
    Network(String),

    /// A 2xx response whose body could not be decoded
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl TransportError {
    /// Rate limiting, non-2xx statuses and network failures are retried;
    /// undecodable success bodies are not.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, TransportError::InvalidResponse(_))
    }
}

/// A transport error surfaced after the retry policy gave up
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{source} (after {attempts} attempt(s))")]
pub struct SendError {
    pub attempts: u32,
    pub source: TransportError,
}

/// A request to the debate backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BackendRequest {
    /// One participant's chat turn
    Chat {
        system_message: String,
        user_message: String,
    },
    /// Synthesis of all perspectives into a paper
    ResearchPaper {
        topic: String,
        perspectives: Vec<PerspectiveInput>,
        system_message: String,
    },
}

impl BackendRequest {
    /// Endpoint path for this request
    pub fn endpoint(&self) -> &'static str {
        match self {
            BackendRequest::Chat { .. } => CHAT_ENDPOINT,
            BackendRequest::ResearchPaper { .. } => RESEARCH_PAPER_ENDPOINT,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            BackendRequest::Chat { .. } => "chat",
            BackendRequest::ResearchPaper { .. } => "research_paper",
        }
    }
}

/// Transport to the debate backend
///
/// One call is one attempt; retrying is the caller's concern. On success the
/// decoded `response` text is returned.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &BackendRequest) -> Result<String, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_classification() {
        assert!(TransportError::RateLimited.is_retryable());
        assert!(
            TransportError::Status {
                status: 503,
                detail: "busy".into()
            }
            .is_retryable()
        );
        assert!(TransportError::Network("reset".into()).is_retryable());
        assert!(!TransportError::InvalidResponse("not json".into()).is_retryable());
    }

    #[test]
    fn test_endpoints() {
        let chat = BackendRequest::Chat {
            system_message: "s".into(),
            user_message: "u".into(),
        };
        assert_eq!(chat.endpoint(), "/api/routes/chat/");

        let paper = BackendRequest::ResearchPaper {
            topic: "t".into(),
            perspectives: vec![],
            system_message: "s".into(),
        };
        assert_eq!(paper.endpoint(), "/api/routes/chat/research_paper");
    }

    #[test]
    fn test_request_bodies_serialize_flat() {
        let paper = BackendRequest::ResearchPaper {
            topic: "UBI".into(),
            perspectives: vec![PerspectiveInput::new("For", "text")],
            system_message: "s".into(),
        };
        let json = serde_json::to_value(&paper).unwrap();
        assert_eq!(json["topic"], "UBI");
        assert_eq!(json["perspectives"][0]["stance"], "For");
        assert_eq!(json["perspectives"][0]["content"], "text");
        assert_eq!(json["system_message"], "s");
    }

    #[test]
    fn test_send_error_display() {
        let err = SendError {
            attempts: 4,
            source: TransportError::RateLimited,
        };
        assert_eq!(
            err.to_string(),
            "Rate limited by backend (HTTP 429) (after 4 attempt(s))"
        );
    }
}
