//! Response generator port
//!
//! Produces one participant's response for one round. The networked
//! implementation is [`GetResponseUseCase`](crate::use_cases::get_response::GetResponseUseCase);
//! infrastructure provides a canned one for offline use.

use super::transport::SendError;
use async_trait::async_trait;
use debate_domain::{Participant, RoundPrompt, Source, Topic};
use thiserror::Error;

/// Prefix the chat endpoint uses when it reports a failure in the body
pub const CHAT_ERROR_PREFIX: &str = "Error processing message";

/// Errors that can occur while generating a response
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Backend request failed: {0}")]
    Backend(#[from] SendError),

    #[error("Backend returned an empty response")]
    EmptyResponse,

    #[error("Backend reported an error: {0}")]
    BackendReported(String),

    #[error("Generator unavailable: {0}")]
    Unavailable(String),
}

/// What a participant is asked to answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerspectiveRequest {
    pub topic: Topic,
    pub participant: Participant,
    pub prompt: RoundPrompt,
}

impl PerspectiveRequest {
    pub fn new(topic: Topic, participant: Participant, prompt: RoundPrompt) -> Self {
        Self {
            topic,
            participant,
            prompt,
        }
    }
}

/// A generated response with the sources it cites
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedResponse {
    pub text: String,
    pub sources: Vec<Source>,
}

impl GeneratedResponse {
    pub fn new(text: impl Into<String>, sources: Vec<Source>) -> Self {
        Self {
            text: text.into(),
            sources,
        }
    }
}

/// Generator of participant responses
#[async_trait]
pub trait ResponseGenerator: Send + Sync {
    async fn generate(
        &self,
        request: &PerspectiveRequest,
    ) -> Result<GeneratedResponse, GenerationError>;
}
