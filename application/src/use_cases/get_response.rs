//! Get Response use case
//!
//! Asks the backend for one participant's response and extracts the sources
//! it cites.

use super::shared::send_with_retry;
use crate::config::RetryPolicy;
use crate::ports::response_generator::{
    CHAT_ERROR_PREFIX, GeneratedResponse, GenerationError, PerspectiveRequest, ResponseGenerator,
};
use crate::ports::transport::{BackendRequest, Transport};
use async_trait::async_trait;
use debate_domain::{PromptTemplate, extract_citations, topic_context, truncate};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Networked [`ResponseGenerator`] backed by the chat endpoint
pub struct GetResponseUseCase<T: Transport + ?Sized + 'static> {
    transport: Arc<T>,
    retry: RetryPolicy,
}

impl<T: Transport + ?Sized + 'static> GetResponseUseCase<T> {
    pub fn new(transport: Arc<T>) -> Self {
        Self {
            transport,
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Build the chat request for a participant's turn
    pub fn build_request(request: &PerspectiveRequest) -> BackendRequest {
        let topic = request.topic.as_str();
        BackendRequest::Chat {
            system_message: PromptTemplate::debater_system(
                &request.participant,
                topic,
                &topic_context(topic),
            ),
            user_message: PromptTemplate::user_prompt(topic, &request.prompt),
        }
    }

    /// Execute the use case
    pub async fn execute(
        &self,
        request: &PerspectiveRequest,
    ) -> Result<GeneratedResponse, GenerationError> {
        debug!(
            participant = %request.participant,
            prompt = ?request.prompt,
            "Requesting participant response"
        );

        let chat = Self::build_request(request);
        let body = send_with_retry(self.transport.as_ref(), &chat, &self.retry).await?;

        let text = body.trim();
        if text.is_empty() {
            return Err(GenerationError::EmptyResponse);
        }
        if let Some(reason) = text.strip_prefix(CHAT_ERROR_PREFIX) {
            let reason = reason.trim_start_matches(':').trim();
            warn!("{} backend reported: {}", request.participant, reason);
            return Err(GenerationError::BackendReported(reason.to_string()));
        }

        debug!("{} replied: {}", request.participant, truncate(text, 120));
        let sources = extract_citations(text);
        info!(
            "{} responded ({} chars, {} sources)",
            request.participant,
            text.len(),
            sources.len()
        );
        Ok(GeneratedResponse::new(text, sources))
    }
}

#[async_trait]
impl<T: Transport + ?Sized + 'static> ResponseGenerator for GetResponseUseCase<T> {
    async fn generate(
        &self,
        request: &PerspectiveRequest,
    ) -> Result<GeneratedResponse, GenerationError> {
        self.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::transport::TransportError;
    use crate::use_cases::shared::test_support::ScriptedTransport;
    use debate_domain::{Participant, RoundPrompt, Source, Stance, Topic};

    fn request(prompt: RoundPrompt) -> PerspectiveRequest {
        PerspectiveRequest::new(
            Topic::try_new("Is AI a threat to humanity?").unwrap(),
            Participant::new(1, "Perspective A", Stance::For, "GPT-4"),
            prompt,
        )
    }

    #[tokio::test]
    async fn test_response_text_and_sources() {
        let transport = Arc::new(ScriptedTransport::always(Ok(
            "  AI could transform work [WEF report](https://example.com/wef).  ".into(),
        )));
        let use_case = GetResponseUseCase::new(Arc::clone(&transport));

        let response = use_case.execute(&request(RoundPrompt::Round(1))).await.unwrap();

        assert_eq!(
            response.text,
            "AI could transform work [WEF report](https://example.com/wef)."
        );
        assert_eq!(
            response.sources,
            vec![Source::new("WEF report", "https://example.com/wef")]
        );
    }

    #[tokio::test]
    async fn test_chat_request_carries_participant_and_context() {
        let transport = Arc::new(ScriptedTransport::always(Ok("ok".into())));
        let use_case = GetResponseUseCase::new(Arc::clone(&transport));

        use_case
            .execute(&request(RoundPrompt::FollowUp("What about jobs?".into())))
            .await
            .unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].endpoint(), "/api/routes/chat/");
        match &requests[0] {
            BackendRequest::Chat {
                system_message,
                user_message,
            } => {
                assert!(system_message.contains("Perspective A"));
                assert!(system_message.contains("existential risks"));
                assert!(user_message.contains("What about jobs?"));
            }
            other => panic!("unexpected request: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_body_is_an_error() {
        let transport = Arc::new(ScriptedTransport::always(Ok("   ".into())));
        let use_case = GetResponseUseCase::new(transport);
        let err = use_case.execute(&request(RoundPrompt::Round(1))).await;
        assert_eq!(err.unwrap_err(), GenerationError::EmptyResponse);
    }

    #[tokio::test]
    async fn test_in_band_error_body_is_an_error() {
        let transport = Arc::new(ScriptedTransport::always(Ok(
            "Error processing message: model overloaded".into(),
        )));
        let use_case = GetResponseUseCase::new(Arc::clone(&transport));
        let err = use_case.execute(&request(RoundPrompt::Round(1))).await;
        assert_eq!(
            err.unwrap_err(),
            GenerationError::BackendReported("model overloaded".into())
        );
        // not retried
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test]
    async fn test_backend_failure_is_wrapped() {
        let transport = Arc::new(ScriptedTransport::always(Err(TransportError::Status {
            status: 502,
            detail: "Bad Gateway".into(),
        })));
        let use_case = GetResponseUseCase::new(Arc::clone(&transport))
            .with_retry_policy(RetryPolicy::none());

        let err = use_case
            .execute(&request(RoundPrompt::Round(2)))
            .await
            .unwrap_err();

        match err {
            GenerationError::Backend(send) => {
                assert_eq!(send.attempts, 1);
                assert_eq!(
                    send.source,
                    TransportError::Status {
                        status: 502,
                        detail: "Bad Gateway".into()
                    }
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(transport.call_count(), 1);
    }
}
