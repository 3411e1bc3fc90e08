//! Generate Paper use case
//!
//! Synthesizes the debate's perspectives into a structured research paper.
//! Failures never propagate: the caller always gets a [`PaperDocument`],
//! degraded to an error abstract when synthesis is impossible.

use super::shared::send_with_retry;
use crate::config::RetryPolicy;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::progress::{DebateProgressNotifier, NoProgress};
use crate::ports::transport::{BackendRequest, Transport};
use debate_domain::{
    DebateSession, PAPER_ERROR_PREFIX, PaperDocument, PerspectiveInput, Phase, PromptTemplate,
    parse_paper_response,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

/// Use case for synthesizing a research paper
pub struct GeneratePaperUseCase<T: Transport + ?Sized + 'static> {
    transport: Arc<T>,
    retry: RetryPolicy,
    system_message: Option<String>,
    logger: Arc<dyn ConversationLogger>,
}

impl<T: Transport + ?Sized + 'static> GeneratePaperUseCase<T> {
    pub fn new(transport: Arc<T>) -> Self {
        Self {
            transport,
            retry: RetryPolicy::default(),
            system_message: None,
            logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Override the default synthesis instructions
    pub fn with_system_message(mut self, message: impl Into<String>) -> Self {
        self.system_message = Some(message.into());
        self
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, topic: &str, perspectives: Vec<PerspectiveInput>) -> PaperDocument {
        self.execute_with_progress(topic, perspectives, &NoProgress)
            .await
    }

    /// Synthesize a paper from the fulfilled responses of a session
    pub async fn execute_for_session(
        &self,
        session: &DebateSession,
        progress: &dyn DebateProgressNotifier,
    ) -> PaperDocument {
        self.execute_with_progress(
            session.topic().as_str(),
            session.perspective_inputs(),
            progress,
        )
        .await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        topic: &str,
        perspectives: Vec<PerspectiveInput>,
        progress: &dyn DebateProgressNotifier,
    ) -> PaperDocument {
        progress.on_phase_start(&Phase::Paper, 1);
        let document = self.synthesize(topic, perspectives).await;
        progress.on_task_complete(&Phase::Paper, !document.is_failed());
        progress.on_phase_complete(&Phase::Paper);

        self.logger.log(ConversationEvent::new(
            "paper_generated",
            json!({
                "topic": topic,
                "title": document.title,
                "failed": document.is_failed(),
                "perspectives": document.perspectives.len(),
                "references": document.references.len(),
            }),
        ));
        document
    }

    async fn synthesize(&self, topic: &str, perspectives: Vec<PerspectiveInput>) -> PaperDocument {
        if perspectives.is_empty() {
            warn!("No perspectives to synthesize for \"{}\"", topic);
            return PaperDocument::failed(topic, "no perspectives available");
        }

        info!(
            "Generating research paper on \"{}\" from {} perspectives",
            topic,
            perspectives.len()
        );

        let request = BackendRequest::ResearchPaper {
            topic: topic.to_string(),
            perspectives,
            system_message: self
                .system_message
                .clone()
                .unwrap_or_else(|| PromptTemplate::paper_system(topic)),
        };

        match send_with_retry(self.transport.as_ref(), &request, &self.retry).await {
            Ok(body) => {
                let body = body.trim();
                if body.is_empty() {
                    warn!("Empty research paper response");
                    return PaperDocument::failed(topic, "empty response");
                }
                // The backend reports its own synthesis failures in-band
                if let Some(reason) = body.strip_prefix(PAPER_ERROR_PREFIX) {
                    let reason = reason.trim_start_matches(':').trim();
                    warn!("Backend could not generate the paper: {}", reason);
                    return PaperDocument::failed(topic, reason);
                }
                let document = parse_paper_response(topic, body);
                info!(
                    "Research paper \"{}\" parsed ({} perspectives, {} references)",
                    document.title,
                    document.perspectives.len(),
                    document.references.len()
                );
                document
            }
            Err(e) => {
                warn!("Research paper generation failed: {}", e);
                PaperDocument::failed(topic, e)
            }
        }
    }
}
