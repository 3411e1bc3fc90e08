//! Canned [`ResponseGenerator`]

use super::table::{CannedTable, CannedTableError};
use async_trait::async_trait;
use debate_application::{
    GeneratedResponse, GenerationError, PerspectiveRequest, ResponseGenerator,
};
use debate_domain::{RoundPrompt, Source, Stance};
use std::time::Duration;
use tracing::debug;

/// Deterministic generator answering from a [`CannedTable`]
///
/// Unknown topics and stances get a templated answer, so every request
/// succeeds.
pub struct CannedResponseGenerator {
    table: CannedTable,
    latency: Duration,
}

impl CannedResponseGenerator {
    pub fn new(table: CannedTable) -> Self {
        Self {
            table,
            latency: Duration::ZERO,
        }
    }

    /// Generator over the built-in table
    pub fn builtin() -> Result<Self, CannedTableError> {
        Ok(Self::new(CannedTable::builtin()?))
    }

    /// Simulate backend latency on every call
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn table(&self) -> &CannedTable {
        &self.table
    }

    /// Answer without waiting
    pub fn respond(&self, request: &PerspectiveRequest) -> GeneratedResponse {
        let topic = request.topic.as_str();
        let stance = request.participant.stance;

        match &request.prompt {
            RoundPrompt::Round(round) => match self.table.lookup(topic, stance, *round) {
                Some(entry) => GeneratedResponse::new(entry.text.clone(), entry.sources.clone()),
                None => GeneratedResponse::new(
                    format!(
                        "This is a simulated response for the topic \"{}\" from a {} perspective (Round {})",
                        topic, stance, round
                    ),
                    generic_sources(topic, stance),
                ),
            },
            RoundPrompt::FollowUp(question) => GeneratedResponse::new(
                format!(
                    "This is a simulated answer to the follow-up question \"{}\" on the topic \"{}\" from a {} perspective",
                    question, topic, stance
                ),
                generic_sources(topic, stance),
            ),
        }
    }
}

fn generic_sources(topic: &str, stance: Stance) -> Vec<Source> {
    vec![
        Source::new(
            format!("Research Paper on {}", topic),
            "https://example.com/research",
        ),
        Source::new(
            format!("{} Perspective Analysis", stance),
            "https://example.com/analysis",
        ),
    ]
}

#[async_trait]
impl ResponseGenerator for CannedResponseGenerator {
    async fn generate(
        &self,
        request: &PerspectiveRequest,
    ) -> Result<GeneratedResponse, GenerationError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        debug!("Canned response for {} ({:?})", request.participant, request.prompt);
        Ok(self.respond(request))
    }
}
