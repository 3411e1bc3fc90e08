//! Run Debate use case
//!
//! Orchestrates research, further rounds and follow-up questions over a
//! single in-memory debate session.

use crate::config::DebateParams;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::progress::{DebateProgressNotifier, NoProgress};
use crate::ports::response_generator::{PerspectiveRequest, ResponseGenerator};
use debate_domain::{
    DebateSession, Participant, ParticipantRegistry, Phase, ResponseRecord, RoundPrompt, Topic,
};
use futures::stream::{self, StreamExt};
use serde_json::json;
use std::pin::pin;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors returned by the orchestrator
///
/// Participant failures are not errors; they end up as failed records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DebateError {
    #[error("A round is already in progress")]
    RoundInProgress,

    #[error("No debate in progress, start research on a topic first")]
    NoSession,

    #[error("Topic cannot be empty")]
    EmptyTopic,

    #[error("Follow-up question cannot be empty")]
    EmptyQuestion,
}

/// Drives a debate session round by round
///
/// Each round asks every participant once, one after another, with a
/// growing stagger delay before each call. A participant's record is
/// replaced as soon as its own call finishes. The orchestrator is the only
/// writer of the session; callers read it through [`Self::session`].
pub struct DebateOrchestrator<G: ResponseGenerator + ?Sized + 'static> {
    generator: Arc<G>,
    participants: Vec<Participant>,
    params: DebateParams,
    logger: Arc<dyn ConversationLogger>,
    session: Option<DebateSession>,
}

impl<G: ResponseGenerator + ?Sized + 'static> DebateOrchestrator<G> {
    /// The registry guarantees a non-empty roster with unique ids
    pub fn new(generator: Arc<G>, registry: ParticipantRegistry) -> Self {
        Self {
            generator,
            participants: registry.into_participants(),
            params: DebateParams::default(),
            logger: Arc::new(NoConversationLogger),
            session: None,
        }
    }

    pub fn with_params(mut self, params: DebateParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Current session, if research has started
    pub fn session(&self) -> Option<&DebateSession> {
        self.session.as_ref()
    }

    /// Whether a round was started and never finished
    pub fn is_busy(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(DebateSession::is_round_in_progress)
    }

    /// Drop the current session
    pub fn reset(&mut self) {
        if let Some(session) = self.session.take() {
            debug!("Discarding debate on \"{}\"", session.topic());
        }
    }

    /// Start research on a new topic with default (no-op) progress
    pub async fn start_research(&mut self, topic: &str) -> Result<&DebateSession, DebateError> {
        self.start_research_with_progress(topic, &NoProgress).await
    }

    /// Start research on a new topic, replacing any finished session
    pub async fn start_research_with_progress(
        &mut self,
        topic: &str,
        progress: &dyn DebateProgressNotifier,
    ) -> Result<&DebateSession, DebateError> {
        if self.is_busy() {
            return Err(DebateError::RoundInProgress);
        }
        let topic = Topic::try_new(topic).map_err(|_| DebateError::EmptyTopic)?;

        info!(
            "Starting research on \"{}\" with {} participants",
            topic,
            self.participants.len()
        );

        let mut session = DebateSession::new(topic, self.participants.clone());
        let topic = session.topic().clone();
        let round = session.begin_round(|p| {
            format!("Researching \"{}\" from {} perspective...", topic, p.stance)
        });
        self.session = Some(session);

        self.dispatch(Phase::Research, RoundPrompt::Round(round), progress)
            .await
    }

    /// Run another round with default (no-op) progress
    pub async fn new_round(&mut self) -> Result<&DebateSession, DebateError> {
        self.new_round_with_progress(&NoProgress).await
    }

    /// Run another round on the current topic
    pub async fn new_round_with_progress(
        &mut self,
        progress: &dyn DebateProgressNotifier,
    ) -> Result<&DebateSession, DebateError> {
        let session = self.session.as_mut().ok_or(DebateError::NoSession)?;
        if session.is_round_in_progress() {
            return Err(DebateError::RoundInProgress);
        }

        let topic = session.topic().clone();
        let round = session.begin_round(|_| {
            format!("Continuing debate on \"{}\" with further analysis...", topic)
        });

        self.dispatch(Phase::Round(round), RoundPrompt::Round(round), progress)
            .await
    }

    /// Ask every participant a follow-up question with default (no-op) progress
    pub async fn follow_up(&mut self, question: &str) -> Result<&DebateSession, DebateError> {
        self.follow_up_with_progress(question, &NoProgress).await
    }

    /// Ask every participant a follow-up question
    ///
    /// The answers form a new round.
    pub async fn follow_up_with_progress(
        &mut self,
        question: &str,
        progress: &dyn DebateProgressNotifier,
    ) -> Result<&DebateSession, DebateError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(DebateError::EmptyQuestion);
        }
        let session = self.session.as_mut().ok_or(DebateError::NoSession)?;
        if session.is_round_in_progress() {
            return Err(DebateError::RoundInProgress);
        }

        session.set_pending_question(question);
        session.begin_round(|_| format!("Answering follow-up question \"{}\"...", question));

        self.dispatch(
            Phase::FollowUp,
            RoundPrompt::FollowUp(question.to_string()),
            progress,
        )
        .await
    }

    /// Ask each participant in turn and fold every outcome into the session
    /// as it arrives
    async fn dispatch(
        &mut self,
        phase: Phase,
        prompt: RoundPrompt,
        progress: &dyn DebateProgressNotifier,
    ) -> Result<&DebateSession, DebateError> {
        let session = self.session.as_ref().ok_or(DebateError::NoSession)?;
        let round = session.round();
        let topic = session.topic().clone();
        let participants = session.participants().to_vec();

        info!("{}: asking {} participants", phase, participants.len());
        progress.on_phase_start(&phase, participants.len());
        self.logger.log(ConversationEvent::new(
            "round_started",
            json!({
                "phase": phase.as_str(),
                "round": round,
                "topic": topic.as_str(),
                "question": prompt.question(),
            }),
        ));

        let generator = Arc::clone(&self.generator);
        let params = self.params;
        let stream_phase = phase.clone();
        let outcomes = stream::iter(participants.into_iter().enumerate()).then(
            move |(index, participant)| {
                let generator = Arc::clone(&generator);
                let phase = stream_phase.clone();
                let request = PerspectiveRequest::new(topic.clone(), participant, prompt.clone());
                async move {
                    let delay = params.delay_for(index);
                    if !delay.is_zero() {
                        debug!("Waiting {:?} before asking {}", delay, request.participant);
                        tokio::time::sleep(delay).await;
                    }
                    progress.on_participant_start(&phase, &request.participant);
                    let result = generator.generate(&request).await;
                    (request.participant, result)
                }
            },
        );
        let mut outcomes = pin!(outcomes);

        let mut failed = 0usize;
        while let Some((participant, result)) = outcomes.next().await {
            let record = match result {
                Ok(response) => ResponseRecord::fulfilled(response.text, response.sources),
                Err(e) => {
                    warn!("{} failed to respond: {}", participant, e);
                    failed += 1;
                    ResponseRecord::failed(e.to_string())
                }
            };

            let Some(session) = self.session.as_mut() else {
                break;
            };
            match session.resolve(participant.id, record) {
                Ok(record) => {
                    progress.on_participant_complete(&phase, &participant, record);
                    self.logger.log(ConversationEvent::new(
                        "participant_response",
                        json!({
                            "phase": phase.as_str(),
                            "round": round,
                            "participant_id": participant.id,
                            "participant": participant.name,
                            "stance": participant.stance.as_str(),
                            "model": participant.model,
                            "status": record.status,
                            "text": record.text,
                            "sources": record.sources,
                            "error": record.error,
                        }),
                    ));
                }
                Err(e) => warn!("Dropping response for {}: {}", participant, e),
            }
        }

        let session = self.session.as_mut().ok_or(DebateError::NoSession)?;
        session.finish_round();
        let total = session.participants().len();

        progress.on_phase_complete(&phase);
        self.logger.log(ConversationEvent::new(
            "round_completed",
            json!({
                "phase": phase.as_str(),
                "round": round,
                "fulfilled": total - failed,
                "failed": failed,
            }),
        ));
        info!(
            "{} complete: {}/{} participants responded",
            phase,
            total - failed,
            total
        );

        Ok(session)
    }
}
