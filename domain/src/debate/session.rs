//! Debate session entity

use super::record::ResponseRecord;
use crate::core::error::DomainError;
use crate::core::topic::Topic;
use crate::paper::document::PerspectiveInput;
use crate::participant::entities::Participant;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// In-memory state of one debate (Entity)
///
/// Created when research starts on a topic and dropped when a new topic is
/// chosen. Every round appends exactly one record per participant, so after
/// a round completes all histories have the same length. While a round is in
/// flight the lengths are already equal (placeholders are appended up front)
/// and only the pending flags differ.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebateSession {
    topic: Topic,
    round: u32,
    participants: Vec<Participant>,
    history: BTreeMap<u32, Vec<ResponseRecord>>,
    pending_question: Option<String>,
    round_in_progress: bool,
}

impl DebateSession {
    pub fn new(topic: Topic, participants: Vec<Participant>) -> Self {
        let history = participants.iter().map(|p| (p.id, Vec::new())).collect();
        Self {
            topic,
            round: 0,
            participants,
            history,
            pending_question: None,
            round_in_progress: false,
        }
    }

    pub fn topic(&self) -> &Topic {
        &self.topic
    }

    /// Number of rounds started so far (0 before the first round)
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Ordered records for a participant; empty for unknown ids
    pub fn history(&self, participant_id: u32) -> &[ResponseRecord] {
        self.history
            .get(&participant_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn latest(&self, participant_id: u32) -> Option<&ResponseRecord> {
        self.history(participant_id).last()
    }

    pub fn pending_question(&self) -> Option<&str> {
        self.pending_question.as_deref()
    }

    pub fn is_round_in_progress(&self) -> bool {
        self.round_in_progress
    }

    /// Whether any participant still waits on a response
    pub fn has_pending(&self) -> bool {
        self.history
            .values()
            .any(|records| records.last().is_some_and(ResponseRecord::is_pending))
    }

    /// Start a round: bump the counter and append a pending placeholder for
    /// every participant. Returns the new round number.
    pub fn begin_round(&mut self, placeholder: impl Fn(&Participant) -> String) -> u32 {
        self.round += 1;
        self.round_in_progress = true;
        for participant in &self.participants {
            let record = ResponseRecord::pending(placeholder(participant));
            self.history.entry(participant.id).or_default().push(record);
        }
        self.round
    }

    /// Remember the follow-up question being answered by the current round
    pub fn set_pending_question(&mut self, question: impl Into<String>) {
        self.pending_question = Some(question.into());
    }

    /// Replace a participant's pending placeholder with its final record
    pub fn resolve(
        &mut self,
        participant_id: u32,
        record: ResponseRecord,
    ) -> Result<&ResponseRecord, DomainError> {
        let last = self
            .history
            .get_mut(&participant_id)
            .and_then(|records| records.last_mut())
            .ok_or(DomainError::UnknownParticipant(participant_id))?;

        if !last.is_pending() {
            return Err(DomainError::RecordNotPending(participant_id));
        }

        *last = record;
        Ok(last)
    }

    /// Close the current round and clear the pending question
    pub fn finish_round(&mut self) {
        self.round_in_progress = false;
        self.pending_question = None;
    }

    /// All participants have the same number of records
    pub fn is_consistent(&self) -> bool {
        let mut lengths = self.history.values().map(Vec::len);
        match lengths.next() {
            Some(first) => lengths.all(|len| len == first),
            None => true,
        }
    }

    /// Per-participant text across all rounds, as input for paper synthesis
    ///
    /// Only fulfilled records contribute; participants without any are left
    /// out.
    pub fn perspective_inputs(&self) -> Vec<PerspectiveInput> {
        self.participants
            .iter()
            .filter_map(|participant| {
                let content = self
                    .history(participant.id)
                    .iter()
                    .filter(|r| r.is_fulfilled())
                    .map(|r| r.text.as_str())
                    .collect::<Vec<_>>()
                    .join("\n\n");
                (!content.is_empty())
                    .then(|| PerspectiveInput::new(participant.stance.as_str(), content))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debate::record::{RecordStatus, Source};
    use crate::participant::registry::ParticipantRegistry;

    fn session() -> DebateSession {
        DebateSession::new(
            Topic::try_new("Is AI a threat to humanity?").unwrap(),
            ParticipantRegistry::default_participants(),
        )
    }

    #[test]
    fn test_new_session_is_empty() {
        let s = session();
        assert_eq!(s.round(), 0);
        assert!(s.history(1).is_empty());
        assert!(s.is_consistent());
        assert!(!s.is_round_in_progress());
    }

    #[test]
    fn test_begin_round_appends_placeholders() {
        let mut s = session();
        let round = s.begin_round(|p| format!("Waiting on {}", p.name));
        assert_eq!(round, 1);
        assert!(s.is_round_in_progress());
        for p in ParticipantRegistry::default_participants() {
            let latest = s.latest(p.id).unwrap();
            assert!(latest.is_pending());
            assert_eq!(latest.text, format!("Waiting on {}", p.name));
        }
        assert!(s.is_consistent());
        assert!(s.has_pending());
    }

    #[test]
    fn test_resolve_replaces_latest_record() {
        let mut s = session();
        s.begin_round(|_| "...".to_string());
        s.resolve(
            2,
            ResponseRecord::fulfilled("Done", vec![Source::new("A", "https://a")]),
        )
        .unwrap();

        assert_eq!(s.history(2).len(), 1);
        assert_eq!(s.latest(2).unwrap().status, RecordStatus::Fulfilled);
        assert!(s.latest(1).unwrap().is_pending());
    }

    #[test]
    fn test_resolve_twice_is_rejected() {
        let mut s = session();
        s.begin_round(|_| "...".to_string());
        s.resolve(1, ResponseRecord::failed("boom")).unwrap();
        let err = s.resolve(1, ResponseRecord::fulfilled("late", vec![]));
        assert_eq!(err.unwrap_err(), DomainError::RecordNotPending(1));
    }

    #[test]
    fn test_resolve_unknown_participant() {
        let mut s = session();
        s.begin_round(|_| "...".to_string());
        let err = s.resolve(99, ResponseRecord::fulfilled("x", vec![]));
        assert_eq!(err.unwrap_err(), DomainError::UnknownParticipant(99));
    }

    #[test]
    fn test_finish_round_clears_question() {
        let mut s = session();
        s.set_pending_question("Q?");
        s.begin_round(|_| "...".to_string());
        assert_eq!(s.pending_question(), Some("Q?"));
        s.finish_round();
        assert_eq!(s.pending_question(), None);
        assert!(!s.is_round_in_progress());
    }

    #[test]
    fn test_perspective_inputs_join_fulfilled_rounds() {
        let mut s = session();
        s.begin_round(|_| "...".to_string());
        s.resolve(1, ResponseRecord::fulfilled("first", vec![])).unwrap();
        s.resolve(2, ResponseRecord::failed("down")).unwrap();
        s.resolve(3, ResponseRecord::fulfilled("balanced", vec![])).unwrap();
        s.finish_round();

        s.begin_round(|_| "...".to_string());
        s.resolve(1, ResponseRecord::fulfilled("second", vec![])).unwrap();
        s.resolve(2, ResponseRecord::failed("down")).unwrap();
        s.resolve(3, ResponseRecord::failed("down")).unwrap();
        s.finish_round();

        let inputs = s.perspective_inputs();
        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs[0].stance, "For");
        assert_eq!(inputs[0].content, "first\n\nsecond");
        assert_eq!(inputs[1].stance, "Neutral");
        assert_eq!(inputs[1].content, "balanced");
    }
}
