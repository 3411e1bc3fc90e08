//! Participant registry

use super::entities::{Participant, Stance};
use crate::core::error::DomainError;
use std::collections::HashSet;

/// A validated, ordered roster of participants
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantRegistry {
    participants: Vec<Participant>,
}

impl ParticipantRegistry {
    /// Build a registry, checking the roster is non-empty with unique ids
    pub fn new(participants: Vec<Participant>) -> Result<Self, DomainError> {
        if participants.is_empty() {
            return Err(DomainError::NoParticipants);
        }

        let mut seen = HashSet::new();
        for participant in &participants {
            if !seen.insert(participant.id) {
                return Err(DomainError::DuplicateParticipant(participant.id));
            }
            if participant.name.trim().is_empty() {
                return Err(DomainError::UnnamedParticipant(participant.id));
            }
        }

        Ok(Self { participants })
    }

    /// The fixed roster used when nothing else is configured
    pub fn default_participants() -> Vec<Participant> {
        vec![
            Participant::new(1, "Perspective A", Stance::For, "GPT-4"),
            Participant::new(2, "Perspective B", Stance::Against, "Claude"),
            Participant::new(3, "Perspective C", Stance::Neutral, "PaLM 2"),
        ]
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn get(&self, id: u32) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    pub fn into_participants(self) -> Vec<Participant> {
        self.participants
    }
}

impl Default for ParticipantRegistry {
    fn default() -> Self {
        Self {
            participants: Self::default_participants(),
        }
    }
}
