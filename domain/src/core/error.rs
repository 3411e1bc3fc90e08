//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Topic cannot be empty")]
    EmptyTopic,

    #[error("No participants configured")]
    NoParticipants,

    #[error("Duplicate participant id: {0}")]
    DuplicateParticipant(u32),

    #[error("Participant {0} has an empty name")]
    UnnamedParticipant(u32),

    #[error("Invalid stance: {0}")]
    InvalidStance(String),

    #[error("Unknown participant: {0}")]
    UnknownParticipant(u32),

    #[error("Latest record of participant {0} is already resolved")]
    RecordNotPending(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(DomainError::EmptyTopic.to_string(), "Topic cannot be empty");
        assert_eq!(
            DomainError::DuplicateParticipant(2).to_string(),
            "Duplicate participant id: 2"
        );
    }
}
