//! Round value objects

use serde::{Deserialize, Serialize};

/// What a participant is asked to produce in a round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundPrompt {
    /// A numbered debate round (1 = opening research)
    Round(u32),
    /// An answer to a user-supplied follow-up question
    FollowUp(String),
}

impl RoundPrompt {
    /// Round index used for table lookups; follow-ups have none
    pub fn round_number(&self) -> Option<u32> {
        match self {
            RoundPrompt::Round(n) => Some(*n),
            RoundPrompt::FollowUp(_) => None,
        }
    }

    pub fn question(&self) -> Option<&str> {
        match self {
            RoundPrompt::Round(_) => None,
            RoundPrompt::FollowUp(q) => Some(q),
        }
    }
}

/// Phase of a debate, reported to progress observers
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Opening round right after a topic is chosen
    Research,
    /// A further debate round
    Round(u32),
    /// A follow-up question answered by everyone
    FollowUp,
    /// Research paper synthesis
    Paper,
}

impl Phase {
    pub fn as_str(&self) -> &str {
        match self {
            Phase::Research => "research",
            Phase::Round(_) => "round",
            Phase::FollowUp => "follow_up",
            Phase::Paper => "paper",
        }
    }

    pub fn display_name(&self) -> String {
        match self {
            Phase::Research => "Initial Research".to_string(),
            Phase::Round(n) => format!("Round {}", n),
            Phase::FollowUp => "Follow-up".to_string(),
            Phase::Paper => "Research Paper".to_string(),
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
