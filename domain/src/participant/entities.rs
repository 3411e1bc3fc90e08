//! Participant entity and stance value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// The fixed rhetorical position of a participant (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stance {
    For,
    Against,
    Neutral,
}

impl Stance {
    /// All stances in canonical order
    pub const ALL: [Stance; 3] = [Stance::For, Stance::Against, Stance::Neutral];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stance::For => "For",
            Stance::Against => "Against",
            Stance::Neutral => "Neutral",
        }
    }

    /// Short description of how this stance argues, used in prompts
    pub fn posture(&self) -> &'static str {
        match self {
            Stance::For => "argue in favour of the proposition",
            Stance::Against => "argue against the proposition",
            Stance::Neutral => "weigh the evidence on both sides without taking a side",
        }
    }
}

impl std::fmt::Display for Stance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Stance {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "for" | "pro" => Ok(Stance::For),
            "against" | "con" => Ok(Stance::Against),
            "neutral" => Ok(Stance::Neutral),
            other => Err(DomainError::InvalidStance(other.to_string())),
        }
    }
}

/// A simulated viewpoint taking part in the debate (Entity)
///
/// Identity is the `id`; participants are immutable for the lifetime of a
/// session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: u32,
    pub name: String,
    pub stance: Stance,
    /// Display label of the model behind this participant
    pub model: String,
}

impl Participant {
    pub fn new(id: u32, name: impl Into<String>, stance: Stance, model: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            stance,
            model: model.into(),
        }
    }
}

impl std::fmt::Display for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.stance)
    }
}
