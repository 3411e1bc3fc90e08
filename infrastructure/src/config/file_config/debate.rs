//! Debate configuration from TOML (`[debate]` section)

use debate_application::DebateParams;
use debate_domain::{DomainError, Participant, ParticipantRegistry, Stance};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One `[[debate.participants]]` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileParticipantConfig {
    pub id: u32,
    pub name: String,
    /// `for`, `against` or `neutral`
    pub stance: String,
    #[serde(default)]
    pub model: String,
}

impl FileParticipantConfig {
    pub fn to_participant(&self) -> Result<Participant, DomainError> {
        let stance: Stance = self.stance.parse()?;
        Ok(Participant::new(
            self.id,
            self.name.trim(),
            stance,
            self.model.trim(),
        ))
    }
}

/// Raw debate configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDebateConfig {
    /// Delay step between participants within a round
    pub stagger_ms: u64,
    /// Rounds to run in one-shot mode (research counts as the first)
    pub rounds: u32,
    /// Custom roster; the default three perspectives when empty
    pub participants: Vec<FileParticipantConfig>,
}

impl Default for FileDebateConfig {
    fn default() -> Self {
        Self {
            stagger_ms: 1000,
            rounds: 1,
            participants: Vec::new(),
        }
    }
}

impl FileDebateConfig {
    pub fn to_params(&self) -> DebateParams {
        DebateParams::default().with_stagger(Duration::from_millis(self.stagger_ms))
    }

    pub fn to_registry(&self) -> Result<ParticipantRegistry, DomainError> {
        if self.participants.is_empty() {
            return Ok(ParticipantRegistry::default());
        }
        let participants = self
            .participants
            .iter()
            .map(FileParticipantConfig::to_participant)
            .collect::<Result<Vec<_>, _>>()?;
        ParticipantRegistry::new(participants)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FileConfig;

    #[test]
    fn test_default_roster() {
        let registry = FileDebateConfig::default().to_registry().unwrap();
        assert_eq!(
            registry.participants(),
            ParticipantRegistry::default_participants().as_slice()
        );
    }

    #[test]
    fn test_custom_roster() {
        let toml_str = r#"
[debate]
stagger_ms = 0
rounds = 3

[[debate.participants]]
id = 10
name = "Optimist"
stance = "for"
model = "gpt-4o"

[[debate.participants]]
id = 11
name = "Skeptic"
stance = "Against"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.debate.rounds, 3);
        assert_eq!(config.debate.to_params().stagger, Duration::ZERO);

        let registry = config.debate.to_registry().unwrap();
        let participants = registry.participants();
        assert_eq!(participants.len(), 2);
        assert_eq!(participants[0].stance, Stance::For);
        assert_eq!(participants[1].name, "Skeptic");
        assert_eq!(participants[1].model, "");
    }

    #[test]
    fn test_invalid_stance_is_rejected() {
        let config = FileDebateConfig {
            participants: vec![FileParticipantConfig {
                id: 1,
                name: "X".into(),
                stance: "sideways".into(),
                model: String::new(),
            }],
            ..Default::default()
        };
        assert_eq!(
            config.to_registry().unwrap_err(),
            DomainError::InvalidStance("sideways".into())
        );
    }
}
