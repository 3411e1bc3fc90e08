//! Topic value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// A debate topic (Value Object)
///
/// Always non-empty after trimming. The original spelling is kept so that
/// lookups into topic tables match what the user picked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Topic {
    content: String,
}

impl Topic {
    /// Create a topic, rejecting empty or whitespace-only input
    pub fn try_new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into().trim().to_string();
        if content.is_empty() {
            return Err(DomainError::EmptyTopic);
        }
        Ok(Self { content })
    }

    /// Get the topic text
    pub fn as_str(&self) -> &str {
        &self.content
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<String> for Topic {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Topic::try_new(value)
    }
}

impl TryFrom<&str> for Topic {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Topic::try_new(value)
    }
}

impl From<Topic> for String {
    fn from(topic: Topic) -> Self {
        topic.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_creation_trims() {
        let topic = Topic::try_new("  Is AI a threat to humanity?  ").unwrap();
        assert_eq!(topic.as_str(), "Is AI a threat to humanity?");
    }

    #[test]
    fn test_empty_topic_rejected() {
        assert_eq!(Topic::try_new(""), Err(DomainError::EmptyTopic));
        assert_eq!(Topic::try_new("   \n"), Err(DomainError::EmptyTopic));
    }

    #[test]
    fn test_topic_serde_roundtrip_rejects_empty() {
        let topic: Topic = serde_json::from_str("\"Space\"").unwrap();
        assert_eq!(topic.as_str(), "Space");
        assert!(serde_json::from_str::<Topic>("\"\"").is_err());
    }
}
