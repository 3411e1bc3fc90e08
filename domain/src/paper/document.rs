//! Paper document value objects

use crate::participant::entities::Stance;
use serde::{Deserialize, Serialize};

/// Prefix of the abstract text when synthesis fails
pub const PAPER_ERROR_PREFIX: &str = "Error generating research paper";

/// One perspective's accumulated text, sent to the synthesis backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerspectiveInput {
    /// Stance label, e.g. "For"
    pub stance: String,
    /// All of the perspective's responses, concatenated
    pub content: String,
}

impl PerspectiveInput {
    pub fn new(stance: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            stance: stance.into(),
            content: content.into(),
        }
    }
}

/// A perspective section found in the synthesized paper
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperPerspective {
    pub stance: Stance,
    pub content: String,
}

/// Structured research paper (Value Object)
///
/// Sections the model did not produce are empty strings / empty lists.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PaperDocument {
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub introduction: String,
    pub perspectives: Vec<PaperPerspective>,
    pub discussion: String,
    pub conclusion: String,
    pub references: Vec<String>,
}

impl PaperDocument {
    /// A document with only the title set
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Degraded document shown when synthesis fails
    pub fn failed(title: impl Into<String>, error: impl std::fmt::Display) -> Self {
        Self {
            abstract_text: format!("{}: {}", PAPER_ERROR_PREFIX, error),
            ..Self::titled(title)
        }
    }

    /// Whether this document is the degraded failure form
    pub fn is_failed(&self) -> bool {
        self.abstract_text.starts_with(PAPER_ERROR_PREFIX)
            && self.introduction.is_empty()
            && self.perspectives.is_empty()
            && self.conclusion.is_empty()
    }

    pub fn perspective(&self, stance: Stance) -> Option<&PaperPerspective> {
        self.perspectives.iter().find(|p| p.stance == stance)
    }
}
