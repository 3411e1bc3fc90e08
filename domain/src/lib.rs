//! Domain layer for ai-debate
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Debate
//!
//! A debate runs on one [`Topic`] with a fixed roster of [`Participant`]s,
//! each holding a [`Stance`]. Every round appends one [`ResponseRecord`]
//! per participant to the [`DebateSession`].
//!
//! ## Research Paper
//!
//! After any number of rounds the accumulated perspectives can be
//! synthesized into a [`PaperDocument`], parsed from free-form model output
//! by [`parse_paper_response`].

pub mod config;
pub mod context;
pub mod core;
pub mod debate;
pub mod paper;
pub mod participant;
pub mod prompt;

// Re-export commonly used types
pub use config::OutputFormat;
pub use context::{predefined_topics, topic_context};
pub use core::{error::DomainError, string::truncate, topic::Topic};
pub use debate::{
    record::{FAILED_RESPONSE_TEXT, RecordStatus, ResponseRecord, Source},
    round::{Phase, RoundPrompt},
    session::DebateSession,
};
pub use paper::{
    citation::extract_citations,
    document::{PAPER_ERROR_PREFIX, PaperDocument, PaperPerspective, PerspectiveInput},
    parsing::parse_paper_response,
};
pub use participant::{
    entities::{Participant, Stance},
    registry::ParticipantRegistry,
};
pub use prompt::PromptTemplate;
