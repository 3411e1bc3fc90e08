//! Debate participants: stances, identities and the default roster.

pub mod entities;
pub mod registry;
