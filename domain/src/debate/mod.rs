//! Debate session state.
//!
//! - [`round::Phase`] / [`round::RoundPrompt`]: what a round asks for
//! - [`record::ResponseRecord`]: one participant's answer for one round
//! - [`session::DebateSession`]: topic, roster and per-participant history

pub mod record;
pub mod round;
pub mod session;
