//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod generate_paper;
pub mod get_response;
pub mod run_debate;
pub(crate) mod shared;
