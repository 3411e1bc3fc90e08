//! Prompt domain
//!
//! Templates for the per-participant chat requests and the paper synthesis
//! request.

mod template;

pub use template::PromptTemplate;
