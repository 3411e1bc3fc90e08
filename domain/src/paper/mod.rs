//! Research paper synthesis: the document model, tolerant section parsing
//! of free-form model output, and citation extraction.

pub mod citation;
pub mod document;
pub mod parsing;
