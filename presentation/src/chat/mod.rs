//! Interactive debate module
//!
//! Provides a line-editor based interactive session for running a debate.

mod repl;

pub use repl::{ChatRepl, ReplCommand};
