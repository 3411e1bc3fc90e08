//! Offline response generator backed by a table of pre-written answers.

mod generator;
mod table;

pub use generator::CannedResponseGenerator;
pub use table::{CannedEntry, CannedTable, CannedTableError};
