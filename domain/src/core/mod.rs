//! Core domain concepts shared across all subdomains.
//!
//! - [`topic::Topic`]: a validated debate topic
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod string;
pub mod topic;
