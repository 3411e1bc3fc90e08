//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`DebateParams`]: per-round dispatch control (stagger between participants)
//! - [`RetryPolicy`]: retry and backoff for backend requests

pub mod debate_params;
pub mod retry_policy;

pub use debate_params::DebateParams;
pub use retry_policy::RetryPolicy;
