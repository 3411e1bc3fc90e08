//! Debate dispatch parameters.
//!
//! [`DebateParams`] groups the static parameters that control how the
//! [`DebateOrchestrator`](crate::use_cases::run_debate::DebateOrchestrator)
//! dispatches a round.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Round dispatch parameters.
///
/// Participants are asked one after another; before participant `i` is
/// called the orchestrator waits `stagger * i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebateParams {
    pub stagger: Duration,
}

impl Default for DebateParams {
    fn default() -> Self {
        Self {
            stagger: Duration::from_millis(1000),
        }
    }
}

impl DebateParams {
    pub fn with_stagger(mut self, stagger: Duration) -> Self {
        self.stagger = stagger;
        self
    }

    /// Delay before calling the participant at `index`
    pub fn delay_for(&self, index: usize) -> Duration {
        self.stagger
            .saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_grows_with_index() {
        let params = DebateParams::default();
        assert_eq!(params.delay_for(0), Duration::ZERO);
        assert_eq!(params.delay_for(1), Duration::from_millis(1000));
        assert_eq!(params.delay_for(2), Duration::from_millis(2000));
    }

    #[test]
    fn test_zero_stagger() {
        let params = DebateParams::default().with_stagger(Duration::ZERO);
        assert_eq!(params.delay_for(5), Duration::ZERO);
    }
}
