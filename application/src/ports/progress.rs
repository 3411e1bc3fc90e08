//! Progress notification port
//!
//! Defines the interface for reporting progress while a debate round or the
//! paper synthesis runs.

use debate_domain::{Participant, Phase, ResponseRecord};

/// Callback for progress updates during a debate
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinners, plain log lines, etc.)
pub trait DebateProgressNotifier: Send + Sync {
    /// Called when a phase starts
    fn on_phase_start(&self, phase: &Phase, total_tasks: usize);

    /// Called right before a participant is asked
    fn on_participant_start(&self, _phase: &Phase, _participant: &Participant) {}

    /// Called as soon as a participant's record is final
    fn on_participant_complete(
        &self,
        phase: &Phase,
        participant: &Participant,
        record: &ResponseRecord,
    );

    /// Called when a task that is not a participant call finishes, such as
    /// the single synthesis request of the paper phase
    fn on_task_complete(&self, _phase: &Phase, _success: bool) {}

    /// Called when a phase completes
    fn on_phase_complete(&self, phase: &Phase);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl DebateProgressNotifier for NoProgress {
    fn on_phase_start(&self, _phase: &Phase, _total_tasks: usize) {}
    fn on_participant_complete(
        &self,
        _phase: &Phase,
        _participant: &Participant,
        _record: &ResponseRecord,
    ) {
    }
    fn on_phase_complete(&self, _phase: &Phase) {}
}
