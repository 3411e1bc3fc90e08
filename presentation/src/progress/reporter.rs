//! Progress reporting for debate rounds and paper synthesis

use colored::Colorize;
use debate_application::{DebateProgressNotifier, NoProgress};
use debate_domain::{Participant, Phase, ResponseRecord};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::sync::Mutex;
use std::time::Duration;

/// How progress is shown on stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressMode {
    Off,
    /// One plain line per event, for logs and pipes
    Plain,
    Bars,
}

impl ProgressMode {
    /// Bars on a terminal, plain lines when stderr is redirected
    pub fn detect(enabled: bool) -> Self {
        Self::choose(enabled, std::io::stderr().is_terminal())
    }

    fn choose(enabled: bool, terminal: bool) -> Self {
        match (enabled, terminal) {
            (false, _) => ProgressMode::Off,
            (true, false) => ProgressMode::Plain,
            (true, true) => ProgressMode::Bars,
        }
    }

    pub fn notifier(self) -> Box<dyn DebateProgressNotifier> {
        match self {
            ProgressMode::Off => Box::new(NoProgress),
            ProgressMode::Plain => Box::new(SimpleProgress),
            ProgressMode::Bars => Box::new(ProgressReporter::new()),
        }
    }
}

/// Reports progress during a debate with fancy progress bars
pub struct ProgressReporter {
    multi: MultiProgress,
    phase_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            phase_bar: Mutex::new(None),
        }
    }

    fn phase_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn status_line(participant: &Participant, record: &ResponseRecord) -> String {
        if record.is_failed() {
            format!("{} {}", "x".red(), participant)
        } else {
            format!("{} {}", "v".green(), participant)
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl DebateProgressNotifier for ProgressReporter {
    fn on_phase_start(&self, phase: &Phase, total_tasks: usize) {
        let pb = self.multi.add(ProgressBar::new(total_tasks as u64));
        pb.set_style(Self::phase_style());
        pb.set_prefix(phase.display_name());
        pb.set_message("Starting...");
        pb.enable_steady_tick(Duration::from_millis(120));

        if let Ok(mut bar) = self.phase_bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_participant_start(&self, _phase: &Phase, participant: &Participant) {
        if let Ok(bar) = self.phase_bar.lock()
            && let Some(pb) = bar.as_ref()
        {
            pb.set_message(format!("Waiting on {}", participant));
        }
    }

    fn on_participant_complete(
        &self,
        _phase: &Phase,
        participant: &Participant,
        record: &ResponseRecord,
    ) {
        if let Ok(bar) = self.phase_bar.lock()
            && let Some(pb) = bar.as_ref()
        {
            pb.set_message(Self::status_line(participant, record));
            pb.inc(1);
        }
    }

    fn on_task_complete(&self, _phase: &Phase, success: bool) {
        if let Ok(bar) = self.phase_bar.lock()
            && let Some(pb) = bar.as_ref()
        {
            if !success {
                pb.set_message(format!("{} failed", "x".red()));
            }
            pb.inc(1);
        }
    }

    fn on_phase_complete(&self, phase: &Phase) {
        let finished = self.phase_bar.lock().ok().and_then(|mut bar| bar.take());
        if let Some(pb) = finished {
            pb.finish_with_message(format!("{} complete!", phase.display_name().green()));
        }
    }
}

/// Simple text-based progress (no fancy UI), written to stderr
pub struct SimpleProgress;

impl DebateProgressNotifier for SimpleProgress {
    fn on_phase_start(&self, phase: &Phase, total_tasks: usize) {
        eprintln!(
            "{} {} ({} tasks)",
            "->".cyan(),
            phase.display_name().bold(),
            total_tasks
        );
    }

    fn on_participant_complete(
        &self,
        _phase: &Phase,
        participant: &Participant,
        record: &ResponseRecord,
    ) {
        if record.is_failed() {
            eprintln!("  {} {} (failed)", "x".red(), participant);
        } else {
            eprintln!("  {} {}", "v".green(), participant);
        }
    }

    fn on_task_complete(&self, _phase: &Phase, success: bool) {
        if success {
            eprintln!("  {} done", "v".green());
        } else {
            eprintln!("  {} failed", "x".red());
        }
    }

    fn on_phase_complete(&self, _phase: &Phase) {
        eprintln!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use debate_domain::Stance;

    #[test]
    fn test_reporter_tracks_one_bar_per_phase() {
        let reporter = ProgressReporter::new();
        let participant = Participant::new(1, "Perspective A", Stance::For, "GPT-4");

        reporter.on_phase_start(&Phase::Research, 1);
        reporter.on_participant_start(&Phase::Research, &participant);
        reporter.on_participant_complete(
            &Phase::Research,
            &participant,
            &ResponseRecord::fulfilled("ok", vec![]),
        );
        assert_eq!(
            reporter
                .phase_bar
                .lock()
                .unwrap()
                .as_ref()
                .map(ProgressBar::position),
            Some(1)
        );

        reporter.on_phase_complete(&Phase::Research);
        assert!(reporter.phase_bar.lock().unwrap().is_none());
    }

    #[test]
    fn test_paper_phase_bar_reaches_its_length() {
        let reporter = ProgressReporter::new();

        reporter.on_phase_start(&Phase::Paper, 1);
        reporter.on_task_complete(&Phase::Paper, true);

        let bar = reporter.phase_bar.lock().unwrap();
        let pb = bar.as_ref().unwrap();
        assert_eq!(pb.position(), 1);
        assert_eq!(pb.length(), Some(1));
    }

    #[test]
    fn test_mode_follows_terminal() {
        assert_eq!(ProgressMode::choose(false, true), ProgressMode::Off);
        assert_eq!(ProgressMode::choose(false, false), ProgressMode::Off);
        assert_eq!(ProgressMode::choose(true, false), ProgressMode::Plain);
        assert_eq!(ProgressMode::choose(true, true), ProgressMode::Bars);
    }

    #[test]
    fn test_plain_notifier_accepts_every_event() {
        let notifier = ProgressMode::Plain.notifier();
        let participant = Participant::new(3, "Perspective C", Stance::Neutral, "PaLM 2");

        notifier.on_phase_start(&Phase::FollowUp, 1);
        notifier.on_participant_start(&Phase::FollowUp, &participant);
        notifier.on_participant_complete(
            &Phase::FollowUp,
            &participant,
            &ResponseRecord::failed("down"),
        );
        notifier.on_task_complete(&Phase::Paper, false);
        notifier.on_phase_complete(&Phase::FollowUp);
    }

    #[test]
    fn test_status_line_marks_failures() {
        let participant = Participant::new(2, "Perspective B", Stance::Against, "Claude");
        let failed = ProgressReporter::status_line(&participant, &ResponseRecord::failed("down"));
        let ok = ProgressReporter::status_line(
            &participant,
            &ResponseRecord::fulfilled("fine", vec![]),
        );
        assert!(failed.contains("Perspective B (Against)"));
        assert_ne!(failed, ok);
    }
}
