//! Console output formatter for debates and research papers

use colored::Colorize;
use debate_domain::{
    DebateSession, OutputFormat, PaperDocument, Participant, RecordStatus, ResponseRecord,
};
use serde::Serialize;

/// Formats debate sessions and papers for console display
pub struct ConsoleFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    session: &'a DebateSession,
    #[serde(skip_serializing_if = "Option::is_none")]
    paper: Option<&'a PaperDocument>,
}

impl ConsoleFormatter {
    /// Render a finished debate in the requested format
    pub fn render(
        format: OutputFormat,
        session: &DebateSession,
        paper: Option<&PaperDocument>,
    ) -> String {
        match format {
            OutputFormat::Full => Self::format(session, paper),
            OutputFormat::Transcript => Self::format_transcript(session),
            OutputFormat::Paper => match paper {
                Some(paper) => Self::format_paper(paper),
                None => format!("{}\n", "No research paper was generated.".yellow()),
            },
            OutputFormat::Json => Self::format_json(session, paper),
        }
    }

    /// Format every round, followed by the paper when present
    pub fn format(session: &DebateSession, paper: Option<&PaperDocument>) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("AI Debate"));
        output.push('\n');
        output.push_str(&format!(
            "{} {}\n\n",
            "Topic:".cyan().bold(),
            session.topic()
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Participants:".cyan().bold(),
            Self::roster(session.participants())
        ));

        for round in 1..=session.round() {
            output.push_str(&Self::format_round(session, round));
        }

        if let Some(paper) = paper {
            output.push('\n');
            output.push_str(&Self::format_paper(paper));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format one round: the record at `round` for every participant
    pub fn format_round(session: &DebateSession, round: u32) -> String {
        let mut output = Self::section_header(&format!("Round {}", round));
        let index = round.saturating_sub(1) as usize;

        for participant in session.participants() {
            if let Some(record) = session.history(participant.id).get(index) {
                output.push_str(&Self::record_block(participant, record));
            }
        }

        output
    }

    /// Format the history of each participant in turn
    pub fn format_transcript(session: &DebateSession) -> String {
        let mut output = format!(
            "{}\n\n",
            format!("=== {} ===", session.topic()).cyan().bold()
        );

        for participant in session.participants() {
            output.push_str(&format!(
                "{}\n",
                format!("{} ({}, {})", participant.name, participant.stance, participant.model)
                    .yellow()
                    .bold()
            ));
            for (i, record) in session.history(participant.id).iter().enumerate() {
                output.push_str(&format!("\n{}\n", format!("Round {}", i + 1).dimmed()));
                output.push_str(&Self::record_body(record));
            }
            output.push('\n');
        }

        output
    }

    /// Format a research paper
    pub fn format_paper(paper: &PaperDocument) -> String {
        let mut output = Self::header(&paper.title);
        output.push('\n');

        let sections = [
            ("Abstract", paper.abstract_text.as_str()),
            ("Introduction", paper.introduction.as_str()),
        ];
        for (title, content) in sections {
            output.push_str(&Self::paper_section(title, content));
        }

        if !paper.perspectives.is_empty() {
            output.push_str(&Self::section_header("Perspectives"));
            for perspective in &paper.perspectives {
                output.push_str(&format!(
                    "\n{}\n{}\n",
                    format!("-- {} --", perspective.stance).yellow().bold(),
                    perspective.content
                ));
            }
        }

        output.push_str(&Self::paper_section("Discussion", &paper.discussion));
        output.push_str(&Self::paper_section("Conclusion", &paper.conclusion));

        if !paper.references.is_empty() {
            output.push_str(&Self::section_header("References"));
            for reference in &paper.references {
                output.push_str(&format!("{}\n", reference));
            }
        }

        output
    }

    /// Format session and paper as pretty JSON
    pub fn format_json(session: &DebateSession, paper: Option<&PaperDocument>) -> String {
        serde_json::to_string_pretty(&JsonOutput { session, paper })
            .unwrap_or_else(|_| "{}".to_string())
    }

    /// Numbered list of topics
    pub fn format_topics(topics: &[&str]) -> String {
        topics
            .iter()
            .enumerate()
            .map(|(i, topic)| format!("  {}. {}\n", i + 1, topic))
            .collect()
    }

    /// One line per participant
    pub fn format_participants(participants: &[Participant]) -> String {
        participants
            .iter()
            .map(|p| {
                format!(
                    "  [{}] {} - {} ({})\n",
                    p.id,
                    p.name.bold(),
                    p.stance,
                    p.model.dimmed()
                )
            })
            .collect()
    }

    fn roster(participants: &[Participant]) -> String {
        participants
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn record_block(participant: &Participant, record: &ResponseRecord) -> String {
        let label = format!("-- {} --", participant);
        let label = match record.status {
            RecordStatus::Fulfilled => label.yellow().bold(),
            RecordStatus::Pending => label.dimmed(),
            RecordStatus::Failed => label.red().bold(),
        };
        format!("\n{}\n{}", label, Self::record_body(record))
    }

    fn record_body(record: &ResponseRecord) -> String {
        let mut output = format!("{}\n", record.text);
        if let Some(error) = &record.error {
            output.push_str(&format!("{} {}\n", "Error:".red(), error));
        }
        if !record.sources.is_empty() {
            output.push_str(&format!("{}\n", "Sources:".dimmed()));
            for source in &record.sources {
                output.push_str(&format!("  * {} <{}>\n", source.title, source.url));
            }
        }
        output
    }

    fn paper_section(title: &str, content: &str) -> String {
        if content.is_empty() {
            return String::new();
        }
        format!("{}\n{}\n", Self::section_header(title), content)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}
