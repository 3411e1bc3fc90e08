//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for a finished debate
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Every round plus the paper, when one was generated
    Full,
    /// Only the per-participant transcript
    Transcript,
    /// Only the research paper
    Paper,
    /// JSON output
    Json,
}

impl From<OutputFormat> for debate_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => Self::Full,
            OutputFormat::Transcript => Self::Transcript,
            OutputFormat::Paper => Self::Paper,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// CLI arguments for ai-debate
#[derive(Parser, Debug)]
#[command(name = "ai-debate")]
#[command(author, version, about = "Multi-perspective AI debate with research paper synthesis")]
#[command(long_about = r#"
ai-debate asks several AI participants, each holding a fixed stance, to
research a topic, debate it over any number of rounds and answer follow-up
questions. The collected perspectives can then be synthesized into a
structured research paper.

Configuration files are loaded from (in priority order):
1. AI_DEBATE_* environment variables
2. --config <path>     Explicit config file
3. ./debate.toml       Project-level config
4. ~/.config/ai-debate/config.toml   Global config

Example:
  ai-debate "Is AI a threat to humanity?"
  ai-debate --rounds 2 --follow-up "What about jobs?" --paper "Should cryptocurrency be regulated?"
  ai-debate --canned --interactive
"#)]
pub struct Cli {
    /// The topic to debate (not required in interactive mode)
    pub topic: Option<String>,

    /// Number of debate rounds, including the opening research round
    #[arg(short, long, value_name = "N")]
    pub rounds: Option<u32>,

    /// Follow-up question asked after the rounds (can be specified multiple times)
    #[arg(short, long = "follow-up", value_name = "QUESTION")]
    pub follow_up: Vec<String>,

    /// Synthesize a research paper at the end
    #[arg(short, long)]
    pub paper: bool,

    /// Answer from the built-in canned responses instead of the backend
    #[arg(long)]
    pub canned: bool,

    /// Base URL of the debate backend
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Delay step between participant requests, in milliseconds
    #[arg(long, value_name = "MS")]
    pub stagger_ms: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Start an interactive debate session
    #[arg(short, long)]
    pub interactive: bool,

    /// List the predefined topics and exit
    #[arg(long)]
    pub list_topics: bool,

    /// Append the debate transcript as JSONL to this file
    #[arg(long, value_name = "PATH")]
    pub transcript: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_full_invocation() {
        let cli = Cli::try_parse_from([
            "ai-debate",
            "--rounds",
            "2",
            "-f",
            "What about jobs?",
            "--follow-up",
            "And privacy?",
            "--paper",
            "--canned",
            "--stagger-ms",
            "0",
            "-o",
            "json",
            "-vv",
            "Is AI a threat to humanity?",
        ])
        .unwrap();

        assert_eq!(cli.topic.as_deref(), Some("Is AI a threat to humanity?"));
        assert_eq!(cli.rounds, Some(2));
        assert_eq!(cli.follow_up, vec!["What about jobs?", "And privacy?"]);
        assert!(cli.paper);
        assert!(cli.canned);
        assert_eq!(cli.stagger_ms, Some(0));
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
        assert!(!cli.interactive);
    }

    #[test]
    fn test_defaults_leave_config_in_charge() {
        let cli = Cli::try_parse_from(["ai-debate", "--interactive"]).unwrap();
        assert!(cli.topic.is_none());
        assert!(cli.rounds.is_none());
        assert!(cli.output.is_none());
        assert!(cli.base_url.is_none());
        assert!(cli.interactive);
    }

    #[test]
    fn test_output_format_maps_to_domain() {
        assert_eq!(
            debate_domain::OutputFormat::from(OutputFormat::Transcript),
            debate_domain::OutputFormat::Transcript
        );
        assert!(Cli::try_parse_from(["ai-debate", "-o", "synthesis"]).is_err());
    }
}
