//! REPL (Read-Eval-Print Loop) for interactive debates

use crate::config::ReplConfig;
use crate::{ConsoleFormatter, ProgressMode};
use colored::Colorize;
use debate_application::{
    DebateError, DebateOrchestrator, GeneratePaperUseCase, ResponseGenerator, Transport,
};
use debate_domain::{DebateSession, PaperDocument, predefined_topics};
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};

const HISTORY_CAPACITY: usize = 1000;

/// A parsed line of interactive input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Start research on a topic (or a predefined topic number)
    Topic(String),
    /// Run another round on the current topic
    Round,
    /// Ask every participant a follow-up question
    Ask(String),
    /// Synthesize a research paper from the debate so far
    Paper,
    Topics,
    Participants,
    Help,
    Quit,
    /// A known command used without its required argument
    Usage(&'static str),
    Unknown(String),
}

impl ReplCommand {
    /// Parse one input line; blank lines yield `None`.
    ///
    /// A line without a leading `/` is a follow-up question while a debate is
    /// running and a new topic otherwise.
    pub fn parse(line: &str, debate_running: bool) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let Some(command) = line.strip_prefix('/') else {
            return Some(if debate_running {
                Self::Ask(line.to_string())
            } else {
                Self::Topic(line.to_string())
            });
        };

        let (name, arg) = match command.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (command, ""),
        };

        let parsed = match name {
            "topic" | "t" if arg.is_empty() => Self::Usage("/topic <topic or number>"),
            "topic" | "t" => Self::Topic(arg.to_string()),
            "round" | "r" => Self::Round,
            "ask" | "a" if arg.is_empty() => Self::Usage("/ask <question>"),
            "ask" | "a" => Self::Ask(arg.to_string()),
            "paper" | "p" => Self::Paper,
            "topics" => Self::Topics,
            "participants" => Self::Participants,
            "help" | "h" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ => Self::Unknown(line.to_string()),
        };
        Some(parsed)
    }
}

/// Interactive debate REPL
pub struct ChatRepl<G, T>
where
    G: ResponseGenerator + ?Sized + 'static,
    T: Transport + ?Sized + 'static,
{
    orchestrator: DebateOrchestrator<G>,
    paper: GeneratePaperUseCase<T>,
    config: ReplConfig,
    last_paper: Option<PaperDocument>,
}

impl<G, T> ChatRepl<G, T>
where
    G: ResponseGenerator + ?Sized + 'static,
    T: Transport + ?Sized + 'static,
{
    /// Create a new ChatRepl
    pub fn new(orchestrator: DebateOrchestrator<G>, paper: GeneratePaperUseCase<T>) -> Self {
        Self {
            orchestrator,
            paper,
            config: ReplConfig::default(),
            last_paper: None,
        }
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    pub fn session(&self) -> Option<&DebateSession> {
        self.orchestrator.session()
    }

    /// The most recently synthesized paper, if any
    pub fn last_paper(&self) -> Option<&PaperDocument> {
        self.last_paper.as_ref()
    }

    /// Run the interactive REPL until `/quit` or end of input
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut editor = Reedline::create();

        if let Some(path) = self.config.history_path() {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            if let Ok(history) = FileBackedHistory::with_file(HISTORY_CAPACITY, path) {
                editor = editor.with_history(Box::new(history));
            }
        }

        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("debate".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        loop {
            match editor.read_line(&prompt)? {
                Signal::Success(buffer) => {
                    let running = self.orchestrator.session().is_some();
                    let Some(command) = ReplCommand::parse(&buffer, running) else {
                        continue;
                    };
                    if self.execute(command).await {
                        break;
                    }
                }
                Signal::CtrlC => {
                    println!("^C");
                }
                _ => {
                    println!("Bye!");
                    break;
                }
            }
        }

        Ok(())
    }

    /// Execute one command. Returns true if the session should end.
    pub async fn execute(&mut self, command: ReplCommand) -> bool {
        let reporter = ProgressMode::detect(self.config.show_progress).notifier();
        let progress = reporter.as_ref();

        match command {
            ReplCommand::Topic(topic) => {
                let topic = Self::resolve_topic(&topic);
                self.last_paper = None;
                let result = self
                    .orchestrator
                    .start_research_with_progress(&topic, progress)
                    .await;
                Self::print_round(result);
            }
            ReplCommand::Round => {
                let result = self.orchestrator.new_round_with_progress(progress).await;
                Self::print_round(result);
            }
            ReplCommand::Ask(question) => {
                let result = self
                    .orchestrator
                    .follow_up_with_progress(&question, progress)
                    .await;
                Self::print_round(result);
            }
            ReplCommand::Paper => match self.orchestrator.session() {
                Some(session) => {
                    let paper = self.paper.execute_for_session(session, progress).await;
                    println!("{}", ConsoleFormatter::format_paper(&paper));
                    self.last_paper = Some(paper);
                }
                None => Self::print_error(&DebateError::NoSession),
            },
            ReplCommand::Topics => {
                println!();
                println!("Predefined topics (use /topic <number>):");
                print!("{}", ConsoleFormatter::format_topics(&predefined_topics()));
                println!();
            }
            ReplCommand::Participants => {
                println!();
                print!(
                    "{}",
                    ConsoleFormatter::format_participants(self.orchestrator.participants())
                );
                println!();
            }
            ReplCommand::Help => Self::print_help(),
            ReplCommand::Quit => {
                println!("Bye!");
                return true;
            }
            ReplCommand::Usage(usage) => println!("Usage: {}", usage),
            ReplCommand::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
            }
        }

        false
    }

    /// A number picks a predefined topic; anything else is used verbatim
    fn resolve_topic(input: &str) -> String {
        input
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| predefined_topics().get(i).map(|t| (*t).to_string()))
            .unwrap_or_else(|| input.to_string())
    }

    fn print_round(result: Result<&DebateSession, DebateError>) {
        match result {
            Ok(session) => {
                println!(
                    "{}",
                    ConsoleFormatter::format_round(session, session.round())
                );
            }
            Err(e) => Self::print_error(&e),
        }
    }

    fn print_error(error: &DebateError) {
        eprintln!("{} {}", "Error:".red().bold(), error);
    }

    fn print_welcome(&self) {
        println!();
        println!("{}", "AI Debate - Interactive Mode".cyan().bold());
        println!();
        println!(
            "Participants: {}",
            self.orchestrator
                .participants()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        );
        println!("Type a topic to start, or /topics to pick one. /help lists commands.");
        println!();
    }

    fn print_help() {
        println!();
        println!("Commands:");
        println!("  /topic <t|n>     - Start research on a topic or predefined topic number");
        println!("  /round           - Run another debate round");
        println!("  /ask <question>  - Ask every participant a follow-up question");
        println!("  /paper           - Synthesize a research paper");
        println!("  /topics          - List predefined topics");
        println!("  /participants    - Show the participants");
        println!("  /help, /h, /?    - Show this help");
        println!("  /quit, /exit, /q - Exit");
        println!();
        println!("A line without a command starts a debate, or asks a follow-up once one is running.");
        println!();
    }
}
