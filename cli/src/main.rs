//! CLI entrypoint for ai-debate
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use debate_application::{
    ConversationLogger, DebateOrchestrator, GeneratePaperUseCase, GetResponseUseCase,
    NoConversationLogger, ResponseGenerator,
};
use debate_domain::predefined_topics;
use debate_infrastructure::{
    BackendMode, CannedResponseGenerator, CannedTable, ConfigLoader, FileConfig, HttpTransport,
    JsonlConversationLogger,
};
use debate_presentation::{
    ChatRepl, Cli, ConsoleFormatter, OutputConfig, ProgressMode, ReplConfig,
};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    apply_cli_overrides(&mut config, &cli);

    // Keep the guard alive so the file writer flushes on exit
    let _log_guard = init_tracing(cli.verbose, config.logging.log_dir.as_deref().map(Path::new));

    info!("Starting ai-debate");

    let issues = config.validate();
    if !issues.is_empty() {
        for issue in &issues {
            warn!("Invalid configuration: {}", issue);
        }
        bail!(
            "Invalid configuration:\n  {}",
            issues
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n  ")
        );
    }

    let output = OutputConfig {
        format: config.output.format.unwrap_or_default(),
        color: config.output.color,
    };
    output.apply_color();

    if cli.list_topics {
        println!("Predefined topics:");
        print!("{}", ConsoleFormatter::format_topics(&predefined_topics()));
        return Ok(());
    }

    // === Dependency Injection ===
    let retry = config.retry.to_policy();
    let transport = Arc::new(
        HttpTransport::new(config.backend.base_url.clone(), config.backend.timeout())
            .context("Failed to build HTTP client")?,
    );

    let generator: Arc<dyn ResponseGenerator> = match config.backend.mode {
        BackendMode::Canned => {
            let table = match &config.backend.canned_table {
                Some(path) => CannedTable::load(path)?,
                None => CannedTable::builtin()?,
            };
            info!("Using canned responses");
            Arc::new(
                CannedResponseGenerator::new(table)
                    .with_latency(config.backend.simulated_latency()),
            )
        }
        BackendMode::Remote => {
            info!("Using backend at {}", transport.base_url());
            Arc::new(
                GetResponseUseCase::new(Arc::clone(&transport)).with_retry_policy(retry),
            )
        }
    };

    let logger: Arc<dyn ConversationLogger> = match &config.logging.transcript {
        Some(path) => match JsonlConversationLogger::new(path) {
            Some(logger) => {
                info!("Writing transcript to {}", logger.path().display());
                Arc::new(logger)
            }
            None => Arc::new(NoConversationLogger),
        },
        None => Arc::new(NoConversationLogger),
    };

    let registry = config.debate.to_registry()?;
    let mut orchestrator = DebateOrchestrator::new(generator, registry)
        .with_params(config.debate.to_params())
        .with_conversation_logger(Arc::clone(&logger));
    let paper_use_case = GeneratePaperUseCase::new(transport)
        .with_retry_policy(retry)
        .with_conversation_logger(logger);

    // Interactive mode
    if cli.interactive {
        let repl_config = ReplConfig {
            show_progress: config.repl.show_progress && !cli.quiet,
            history_file: config.repl.history_file.clone(),
        };
        let mut repl = ChatRepl::new(orchestrator, paper_use_case).with_config(repl_config);
        repl.run().await?;
        return Ok(());
    }

    // Single debate mode - topic is required
    let Some(topic) = cli.topic.clone() else {
        bail!("A topic is required. Use --interactive or --list-topics.");
    };

    let progress = ProgressMode::detect(!cli.quiet && output.allows_progress()).notifier();
    let progress = progress.as_ref();

    orchestrator
        .start_research_with_progress(&topic, progress)
        .await?;
    for _ in 1..config.debate.rounds {
        orchestrator.new_round_with_progress(progress).await?;
    }
    for question in &cli.follow_up {
        orchestrator
            .follow_up_with_progress(question, progress)
            .await?;
    }

    let session = orchestrator
        .session()
        .context("Debate finished without a session")?;

    let paper = if cli.paper || output.needs_paper() {
        Some(paper_use_case.execute_for_session(session, progress).await)
    } else {
        None
    };

    println!(
        "{}",
        ConsoleFormatter::render(output.format, session, paper.as_ref())
    );

    Ok(())
}

/// CLI flags take priority over every configuration source
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if cli.canned {
        config.backend.mode = BackendMode::Canned;
    }
    if let Some(base_url) = &cli.base_url {
        config.backend.base_url = base_url.clone();
    }
    if let Some(stagger_ms) = cli.stagger_ms {
        config.debate.stagger_ms = stagger_ms;
    }
    if let Some(rounds) = cli.rounds {
        config.debate.rounds = rounds;
    }
    if let Some(format) = cli.output {
        config.output.format = Some(format.into());
    }
    if cli.no_color {
        config.output.color = false;
    }
    if let Some(path) = &cli.transcript {
        config.logging.transcript = Some(path.display().to_string());
    }
}

/// Console logging by verbosity, plus daily-rolling JSON files when a log
/// directory is configured
fn init_tracing(verbose: u8, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::new(filter));

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "ai-debate.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(writer)
                .with_filter(EnvFilter::new("debug"));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}

#[cfg(test)]
mod tests {
    use super::*;
    use debate_domain::OutputFormat;

    #[test]
    fn test_cli_overrides_config() {
        let cli = Cli::parse_from([
            "ai-debate",
            "--canned",
            "--base-url",
            "http://debate.test",
            "--stagger-ms",
            "0",
            "--rounds",
            "3",
            "-o",
            "transcript",
            "--transcript",
            "out/debate.jsonl",
            "Topic",
        ]);
        let mut config = FileConfig::default();
        apply_cli_overrides(&mut config, &cli);

        assert_eq!(config.backend.mode, BackendMode::Canned);
        assert_eq!(config.backend.base_url, "http://debate.test");
        assert_eq!(config.debate.stagger_ms, 0);
        assert_eq!(config.debate.rounds, 3);
        assert_eq!(config.output.format, Some(OutputFormat::Transcript));
        assert_eq!(
            config.logging.transcript.as_deref(),
            Some(Path::new("out/debate.jsonl").display().to_string().as_str())
        );
    }

    #[test]
    fn test_absent_flags_keep_config() {
        let cli = Cli::parse_from(["ai-debate", "Topic"]);
        let mut config = FileConfig::default();
        config.debate.rounds = 2;
        apply_cli_overrides(&mut config, &cli);
        assert_eq!(config, {
            let mut expected = FileConfig::default();
            expected.debate.rounds = 2;
            expected
        });
    }
}
