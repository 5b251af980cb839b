//! CLI entrypoint for helpdesk
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use helpdesk_application::{ConversationLogger, RouteQueryInput, RouteQueryUseCase};
use helpdesk_domain::{OutputFormat, Query};
use helpdesk_infrastructure::{
    ConfigLoader, FileConfig, JsonlConversationLogger, build_generation_gateways,
    build_retriever, expand_home,
};
use helpdesk_presentation::{
    ChatRepl, Cli, ConsoleFormatter, OutputConfig, ProgressReporter, ReplConfig,
    load_history_file,
};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("failed to load configuration: {}", e))?
    };

    let _log_guard = init_tracing(cli.verbose, config.logging.file.as_deref())?;
    info!("Starting helpdesk");

    for issue in config.ensure_valid()? {
        warn!("{}", issue.message);
    }

    let output = OutputConfig {
        format: cli
            .output
            .map(OutputFormat::from)
            .or(config.output.format)
            .unwrap_or_default(),
        color: config.output.color,
    };
    if !output.color {
        colored::control::set_override(false);
    }

    let use_case = build_use_case(&config)?;

    // Chat mode
    if cli.chat {
        let repl = ReplConfig {
            show_progress: config.repl.show_progress,
            history_file: config.repl.history_file.as_deref().map(expand_home),
        };
        let mut chat = ChatRepl::new(use_case)
            .with_output(output)
            .with_repl_config(repl)
            .with_progress(config.repl.show_progress && !cli.quiet);

        chat.run().await?;
        return Ok(());
    }

    // Single query mode - query is required
    let Some(query) = cli.query.as_deref().and_then(Query::try_new) else {
        bail!("A non-empty query is required. Use --chat for interactive mode.");
    };

    let history = match &cli.history {
        Some(path) => load_history_file(path)?,
        None => Vec::new(),
    };
    info!("Loaded {} history entries", history.len());

    let input = RouteQueryInput::new(query, history);
    let result = match (cli.direct, cli.quiet) {
        (true, true) => use_case.execute_direct(input).await?,
        (true, false) => {
            let progress = ProgressReporter::new();
            use_case.execute_direct_with_progress(input, &progress).await?
        }
        (false, true) => use_case.execute(input).await?,
        (false, false) => {
            let progress = ProgressReporter::new();
            use_case.execute_with_progress(input, &progress).await?
        }
    };

    println!("{}", ConsoleFormatter::render(&result, output.format));

    Ok(())
}

/// Wire the adapters into the routing use case.
fn build_use_case(config: &FileConfig) -> Result<RouteQueryUseCase> {
    let (router_config, _) = config.router.to_router_config();

    let gateways = build_generation_gateways(&config.generation)
        .context("failed to set up the generation service")?;
    let retriever = build_retriever(&config.retrieval, &config.generation)
        .context("failed to set up the retrieval service")?;

    let mut use_case = RouteQueryUseCase::from_parts(
        retriever,
        gateways.classifier,
        gateways.answer,
        &router_config,
    );

    if let Some(path) = &config.logging.conversation_log {
        let path = expand_home(path);
        match JsonlConversationLogger::new(&path) {
            Some(logger) => {
                info!("Conversation log: {}", logger.path().display());
                let logger: Arc<dyn ConversationLogger> = Arc::new(logger);
                use_case = use_case.with_conversation_logger(logger);
            }
            None => warn!("Conversation log disabled: cannot open {}", path.display()),
        }
    }

    Ok(use_case)
}

/// Initialize logging based on verbosity level.
///
/// `RUST_LOG` overrides the `-v` count. With a log file, output goes to
/// both stderr and the file; the returned guard flushes the file on exit.
fn init_tracing(verbose: u8, log_file: Option<&str>) -> Result<Option<WorkerGuard>> {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let Some(log_file) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let path = expand_home(log_file);
    let directory = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("log file path has no file name: {}", path.display()))?;
    std::fs::create_dir_all(directory)
        .with_context(|| format!("cannot create log directory {}", directory.display()))?;

    let appender = tracing_appender::rolling::never(directory, file_name);
    let (file_writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr.and(file_writer))
        .init();

    Ok(Some(guard))
}
