//! # Viewer Console
//!
//! Main entry point: reads keystrokes from stdin and drives the viewer.

use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;
use viewer_console::{load_config, ConsoleConfig, ConsoleSession};

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(name = "viewer_console", version, about = "Vim-style key sequences for a document viewer")]
struct Cli {
    /// JSON config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Document store file (overrides the config)
    #[arg(long, value_name = "PATH")]
    store: Option<PathBuf>,

    /// Page count of opened documents (overrides the config)
    #[arg(long, value_name = "N")]
    pages: Option<usize>,

    /// Log filter, e.g. `debug` or `keyseq.dispatch=trace` (overrides RUST_LOG)
    #[arg(long, value_name = "FILTER")]
    log: Option<String>,
}

fn init_logging(config: &ConsoleConfig, explicit: bool) {
    let filter = if explicit {
        EnvFilter::new(&config.log_filter)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter))
    };

    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
    {
        eprintln!("Failed to install log subscriber: {}", err);
    }
}

fn main() {
    let cli = Cli::parse();
    let explicit_log = cli.log.is_some();

    let (config, config_error) = match cli.config.as_deref().map(load_config) {
        Some(Ok(config)) => (config, None),
        Some(Err(err)) => (ConsoleConfig::default(), Some(err)),
        None => (ConsoleConfig::default(), None),
    };
    let config = config.with_overrides(cli.store, cli.pages, cli.log);

    init_logging(&config, explicit_log);
    if let Some(err) = config_error {
        tracing::warn!(error = %err, "using default config");
    }
    tracing::debug!(?config, "starting console");

    let mut session = ConsoleSession::from_config(&config).unwrap_or_else(|e| {
        eprintln!("Failed to start: {}", e);
        process::exit(1);
    });

    let stdin = io::stdin();
    if let Err(e) = session.run(stdin.lock(), io::stdout().lock()) {
        eprintln!("Console error: {}", e);
        process::exit(1);
    }
}
