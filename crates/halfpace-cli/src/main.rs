//! Halfpace CLI - half-marathon predictions from free-text descriptions.

use clap::Parser;
use halfpace_cli::commands;
use halfpace_cli::repl;
use halfpace_cli::{Analyzer, Cli, Command, Config, Formatter};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> halfpace_cli::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_path = match &cli.config {
        Some(path) => PathBuf::from(path),
        None => Config::path()?,
    };
    let config = Config::load_from(&config_path)?;

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Some(Command::Config(args)) => {
            commands::execute_config(args, &config, &config_path, &formatter)?;
        }
        None | Some(Command::Repl) => {
            let analyzer = Analyzer::from_config(&config)?;
            repl::run_repl(&config, &analyzer, &formatter).await?;
        }
        Some(Command::Analyze(args)) => {
            let analyzer = Analyzer::from_config(&config)?;
            commands::execute_analyze(args, &analyzer, &formatter).await?;
        }
        Some(Command::Parse(args)) => {
            let analyzer = Analyzer::from_config(&config)?;
            commands::execute_parse(args, &analyzer, &formatter)?;
        }
        Some(Command::Predict(args)) => {
            let analyzer = Analyzer::from_config(&config)?;
            commands::execute_predict(args, &analyzer, &formatter)?;
        }
    }

    Ok(())
}

/// Logs go to stderr; `RUST_LOG` takes precedence over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
