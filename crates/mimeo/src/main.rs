//! Mimeo CLI - article Markdown tooling.
//!
//! Provides commands for:
//! - `render`: Render article Markdown to HTML
//! - `summary`: Print the title and preview derived from an article
//! - `check`: Validate an article the way a submission is validated

mod commands;
mod error;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, RenderArgs, SummaryArgs};
use output::Output;

/// Mimeo - article Markdown renderer.
#[derive(Parser)]
#[command(name = "mimeo", version, about)]
struct Cli {
    /// Path to configuration file (default: auto-discover mimeo.toml).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output (debug logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render Markdown to article HTML.
    Render(RenderArgs),
    /// Print the title and preview of an article.
    Summary(SummaryArgs),
    /// Validate an article for submission.
    Check(CheckArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables DEBUG level, otherwise use RUST_LOG (ERROR when unset)
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.as_deref();
    let result = match cli.command {
        Commands::Render(args) => args.execute(config_path, &output),
        Commands::Summary(args) => args.execute(&output),
        Commands::Check(args) => args.execute(config_path, &output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
