//! # callscore CLI entry point
//!
//! Parses command-line arguments, initializes logging, resolves the
//! configuration, and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use callscore_cli::exit::{ErrorCategory, EXIT_USAGE};
use callscore_cli::score::{run_score, ScoreArgs};
use callscore_cli::show_config::run_show_config;
use callscore_core::resolve_config;

/// Compliance risk scoring for automated agent call transcripts.
///
/// Detects unauthorized price and legal statements, credits safety stops
/// and placeholder deferrals, and exits with a risk-level-derived status.
#[derive(Parser, Debug)]
#[command(name = "callscore", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit log lines as JSON.
    #[arg(long, global = true)]
    log_json: bool,

    /// Path to a YAML configuration override.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a call record and print the scorecard as JSON.
    Score(ScoreArgs),

    /// Print the effective configuration as YAML.
    Config,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(EXIT_USAGE),
            };
        }
    };

    init_tracing(cli.verbose, cli.log_json);
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "callscore starting");

    let resolved = resolve_config(cli.config.as_deref());

    let result = match cli.command {
        Commands::Score(args) => run_score(&args, &resolved.config),
        Commands::Config => run_show_config(&resolved),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            let category = ErrorCategory::of(&e);
            tracing::error!(category = category.as_str(), "{e:#}");
            ExitCode::from(category.exit_code())
        }
    }
}

/// Initialize tracing on stderr. `RUST_LOG` wins over `-v` when set.
fn init_tracing(verbose: u8, json: bool) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
