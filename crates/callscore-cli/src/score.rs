//! # Score Subcommand
//!
//! Scores a single call record file and prints the scorecard as JSON.
//! The exit status is the risk level's code so that pipelines can gate on
//! severity directly.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use callscore_core::{Configuration, ScoreResult};
use callscore_engine::score_record;

use crate::record::load_record;

/// Arguments for the `callscore score` subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Path to the call record (JSON).
    #[arg(value_name = "RECORD")]
    pub record: PathBuf,

    /// Print single-line JSON instead of pretty-printed output.
    #[arg(long)]
    pub compact: bool,

    /// Also write the scorecard to this path.
    #[arg(long, short, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Execute the score subcommand.
///
/// Returns the risk level's exit code (0–3) on success.
pub fn run_score(args: &ScoreArgs, config: &Configuration) -> Result<u8> {
    let result = score_file(&args.record, config)?;
    let rendered = render(&result, args.compact)?;

    write_scorecard(&mut std::io::stdout().lock(), &rendered)
        .context("failed to write scorecard to stdout")?;

    if let Some(ref out) = args.output {
        std::fs::write(out, format!("{rendered}\n"))
            .with_context(|| format!("failed to write scorecard to {}", out.display()))?;
        tracing::info!(path = %out.display(), "wrote scorecard");
    }

    Ok(result.risk_level.exit_code())
}

/// Load and score one record file.
pub fn score_file(path: &Path, config: &Configuration) -> Result<ScoreResult> {
    let record = load_record(path)?;
    let result = score_record(&record, config)
        .with_context(|| format!("record {} failed structural validation", path.display()))?;

    tracing::info!(
        path = %path.display(),
        agent_id = %result.agent_id,
        risk = result.risk,
        risk_level = %result.risk_level,
        "scored call record"
    );
    Ok(result)
}

/// Write one rendered scorecard line and flush, so a closed stdout surfaces
/// here as an error instead of a panic.
fn write_scorecard<W: Write>(out: &mut W, rendered: &str) -> std::io::Result<()> {
    writeln!(out, "{rendered}")?;
    out.flush()
}

fn render(result: &ScoreResult, compact: bool) -> Result<String> {
    let rendered = if compact {
        serde_json::to_string(result)?
    } else {
        serde_json::to_string_pretty(result)?
    };
    Ok(rendered)
}
