//! # callscore-cli — Command-Line Interface for Call Scoring
//!
//! Provides the `callscore` binary, the thin plumbing around the scoring
//! engine: record loading, configuration resolution, output and exit codes.
//!
//! ## Subcommands
//!
//! - `callscore score RECORD` — Score one JSON call record and print the scorecard.
//! - `callscore config` — Print the effective configuration as YAML.
//!
//! ## Exit Codes
//!
//! Orchestration scripts branch on the status without parsing output:
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0–3 | Risk level LOW, MEDIUM, HIGH, CRITICAL |
//! | 10 | Record file not found |
//! | 11 | Record is not valid JSON |
//! | 12 | Record failed structural validation |
//! | 13 | Unexpected error |
//! | 64 | Command-line usage error |
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from business logic.
//! - Handlers delegate to `callscore-engine`; no scoring logic lives here.
//! - stdout carries only machine-readable output; logs go to stderr.

pub mod exit;
pub mod record;
pub mod score;
pub mod show_config;
