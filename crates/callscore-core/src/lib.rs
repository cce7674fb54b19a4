#![deny(missing_docs)]

//! # callscore-core — Foundational Types for Call Compliance Scoring
//!
//! This crate defines the types every other crate in the workspace depends
//! on. It has no internal crate dependencies, only `serde`, `serde_json`,
//! `serde_yaml`, `thiserror` and `tracing` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Single [`RiskLevel`] enum.** One ordered definition of the four
//!    severity buckets, used by the classifier, the score result and the
//!    CLI exit-code mapping.
//!
//! 2. **[`Configuration`] is a value, not a global.** Keyword lists,
//!    thresholds and the placeholder bonus are passed explicitly to every
//!    scoring call. Concurrent callers share it read-only.
//!
//! 3. **Configuration problems never reach the scorer.** [`resolve_config`]
//!    always returns a usable configuration and reports a fallback through
//!    [`ConfigSource::Fallback`] instead of failing.
//!
//! 4. **Typed errors.** [`ValidationError`] and [`ConfigError`] are
//!    `thiserror` enums, no `Box<dyn Error>`, no `.unwrap()` outside tests.

pub mod config;
pub mod error;
pub mod level;
pub mod result;

// Re-export primary types at crate root for ergonomic imports.
pub use config::{
    load_config_file, resolve_config, ConfigSource, Configuration, ResolvedConfig,
    RiskThresholds, RULES_NAMESPACE,
};
pub use error::{ConfigError, ValidationError};
pub use level::RiskLevel;
pub use result::ScoreResult;
