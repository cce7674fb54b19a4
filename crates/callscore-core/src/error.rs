//! # Error Hierarchy
//!
//! Structured error types for call scoring, built with `thiserror`.
//!
//! Two families matter to callers:
//!
//! - [`ValidationError`] is fatal to a single scoring call. A record without
//!   an identity or with a malformed transcript cannot be scored.
//! - [`ConfigError`] is never fatal. The configuration provider logs it and
//!   degrades to the built-in defaults.

use std::path::PathBuf;

use thiserror::Error;

/// A record does not satisfy the minimal shape the scorer requires.
///
/// Messages carry the offending JSON type or field names so an operator can
/// locate the defect without re-reading the record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The record is not a JSON object.
    #[error("record must be a JSON object, got {actual}")]
    NotAnObject {
        /// JSON type name of the value that was supplied.
        actual: String,
    },

    /// One or more required fields are absent.
    #[error("missing required field(s): {}", .fields.join(", "))]
    MissingFields {
        /// Every required field that was absent, in declaration order.
        fields: Vec<String>,
    },

    /// `transcript` is present but is not a list.
    #[error("transcript must be a list of strings or {{\"text\": ...}} entries, got {actual}")]
    TranscriptNotSequence {
        /// JSON type name of the transcript value.
        actual: String,
    },
}

/// Errors raised while loading a configuration override.
///
/// The provider never lets these escape [`crate::resolve_config`]; they are
/// surfaced through [`crate::ConfigSource::Fallback`] and a `warn!` event.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The override file does not exist.
    #[error("configuration file not found: {path}")]
    NotFound {
        /// Path that was requested.
        path: PathBuf,
    },

    /// The override file exists but could not be read.
    #[error("failed to read configuration file {path}: {source}")]
    Io {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The override file is not valid YAML or does not match the expected shape.
    #[error("failed to parse configuration YAML at {path}: {source}")]
    YamlParse {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying parser error.
        source: serde_yaml::Error,
    },

    /// A keyword list contains an unusable entry.
    #[error("invalid keyword in {list}: {reason}")]
    InvalidKeyword {
        /// Name of the offending list (`price_keywords` or `legal_keywords`).
        list: &'static str,
        /// Why the entry was rejected.
        reason: String,
    },

    /// Thresholds are not ordered `LOW <= MEDIUM <= HIGH`.
    #[error("risk thresholds must satisfy LOW <= MEDIUM <= HIGH (got LOW={low}, MEDIUM={medium}, HIGH={high})")]
    InconsistentThresholds {
        /// Configured LOW ceiling.
        low: u32,
        /// Configured MEDIUM ceiling.
        medium: u32,
        /// Configured HIGH ceiling.
        high: u32,
    },
}
