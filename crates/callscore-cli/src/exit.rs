//! # Exit Codes
//!
//! Maps scoring outcomes and failures onto process exit statuses. Failure
//! codes never overlap the risk-level codes 0–3.

use callscore_core::ValidationError;

use crate::record::RecordLoadError;

/// The record file does not exist.
pub const EXIT_RECORD_NOT_FOUND: u8 = 10;
/// The record file is not valid JSON.
pub const EXIT_MALFORMED_JSON: u8 = 11;
/// The record failed structural validation.
pub const EXIT_VALIDATION: u8 = 12;
/// Any other failure.
pub const EXIT_UNEXPECTED: u8 = 13;
/// Command-line arguments could not be parsed.
pub const EXIT_USAGE: u8 = 64;

/// Reported category of a failed invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The record file does not exist.
    RecordNotFound,
    /// The record file is not valid JSON.
    MalformedJson,
    /// The record failed structural validation.
    Validation,
    /// I/O failures, output write failures and anything untyped.
    Unexpected,
}

impl ErrorCategory {
    /// Classify an error by the typed cause anywhere in its context chain.
    pub fn of(err: &anyhow::Error) -> Self {
        if let Some(e) = err.downcast_ref::<RecordLoadError>() {
            return match e {
                RecordLoadError::NotFound { .. } => Self::RecordNotFound,
                RecordLoadError::Json { .. } => Self::MalformedJson,
                RecordLoadError::Io { .. } => Self::Unexpected,
            };
        }
        if err.downcast_ref::<ValidationError>().is_some() {
            return Self::Validation;
        }
        Self::Unexpected
    }

    /// Process exit status for this category.
    pub fn exit_code(self) -> u8 {
        match self {
            Self::RecordNotFound => EXIT_RECORD_NOT_FOUND,
            Self::MalformedJson => EXIT_MALFORMED_JSON,
            Self::Validation => EXIT_VALIDATION,
            Self::Unexpected => EXIT_UNEXPECTED,
        }
    }

    /// Stable name used in the `category` field of the error log line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RecordNotFound => "record_not_found",
            Self::MalformedJson => "malformed_json",
            Self::Validation => "validation",
            Self::Unexpected => "unexpected",
        }
    }
}
