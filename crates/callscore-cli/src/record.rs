//! # Record Loader
//!
//! Reads a persisted call record from disk and hands the deserialized JSON
//! value to the scorer. Shape checks are the engine's job; this module only
//! distinguishes "no such file" from "not JSON".

use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

/// Failure to obtain a JSON value from a record file.
#[derive(Error, Debug)]
pub enum RecordLoadError {
    /// The record file does not exist.
    #[error("record file not found: {path}")]
    NotFound { path: PathBuf },

    /// The record file exists but could not be read.
    #[error("failed to read record file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The record file is not valid JSON.
    #[error("malformed JSON in record file {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Load a call record as a JSON value.
pub fn load_record(path: &Path) -> Result<Value, RecordLoadError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            RecordLoadError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            RecordLoadError::Io {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let record = serde_json::from_str(&content).map_err(|e| RecordLoadError::Json {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::debug!(path = %path.display(), "loaded call record");
    Ok(record)
}
