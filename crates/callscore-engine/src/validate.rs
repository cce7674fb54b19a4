//! # Structural Validation
//!
//! Checks that a raw record has the minimal shape the scorer needs before
//! any scoring arithmetic runs. Validation reports every missing required
//! field at once so that operators fix a record in one pass.

use callscore_core::ValidationError;
use serde_json::Value;

/// Fields every record must carry. Presence is checked, not type.
pub const REQUIRED_FIELDS: &[&str] = &["agent_id"];

/// Validate the shape of a raw record.
///
/// Has no side effects; the caller decides whether a failure is fatal.
///
/// # Errors
///
/// - [`ValidationError::NotAnObject`] if `record` is not a JSON object.
/// - [`ValidationError::MissingFields`] listing every absent required field.
/// - [`ValidationError::TranscriptNotSequence`] if `transcript` is present
///   but not an array.
pub fn validate_record(record: &Value) -> Result<(), ValidationError> {
    let Some(obj) = record.as_object() else {
        return Err(ValidationError::NotAnObject {
            actual: json_type_name(record).to_string(),
        });
    };

    let missing: Vec<String> = REQUIRED_FIELDS
        .iter()
        .filter(|field| !obj.contains_key(**field))
        .map(|field| field.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields { fields: missing });
    }

    if let Some(transcript) = obj.get("transcript") {
        if !transcript.is_array() {
            return Err(ValidationError::TranscriptNotSequence {
                actual: json_type_name(transcript).to_string(),
            });
        }
    }

    Ok(())
}

/// JSON type name used in diagnostics.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
