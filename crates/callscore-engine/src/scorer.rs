//! # Risk Scorer
//!
//! Orchestrates validation, transcript flattening and keyword matching, then
//! aggregates the numeric risk score and its level into a [`ScoreResult`].
//!
//! ## Aggregation
//!
//! Contributions accumulate in a fixed order and the total is clamped to
//! zero exactly once, at the end:
//!
//! | Predicate | Contribution |
//! |-----------|--------------|
//! | price claim found | +1 |
//! | legal claim found | +1 |
//! | `stop_triggered` | -1 |
//! | placeholder used and any claim found | `placeholder_bonus` |
//!
//! Clamping after each step would change results when the stop credit and
//! the placeholder credit stack.

use callscore_core::{Configuration, ScoreResult, ValidationError};
use serde_json::Value;

use crate::classify::classify;
use crate::matcher::match_keywords;
use crate::transcript::flatten_transcript;
use crate::validate::validate_record;

/// Outcome sentinel: the agent deferred with a placeholder answer.
pub const PLACEHOLDER_MARKER: &str = "PLACEHOLDER";

/// Outcome sentinel: the agent flagged that a stop was required.
pub const STOP_REQUIRED_MARKER: &str = "STOP_REQUIRED";

/// Score a single agent call record.
///
/// Pure given `(record, config)`: calling it twice yields identical results,
/// and independent records may be scored concurrently against a shared
/// configuration.
///
/// # Errors
///
/// Returns the [`ValidationError`] from [`validate_record`] unchanged if the
/// record is structurally invalid. No partial result is produced.
pub fn score_record(record: &Value, config: &Configuration) -> Result<ScoreResult, ValidationError> {
    if let Err(e) = validate_record(record) {
        tracing::debug!(error = %e, "record rejected by structural validation");
        return Err(e);
    }

    let entries = record
        .get("transcript")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();
    let text = flatten_transcript(entries);

    let price = match_keywords(&text, &config.price_keywords);
    let legal = match_keywords(&text, &config.legal_keywords);

    let stop_triggered = record.get("stop_triggered").map(is_truthy).unwrap_or(false);
    let outcome = outcome_text(record.get("result"));
    let placeholder_used =
        outcome.contains(PLACEHOLDER_MARKER) || outcome.contains(STOP_REQUIRED_MARKER);

    let mut raw: i64 = 0;
    if price.found() {
        raw += 1;
    }
    if legal.found() {
        raw += 1;
    }
    if stop_triggered {
        raw -= 1;
    }
    if placeholder_used && (price.found() || legal.found()) {
        raw = raw.saturating_add(config.placeholder_bonus);
    }
    let risk = u32::try_from(raw.max(0)).unwrap_or(u32::MAX);
    let risk_level = classify(risk, &config.risk_thresholds);

    let agent_id = passthrough(record, "agent_id");
    tracing::debug!(
        agent_id = %agent_id,
        price_claim = price.found(),
        legal_claim = legal.found(),
        stop_triggered,
        placeholder_used,
        raw_score = raw,
        risk,
        risk_level = %risk_level,
        "scored record"
    );

    Ok(ScoreResult {
        agent_id,
        contact_name: passthrough(record, "contact_name"),
        timestamp: passthrough(record, "timestamp"),
        price_claim: price.found(),
        price_keywords_found: price.into_terms(),
        legal_claim: legal.found(),
        legal_keywords_found: legal.into_terms(),
        stop_triggered,
        placeholder_used,
        risk,
        risk_level,
    })
}

/// Truthiness of a loosely typed flag.
///
/// `null` and `false` are false; numbers are true when non-zero; strings,
/// arrays and objects are true when non-empty.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// The outcome field as text; absent or `null` is empty.
fn outcome_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn passthrough(record: &Value, field: &str) -> Value {
    record.get(field).cloned().unwrap_or(Value::Null)
}
