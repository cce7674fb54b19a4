//! # Score Result
//!
//! The output record of a single scoring call. Field names are the JSON
//! contract consumed by downstream tooling.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::level::RiskLevel;

/// Compliance scorecard for one agent call record.
///
/// Identity fields are echoed from the input verbatim, including `null`,
/// so that downstream joins see exactly what the loader supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Agent identifier from the record.
    pub agent_id: Value,
    /// Contact display name, `null` when absent.
    pub contact_name: Value,
    /// Opaque call timestamp, `null` when absent.
    pub timestamp: Value,
    /// Whether any price keyword was found in the transcript.
    pub price_claim: bool,
    /// Matched price keywords, in configured order.
    pub price_keywords_found: Vec<String>,
    /// Whether any legal keyword was found in the transcript.
    pub legal_claim: bool,
    /// Matched legal keywords, in configured order.
    pub legal_keywords_found: Vec<String>,
    /// Whether the agent invoked a safety stop.
    pub stop_triggered: bool,
    /// Whether the outcome carries a placeholder or stop-required sentinel.
    pub placeholder_used: bool,
    /// Clamped, non-negative risk score.
    pub risk: u32,
    /// Severity bucket for `risk`.
    pub risk_level: RiskLevel,
}
