//! # Threshold Classifier
//!
//! Maps a clamped risk score to a [`RiskLevel`] by scanning the ordered
//! `(ceiling, level)` table from [`RiskThresholds::ladder`]. The first level
//! whose ceiling is at least the score wins; past the last ceiling the level
//! is CRITICAL.
//!
//! Threshold ordering is enforced by the configuration provider, not here.

use callscore_core::{RiskLevel, RiskThresholds};

/// Classify a non-negative score.
pub fn classify(score: u32, thresholds: &RiskThresholds) -> RiskLevel {
    thresholds
        .ladder()
        .into_iter()
        .find(|(ceiling, _)| score <= *ceiling)
        .map(|(_, level)| level)
        .unwrap_or(RiskLevel::Critical)
}
