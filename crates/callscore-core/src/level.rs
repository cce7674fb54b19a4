//! # Risk Levels
//!
//! Defines the [`RiskLevel`] enum, the discrete severity bucket a risk score
//! maps to. Variants are declared in ascending severity so the derived
//! `Ord` matches the classification order `LOW < MEDIUM < HIGH < CRITICAL`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Severity bucket derived from a risk score via configured thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    /// No unhedged claim, or every claim was neutralized.
    Low,
    /// A single unhedged claim category.
    Medium,
    /// Both claim categories without mitigation.
    High,
    /// Score above every configured ceiling.
    Critical,
}

impl RiskLevel {
    /// Return all levels in ascending severity.
    pub fn all() -> &'static [RiskLevel] {
        &[Self::Low, Self::Medium, Self::High, Self::Critical]
    }

    /// Uppercase identifier used in JSON output and configuration keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }

    /// Process exit status conveying this level to orchestration scripts.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Low => 0,
            Self::Medium => 1,
            Self::High => 2,
            Self::Critical => 3,
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOW" => Ok(Self::Low),
            "MEDIUM" => Ok(Self::Medium),
            "HIGH" => Ok(Self::High),
            "CRITICAL" => Ok(Self::Critical),
            other => Err(format!("unknown risk level: {other:?}")),
        }
    }
}
