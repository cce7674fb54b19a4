//! # Configuration Provider
//!
//! Supplies keyword lists, risk thresholds and the placeholder bonus to the
//! scorer. Starts from fixed built-in defaults and optionally merges a YAML
//! override document on top.
//!
//! ## Override Document
//!
//! ```yaml
//! price_keywords: ["€", "euro", "preis"]   # replaces the default list
//! legal_keywords: ["gesetz"]                # replaces the default list
//! risk_thresholds:                          # per-level, missing levels keep defaults
//!   HIGH: 3
//! placeholder_bonus: -2
//! compliance_rules:                         # domain rule extensions, kept verbatim
//!   escalation_contact: legal@example.org
//! ```
//!
//! ## Failure Policy
//!
//! Configuration problems never crash the scorer. [`resolve_config`] logs
//! the [`ConfigError`], returns the defaults, and reports the fallback via
//! [`ConfigSource::Fallback`]. Callers that want a hard failure use
//! [`load_config_file`] directly.
//!
//! The provider is also the only place threshold ordering is enforced. The
//! classifier trusts `LOW <= MEDIUM <= HIGH`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ConfigError;
use crate::level::RiskLevel;

/// Top-level key under which domain rule extensions are merged.
pub const RULES_NAMESPACE: &str = "compliance_rules";

/// Built-in price claim keywords.
pub const DEFAULT_PRICE_KEYWORDS: &[&str] = &["€", "euro", "preis", "kosten", "kostet", "rabatt"];

/// Built-in legal/regulatory claim keywords.
pub const DEFAULT_LEGAL_KEYWORDS: &[&str] = &["gesetz", "rechtlich", "erlaubt", "illegal", "verboten"];

/// Built-in adjustment applied when a placeholder hedges a detected claim.
pub const DEFAULT_PLACEHOLDER_BONUS: i64 = -1;

/// Inclusive score ceilings for each non-critical risk level.
///
/// A score above `high` is [`RiskLevel::Critical`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskThresholds {
    /// Highest score still classified LOW.
    #[serde(rename = "LOW")]
    pub low: u32,
    /// Highest score still classified MEDIUM.
    #[serde(rename = "MEDIUM")]
    pub medium: u32,
    /// Highest score still classified HIGH.
    #[serde(rename = "HIGH")]
    pub high: u32,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            low: 0,
            medium: 1,
            high: 2,
        }
    }
}

impl RiskThresholds {
    /// The ordered `(ceiling, level)` table scanned by the classifier.
    pub fn ladder(&self) -> [(u32, RiskLevel); 3] {
        [
            (self.low, RiskLevel::Low),
            (self.medium, RiskLevel::Medium),
            (self.high, RiskLevel::High),
        ]
    }

    /// Whether the ceilings are non-decreasing.
    pub fn is_consistent(&self) -> bool {
        self.low <= self.medium && self.medium <= self.high
    }
}

/// Scoring configuration.
///
/// Immutable for the duration of a scoring call. Share it by reference (or
/// behind an `Arc`) across concurrent scorers; there is no process-wide
/// default instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Case-insensitive terms signaling a price claim.
    pub price_keywords: Vec<String>,
    /// Case-insensitive terms signaling a legal/regulatory claim.
    pub legal_keywords: Vec<String>,
    /// Level ceilings.
    pub risk_thresholds: RiskThresholds,
    /// Signed adjustment applied when a placeholder hedges a claim.
    pub placeholder_bonus: i64,
    /// Domain rule extensions from the override's [`RULES_NAMESPACE`] key.
    #[serde(
        rename = "compliance_rules",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub rules: Option<Value>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            price_keywords: to_owned_list(DEFAULT_PRICE_KEYWORDS),
            legal_keywords: to_owned_list(DEFAULT_LEGAL_KEYWORDS),
            risk_thresholds: RiskThresholds::default(),
            placeholder_bonus: DEFAULT_PLACEHOLDER_BONUS,
            rules: None,
        }
    }
}

impl Configuration {
    /// Check the invariants the scorer relies on.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidKeyword`] for an empty or whitespace-only
    /// keyword (it would match every transcript), and
    /// [`ConfigError::InconsistentThresholds`] for unordered ceilings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_keywords("price_keywords", &self.price_keywords)?;
        check_keywords("legal_keywords", &self.legal_keywords)?;

        let t = self.risk_thresholds;
        if !t.is_consistent() {
            return Err(ConfigError::InconsistentThresholds {
                low: t.low,
                medium: t.medium,
                high: t.high,
            });
        }
        Ok(())
    }

    /// Merge an override on top of this configuration.
    fn merged(mut self, ov: ConfigOverride) -> Self {
        if let Some(keywords) = ov.price_keywords {
            self.price_keywords = dedup_preserving_order(keywords);
        }
        if let Some(keywords) = ov.legal_keywords {
            self.legal_keywords = dedup_preserving_order(keywords);
        }
        if let Some(t) = ov.risk_thresholds {
            self.risk_thresholds = RiskThresholds {
                low: t.low.unwrap_or(self.risk_thresholds.low),
                medium: t.medium.unwrap_or(self.risk_thresholds.medium),
                high: t.high.unwrap_or(self.risk_thresholds.high),
            };
        }
        if let Some(bonus) = ov.placeholder_bonus {
            self.placeholder_bonus = bonus;
        }
        if let Some(rules) = ov.compliance_rules {
            self.rules = Some(rules);
        }
        self
    }
}

/// Partial configuration as read from an override document.
#[derive(Debug, Default, Deserialize)]
struct ConfigOverride {
    price_keywords: Option<Vec<String>>,
    legal_keywords: Option<Vec<String>>,
    risk_thresholds: Option<ThresholdOverride>,
    placeholder_bonus: Option<i64>,
    compliance_rules: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
struct ThresholdOverride {
    #[serde(rename = "LOW")]
    low: Option<u32>,
    #[serde(rename = "MEDIUM")]
    medium: Option<u32>,
    #[serde(rename = "HIGH")]
    high: Option<u32>,
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Where the effective configuration came from.
#[derive(Debug)]
pub enum ConfigSource {
    /// No override was requested.
    Defaults,
    /// The override at this path was merged successfully.
    File(PathBuf),
    /// An override was requested but could not be used; defaults apply.
    Fallback {
        /// Path that was requested.
        path: PathBuf,
        /// Why the override was rejected.
        error: ConfigError,
    },
}

/// Effective configuration plus its provenance.
#[derive(Debug)]
pub struct ResolvedConfig {
    /// Configuration to score with.
    pub config: Configuration,
    /// Provenance, including any fallback that occurred.
    pub source: ConfigSource,
}

impl ResolvedConfig {
    /// Whether the requested override was discarded in favor of defaults.
    pub fn is_fallback(&self) -> bool {
        matches!(self.source, ConfigSource::Fallback { .. })
    }
}

/// Resolve the effective configuration. Never fails.
///
/// With no path, returns the built-in defaults. With a path, merges the
/// override file; a missing, unreadable, malformed or inconsistent override
/// is logged at `warn` and replaced by the defaults.
pub fn resolve_config(override_path: Option<&Path>) -> ResolvedConfig {
    let Some(path) = override_path else {
        tracing::debug!("no configuration override supplied; using built-in defaults");
        return ResolvedConfig {
            config: Configuration::default(),
            source: ConfigSource::Defaults,
        };
    };

    match load_config_file(path) {
        Ok(config) => {
            tracing::info!(path = %path.display(), "applied configuration override");
            ResolvedConfig {
                config,
                source: ConfigSource::File(path.to_path_buf()),
            }
        }
        Err(error) => {
            tracing::warn!(
                path = %path.display(),
                error = %error,
                "configuration override unusable; falling back to built-in defaults"
            );
            ResolvedConfig {
                config: Configuration::default(),
                source: ConfigSource::Fallback {
                    path: path.to_path_buf(),
                    error,
                },
            }
        }
    }
}

/// Load an override file and merge it over the defaults, failing hard on
/// any problem.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file is missing, unreadable, not valid
/// YAML of the expected shape, or produces an invalid configuration.
pub fn load_config_file(path: &Path) -> Result<Configuration, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let ov = parse_override(&content, path)?;
    let config = Configuration::default().merged(ov);
    config.validate()?;
    Ok(config)
}

fn parse_override(content: &str, path: &Path) -> Result<ConfigOverride, ConfigError> {
    let yaml_err = |source| ConfigError::YamlParse {
        path: path.to_path_buf(),
        source,
    };

    let doc: serde_yaml::Value = serde_yaml::from_str(content).map_err(yaml_err)?;
    if doc.is_null() {
        return Ok(ConfigOverride::default());
    }
    serde_yaml::from_value(doc).map_err(yaml_err)
}

fn check_keywords(list: &'static str, keywords: &[String]) -> Result<(), ConfigError> {
    for (idx, keyword) in keywords.iter().enumerate() {
        if keyword.trim().is_empty() {
            return Err(ConfigError::InvalidKeyword {
                list,
                reason: format!("entry {idx} is empty"),
            });
        }
    }
    Ok(())
}

fn dedup_preserving_order(keywords: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(keywords.len());
    for keyword in keywords {
        if !out.contains(&keyword) {
            out.push(keyword);
        }
    }
    out
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
