//! # Config Subcommand
//!
//! Prints the effective configuration as YAML, preceded by a comment naming
//! where it came from. The output is itself a valid override document.

use std::io::Write;

use anyhow::{Context, Result};

use callscore_core::{ConfigSource, ResolvedConfig};

/// Execute the config subcommand.
pub fn run_show_config(resolved: &ResolvedConfig) -> Result<u8> {
    let rendered = render_config(resolved)?;
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .and_then(|()| stdout.flush())
        .context("failed to write configuration to stdout")?;
    Ok(0)
}

/// Render the provenance comment and the configuration YAML.
pub fn render_config(resolved: &ResolvedConfig) -> Result<String> {
    let provenance = match &resolved.source {
        ConfigSource::Defaults => "# source: built-in defaults".to_string(),
        ConfigSource::File(path) => format!("# source: {}", path.display()),
        ConfigSource::Fallback { path, error } => format!(
            "# source: built-in defaults (override {} rejected: {error})",
            path.display()
        ),
    };
    let yaml = serde_yaml::to_string(&resolved.config)?;
    Ok(format!("{provenance}\n{yaml}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use callscore_core::{resolve_config, Configuration};

    #[test]
    fn defaults_render_as_override_document() {
        let rendered = render_config(&resolve_config(None)).unwrap();
        assert!(rendered.starts_with("# source: built-in defaults\n"));

        let parsed: Configuration = serde_yaml::from_str(&rendered).unwrap();
        assert_eq!(parsed, Configuration::default());
    }

    #[test]
    fn fallback_is_named_in_provenance() {
        let resolved = resolve_config(Some(std::path::Path::new("/nonexistent/rules.yaml")));
        let rendered = render_config(&resolved).unwrap();
        assert!(rendered.contains("rejected"));
        assert!(rendered.contains("/nonexistent/rules.yaml"));
    }

    #[test]
    fn rules_namespace_is_echoed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules.yaml");
        std::fs::write(&path, "compliance_rules:\n  escalation_contact: legal@example.org\n")
            .unwrap();

        let rendered = render_config(&resolve_config(Some(&path))).unwrap();
        assert!(rendered.contains("compliance_rules:"));
        assert!(rendered.contains("escalation_contact: legal@example.org"));
    }
}
