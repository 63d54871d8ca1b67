//! Scan configuration parser
//!
//! Parses `stratus.toml` into global scan options and per-check toggles,
//! and carries the typed runtime settings handed to every check.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::check::registry;
use crate::snapshot::Snapshot;

/// Global options applied to the whole scan
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GlobalConfig {
    /// Regions to evaluate; empty means discover them from the snapshot
    #[serde(default)]
    pub regions: Vec<String>,
    /// Exit non-zero when any FAIL result is produced
    #[serde(default)]
    pub fail_exit_code: bool,
}

/// A per-check toggle
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckToggle {
    /// Check id as listed by the registry
    pub id: String,
    /// Whether the runner executes this check (default: true)
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

const fn default_enabled() -> bool {
    true
}

/// Top-level configuration parsed from stratus.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanConfig {
    /// Global scan options
    #[serde(default)]
    pub global: GlobalConfig,
    /// Per-check toggles; checks not listed stay enabled
    #[serde(rename = "check", default)]
    pub checks: Vec<CheckToggle>,
}

impl ScanConfig {
    /// Parse a stratus.toml file from a path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
    }

    /// Parse stratus.toml content from a string
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse stratus.toml")?;
        config.validate()?;
        Ok(config)
    }

    /// Whether the check with `id` should run. Checks without a toggle
    /// entry are enabled.
    #[must_use]
    pub fn is_enabled(&self, id: &str) -> bool {
        self.checks
            .iter()
            .find(|toggle| toggle.id == id)
            .is_none_or(|toggle| toggle.enabled)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        // Check for duplicate toggle entries
        let mut seen = HashSet::new();
        for toggle in &self.checks {
            if !seen.insert(&toggle.id) {
                bail!("Duplicate check id: '{}'", toggle.id);
            }
        }

        // Every toggle must name a built-in check
        for toggle in &self.checks {
            if !registry::is_builtin(&toggle.id) {
                bail!("Unknown check id: '{}'", toggle.id);
            }
        }

        // Region names must be non-empty
        for region in &self.global.regions {
            if region.trim().is_empty() {
                bail!("Region name cannot be empty");
            }
        }

        Ok(())
    }
}

/// Typed runtime settings passed to every check.
///
/// The only configuration surface a check sees; recognized options are
/// enumerated here, so unknown settings cannot exist at runtime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSettings {
    /// Regions to evaluate; empty means discover them from the snapshot.
    pub regions: Vec<String>,
    /// Exit non-zero when any FAIL result is produced.
    pub fail_exit_code: bool,
}

impl ScanSettings {
    /// Builds runtime settings from parsed config file values.
    #[must_use]
    pub fn from_config(config: &ScanConfig) -> Self {
        Self {
            regions: config.global.regions.clone(),
            fail_exit_code: config.global.fail_exit_code,
        }
    }

    /// The regions a check should evaluate: the configured list when
    /// non-empty, otherwise the regions present in the snapshot.
    #[must_use]
    pub fn resolve_regions(&self, snapshot: &Snapshot) -> Vec<String> {
        if self.regions.is_empty() {
            snapshot.backup_regions()
        } else {
            self.regions.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::snapshot_from_json;

    const VALID_CONFIG: &str = r#"
[global]
regions = ["us-east-1", "us-west-2"]
fail_exit_code = true

[[check]]
id = "backup-plan-lifecycle"
enabled = true
"#;

    #[test]
    fn test_parse_valid_config() {
        let config = ScanConfig::parse(VALID_CONFIG).unwrap();

        assert_eq!(config.global.regions, vec!["us-east-1", "us-west-2"]);
        assert!(config.global.fail_exit_code);
        assert_eq!(config.checks.len(), 1);
        assert_eq!(config.checks[0].id, "backup-plan-lifecycle");
        assert!(config.checks[0].enabled);
    }

    #[test]
    fn test_defaults_with_empty_global() {
        let config = ScanConfig::parse("[global]\n").unwrap();

        assert!(config.global.regions.is_empty());
        assert!(!config.global.fail_exit_code);
        assert!(config.checks.is_empty());
    }

    #[test]
    fn test_empty_content_parses_to_defaults() {
        let config = ScanConfig::parse("").unwrap();
        assert_eq!(config, ScanConfig::default());
    }

    #[test]
    fn test_toggle_enabled_defaults_to_true() {
        let toml = r#"
[[check]]
id = "backup-plan-lifecycle"
"#;
        let config = ScanConfig::parse(toml).unwrap();
        assert!(config.checks[0].enabled);
    }

    #[test]
    fn test_is_enabled_for_unlisted_check() {
        let config = ScanConfig::parse("").unwrap();
        assert!(config.is_enabled("backup-plan-lifecycle"));
    }

    #[test]
    fn test_is_enabled_honors_disabled_toggle() {
        let toml = r#"
[[check]]
id = "backup-plan-lifecycle"
enabled = false
"#;
        let config = ScanConfig::parse(toml).unwrap();
        assert!(!config.is_enabled("backup-plan-lifecycle"));
    }

    #[test]
    fn test_reject_duplicate_check_ids() {
        let toml = r#"
[[check]]
id = "backup-plan-lifecycle"

[[check]]
id = "backup-plan-lifecycle"
enabled = false
"#;
        let err = ScanConfig::parse(toml).unwrap_err();
        assert!(
            err.to_string().contains("Duplicate check id"),
            "Expected 'Duplicate check id' error, got: {err}"
        );
    }

    #[test]
    fn test_reject_unknown_check_id() {
        let toml = r#"
[[check]]
id = "no-such-check"
"#;
        let err = ScanConfig::parse(toml).unwrap_err();
        assert!(
            err.to_string().contains("Unknown check id"),
            "Expected 'Unknown check id' error, got: {err}"
        );
    }

    #[test]
    fn test_reject_empty_region_name() {
        let toml = r#"
[global]
regions = ["us-east-1", " "]
"#;
        let err = ScanConfig::parse(toml).unwrap_err();
        assert!(
            err.to_string().contains("Region name cannot be empty"),
            "Expected empty-region error, got: {err}"
        );
    }

    #[test]
    fn test_reject_invalid_toml() {
        let err = ScanConfig::parse("not valid toml {{{").unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = ScanConfig::from_path("/nonexistent/stratus.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_from_path_valid_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("stratus.toml");
        std::fs::write(&config_path, VALID_CONFIG).unwrap();

        let config = ScanConfig::from_path(&config_path).unwrap();
        assert_eq!(config.checks.len(), 1);
    }

    // --- ScanSettings ---

    #[test]
    fn test_settings_from_config() {
        let config = ScanConfig::parse(VALID_CONFIG).unwrap();
        let settings = ScanSettings::from_config(&config);

        assert_eq!(settings.regions, vec!["us-east-1", "us-west-2"]);
        assert!(settings.fail_exit_code);
    }

    #[test]
    fn test_resolve_regions_prefers_configured_list() {
        let snapshot = snapshot_from_json(serde_json::json!({
            "backup": { "listBackupPlans": { "us-east-1": { "data": [] } } }
        }));
        let settings = ScanSettings {
            regions: vec!["eu-west-1".to_string()],
            fail_exit_code: false,
        };

        assert_eq!(settings.resolve_regions(&snapshot), vec!["eu-west-1"]);
    }

    #[test]
    fn test_resolve_regions_falls_back_to_snapshot() {
        let snapshot = snapshot_from_json(serde_json::json!({
            "backup": {
                "listBackupPlans": {
                    "us-west-2": { "data": [] },
                    "us-east-1": { "data": [] }
                }
            }
        }));

        let settings = ScanSettings::default();
        assert_eq!(
            settings.resolve_regions(&snapshot),
            vec!["us-east-1", "us-west-2"]
        );
    }
}
