use serde::{Deserialize, Serialize};

use crate::comparison::{RecommendationThresholds, ReconcileConfig};

/// Root configuration structure, read from `.cai-check.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CaiConfig {
    /// Recommendation thresholds
    #[serde(default)]
    pub thresholds: Option<RecommendationThresholds>,

    /// Delta classification tolerances
    #[serde(default)]
    pub reconcile: Option<ReconcileConfig>,

    /// Ignore patterns for directory walks
    #[serde(default)]
    pub ignore: Option<IgnoreConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,

    /// Rule checks run by `analyze`
    #[serde(default)]
    pub rules: Option<RulesConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct IgnoreConfig {
    #[serde(default)]
    pub patterns: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RulesConfig {
    /// Rule ids to leave unchecked, e.g. `MISRA-C-2012-Rule-15.5`
    #[serde(default)]
    pub skip: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    pub default_format: Option<String>,
    /// Enable colored output (default: auto-detect based on TTY)
    #[serde(default)]
    pub use_color: Option<bool>,
}

impl CaiConfig {
    pub fn thresholds(&self) -> RecommendationThresholds {
        self.thresholds.unwrap_or_default()
    }

    pub fn reconcile(&self) -> ReconcileConfig {
        self.reconcile.unwrap_or_default()
    }

    pub fn ignore_patterns(&self) -> Vec<String> {
        self.ignore
            .as_ref()
            .map(|i| i.patterns.clone())
            .unwrap_or_default()
    }

    pub fn default_format(&self) -> Option<&str> {
        self.output.as_ref()?.default_format.as_deref()
    }

    pub fn use_color(&self) -> Option<bool> {
        self.output.as_ref()?.use_color
    }

    pub fn skipped_rules(&self) -> &[String] {
        self.rules
            .as_ref()
            .map(|r| r.skip.as_slice())
            .unwrap_or_default()
    }

    /// Check values that deserialize fine but make no sense
    pub fn validate(&self) -> Result<(), String> {
        if let Some(reconcile) = &self.reconcile {
            if !reconcile.minor_tolerance.is_finite() || reconcile.minor_tolerance < 0.0 {
                return Err(format!(
                    "reconcile.minor_tolerance must be a non-negative number, got {}",
                    reconcile.minor_tolerance
                ));
            }
        }
        if let Some(thresholds) = &self.thresholds {
            if !thresholds.loc_ratio.is_finite() || thresholds.loc_ratio <= 0.0 {
                return Err(format!(
                    "thresholds.loc_ratio must be positive, got {}",
                    thresholds.loc_ratio
                ));
            }
        }
        if let Some(unknown) = self
            .skipped_rules()
            .iter()
            .find(|id| crate::rules::find_rule(id).is_none())
        {
            return Err(format!("rules.skip names unknown rule '{unknown}'"));
        }
        if let Some(format) = self.default_format() {
            if !matches!(format, "terminal" | "json" | "markdown") {
                return Err(format!("output.default_format '{format}' is not recognized"));
            }
        }
        Ok(())
    }
}

pub const DEFAULT_CONFIG_TOML: &str = r#"# cai-check configuration

[thresholds]
complexity = 10
nesting = 4
loc_ratio = 1.5

[reconcile]
minor_tolerance = 1.0

[ignore]
patterns = [
    "build/**",
    "third_party/**",
]

[rules]
skip = []

[output]
default_format = "terminal"
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_sections_missing() {
        let config = CaiConfig::default();
        assert_eq!(config.thresholds(), RecommendationThresholds::default());
        assert_eq!(config.reconcile().minor_tolerance, 1.0);
        assert!(config.ignore_patterns().is_empty());
        assert_eq!(config.default_format(), None);
    }

    #[test]
    fn test_default_template_parses_and_validates() {
        let config: CaiConfig = toml::from_str(DEFAULT_CONFIG_TOML).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.thresholds().complexity, 10);
        assert_eq!(config.default_format(), Some("terminal"));
        assert_eq!(config.ignore_patterns().len(), 2);
    }

    #[test]
    fn test_validate_rejects_negative_tolerance() {
        let config = CaiConfig {
            reconcile: Some(ReconcileConfig {
                minor_tolerance: -1.0,
            }),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rules_skip_list() {
        let config: CaiConfig =
            toml::from_str("[rules]\nskip = [\"MISRA-C-2012-Rule-15.5\"]\n").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.skipped_rules(), ["MISRA-C-2012-Rule-15.5".to_string()]);

        let typo: CaiConfig = toml::from_str("[rules]\nskip = [\"Rule-15.5\"]\n").unwrap();
        assert!(typo.validate().unwrap_err().contains("Rule-15.5"));
        assert!(CaiConfig::default().skipped_rules().is_empty());
    }

    #[test]
    fn test_validate_rejects_unknown_format() {
        let config = CaiConfig {
            output: Some(OutputConfig {
                default_format: Some("html".into()),
                use_color: None,
            }),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
