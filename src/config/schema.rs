use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::scoring::ScoringConfig;

/// Default poll interval for `watch`
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Resume document to score instead of the default location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scoring: Option<ScoringConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeSetting>,

    /// How often `watch` checks the document for changes, e.g. "1s", "500ms"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_interval: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeSetting {
    /// Detect from the terminal background
    #[default]
    Auto,
    Dark,
    Light,
}

impl Config {
    pub fn effective_scoring(&self) -> ScoringConfig {
        self.scoring.clone().unwrap_or_default()
    }

    pub fn theme(&self) -> ThemeSetting {
        self.theme.unwrap_or_default()
    }

    /// Parsed refresh interval. Falls back to the default when unset or
    /// unparseable; `validate_config` reports the unparseable case.
    pub fn refresh_interval(&self) -> Duration {
        self.refresh_interval
            .as_deref()
            .and_then(|s| humantime::parse_duration(s).ok())
            .unwrap_or(DEFAULT_REFRESH_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::SuggestionOrder;

    #[test]
    fn test_full_config_parse() {
        let yaml = r#"
document: /tmp/me.json
scoring:
  max_suggestions: 5
  suggestion_order: severity
theme: light
refresh_interval: 500ms
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.document, Some(PathBuf::from("/tmp/me.json")));
        let scoring = config.effective_scoring();
        assert_eq!(scoring.max_suggestions(), 5);
        assert_eq!(scoring.suggestion_order(), SuggestionOrder::Severity);
        assert_eq!(config.theme(), ThemeSetting::Light);
        assert_eq!(config.refresh_interval(), Duration::from_millis(500));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.theme(), ThemeSetting::Auto);
        assert_eq!(config.refresh_interval(), DEFAULT_REFRESH_INTERVAL);
        assert_eq!(config.effective_scoring(), ScoringConfig::default());
    }

    #[test]
    fn test_bad_interval_falls_back() {
        let config = Config {
            refresh_interval: Some("soon".to_string()),
            ..Default::default()
        };
        assert_eq!(config.refresh_interval(), DEFAULT_REFRESH_INTERVAL);
    }

    #[test]
    fn test_unknown_top_level_key_rejected() {
        let result: Result<Config, _> = serde_saphyr::from_str("queries: []\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = Config {
            document: Some(PathBuf::from("resume.json")),
            scoring: Some(ScoringConfig::default()),
            theme: Some(ThemeSetting::Dark),
            refresh_interval: Some("2s".to_string()),
        };
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: Config = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }
}
