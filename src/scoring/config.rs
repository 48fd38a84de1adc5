use serde::{Deserialize, Serialize};

/// Default number of suggestions shown to the user
pub const DEFAULT_MAX_SUGGESTIONS: usize = 3;

/// Scoring policy configuration.
///
/// Rule weights and thresholds are fixed; only the way suggestions are
/// picked is configurable. Leaving everything unset reproduces the stock
/// behavior: the first three failing rules in evaluation order.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   max_suggestions: 3
///   suggestion_order: severity
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// How many suggestions to keep (default: 3)
    #[serde(default)]
    pub max_suggestions: Option<usize>,

    /// How failing rules are ordered before truncation (default: rule-order)
    #[serde(default)]
    pub suggestion_order: Option<SuggestionOrder>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SuggestionOrder {
    /// Fixed rule evaluation order
    #[default]
    RuleOrder,
    /// Heaviest missed rule first, ties in rule order
    Severity,
}

impl ScoringConfig {
    pub fn max_suggestions(&self) -> usize {
        self.max_suggestions.unwrap_or(DEFAULT_MAX_SUGGESTIONS)
    }

    pub fn suggestion_order(&self) -> SuggestionOrder {
        self.suggestion_order.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scoring_config() {
        let config = ScoringConfig::default();
        assert_eq!(config.max_suggestions(), 3);
        assert_eq!(config.suggestion_order(), SuggestionOrder::RuleOrder);
    }

    #[test]
    fn test_scoring_config_serde_roundtrip() {
        let config = ScoringConfig {
            max_suggestions: Some(5),
            suggestion_order: Some(SuggestionOrder::Severity),
        };
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: ScoringConfig = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_scoring_config_parse() {
        let yaml = "suggestion_order: severity\n";
        let config: ScoringConfig = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.suggestion_order(), SuggestionOrder::Severity);
        assert!(config.max_suggestions.is_none());
        assert_eq!(config.max_suggestions(), 3);
    }

    #[test]
    fn test_rule_order_spelling() {
        let config: ScoringConfig = serde_saphyr::from_str("suggestion_order: rule-order\n").unwrap();
        assert_eq!(config.suggestion_order, Some(SuggestionOrder::RuleOrder));
    }

    #[test]
    fn test_empty_scoring_config_parse() {
        let config: ScoringConfig = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(config, ScoringConfig::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<ScoringConfig, _> = serde_saphyr::from_str("weights: 10\n");
        assert!(result.is_err());
    }
}
