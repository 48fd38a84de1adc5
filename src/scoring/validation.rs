use super::config::ScoringConfig;
use super::rules::RULES;

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(max) = config.max_suggestions {
        if max == 0 {
            errors.push("scoring.max_suggestions: must be at least 1".to_string());
        } else if max > RULES.len() {
            errors.push(format!(
                "scoring.max_suggestions: {} exceeds the number of rules ({})",
                max,
                RULES.len()
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
