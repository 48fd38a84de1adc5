use serde::Serialize;

use super::config::{ScoringConfig, SuggestionOrder};
use super::rules::{Rule, RULES};
use crate::resume::ResumeDocument;

/// Highest possible total
pub const MAX_SCORE: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleContribution {
    pub rule: Rule,
    pub points: u32,
    pub max_points: u32,
    /// Set when the rule failed, even if the suggestion was cut from the result
    pub suggestion: Option<String>,
}

impl RuleContribution {
    pub fn passed(&self) -> bool {
        self.suggestion.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub contributions: Vec<RuleContribution>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    /// 0..=100
    pub total: u32,
    /// At most `max_suggestions` remediation hints
    pub suggestions: Vec<String>,
    pub breakdown: ScoreBreakdown,
}

/// Score a document with the stock policy: first three failing rules, in
/// rule order.
pub fn calculate_score(doc: &ResumeDocument) -> ScoreResult {
    calculate_score_with(doc, &ScoringConfig::default())
}

/// Score a document.
///
/// Every rule is evaluated; the total is the sum of awarded points capped at
/// [`MAX_SCORE`]. Pure: no I/O, no clock, no shared state.
pub fn calculate_score_with(doc: &ResumeDocument, config: &ScoringConfig) -> ScoreResult {
    let contributions: Vec<RuleContribution> = RULES
        .iter()
        .map(|&rule| {
            let outcome = rule.evaluate(doc);
            RuleContribution {
                rule,
                points: outcome.points,
                max_points: rule.weight(),
                suggestion: outcome.suggestion,
            }
        })
        .collect();

    let total = contributions
        .iter()
        .map(|c| c.points)
        .sum::<u32>()
        .min(MAX_SCORE);

    let mut failing: Vec<&RuleContribution> =
        contributions.iter().filter(|c| !c.passed()).collect();

    if config.suggestion_order() == SuggestionOrder::Severity {
        // Stable sort keeps rule order among equal weights
        failing.sort_by(|a, b| b.max_points.cmp(&a.max_points));
    }

    let suggestions = failing
        .into_iter()
        .filter_map(|c| c.suggestion.clone())
        .take(config.max_suggestions())
        .collect();

    ScoreResult {
        total,
        suggestions,
        breakdown: ScoreBreakdown { contributions },
    }
}
