pub mod config;
pub mod engine;
pub mod rules;
pub mod validation;

pub use config::*;
pub use engine::{
    calculate_score, calculate_score_with, RuleContribution, ScoreBreakdown, ScoreResult,
    MAX_SCORE,
};
pub use rules::{has_quantified_impact, Rule, RuleOutcome, RULES};
pub use validation::validate_scoring;
