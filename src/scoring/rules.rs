use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::resume::ResumeDocument;

pub const SUMMARY_MIN_WORDS: usize = 40;
pub const SUMMARY_MAX_WORDS: usize = 120;
pub const MIN_PROJECTS: usize = 2;
pub const MIN_EXPERIENCE: usize = 1;
pub const MIN_SKILLS: usize = 8;

// Digit, percent sign, or a standalone "k" (as in "10 k users").
// ASCII mode: word boundaries and case folding only consider ASCII, so "Köln"
// counts and the Kelvin sign does not.
static QUANTIFIED_IMPACT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i-u)[0-9%]|\bk\b").expect("quantified impact pattern is valid")
});

/// One dimension of ATS readiness.
///
/// Rules are independent: each looks at the document on its own and either
/// awards its full weight or nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    SummaryLength,
    ProjectCount,
    ExperiencePresence,
    SkillCount,
    ProfessionalLink,
    QuantifiedImpact,
    EducationCompleteness,
    PersonalInfo,
}

/// Every rule, in evaluation order
pub const RULES: [Rule; 8] = [
    Rule::SummaryLength,
    Rule::ProjectCount,
    Rule::ExperiencePresence,
    Rule::SkillCount,
    Rule::ProfessionalLink,
    Rule::QuantifiedImpact,
    Rule::EducationCompleteness,
    Rule::PersonalInfo,
];

/// What a single rule made of a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    pub points: u32,
    pub suggestion: Option<String>,
}

impl RuleOutcome {
    fn pass(rule: Rule) -> Self {
        Self {
            points: rule.weight(),
            suggestion: None,
        }
    }

    fn fail(suggestion: String) -> Self {
        Self {
            points: 0,
            suggestion: Some(suggestion),
        }
    }
}

impl Rule {
    /// Points awarded when the rule is satisfied
    pub fn weight(self) -> u32 {
        match self {
            Rule::SummaryLength => 15,
            Rule::ProjectCount => 10,
            Rule::ExperiencePresence => 10,
            Rule::SkillCount => 10,
            Rule::ProfessionalLink => 10,
            Rule::QuantifiedImpact => 15,
            Rule::EducationCompleteness => 10,
            Rule::PersonalInfo => 20,
        }
    }

    /// Short human label, e.g. for breakdown tables
    pub fn label(self) -> &'static str {
        match self {
            Rule::SummaryLength => "Summary length",
            Rule::ProjectCount => "Projects",
            Rule::ExperiencePresence => "Experience",
            Rule::SkillCount => "Skills",
            Rule::ProfessionalLink => "Profile link",
            Rule::QuantifiedImpact => "Measurable impact",
            Rule::EducationCompleteness => "Education",
            Rule::PersonalInfo => "Personal info",
        }
    }

    pub fn evaluate(self, doc: &ResumeDocument) -> RuleOutcome {
        match self {
            Rule::SummaryLength => {
                let words = doc.summary_word_count();
                if (SUMMARY_MIN_WORDS..=SUMMARY_MAX_WORDS).contains(&words) {
                    RuleOutcome::pass(self)
                } else {
                    RuleOutcome::fail(format!(
                        "Summary is {} words. Aim for {}-{} words.",
                        words, SUMMARY_MIN_WORDS, SUMMARY_MAX_WORDS
                    ))
                }
            }
            Rule::ProjectCount => {
                if doc.projects.len() >= MIN_PROJECTS {
                    RuleOutcome::pass(self)
                } else {
                    RuleOutcome::fail(format!(
                        "Add at least {} projects (currently {}).",
                        MIN_PROJECTS,
                        doc.projects.len()
                    ))
                }
            }
            Rule::ExperiencePresence => {
                if doc.experience.len() >= MIN_EXPERIENCE {
                    RuleOutcome::pass(self)
                } else {
                    RuleOutcome::fail(format!(
                        "Add at least {} work experience entry.",
                        MIN_EXPERIENCE
                    ))
                }
            }
            Rule::SkillCount => {
                let count = doc.skill_items().len();
                if count >= MIN_SKILLS {
                    RuleOutcome::pass(self)
                } else {
                    RuleOutcome::fail(format!(
                        "Add more skills (currently {}, target {}+).",
                        count, MIN_SKILLS
                    ))
                }
            }
            Rule::ProfessionalLink => {
                if !doc.github.is_empty() || !doc.linkedin.is_empty() {
                    RuleOutcome::pass(self)
                } else {
                    RuleOutcome::fail("Add a GitHub or LinkedIn profile link.".to_string())
                }
            }
            Rule::QuantifiedImpact => {
                if doc.impact_descriptions().any(has_quantified_impact) {
                    RuleOutcome::pass(self)
                } else {
                    RuleOutcome::fail(
                        "Add measurable impact (numbers, %, metrics) in your descriptions."
                            .to_string(),
                    )
                }
            }
            Rule::EducationCompleteness => {
                if doc.education.is_empty() {
                    RuleOutcome::fail("Add your education details.".to_string())
                } else if doc.education.iter().all(|e| e.is_complete()) {
                    RuleOutcome::pass(self)
                } else {
                    RuleOutcome::fail("Complete all fields in the education section.".to_string())
                }
            }
            Rule::PersonalInfo => {
                let complete = [&doc.full_name, &doc.email, &doc.phone, &doc.location]
                    .iter()
                    .all(|field| !field.is_empty());
                if complete {
                    RuleOutcome::pass(self)
                } else {
                    RuleOutcome::fail(
                        "Complete your personal information (Name, Email, Phone, Location)."
                            .to_string(),
                    )
                }
            }
        }
    }
}

/// Whether a description mentions something measurable.
///
/// Matches any ASCII digit, a `%`, or the letter `k` standing alone as a
/// word (case-insensitive). A trailing `k` inside a word ("network") does not
/// count, and "10k" counts only because of its digits.
pub fn has_quantified_impact(text: &str) -> bool {
    QUANTIFIED_IMPACT.is_match(text)
}
