use std::io::IsTerminal;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::scoring::{ScoreResult, MAX_SCORE};

/// Shown in place of the suggestion list when there is nothing to fix
pub const AFFIRMATION: &str = "Your resume looks ATS-ready. No suggestions right now.";

/// Width of the text progress bar, in cells
pub const BAR_WIDTH: usize = 20;

/// Traffic-light band for a total
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    pub fn of(total: u32) -> Self {
        if total >= 80 {
            ScoreBand::Good
        } else if total >= 50 {
            ScoreBand::Fair
        } else {
            ScoreBand::Poor
        }
    }
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Proportional bar, e.g. "█████████████░░░░░░░" for 65 at width 20
pub fn score_bar(total: u32, width: usize) -> String {
    let ratio = (total.min(MAX_SCORE) as f64) / (MAX_SCORE as f64);
    let filled = (ratio * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

/// Break text into lines of at most `max_width` chars at word boundaries.
/// A single word longer than the width gets a line of its own.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.chars().count();
        if current_width > 0 && current_width + 1 + word_width > max_width {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if current_width > 0 {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(word);
        current_width += word_width;
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

fn paint_band(text: &str, band: ScoreBand) -> String {
    match band {
        ScoreBand::Good => text.green().to_string(),
        ScoreBand::Fair => text.yellow().to_string(),
        ScoreBand::Poor => text.red().to_string(),
    }
}

/// Multi-line report: score line, bar, then suggestions or the affirmation
pub fn format_report(result: &ScoreResult, use_colors: bool) -> String {
    format_report_width(result, use_colors, get_terminal_width())
}

fn format_report_width(result: &ScoreResult, use_colors: bool, width: Option<usize>) -> String {
    let band = ScoreBand::of(result.total);
    let score = format!("{}/{}", result.total, MAX_SCORE);
    let bar = score_bar(result.total, BAR_WIDTH);

    let mut lines = Vec::new();
    if use_colors {
        lines.push(format!(
            "{} {}",
            "ATS Readiness Score:".bold(),
            paint_band(&score, band).bold()
        ));
        lines.push(paint_band(&bar, band));
    } else {
        lines.push(format!("ATS Readiness Score: {}", score));
        lines.push(bar);
    }
    lines.push(String::new());

    if result.suggestions.is_empty() {
        lines.push(if use_colors {
            AFFIRMATION.green().to_string()
        } else {
            AFFIRMATION.to_string()
        });
        return lines.join("\n");
    }

    lines.push(if use_colors {
        "Suggestions:".bold().to_string()
    } else {
        "Suggestions:".to_string()
    });

    // "  1. " prefix is 5 chars; continuation lines are indented to match
    let max_width = width.map(|w| w.saturating_sub(5).max(20));
    for (i, suggestion) in result.suggestions.iter().enumerate() {
        let wrapped = match max_width {
            Some(width) => wrap_text(suggestion, width),
            None => vec![suggestion.clone()],
        };
        let index = format!("{:>3}.", i + 1);
        for (j, text) in wrapped.iter().enumerate() {
            if j > 0 {
                lines.push(format!("     {}", text));
            } else if use_colors {
                lines.push(format!("{} {}", index.dimmed(), text));
            } else {
                lines.push(format!("{} {}", index, text));
            }
        }
    }

    lines.join("\n")
}

/// One line per rule: mark, label, points awarded out of the rule's weight
pub fn format_breakdown(result: &ScoreResult, use_colors: bool) -> String {
    result
        .breakdown
        .contributions
        .iter()
        .map(|c| {
            let mark = if c.passed() { "✓" } else { "✗" };
            let points = format!("{:>2}/{:<2}", c.points, c.max_points);
            let line = format!("{} {:<18} {}", mark, c.rule.label(), points);
            let detail = c.suggestion.as_deref().unwrap_or("");
            match (use_colors, c.passed()) {
                (true, true) => format!("{}", line.green()),
                (true, false) => format!("{}  {}", line.red(), detail.dimmed()),
                (false, true) => line,
                (false, false) => format!("{}  {}", line, detail),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The full result as pretty JSON
pub fn format_json(result: &ScoreResult) -> Result<String> {
    serde_json::to_string_pretty(result).context("Failed to serialize score result")
}
