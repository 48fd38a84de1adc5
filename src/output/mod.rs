pub mod formatter;

pub use formatter::{
    format_breakdown, format_json, format_report, score_bar, should_use_colors, wrap_text,
    ScoreBand, AFFIRMATION, BAR_WIDTH,
};
