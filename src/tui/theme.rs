//! Color palettes for the watch view

use ratatui::prelude::*;

use crate::config::ThemeSetting;
use crate::output::ScoreBand;

/// Terminals brighter than this are treated as light backgrounds
const LIGHT_LUMA_THRESHOLD: f32 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Complete color palette for the TUI
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Score bands (traffic light, green is good)
    pub score_good: Color,
    pub score_fair: Color,
    pub score_poor: Color,
    pub gauge_empty: Color,

    pub index_color: Color,
    pub muted: Color,
    pub title_color: Color,

    // Status bar colors
    pub status_bar_bg: Color,
    pub status_key_color: Color,
    pub flash_success: Color,
    pub flash_error: Color,

    // Popup overlay colors
    pub popup_border: Color,
    pub popup_title: Style,
    pub popup_bg: Color,
}

impl ThemeColors {
    pub fn dark() -> Self {
        Self {
            score_good: Color::Green,
            score_fair: Color::Yellow,
            score_poor: Color::Red,
            gauge_empty: Color::DarkGray,
            index_color: Color::DarkGray,
            muted: Color::Gray,
            title_color: Color::Cyan,
            status_bar_bg: Color::Indexed(236),
            status_key_color: Color::Cyan,
            flash_success: Color::Green,
            flash_error: Color::Red,
            popup_border: Color::Cyan,
            popup_title: Style::new().fg(Color::Cyan).bold(),
            popup_bg: Color::Indexed(234),
        }
    }

    pub fn light() -> Self {
        Self {
            score_good: Color::Rgb(0, 128, 0),
            score_fair: Color::Rgb(175, 120, 0),
            score_poor: Color::Rgb(190, 0, 0),
            gauge_empty: Color::Indexed(252),
            index_color: Color::Indexed(244),
            muted: Color::Indexed(240),
            title_color: Color::Blue,
            status_bar_bg: Color::Indexed(254),
            status_key_color: Color::Blue,
            flash_success: Color::Rgb(0, 128, 0),
            flash_error: Color::Rgb(190, 0, 0),
            popup_border: Color::Blue,
            popup_title: Style::new().fg(Color::Blue).bold(),
            popup_bg: Color::Indexed(255),
        }
    }

    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self::dark(),
            Theme::Light => Self::light(),
        }
    }

    /// Color for a 0-100 total
    pub fn score_color(&self, total: u32) -> Color {
        match ScoreBand::of(total) {
            ScoreBand::Good => self.score_good,
            ScoreBand::Fair => self.score_fair,
            ScoreBand::Poor => self.score_poor,
        }
    }
}

/// Pick a theme from the config setting.
///
/// `auto` asks the terminal for its background color; terminals that do not
/// answer get the dark theme. Must run before the TUI enters raw mode.
pub fn resolve_theme(setting: ThemeSetting) -> Theme {
    match setting {
        ThemeSetting::Dark => Theme::Dark,
        ThemeSetting::Light => Theme::Light,
        ThemeSetting::Auto => match terminal_light::luma() {
            Ok(luma) if luma > LIGHT_LUMA_THRESHOLD => Theme::Light,
            Ok(_) => Theme::Dark,
            Err(e) => {
                tracing::debug!("terminal background detection failed: {}", e);
                Theme::Dark
            }
        },
    }
}
