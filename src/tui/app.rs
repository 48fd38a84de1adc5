use chrono::{DateTime, Local};
use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime};

use crate::resume::{sample_document, DocumentRepository, ResumeDocument};
use crate::scoring::{calculate_score_with, ScoreResult, ScoringConfig};
use crate::tui::theme::ThemeColors;

const FLASH_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    Help,
    ScoreBreakdown,
    ConfirmSample,
}

pub struct App {
    pub repository: Box<dyn DocumentRepository + Send>,
    /// File to poll for edits; None disables change detection
    pub watch_path: Option<PathBuf>,
    pub scoring: ScoringConfig,
    pub document: ResumeDocument,
    pub result: ScoreResult,
    pub last_modified: Option<SystemTime>,
    pub loaded_at: DateTime<Local>,
    pub load_error: Option<String>,
    pub input_mode: InputMode,
    pub flash_message: Option<(String, Instant)>,
    pub should_quit: bool,
    pub colors: ThemeColors,
}

impl App {
    pub fn new(
        repository: Box<dyn DocumentRepository + Send>,
        watch_path: Option<PathBuf>,
        scoring: ScoringConfig,
        colors: ThemeColors,
    ) -> Self {
        let document = ResumeDocument::default();
        let result = calculate_score_with(&document, &scoring);
        let mut app = Self {
            repository,
            watch_path,
            scoring,
            document,
            result,
            last_modified: None,
            loaded_at: Local::now(),
            load_error: None,
            input_mode: InputMode::Normal,
            flash_message: None,
            should_quit: false,
            colors,
        };
        app.reload();
        app
    }

    /// Re-read the document and rescore it.
    ///
    /// On failure the previous document and score stay on screen and the
    /// error is kept in `load_error`.
    pub fn reload(&mut self) {
        self.last_modified = self.current_mtime();
        match self.repository.load() {
            Ok(document) => {
                self.result = calculate_score_with(&document, &self.scoring);
                self.document = document;
                self.loaded_at = Local::now();
                self.load_error = None;
                tracing::debug!(total = self.result.total, "rescored document");
            }
            Err(e) => {
                tracing::warn!("reload failed: {:#}", e);
                self.load_error = Some(format!("{:#}", e));
            }
        }
    }

    /// Reload if the watched file changed since the last load.
    /// Returns true when a reload happened.
    pub fn reload_if_changed(&mut self) -> bool {
        if self.watch_path.is_none() {
            return false;
        }
        if self.current_mtime() == self.last_modified {
            return false;
        }
        self.reload();
        true
    }

    fn current_mtime(&self) -> Option<SystemTime> {
        let path = self.watch_path.as_ref()?;
        std::fs::metadata(path).and_then(|m| m.modified()).ok()
    }

    /// Replace the stored document with the built-in sample
    pub fn load_sample(&mut self) {
        match self.repository.save(&sample_document()) {
            Ok(()) => {
                self.reload();
                self.show_flash("Loaded sample resume".to_string());
            }
            Err(e) => self.show_flash(format!("Failed to save sample: {:#}", e)),
        }
    }

    pub fn show_flash(&mut self, message: String) {
        self.flash_message = Some((message, Instant::now()));
    }

    /// Clear the flash message once it has been visible long enough
    pub fn update_flash(&mut self) {
        if let Some((_, shown_at)) = &self.flash_message {
            if shown_at.elapsed() >= FLASH_DURATION {
                self.flash_message = None;
            }
        }
    }

    pub fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    pub fn show_score_breakdown(&mut self) {
        self.input_mode = InputMode::ScoreBreakdown;
    }

    pub fn start_sample_confirm(&mut self) {
        self.input_mode = InputMode::ConfirmSample;
    }

    /// Return to normal mode from any overlay
    pub fn dismiss_overlay(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn confirm_sample(&mut self) {
        self.input_mode = InputMode::Normal;
        self.load_sample();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::{JsonFileRepository, MemoryRepository};
    use crate::scoring::SuggestionOrder;

    fn memory_app(document: ResumeDocument) -> App {
        App::new(
            Box::new(MemoryRepository::new(document)),
            None,
            ScoringConfig::default(),
            ThemeColors::dark(),
        )
    }

    #[test]
    fn test_new_scores_initial_document() {
        let app = memory_app(sample_document());
        assert_eq!(app.result.total, 65);
        assert_eq!(app.document, sample_document());
        assert!(app.load_error.is_none());
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_load_sample_replaces_document() {
        let mut app = memory_app(ResumeDocument::default());
        assert_eq!(app.result.total, 0);

        app.start_sample_confirm();
        assert_eq!(app.input_mode, InputMode::ConfirmSample);
        app.confirm_sample();

        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.result.total, 65);
        assert_eq!(
            app.flash_message.as_ref().map(|(m, _)| m.as_str()),
            Some("Loaded sample resume")
        );
    }

    #[test]
    fn test_scoring_config_applied() {
        let app = App::new(
            Box::new(MemoryRepository::default()),
            None,
            ScoringConfig {
                max_suggestions: Some(1),
                suggestion_order: Some(SuggestionOrder::Severity),
            },
            ThemeColors::dark(),
        );
        assert_eq!(
            app.result.suggestions,
            vec!["Complete your personal information (Name, Email, Phone, Location).".to_string()]
        );
    }

    #[test]
    fn test_reload_if_changed_without_watch_path() {
        let mut app = memory_app(ResumeDocument::default());
        assert!(!app.reload_if_changed());
    }

    #[test]
    fn test_reload_if_changed_detects_new_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.json");
        let mut app = App::new(
            Box::new(JsonFileRepository::new(&path)),
            Some(path.clone()),
            ScoringConfig::default(),
            ThemeColors::dark(),
        );
        assert_eq!(app.result.total, 0);
        assert!(!app.reload_if_changed());

        JsonFileRepository::new(&path).save(&sample_document()).unwrap();
        assert!(app.reload_if_changed());
        assert_eq!(app.result.total, 65);
        assert!(!app.reload_if_changed());
    }

    #[test]
    fn test_failed_reload_keeps_previous_score() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.json");
        JsonFileRepository::new(&path).save(&sample_document()).unwrap();

        let mut app = App::new(
            Box::new(JsonFileRepository::new(&path)),
            Some(path.clone()),
            ScoringConfig::default(),
            ThemeColors::dark(),
        );
        assert_eq!(app.result.total, 65);

        std::fs::write(&path, "{ broken").unwrap();
        app.reload();
        assert_eq!(app.result.total, 65);
        assert!(app.load_error.as_deref().unwrap().contains("Failed to parse"));
    }

    #[test]
    fn test_flash_expires() {
        let mut app = memory_app(ResumeDocument::default());
        app.show_flash("hello".to_string());
        app.update_flash();
        assert!(app.flash_message.is_some());

        app.flash_message = Some(("old".to_string(), Instant::now() - FLASH_DURATION));
        app.update_flash();
        assert!(app.flash_message.is_none());
    }

    #[test]
    fn test_overlays() {
        let mut app = memory_app(ResumeDocument::default());
        app.show_help();
        assert_eq!(app.input_mode, InputMode::Help);
        app.dismiss_overlay();
        app.show_score_breakdown();
        assert_eq!(app.input_mode, InputMode::ScoreBreakdown);
        app.dismiss_overlay();
        assert_eq!(app.input_mode, InputMode::Normal);
    }
}
