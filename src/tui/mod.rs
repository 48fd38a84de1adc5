pub mod app;
pub mod event;
pub mod theme;
pub mod ui;

pub use app::App;
pub use theme::{resolve_theme, Theme, ThemeColors};

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use event::{Event, EventHandler};

const TICK_RATE: Duration = Duration::from_millis(250);

/// Run the live score view until the user quits.
///
/// The document is re-read whenever its file changes (checked every
/// `poll_interval`) or when the user presses `r`.
pub async fn run_tui(mut app: App, poll_interval: Duration) -> anyhow::Result<()> {
    // Buffer stderr while TUI is active to prevent output corrupting the display
    crate::stderr_buffer::activate();

    // Init terminal (sets up panic hooks automatically)
    let mut terminal = ratatui::init();
    let mut events = EventHandler::new(TICK_RATE, poll_interval);

    let outcome = loop {
        if let Err(e) = terminal.draw(|frame| ui::draw(frame, &app)) {
            break Err(e.into());
        }

        match events.next().await {
            Some(Event::Key(key)) => handle_key_event(&mut app, key),
            Some(Event::Tick) => app.update_flash(),
            Some(Event::Poll) => {
                if app.reload_if_changed() && app.load_error.is_none() {
                    app.show_flash(format!("Rescored: {}/100", app.result.total));
                }
            }
            None => break Ok(()),
        }

        if app.should_quit {
            break Ok(());
        }
    };

    ratatui::restore();

    // Flush buffered stderr messages now that the terminal is restored
    for msg in crate::stderr_buffer::drain() {
        eprintln!("{}", msg);
    }

    outcome
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    match app.input_mode {
        app::InputMode::Normal => match key.code {
            KeyCode::Char('q') => app.should_quit = true,
            KeyCode::Char('r') => {
                app.reload();
                if app.load_error.is_none() {
                    app.show_flash(format!("Reloaded: {}/100", app.result.total));
                }
            }
            KeyCode::Char('s') => app.start_sample_confirm(),
            KeyCode::Char('b') => app.show_score_breakdown(),
            KeyCode::Char('?') => app.show_help(),
            _ => {}
        },
        app::InputMode::ConfirmSample => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_sample(),
            _ => app.dismiss_overlay(),
        },
        app::InputMode::ScoreBreakdown => match key.code {
            KeyCode::Esc | KeyCode::Char('b') | KeyCode::Char('q') => app.dismiss_overlay(),
            _ => {}
        },
        app::InputMode::Help => {
            // Any key exits help
            app.dismiss_overlay();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::{MemoryRepository, ResumeDocument};
    use crate::scoring::ScoringConfig;
    use super::app::InputMode;

    fn app() -> App {
        App::new(
            Box::new(MemoryRepository::new(ResumeDocument::default())),
            None,
            ScoringConfig::default(),
            ThemeColors::dark(),
        )
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_quit_keys() {
        let mut a = app();
        press(&mut a, KeyCode::Char('q'));
        assert!(a.should_quit);

        let mut a = app();
        a.show_help();
        handle_key_event(&mut a, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(a.should_quit);
    }

    #[test]
    fn test_sample_requires_confirmation() {
        let mut a = app();
        press(&mut a, KeyCode::Char('s'));
        assert_eq!(a.input_mode, InputMode::ConfirmSample);
        press(&mut a, KeyCode::Char('n'));
        assert_eq!(a.input_mode, InputMode::Normal);
        assert_eq!(a.result.total, 0);

        press(&mut a, KeyCode::Char('s'));
        press(&mut a, KeyCode::Char('y'));
        assert_eq!(a.result.total, 65);
    }

    #[test]
    fn test_breakdown_toggle() {
        let mut a = app();
        press(&mut a, KeyCode::Char('b'));
        assert_eq!(a.input_mode, InputMode::ScoreBreakdown);
        press(&mut a, KeyCode::Char('x'));
        assert_eq!(a.input_mode, InputMode::ScoreBreakdown);
        press(&mut a, KeyCode::Char('b'));
        assert_eq!(a.input_mode, InputMode::Normal);
        assert!(!a.should_quit);
    }

    #[test]
    fn test_help_closes_on_any_key() {
        let mut a = app();
        press(&mut a, KeyCode::Char('?'));
        assert_eq!(a.input_mode, InputMode::Help);
        press(&mut a, KeyCode::Char('q'));
        assert_eq!(a.input_mode, InputMode::Normal);
        assert!(!a.should_quit);
    }

    #[test]
    fn test_reload_key_flashes_total() {
        let mut a = app();
        press(&mut a, KeyCode::Char('r'));
        assert_eq!(
            a.flash_message.as_ref().map(|(m, _)| m.as_str()),
            Some("Reloaded: 0/100")
        );
    }
}
