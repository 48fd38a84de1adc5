use ratatui::prelude::*;
use ratatui::widgets::{Block, Clear, Gauge, List, ListItem, Paragraph, Wrap};

use crate::output::AFFIRMATION;
use crate::scoring::MAX_SCORE;
use crate::tui::app::{App, InputMode};

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Handle very small terminal sizes gracefully
    if area.height < 8 || area.width < 30 {
        let msg = Paragraph::new("Terminal too small").alignment(Alignment::Center);
        frame.render_widget(msg, area);
        return;
    }

    // Layout: Title(1) + Gauge(3) + Suggestions(fill) + Status(1)
    let chunks = Layout::vertical([
        Constraint::Length(1), // Title bar
        Constraint::Length(3), // Score gauge
        Constraint::Fill(1),   // Suggestions
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    render_title(frame, chunks[0], app);
    render_gauge(frame, chunks[1], app);
    render_suggestions(frame, chunks[2], app);
    render_status_bar(frame, chunks[3], app);

    match app.input_mode {
        InputMode::Help => render_help_popup(frame, app),
        InputMode::ScoreBreakdown => render_breakdown_popup(frame, app),
        InputMode::ConfirmSample => render_confirm_popup(frame, app),
        InputMode::Normal => {}
    }
}

fn render_title(frame: &mut Frame, area: Rect, app: &App) {
    let colors = &app.colors;
    let left = "ATS Readiness";
    let mut spans = vec![Span::styled(left, Style::default().fg(colors.title_color).bold())];

    let name = if app.document.full_name.is_empty() {
        "(unnamed resume)"
    } else {
        app.document.full_name.as_str()
    };
    let padding = (area.width as usize).saturating_sub(left.len() + name.chars().count());
    spans.push(Span::raw(" ".repeat(padding)));
    spans.push(Span::styled(name, Style::default().fg(colors.muted)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_gauge(frame: &mut Frame, area: Rect, app: &App) {
    let colors = &app.colors;
    let total = app.result.total.min(MAX_SCORE);
    let gauge = Gauge::default()
        .block(Block::bordered().title(" Score "))
        .gauge_style(
            Style::default()
                .fg(colors.score_color(total))
                .bg(colors.gauge_empty),
        )
        .percent(total as u16)
        .label(Span::styled(
            format!("{}/{}", total, MAX_SCORE),
            Style::default().bold(),
        ));
    frame.render_widget(gauge, area);
}

fn render_suggestions(frame: &mut Frame, area: Rect, app: &App) {
    let colors = &app.colors;
    let block = Block::bordered().title(" Suggestions ");

    if app.result.suggestions.is_empty() {
        let msg = Paragraph::new(AFFIRMATION)
            .style(Style::default().fg(colors.score_good))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(msg, area);
        return;
    }

    let items: Vec<ListItem> = app
        .result
        .suggestions
        .iter()
        .enumerate()
        .map(|(idx, suggestion)| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>2}. ", idx + 1),
                    Style::default().fg(colors.index_color),
                ),
                Span::raw(suggestion.as_str()),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let colors = &app.colors;
    let text = if let Some((ref msg, _)) = app.flash_message {
        let msg_color = if msg.starts_with("Failed") || msg.starts_with("Error") {
            colors.flash_error
        } else {
            colors.flash_success
        };
        Line::from(Span::styled(msg.clone(), Style::default().fg(msg_color)))
    } else if let Some(ref err) = app.load_error {
        Line::from(Span::styled(
            format!("Reload failed: {}", err),
            Style::default().fg(colors.flash_error),
        ))
    } else {
        let loaded = format!("scored {}", app.loaded_at.format("%H:%M:%S"));

        let hints = [
            ("r", ":reload "),
            ("b", ":breakdown "),
            ("s", ":sample "),
            ("?", ":help "),
            ("q", ":quit"),
        ];

        let mut spans = vec![
            Span::styled(loaded, Style::default().fg(colors.muted)),
            Span::raw("  "),
        ];
        for (i, (key, label)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(*key, Style::default().fg(colors.status_key_color)));
            spans.push(Span::raw(*label));
        }
        Line::from(spans)
    };

    frame.render_widget(
        Paragraph::new(text).style(Style::default().bg(colors.status_bar_bg)),
        area,
    );
}

/// Create a centered rectangle with fixed width and height
fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    // Clamp dimensions to area bounds
    let width = width.min(area.width);
    let height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect {
        x,
        y,
        width,
        height,
    }
}

fn popup_block<'a>(title: &'a str, app: &App) -> Block<'a> {
    Block::bordered()
        .title(Span::styled(title, app.colors.popup_title))
        .border_style(Style::default().fg(app.colors.popup_border))
        .style(Style::default().bg(app.colors.popup_bg))
}

fn render_help_popup(frame: &mut Frame, app: &App) {
    let popup_area = centered_rect_fixed(50, 11, frame.area());
    frame.render_widget(Clear, popup_area);

    let block = popup_block(" Keyboard Shortcuts ", app);
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let key_style = Style::default().fg(app.colors.status_key_color).bold();
    let rows = [
        ("r             ", "Reload and rescore now"),
        ("b             ", "Show/hide score breakdown"),
        ("s             ", "Replace document with sample"),
        ("?             ", "Show/hide this help"),
        ("q / Ctrl-c    ", "Quit"),
    ];
    let mut help_lines: Vec<Line> = rows
        .iter()
        .map(|(key, desc)| Line::from(vec![Span::styled(*key, key_style), Span::raw(*desc)]))
        .collect();
    help_lines.push(Line::from(""));
    help_lines.push(Line::from(Span::styled(
        "Edits to the document are picked up automatically",
        Style::default().fg(app.colors.muted),
    )));
    help_lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(app.colors.muted),
    )));

    frame.render_widget(Paragraph::new(help_lines), inner);
}

fn render_breakdown_popup(frame: &mut Frame, app: &App) {
    let contributions = &app.result.breakdown.contributions;
    let height = contributions.len() as u16 + 4;
    let popup_area = centered_rect_fixed(60, height, frame.area());
    frame.render_widget(Clear, popup_area);

    let block = popup_block(" Score Breakdown ", app);
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let mut lines: Vec<Line> = contributions
        .iter()
        .map(|c| {
            let (mark, color) = if c.passed() {
                ("✓", app.colors.score_good)
            } else {
                ("✗", app.colors.score_poor)
            };
            Line::from(vec![
                Span::styled(format!("{} ", mark), Style::default().fg(color)),
                Span::raw(format!("{:<20}", c.rule.label())),
                Span::styled(
                    format!("{:>2}/{:<2}", c.points, c.max_points),
                    Style::default().fg(color),
                ),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw(format!("  {:<20}", "Total")),
        Span::styled(
            format!("{}/{}", app.result.total, MAX_SCORE),
            Style::default().bold(),
        ),
    ]));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_confirm_popup(frame: &mut Frame, app: &App) {
    let popup_area = centered_rect_fixed(48, 5, frame.area());
    frame.render_widget(Clear, popup_area);

    let block = popup_block(" Load Sample ", app);
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let lines = vec![
        Line::from("Replace the current document with the sample?"),
        Line::from(Span::styled(
            "y: replace | any other key: cancel",
            Style::default().fg(app.colors.muted),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::{sample_document, MemoryRepository, ResumeDocument};
    use crate::scoring::ScoringConfig;
    use crate::tui::theme::ThemeColors;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn app_with(document: ResumeDocument) -> App {
        App::new(
            Box::new(MemoryRepository::new(document)),
            None,
            ScoringConfig::default(),
            ThemeColors::dark(),
        )
    }

    #[test]
    fn test_centered_rect_fixed() {
        let area = Rect::new(0, 0, 100, 50);
        assert_eq!(centered_rect_fixed(40, 10, area), Rect::new(30, 20, 40, 10));
        assert_eq!(centered_rect_fixed(200, 80, area), area);
    }

    #[test]
    fn test_draw_shows_score_and_suggestions() {
        let screen = render(&app_with(sample_document()), 80, 20);
        assert!(screen.contains("65/100"));
        assert!(screen.contains("Alex Morgan"));
        assert!(screen.contains("1. Summary is 23 words."));
        assert!(screen.contains("3. Add more skills"));
    }

    #[test]
    fn test_draw_shows_affirmation_when_nothing_to_fix() {
        let mut app = app_with(ResumeDocument::default());
        app.result.suggestions.clear();
        let screen = render(&app, 80, 20);
        assert!(screen.contains("ATS-ready"));
    }

    #[test]
    fn test_draw_breakdown_popup() {
        let mut app = app_with(ResumeDocument::default());
        app.show_score_breakdown();
        let screen = render(&app, 80, 24);
        assert!(screen.contains("Score Breakdown"));
        assert!(screen.contains("Personal info"));
        assert!(screen.contains("0/20"));
    }

    #[test]
    fn test_draw_tiny_terminal() {
        let screen = render(&app_with(ResumeDocument::default()), 20, 5);
        assert!(screen.contains("Terminal too"));
    }
}
