use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, EditTarget, Mode};

const NAV_HINT: &str = "a add · Enter select · x done · e edit · d delete · Tab category · ? help";
const EDIT_HINT: &str = "Enter save  Esc cancel";

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = match app.mode {
        Mode::Edit => {
            // Prompt: label ▸ text▌ with the cursor split at the edit position
            let label = match app.edit_target {
                Some(EditTarget::NewTask) => "add",
                Some(EditTarget::RenameTask { .. }) => "edit",
                Some(EditTarget::GotoDate) => "date",
                None => "",
            };
            let before = &app.edit_buffer[..app.edit_cursor];
            let after = &app.edit_buffer[app.edit_cursor..];
            let mut spans = vec![
                Span::styled(
                    format!(" {} \u{25B8} ", label),
                    Style::default().fg(app.theme.highlight).bg(bg),
                ),
                Span::styled(
                    before.to_string(),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ),
                Span::styled(
                    "\u{258C}",
                    Style::default().fg(app.theme.highlight).bg(bg),
                ),
                Span::styled(
                    after.to_string(),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ),
            ];
            pad_with_hint(&mut spans, EDIT_HINT, width, app.theme.dim, bg);
            Line::from(spans)
        }
        Mode::Navigate => {
            let mut spans = match app.status_message {
                Some(ref message) => vec![Span::styled(
                    format!(" {}", message),
                    Style::default().fg(app.theme.green).bg(bg),
                )],
                None => vec![Span::styled(" ", Style::default().bg(bg))],
            };
            pad_with_hint(&mut spans, NAV_HINT, width, app.theme.dim, bg);
            Line::from(spans)
        }
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Pad spans to the full width and right-align a dim hint, if it fits
fn pad_with_hint(spans: &mut Vec<Span<'_>>, hint: &'static str, width: usize, fg: Color, bg: Color) {
    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let hint_width = hint.chars().count() + 1;
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(
            format!("{} ", hint),
            Style::default().fg(fg).bg(bg),
        ));
    }
}
