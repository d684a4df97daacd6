use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Category;
use crate::tui::app::App;

/// Render the tab bar: category tabs on the left, the date selector
/// readout and bucket counts on the right, and a separator line below.
pub fn render_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans = vec![Span::styled(" ", Style::default().bg(bg))];
    for (i, category) in [Category::Personal, Category::Professional]
        .into_iter()
        .enumerate()
    {
        if i > 0 {
            spans.push(Span::styled(
                " │ ",
                Style::default().fg(app.theme.dim).bg(bg),
            ));
        }
        let style = if category == app.category {
            Style::default()
                .fg(app.theme.category_color(category))
                .bg(bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.dim).bg(bg)
        };
        spans.push(Span::styled(category.label(), style));
    }

    // Right side: counts, then the date between its step arrows
    let (open, done) = app.counts();
    let counts = format!("{} open · {} done", open, done);
    let date = app.date.to_string();
    let right_width = counts.chars().count() + date.chars().count() + "  ‹  › ".chars().count();
    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    if content_width + right_width < width {
        spans.push(Span::styled(
            " ".repeat(width - content_width - right_width),
            Style::default().bg(bg),
        ));
        spans.push(Span::styled(
            counts,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
        spans.push(Span::styled(
            "  ‹ ",
            Style::default().fg(app.theme.dim).bg(bg),
        ));
        spans.push(Span::styled(
            date,
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            " › ",
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    let separator = Line::from(Span::styled(
        "─".repeat(width),
        Style::default().fg(app.theme.dim).bg(bg),
    ));

    let paragraph =
        Paragraph::new(vec![Line::from(spans), separator]).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
