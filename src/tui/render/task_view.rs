use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Checkbox symbol for a task
fn state_symbol(completed: bool) -> &'static str {
    if completed { "[x]" } else { "[ ]" }
}

/// Render the task list for the displayed (category, date) bucket
pub fn render_task_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;

    if app.visible.is_empty() {
        let empty = Paragraph::new(" No tasks for this day")
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    // Clamp cursor and adjust scroll to keep it on screen
    let visible_height = (area.height as usize).max(1);
    app.cursor = app.cursor.min(app.visible.len() - 1);
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if app.cursor >= app.scroll_offset + visible_height {
        app.scroll_offset = app.cursor - (visible_height - 1);
    }

    let end = app.visible.len().min(app.scroll_offset + visible_height);
    let mut lines: Vec<Line> = Vec::with_capacity(visible_height);

    for (task, row) in app.visible[app.scroll_offset..end]
        .iter()
        .zip(app.scroll_offset..end)
    {
        let is_cursor = row == app.cursor;
        let is_selected = app.selection.is_selected(&task.description);

        let row_bg = if is_selected { app.theme.selection_bg } else { bg };
        let marker = if is_selected {
            Span::styled(
                "\u{258C}",
                Style::default().fg(app.theme.selection_border).bg(row_bg),
            )
        } else {
            Span::styled(" ", Style::default().bg(row_bg))
        };

        let cursor_mark = if is_cursor { "› " } else { "  " };

        let checkbox_style = if task.completed {
            Style::default().fg(app.theme.green).bg(row_bg)
        } else {
            Style::default().fg(app.theme.dim).bg(row_bg)
        };

        let mut text_style = if task.completed {
            Style::default()
                .fg(app.theme.completed)
                .bg(row_bg)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(app.theme.text).bg(row_bg)
        };
        if is_cursor {
            text_style = text_style
                .fg(app.theme.text_bright)
                .add_modifier(Modifier::BOLD);
        }

        lines.push(Line::from(vec![
            marker,
            Span::styled(
                cursor_mark,
                Style::default().fg(app.theme.highlight).bg(row_bg),
            ),
            Span::styled(format!("{} ", state_symbol(task.completed)), checkbox_style),
            Span::styled(task.description.clone(), text_style),
        ]));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
