pub mod help_overlay;
pub mod notice_popup;
pub mod status_row;
pub mod tab_bar;
pub mod task_view;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Main render function: layout, sub-renderers, then overlays
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: tab bar (2 rows) | content | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // tab bar + separator
            Constraint::Min(1),    // task list
            Constraint::Length(1), // status row
        ])
        .split(area);

    tab_bar::render_tab_bar(frame, app, chunks[0]);
    task_view::render_task_view(frame, app, chunks[1]);
    status_row::render_status_row(frame, app, chunks[2]);

    // Overlays render on top of everything
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, frame.area());
    }
    if app.notice.is_some() {
        notice_popup::render_notice_popup(frame, app, frame.area());
    }
}

/// Center a width×height rect inside `area`, clamped to fit
pub(super) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
