use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

use super::centered_rect;

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;

    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(" Key Bindings", header_style)));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Navigation", header_style)));
    add_binding(&mut lines, " \u{2191}\u{2193}/jk", "Move cursor", key_style, desc_style);
    add_binding(&mut lines, " g/G", "Jump to top/bottom", key_style, desc_style);
    add_binding(&mut lines, " Enter/Space", "Select / deselect task", key_style, desc_style);
    add_binding(&mut lines, " Esc", "Clear selection", key_style, desc_style);
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Day and category", header_style)));
    add_binding(&mut lines, " \u{2190}\u{2192}/hl", "Previous / next day", key_style, desc_style);
    add_binding(&mut lines, " t", "Jump to today", key_style, desc_style);
    add_binding(&mut lines, " D", "Go to a typed date", key_style, desc_style);
    add_binding(&mut lines, " Tab", "Switch category", key_style, desc_style);
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Tasks", header_style)));
    add_binding(&mut lines, " a", "Add a task", key_style, desc_style);
    add_binding(&mut lines, " x", "Complete selected task", key_style, desc_style);
    add_binding(&mut lines, " e", "Edit selected task", key_style, desc_style);
    add_binding(&mut lines, " d", "Delete selected task", key_style, desc_style);
    lines.push(Line::from(""));

    add_binding(&mut lines, " q", "Quit", key_style, desc_style);
    add_binding(&mut lines, " ?", "Close help", key_style, desc_style);

    let popup_w: u16 = 44.min(area.width.saturating_sub(2));
    let popup_h = ((lines.len() as u16) + 2).min(area.height.saturating_sub(2));
    let overlay_area = centered_rect(area, popup_w, popup_h);

    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, overlay_area);
}

fn add_binding<'a>(
    lines: &mut Vec<Line<'a>>,
    key: &'a str,
    desc: &'a str,
    key_style: Style,
    desc_style: Style,
) {
    lines.push(Line::from(vec![
        Span::styled(format!("{:<14}", key), key_style),
        Span::styled(desc, desc_style),
    ]));
}
