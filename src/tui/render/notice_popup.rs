use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

use super::centered_rect;

/// Render the blocking notice popup (dismiss with Esc or Enter)
pub fn render_notice_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(notice) = &app.notice else {
        return;
    };

    let popup_w: u16 = 48.min(area.width.saturating_sub(2));
    let inner_w = popup_w.saturating_sub(2) as usize;

    let bg = app.theme.background;
    let header_style = Style::default()
        .fg(app.theme.yellow)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let mut styled_lines: Vec<(String, Style)> = Vec::new();
    styled_lines.push((format!(" {}", notice.title), header_style));
    styled_lines.push(("".into(), text_style));
    for s in wrap_text(" ", &notice.text, inner_w) {
        styled_lines.push((s, text_style));
    }
    styled_lines.push(("".into(), text_style));
    styled_lines.push((" Press Esc to dismiss.".into(), dim_style));

    // Dynamic height from content + 2 for borders
    let popup_h = ((styled_lines.len() as u16) + 2).min(area.height.saturating_sub(2));

    let overlay_area = centered_rect(area, popup_w, popup_h);
    frame.render_widget(Clear, overlay_area);

    let lines: Vec<Line> = styled_lines
        .into_iter()
        .map(|(text, style)| Line::from(Span::styled(text, style)))
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.yellow).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, overlay_area);
}

/// Word-wrap `text` into lines of at most `max_width` characters.
/// Every line (including the first) is prefixed with `indent`.
fn wrap_text(indent: &str, text: &str, max_width: usize) -> Vec<String> {
    let indent_len = indent.chars().count();
    let mut lines = Vec::new();
    let mut current = indent.to_string();
    let mut current_len = indent_len;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        let space = if current_len == indent_len { 0 } else { 1 };
        if current_len + space + word_len > max_width && current_len > indent_len {
            lines.push(current);
            current = indent.to_string();
            current_len = indent_len;
        }
        if current_len > indent_len {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }
    if current_len > indent_len {
        lines.push(current);
    }
    lines
}
