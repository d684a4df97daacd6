mod edit;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, Mode};

#[allow(unused_imports)]
use edit::*;
#[allow(unused_imports)]
use navigate::*;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // A notice blocks all other input until dismissed
    if app.notice.is_some() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
            app.notice = None;
        }
        return;
    }

    // Help overlay intercepts ? and Esc
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
            app.show_help = false;
        }
        return;
    }

    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Edit => handle_edit(app, key),
    }
}
