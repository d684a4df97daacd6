use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::DateKey;
use crate::ops::store_ops::{self, StoreError};
use crate::tui::app::{App, EditTarget};

pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => {
            app.close_prompt();
        }
        (_, KeyCode::Enter) => {
            commit_prompt(app);
        }
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            app.edit_buffer.insert(app.edit_cursor, c);
            app.edit_cursor += c.len_utf8();
        }
        (_, KeyCode::Backspace) => {
            if let Some(c) = app.edit_buffer[..app.edit_cursor].chars().next_back() {
                app.edit_cursor -= c.len_utf8();
                app.edit_buffer.remove(app.edit_cursor);
            }
        }
        (_, KeyCode::Delete) => {
            if app.edit_cursor < app.edit_buffer.len() {
                app.edit_buffer.remove(app.edit_cursor);
            }
        }
        (_, KeyCode::Left) => {
            if let Some(c) = app.edit_buffer[..app.edit_cursor].chars().next_back() {
                app.edit_cursor -= c.len_utf8();
            }
        }
        (_, KeyCode::Right) => {
            if let Some(c) = app.edit_buffer[app.edit_cursor..].chars().next() {
                app.edit_cursor += c.len_utf8();
            }
        }
        (_, KeyCode::Home) => {
            app.edit_cursor = 0;
        }
        (_, KeyCode::End) => {
            app.edit_cursor = app.edit_buffer.len();
        }
        _ => {}
    }
}

/// Commit the prompt according to its target.
///
/// On InvalidInput the prompt stays open so the text can be fixed; on
/// NotFound (stale selection) the prompt closes and the list re-syncs.
fn commit_prompt(app: &mut App) {
    let Some(target) = app.edit_target.clone() else {
        app.close_prompt();
        return;
    };
    let text = app.edit_buffer.clone();

    match target {
        EditTarget::NewTask => {
            match store_ops::add_task(&mut app.store, app.category, app.date, &text) {
                Ok(()) => {
                    app.close_prompt();
                    // Overwriting the selected task counts as mutating it
                    if app.selection.is_selected(&text) {
                        app.selection.clear();
                    }
                    app.refresh_tasks();
                    // Put the cursor on the new entry
                    if let Some(idx) = app.visible.iter().position(|t| t.description == text) {
                        app.cursor = idx;
                    }
                    app.status_message = Some(format!("added \"{}\"", text));
                }
                Err(e) => {
                    app.warn("Input Error", e.to_string());
                }
            }
        }
        EditTarget::RenameTask { old } => {
            match store_ops::edit_task(&mut app.store, app.category, app.date, &old, &text) {
                Ok(()) => {
                    app.close_prompt();
                    app.selection.clear();
                    app.refresh_tasks();
                    app.status_message = Some(format!("renamed to \"{}\"", text));
                }
                Err(e @ StoreError::InvalidInput(_)) => {
                    app.warn("Input Error", e.to_string());
                }
                Err(e) => {
                    app.close_prompt();
                    app.selection.clear();
                    app.refresh_tasks();
                    app.warn("Task Error", e.to_string());
                }
            }
        }
        EditTarget::GotoDate => match text.parse::<DateKey>() {
            Ok(date) => {
                app.close_prompt();
                app.set_date(date);
            }
            Err(e) => {
                app.warn("Input Error", e.to_string());
            }
        },
    }
}
