use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::DateKey;
use crate::ops::store_ops;
use crate::tui::app::{App, EditTarget};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Clear any transient status message on keypress
    app.status_message = None;

    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('q')) => {
            app.should_quit = true;
        }
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('?')) => {
            app.show_help = true;
        }

        // Cursor movement
        (KeyModifiers::NONE, KeyCode::Char('j') | KeyCode::Down) => {
            if !app.visible.is_empty() {
                app.cursor = (app.cursor + 1).min(app.visible.len() - 1);
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('k') | KeyCode::Up) => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        (KeyModifiers::NONE, KeyCode::Char('g')) => {
            app.cursor = 0;
        }
        (KeyModifiers::SHIFT, KeyCode::Char('G')) => {
            app.cursor = app.visible.len().saturating_sub(1);
        }

        // Selection
        (KeyModifiers::NONE, KeyCode::Enter | KeyCode::Char(' ')) => {
            toggle_select(app);
        }
        (KeyModifiers::NONE, KeyCode::Esc) => {
            app.selection.clear();
        }

        // Date selector
        (KeyModifiers::NONE, KeyCode::Char('h') | KeyCode::Left) => {
            let date = app.date.prev_day();
            app.set_date(date);
        }
        (KeyModifiers::NONE, KeyCode::Char('l') | KeyCode::Right) => {
            let date = app.date.next_day();
            app.set_date(date);
        }
        (KeyModifiers::NONE, KeyCode::Char('t')) => {
            app.set_date(DateKey::today());
        }
        (KeyModifiers::SHIFT, KeyCode::Char('D')) => {
            let initial = app.date.to_string();
            app.open_prompt(EditTarget::GotoDate, &initial);
        }

        // Category tabs
        (KeyModifiers::NONE, KeyCode::Tab) => {
            let category = app.category.toggle();
            app.set_category(category);
        }

        // Mutations
        (KeyModifiers::NONE, KeyCode::Char('a')) => {
            app.open_prompt(EditTarget::NewTask, "");
        }
        (KeyModifiers::NONE, KeyCode::Char('e')) => {
            edit_selected(app);
        }
        (KeyModifiers::NONE, KeyCode::Char('x')) => {
            complete_selected(app);
        }
        (KeyModifiers::NONE, KeyCode::Char('d')) => {
            delete_selected(app);
        }

        _ => {}
    }
}

/// Select the task under the cursor, or deselect it if already selected
fn toggle_select(app: &mut App) {
    let Some(task) = app.cursor_task() else {
        return;
    };
    let description = task.description.clone();
    if app.selection.is_selected(&description) {
        app.selection.clear();
    } else {
        app.selection.select(description);
    }
}

fn edit_selected(app: &mut App) {
    let Some(old) = app.selection.current().map(String::from) else {
        app.warn("Selection Error", "No task selected for editing.");
        return;
    };
    app.open_prompt(EditTarget::RenameTask { old: old.clone() }, &old);
}

fn complete_selected(app: &mut App) {
    let Some(description) = app.selection.current().map(String::from) else {
        app.warn("Selection Error", "No task selected to mark as completed.");
        return;
    };
    match store_ops::complete_task(&mut app.store, app.category, app.date, &description) {
        Ok(()) => {
            app.selection.clear();
            app.refresh_tasks();
            app.status_message = Some(format!("completed \"{}\"", description));
        }
        Err(e) => {
            app.selection.clear();
            app.refresh_tasks();
            app.warn("Task Error", e.to_string());
        }
    }
}

fn delete_selected(app: &mut App) {
    let Some(description) = app.selection.current().map(String::from) else {
        app.warn("Selection Error", "No task selected for deletion.");
        return;
    };
    match store_ops::delete_task(&mut app.store, app.category, app.date, &description) {
        Ok(()) => {
            app.selection.clear();
            app.refresh_tasks();
            app.status_message = Some(format!("deleted \"{}\"", description));
        }
        Err(e) => {
            app.selection.clear();
            app.refresh_tasks();
            app.warn("Task Error", e.to_string());
        }
    }
}
