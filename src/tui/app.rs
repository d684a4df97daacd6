use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::{Category, DateKey, Selection, Task, TaskStore};
use crate::ops::store_ops;

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Edit,
}

/// What committing the edit prompt does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditTarget {
    /// `a`: add a task to the displayed bucket
    NewTask,
    /// `e`: rename the selected task
    RenameTask { old: String },
    /// `D`: jump to a typed date
    GotoDate,
}

/// Blocking warning popup. Intercepts all input until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub text: String,
}

/// Main application state
pub struct App {
    pub store: TaskStore,
    pub selection: Selection,
    /// Displayed category tab
    pub category: Category,
    /// Displayed date
    pub date: DateKey,
    /// Tasks of the displayed bucket, re-listed after every mutation
    pub visible: Vec<Task>,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    /// Cursor index into `visible`
    pub cursor: usize,
    /// Scroll offset (first visible row)
    pub scroll_offset: usize,
    pub edit_buffer: String,
    /// Byte offset into `edit_buffer`, always on a char boundary
    pub edit_cursor: usize,
    pub edit_target: Option<EditTarget>,
    pub notice: Option<Notice>,
    /// Transient message in the status row, cleared on the next keypress
    pub status_message: Option<String>,
    pub show_help: bool,
}

impl App {
    pub fn new(category: Category, date: DateKey, theme: Theme) -> Self {
        let mut app = App {
            store: TaskStore::new(),
            selection: Selection::new(),
            category,
            date,
            visible: Vec::new(),
            mode: Mode::Navigate,
            should_quit: false,
            theme,
            cursor: 0,
            scroll_offset: 0,
            edit_buffer: String::new(),
            edit_cursor: 0,
            edit_target: None,
            notice: None,
            status_message: None,
            show_help: false,
        };
        app.refresh_tasks();
        app
    }

    /// Re-list the displayed bucket and clamp the cursor.
    /// Called after every successful mutation and after every
    /// date/category change.
    pub fn refresh_tasks(&mut self) {
        self.visible = store_ops::list_tasks(&self.store, self.category, self.date);
        if self.visible.is_empty() {
            self.cursor = 0;
            self.scroll_offset = 0;
        } else {
            self.cursor = self.cursor.min(self.visible.len() - 1);
        }
    }

    /// Switch the displayed date. Clears the selection.
    pub fn set_date(&mut self, date: DateKey) {
        if date != self.date {
            self.date = date;
            self.selection.clear();
            self.cursor = 0;
            self.scroll_offset = 0;
        }
        self.refresh_tasks();
    }

    /// Switch the displayed category. Clears the selection.
    pub fn set_category(&mut self, category: Category) {
        if category != self.category {
            self.category = category;
            self.selection.clear();
            self.cursor = 0;
            self.scroll_offset = 0;
        }
        self.refresh_tasks();
    }

    /// The task under the cursor
    pub fn cursor_task(&self) -> Option<&Task> {
        self.visible.get(self.cursor)
    }

    /// (open, done) counts for the displayed bucket
    pub fn counts(&self) -> (usize, usize) {
        let done = self.visible.iter().filter(|t| t.completed).count();
        (self.visible.len() - done, done)
    }

    /// Raise a blocking notice
    pub fn warn(&mut self, title: &str, text: impl Into<String>) {
        self.notice = Some(Notice {
            title: title.to_string(),
            text: text.into(),
        });
    }

    /// Enter Edit mode with the given target and initial buffer text
    pub fn open_prompt(&mut self, target: EditTarget, initial: &str) {
        self.edit_buffer = initial.to_string();
        self.edit_cursor = self.edit_buffer.len();
        self.edit_target = Some(target);
        self.mode = Mode::Edit;
    }

    /// Leave Edit mode, discarding the buffer
    pub fn close_prompt(&mut self) {
        self.edit_buffer.clear();
        self.edit_cursor = 0;
        self.edit_target = None;
        self.mode = Mode::Navigate;
    }
}

/// Run the TUI application
pub fn run(
    category: Category,
    date: DateKey,
    theme: Theme,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(category, date, theme);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Run event loop
    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
