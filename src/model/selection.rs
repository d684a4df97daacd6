/// The single task currently chosen as the target of edit/complete/delete.
///
/// Advisory state owned by the TUI shell; the store never consults it.
/// Cleared whenever the displayed (category, date) pair changes or the
/// selected task is mutated or removed.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    current: Option<String>,
}

impl Selection {
    pub fn new() -> Self {
        Selection::default()
    }

    /// Record a task description as selected, replacing any previous one
    pub fn select(&mut self, description: impl Into<String>) {
        self.current = Some(description.into());
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// True if `description` is the selected task
    pub fn is_selected(&self, description: &str) -> bool {
        self.current.as_deref() == Some(description)
    }
}
