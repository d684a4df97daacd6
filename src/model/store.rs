use indexmap::IndexMap;

use crate::model::category::Category;
use crate::model::date::DateKey;

/// One row of a listed bucket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// The description doubles as the task's identity within its bucket
    pub description: String,
    pub completed: bool,
}

/// The set of tasks for one (category, date) pair: description → completed.
/// Insertion order is display order.
pub type Bucket = IndexMap<String, bool>;

/// All tasks, grouped by category and then by date.
///
/// Sole owner of task truth; mutated only through `ops::store_ops`.
/// Invariant: a date entry exists only while it holds at least one
/// task; deleting the last task of a date removes the date itself.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    personal: IndexMap<DateKey, Bucket>,
    professional: IndexMap<DateKey, Bucket>,
}

impl TaskStore {
    pub fn new() -> Self {
        TaskStore::default()
    }

    /// The date map for one category
    pub(crate) fn dates(&self, category: Category) -> &IndexMap<DateKey, Bucket> {
        match category {
            Category::Personal => &self.personal,
            Category::Professional => &self.professional,
        }
    }

    /// Mutable date map for one category
    pub(crate) fn dates_mut(&mut self, category: Category) -> &mut IndexMap<DateKey, Bucket> {
        match category {
            Category::Personal => &mut self.personal,
            Category::Professional => &mut self.professional,
        }
    }

    /// The bucket for a (category, date) pair, if any task exists there
    pub fn bucket(&self, category: Category, date: DateKey) -> Option<&Bucket> {
        self.dates(category).get(&date)
    }

    /// True if no task exists anywhere in the store
    pub fn is_empty(&self) -> bool {
        self.personal.is_empty() && self.professional.is_empty()
    }
}
