use crate::model::category::Category;
use crate::model::date::DateKey;
use crate::model::store::{Task, TaskStore};

/// Error type for store operations
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("task not found: {0}")]
    NotFound(String),
    #[error("{0}")]
    InvalidInput(String),
}

/// Add a task to the (category, date) bucket with completed = false.
///
/// An existing entry with the same description is silently overwritten
/// (it keeps its position in the bucket, its flag resets to false).
pub fn add_task(
    store: &mut TaskStore,
    category: Category,
    date: DateKey,
    description: &str,
) -> Result<(), StoreError> {
    if description.trim().is_empty() {
        return Err(StoreError::InvalidInput(
            "task description cannot be empty".to_string(),
        ));
    }
    store
        .dates_mut(category)
        .entry(date)
        .or_default()
        .insert(description.to_string(), false);
    Ok(())
}

/// Remove a task from the (category, date) bucket.
///
/// Removing the last task of a date removes the date entry itself.
pub fn delete_task(
    store: &mut TaskStore,
    category: Category,
    date: DateKey,
    description: &str,
) -> Result<(), StoreError> {
    let dates = store.dates_mut(category);
    let bucket = dates
        .get_mut(&date)
        .ok_or_else(|| StoreError::NotFound(description.to_string()))?;
    bucket
        .shift_remove(description)
        .ok_or_else(|| StoreError::NotFound(description.to_string()))?;
    if bucket.is_empty() {
        dates.shift_remove(&date);
    }
    Ok(())
}

/// Mark a task completed. Idempotent: completing a completed task is not
/// an error.
pub fn complete_task(
    store: &mut TaskStore,
    category: Category,
    date: DateKey,
    description: &str,
) -> Result<(), StoreError> {
    let completed = store
        .dates_mut(category)
        .get_mut(&date)
        .and_then(|bucket| bucket.get_mut(description))
        .ok_or_else(|| StoreError::NotFound(description.to_string()))?;
    *completed = true;
    Ok(())
}

/// Rename a task, carrying its completed flag over to the new description.
///
/// The renamed entry moves to the end of its bucket. Renaming onto an
/// existing description overwrites that entry (same collision rule as
/// `add_task`).
pub fn edit_task(
    store: &mut TaskStore,
    category: Category,
    date: DateKey,
    old: &str,
    new: &str,
) -> Result<(), StoreError> {
    if new.trim().is_empty() {
        return Err(StoreError::InvalidInput(
            "task description cannot be empty".to_string(),
        ));
    }
    let bucket = store
        .dates_mut(category)
        .get_mut(&date)
        .ok_or_else(|| StoreError::NotFound(old.to_string()))?;
    let completed = bucket
        .shift_remove(old)
        .ok_or_else(|| StoreError::NotFound(old.to_string()))?;
    bucket.insert(new.to_string(), completed);
    Ok(())
}

/// List the tasks of a (category, date) bucket in insertion order.
/// An absent bucket lists as empty.
pub fn list_tasks(store: &TaskStore, category: Category, date: DateKey) -> Vec<Task> {
    store
        .bucket(category, date)
        .map(|bucket| {
            bucket
                .iter()
                .map(|(description, &completed)| Task {
                    description: description.clone(),
                    completed,
                })
                .collect()
        })
        .unwrap_or_default()
}
