//! Integration tests for the task store through the public library API.

use pretty_assertions::assert_eq;

use dolist::model::{Category, DateKey, Task, TaskStore};
use dolist::ops::store_ops::{
    StoreError, add_task, complete_task, delete_task, edit_task, list_tasks,
};

fn date(s: &str) -> DateKey {
    s.parse().unwrap()
}

fn task(description: &str, completed: bool) -> Task {
    Task {
        description: description.to_string(),
        completed,
    }
}

fn descriptions(store: &TaskStore, category: Category, d: DateKey) -> Vec<String> {
    list_tasks(store, category, d)
        .into_iter()
        .map(|t| t.description)
        .collect()
}

#[test]
fn full_task_lifecycle() {
    let mut store = TaskStore::new();
    let d = date("2024-01-01");

    add_task(&mut store, Category::Personal, d, "Buy milk").unwrap();
    assert_eq!(
        list_tasks(&store, Category::Personal, d),
        vec![task("Buy milk", false)]
    );

    complete_task(&mut store, Category::Personal, d, "Buy milk").unwrap();
    assert_eq!(
        list_tasks(&store, Category::Personal, d),
        vec![task("Buy milk", true)]
    );

    delete_task(&mut store, Category::Personal, d, "Buy milk").unwrap();
    assert_eq!(list_tasks(&store, Category::Personal, d), vec![]);
    assert!(store.is_empty());
}

#[test]
fn buckets_do_not_interfere() {
    let mut store = TaskStore::new();
    let jan1 = date("2024-01-01");
    let jan2 = date("2024-01-02");

    add_task(&mut store, Category::Personal, jan1, "Buy milk").unwrap();
    add_task(&mut store, Category::Personal, jan2, "Call mom").unwrap();
    add_task(&mut store, Category::Professional, jan1, "File report").unwrap();

    complete_task(&mut store, Category::Personal, jan1, "Buy milk").unwrap();
    delete_task(&mut store, Category::Professional, jan1, "File report").unwrap();

    assert_eq!(
        list_tasks(&store, Category::Personal, jan1),
        vec![task("Buy milk", true)]
    );
    assert_eq!(
        list_tasks(&store, Category::Personal, jan2),
        vec![task("Call mom", false)]
    );
    assert_eq!(list_tasks(&store, Category::Professional, jan1), vec![]);
}

#[test]
fn ordering_is_stable_under_churn() {
    let mut store = TaskStore::new();
    let d = date("2024-03-15");

    for description in ["alpha", "beta", "gamma", "delta"] {
        add_task(&mut store, Category::Professional, d, description).unwrap();
    }

    delete_task(&mut store, Category::Professional, d, "beta").unwrap();
    complete_task(&mut store, Category::Professional, d, "gamma").unwrap();
    // Rename moves the entry to the end, keeping its flag
    edit_task(&mut store, Category::Professional, d, "alpha", "epsilon").unwrap();
    add_task(&mut store, Category::Professional, d, "zeta").unwrap();

    assert_eq!(
        list_tasks(&store, Category::Professional, d),
        vec![
            task("gamma", true),
            task("delta", false),
            task("epsilon", false),
            task("zeta", false),
        ]
    );
}

#[test]
fn operations_report_failures_without_poisoning_the_store() {
    let mut store = TaskStore::new();
    let d = date("2024-01-01");

    assert_eq!(
        delete_task(&mut store, Category::Personal, d, "ghost"),
        Err(StoreError::NotFound("ghost".to_string()))
    );
    assert!(matches!(
        add_task(&mut store, Category::Personal, d, "  "),
        Err(StoreError::InvalidInput(_))
    ));
    assert!(store.is_empty());

    // The store stays usable after failures
    add_task(&mut store, Category::Personal, d, "Buy milk").unwrap();
    assert!(matches!(
        complete_task(&mut store, Category::Personal, d, "ghost"),
        Err(StoreError::NotFound(_))
    ));
    assert_eq!(
        list_tasks(&store, Category::Personal, d),
        vec![task("Buy milk", false)]
    );
}

#[test]
fn duplicate_descriptions_collide_and_overwrite() {
    let mut store = TaskStore::new();
    let d = date("2024-01-01");

    add_task(&mut store, Category::Personal, d, "Buy milk").unwrap();
    add_task(&mut store, Category::Personal, d, "Walk dog").unwrap();
    complete_task(&mut store, Category::Personal, d, "Buy milk").unwrap();

    // Re-adding the same description resets it in place
    add_task(&mut store, Category::Personal, d, "Buy milk").unwrap();
    assert_eq!(
        list_tasks(&store, Category::Personal, d),
        vec![task("Buy milk", false), task("Walk dog", false)]
    );

    // Renaming onto an existing description overwrites it
    complete_task(&mut store, Category::Personal, d, "Buy milk").unwrap();
    edit_task(&mut store, Category::Personal, d, "Buy milk", "Walk dog").unwrap();
    assert_eq!(
        list_tasks(&store, Category::Personal, d),
        vec![task("Walk dog", true)]
    );

    assert_eq!(descriptions(&store, Category::Personal, d), vec!["Walk dog"]);
}
