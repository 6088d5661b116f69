//! Caller-side input validation
//!
//! The store itself is permissive and will happily hold an empty or
//! duplicate title. Callers that accept user input run these checks
//! before mutating the store.

use anyhow::{Result, bail};

use crate::storage::TaskStorage;
use crate::store::TaskStore;

/// Trim a raw title and validate it against the current store contents
///
/// # Arguments
/// * `store` - The store whose titles the new one must not duplicate
/// * `raw_title` - The title as entered by the user
///
/// # Returns
/// The trimmed title, ready to pass to
/// [`add_task`](crate::store::TaskStore::add_task).
///
/// # Errors
/// Rejects titles that are empty after trimming, and titles that already
/// exist (case-insensitively).
pub fn validate_new_title<S: TaskStorage>(store: &TaskStore<S>, raw_title: &str) -> Result<String> {
    let title = raw_title.trim();

    if title.is_empty() {
        bail!("Task title cannot be empty");
    }

    if store.task_exists(title) {
        bail!("This task already exists");
    }

    Ok(title.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use crate::task::Priority;

    #[test]
    fn test_title_is_trimmed() {
        let store = TaskStore::open(MemoryStorage::new()).unwrap();
        let title = validate_new_title(&store, "  Buy milk  ").unwrap();
        assert_eq!(title, "Buy milk");
    }

    #[test]
    fn test_empty_and_whitespace_titles_are_rejected() {
        let store = TaskStore::open(MemoryStorage::new()).unwrap();
        for raw in ["", "   ", "\t\n"] {
            let err = validate_new_title(&store, raw).unwrap_err();
            assert_eq!(err.to_string(), "Task title cannot be empty");
        }
    }

    #[test]
    fn test_duplicate_titles_are_rejected_case_insensitively() {
        let mut store = TaskStore::open(MemoryStorage::new()).unwrap();
        store.add_task("Buy milk", Priority::Medium).unwrap();

        let err = validate_new_title(&store, "BUY MILK").unwrap_err();
        assert_eq!(err.to_string(), "This task already exists");
    }

    #[test]
    fn test_store_itself_stays_permissive() {
        let mut store = TaskStore::open(MemoryStorage::new()).unwrap();
        store.add_task("", Priority::Low).unwrap();
        store.add_task("", Priority::Low).unwrap();
        assert_eq!(store.all_tasks().len(), 2);
    }
}
