//! Common test utilities for integration tests

use taskpad::{MemoryStorage, Priority, TaskStorage, TaskStore};

/// Create a store over fresh in-memory storage
pub fn empty_store() -> TaskStore<MemoryStorage> {
    TaskStore::open(MemoryStorage::new()).unwrap()
}

/// Add two tasks and return their ids in insertion order
pub fn add_two_tasks<S: TaskStorage>(store: &mut TaskStore<S>) -> (String, String) {
    store.add_task("Write report", Priority::High).unwrap();
    store.add_task("Buy milk", Priority::Low).unwrap();
    let tasks = store.all_tasks();
    (tasks[0].id.clone(), tasks[1].id.clone())
}
