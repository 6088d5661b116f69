//! Taskpad Library
//!
//! This library provides the core of a prioritized to-do list manager:
//! a task data model, an observable store that persists after every
//! mutation, and a pluggable local-storage backend.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **Caller Layer**: `validation` and `formatting` modules - Input
//!   checks and display output for interactive callers (the CLI binary)
//! - **Domain Layer**: `task` and `store` modules - Task model, variants,
//!   mutations, and observer notification
//! - **Persistence Layer**: `storage` module - `TaskStorage` port with
//!   JSON-file and in-memory backends
//!
//! # Example
//!
//! ```
//! use taskpad::{MemoryStorage, Priority, TaskStore};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let mut store = TaskStore::open(MemoryStorage::new())?;
//!     store.add_task("Write report", Priority::High)?;
//!     assert_eq!(store.all_tasks()[0].display_title(), "Write report (High)");
//!     Ok(())
//! }
//! ```

pub mod formatting;
pub mod storage;
pub mod store;
pub mod task;
pub mod validation;

// Re-export commonly used types
pub use storage::{JsonFileStorage, MemoryStorage, TaskStorage};
pub use store::{ObserverId, TaskStore};
pub use task::{Priority, RecordKind, Task, TaskKind, TaskRecord};
