//! Persistence port and backends
//!
//! The store talks to storage through the [`TaskStorage`] trait so the
//! backend can be swapped: a JSON file on disk for the CLI, an in-memory
//! backend for tests and embedding.

use anyhow::Result;
use log::debug;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use crate::task::TaskRecord;

/// Storage backend for the persisted task collection
///
/// The collection is always written wholesale; there are no partial or
/// incremental writes.
pub trait TaskStorage {
    /// Load the persisted records
    ///
    /// Returns `Ok(None)` when no value has ever been saved, which is
    /// distinct from a saved empty collection.
    fn load(&self) -> Result<Option<Vec<TaskRecord>>>;

    /// Replace the persisted value with the given records
    fn save(&self, records: &[TaskRecord]) -> Result<()>;
}

// A shared reference to a backend is itself a backend, so a store can
// borrow storage that outlives it.
impl<S: TaskStorage + ?Sized> TaskStorage for &S {
    fn load(&self) -> Result<Option<Vec<TaskRecord>>> {
        (**self).load()
    }

    fn save(&self, records: &[TaskRecord]) -> Result<()> {
        (**self).save(records)
    }
}

/// File-backed storage holding the task collection as a JSON array
pub struct JsonFileStorage {
    file_path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

impl TaskStorage for JsonFileStorage {
    fn load(&self) -> Result<Option<Vec<TaskRecord>>> {
        if !self.file_path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.file_path)?;
        if content.trim().is_empty() {
            // An existing but empty file counts as no persisted value.
            return Ok(None);
        }

        let records: Vec<TaskRecord> = serde_json::from_str(&content)?;
        debug!(
            "loaded {} task record(s) from {}",
            records.len(),
            self.file_path.display()
        );
        Ok(Some(records))
    }

    fn save(&self, records: &[TaskRecord]) -> Result<()> {
        let content = serde_json::to_string_pretty(records)?;
        fs::write(&self.file_path, content)?;
        Ok(())
    }
}

/// In-memory storage backend
///
/// Starts with no persisted value, like a fresh data file.
#[derive(Default)]
pub struct MemoryStorage {
    records: RefCell<Option<Vec<TaskRecord>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the backend with an already-persisted value
    pub fn with_records(records: Vec<TaskRecord>) -> Self {
        Self {
            records: RefCell::new(Some(records)),
        }
    }
}

impl TaskStorage for MemoryStorage {
    fn load(&self) -> Result<Option<Vec<TaskRecord>>> {
        Ok(self.records.borrow().clone())
    }

    fn save(&self, records: &[TaskRecord]) -> Result<()> {
        *self.records.borrow_mut() = Some(records.to_vec());
        Ok(())
    }
}
