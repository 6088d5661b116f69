//! Task domain model
//!
//! This module contains the core task data structures. It is split into
//! submodules:
//! - `model`: task entity, variant kinds, priority levels
//! - `record`: persisted record forms and legacy-schema compatibility

mod model;
mod record;

// Re-export all public types
pub use model::{Priority, Task, TaskKind, generate_task_id};
pub use record::{RecordKind, TaskRecord};
