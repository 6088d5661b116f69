use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Generate an opaque unique identifier for a new task
pub fn generate_task_id() -> String {
    Uuid::new_v4().to_string()
}

/// Priority level for a prioritized task
///
/// Serializes to the exact wire strings `"High"`, `"Medium"`, `"Low"`
/// used in persisted records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    /// Must be dealt with first
    High,
    /// Default for newly created tasks
    Medium,
    /// Can wait
    Low,
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "High" => Ok(Priority::High),
            "Medium" => Ok(Priority::Medium),
            "Low" => Ok(Priority::Low),
            _ => Err(format!(
                "Invalid priority '{}'. Valid options are: High, Medium, Low",
                s
            )),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        };
        f.write_str(name)
    }
}

/// Task variant, fixed at construction
///
/// A task is either plain or carries a priority. The variant never
/// changes after the task is created; display and serialization branch
/// on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// No priority; display title equals the title
    Plain,
    /// Carries a priority; display title is suffixed with it
    Prioritized(Priority),
}

/// A user-created to-do item
///
/// The store owns all task instances; consumers receive cloned
/// snapshots and mutate only through store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Opaque unique identifier, immutable after creation
    pub id: String,
    /// Display string, immutable after creation (there is no rename)
    pub title: String,
    /// Completion flag, flipped via [`Task::toggle_completion`]
    pub completed: bool,
    /// Plain or prioritized, fixed at construction
    pub kind: TaskKind,
}

impl Task {
    /// Create a new, not-yet-completed task with a generated id
    ///
    /// The constructor accepts any title string; empty/duplicate
    /// rejection is the caller's responsibility.
    pub fn new(kind: TaskKind, title: impl Into<String>) -> Self {
        Self::with_id(generate_task_id(), kind, title, false)
    }

    /// Reconstruct a task with a known id, used when restoring from
    /// persisted records
    pub fn with_id(
        id: impl Into<String>,
        kind: TaskKind,
        title: impl Into<String>,
        completed: bool,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            completed,
            kind,
        }
    }

    /// Flip the completion flag
    ///
    /// Toggling twice returns the task to its original state.
    pub fn toggle_completion(&mut self) {
        self.completed = !self.completed;
    }

    /// The task's priority, if it is a prioritized task
    pub fn priority(&self) -> Option<Priority> {
        match self.kind {
            TaskKind::Plain => None,
            TaskKind::Prioritized(priority) => Some(priority),
        }
    }

    /// Title as shown in a list view
    ///
    /// Plain tasks display their title verbatim; prioritized tasks are
    /// suffixed with the priority in parentheses.
    pub fn display_title(&self) -> String {
        match self.kind {
            TaskKind::Plain => self.title.clone(),
            TaskKind::Prioritized(priority) => format!("{} ({})", self.title, priority),
        }
    }
}
