//! Persisted record forms for tasks
//!
//! Records are the wire shape written to storage as a JSON array. The
//! current schema tags each record with an explicit `kind`; records
//! written before the tag existed carry no `kind` and are read back via
//! the legacy rule (presence of `priority` decides the variant).

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use super::model::{Priority, Task, TaskKind};

/// Explicit variant tag carried in current-schema records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Plain,
    Prioritized,
}

/// Wire form of a single task
///
/// Field spelling matches the persisted layout exactly:
/// `{ "id", "title", "isCompleted", "kind"?, "priority"? }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: String,
    pub title: String,
    #[serde(rename = "isCompleted")]
    pub is_completed: bool,
    /// Absent in legacy records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<RecordKind>,
    /// Present only for prioritized tasks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

impl TaskRecord {
    /// Build the persisted form of a task
    ///
    /// Always writes the explicit `kind` tag; `priority` is written only
    /// for prioritized tasks.
    pub fn from_task(task: &Task) -> Self {
        let (kind, priority) = match task.kind {
            TaskKind::Plain => (RecordKind::Plain, None),
            TaskKind::Prioritized(priority) => (RecordKind::Prioritized, Some(priority)),
        };
        Self {
            id: task.id.clone(),
            title: task.title.clone(),
            is_completed: task.completed,
            kind: Some(kind),
            priority,
        }
    }

    /// Reconstruct a task from its persisted form
    ///
    /// The explicit `kind` tag is authoritative when present. Legacy
    /// records without a tag fall back to the priority-presence rule.
    ///
    /// # Errors
    /// A record tagged `prioritized` that carries no priority is
    /// malformed and rejected.
    pub fn into_task(self) -> Result<Task> {
        let kind = match (self.kind, self.priority) {
            (Some(RecordKind::Prioritized), Some(priority)) => TaskKind::Prioritized(priority),
            (Some(RecordKind::Prioritized), None) => {
                bail!(
                    "Task record '{}' is tagged prioritized but carries no priority",
                    self.id
                );
            }
            (Some(RecordKind::Plain), _) => TaskKind::Plain,
            (None, Some(priority)) => TaskKind::Prioritized(priority),
            (None, None) => TaskKind::Plain,
        };
        Ok(Task::with_id(self.id, kind, self.title, self.is_completed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_preserves_all_fields() {
        let mut task = Task::new(TaskKind::Prioritized(Priority::Medium), "Write report");
        task.toggle_completion();

        let restored = TaskRecord::from_task(&task).into_task().unwrap();
        assert_eq!(restored, task);
    }

    #[test]
    fn test_round_trip_plain_task() {
        let task = Task::new(TaskKind::Plain, "Buy milk");
        let restored = TaskRecord::from_task(&task).into_task().unwrap();
        assert_eq!(restored, task);
    }

    #[test]
    fn test_legacy_record_without_priority_is_plain() {
        let record = TaskRecord {
            id: "legacy-1".to_string(),
            title: "Buy milk".to_string(),
            is_completed: false,
            kind: None,
            priority: None,
        };
        let task = record.into_task().unwrap();
        assert_eq!(task.kind, TaskKind::Plain);
        assert_eq!(task.display_title(), "Buy milk");
    }

    #[test]
    fn test_legacy_record_with_priority_is_prioritized() {
        let record = TaskRecord {
            id: "legacy-2".to_string(),
            title: "Write report".to_string(),
            is_completed: true,
            kind: None,
            priority: Some(Priority::High),
        };
        let task = record.into_task().unwrap();
        assert_eq!(task.kind, TaskKind::Prioritized(Priority::High));
        assert!(task.completed);
    }

    #[test]
    fn test_plain_tag_wins_over_stray_priority() {
        let record = TaskRecord {
            id: "tagged-1".to_string(),
            title: "Buy milk".to_string(),
            is_completed: false,
            kind: Some(RecordKind::Plain),
            priority: Some(Priority::Low),
        };
        let task = record.into_task().unwrap();
        assert_eq!(task.kind, TaskKind::Plain);
    }

    #[test]
    fn test_prioritized_tag_without_priority_is_rejected() {
        let record = TaskRecord {
            id: "broken-1".to_string(),
            title: "Write report".to_string(),
            is_completed: false,
            kind: Some(RecordKind::Prioritized),
            priority: None,
        };
        let err = record.into_task().unwrap_err();
        assert!(err.to_string().contains("broken-1"));
    }

    #[test]
    fn test_serialized_field_spelling() {
        let task = Task::new(TaskKind::Prioritized(Priority::High), "Write report");
        let json = serde_json::to_string(&TaskRecord::from_task(&task)).unwrap();
        assert!(json.contains("\"isCompleted\":false"));
        assert!(json.contains("\"kind\":\"prioritized\""));
        assert!(json.contains("\"priority\":\"High\""));
    }

    #[test]
    fn test_plain_record_omits_priority_field() {
        let task = Task::new(TaskKind::Plain, "Buy milk");
        let json = serde_json::to_string(&TaskRecord::from_task(&task)).unwrap();
        assert!(!json.contains("priority"));
        assert!(json.contains("\"kind\":\"plain\""));
    }
}
