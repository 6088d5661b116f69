//! Formatting helpers for list output
//!
//! Pure string formatting for the CLI list view: the date banner shown
//! above the list and the task lines themselves.

use chrono::{Datelike, NaiveDate};

use crate::task::Task;

/// Format the date banner shown above the task list
///
/// Layout: day, uppercase abbreviated month, year, then the uppercase
/// weekday name (e.g. `6 AUG 2026  WEDNESDAY`).
pub fn format_header(date: NaiveDate) -> String {
    let month = date.format("%b").to_string().to_uppercase();
    let weekday = date.format("%A").to_string().to_uppercase();
    format!("{} {} {}  {}", date.day(), month, date.year(), weekday)
}

/// Format tasks into a display string, one line per task
///
/// Completed tasks are marked `[x]`. Insertion order is preserved.
pub fn format_tasks(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "No tasks for today".to_string();
    }

    let mut result = format!("Found {} task(s):\n\n", tasks.len());
    for task in tasks {
        let mark = if task.completed { "x" } else { " " };
        result.push_str(&format!(
            "- [{}] {} (id: {})\n",
            mark,
            task.display_title(),
            task.id
        ));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{Priority, Task, TaskKind};

    #[test]
    fn test_header_uses_uppercase_month_and_weekday() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        assert_eq!(format_header(date), "6 AUG 2026  THURSDAY");
    }

    #[test]
    fn test_empty_list_message() {
        assert_eq!(format_tasks(&[]), "No tasks for today");
    }

    #[test]
    fn test_task_lines_show_completion_and_display_title() {
        let mut done = Task::with_id("a-1", TaskKind::Plain, "Buy milk", false);
        done.toggle_completion();
        let open = Task::with_id(
            "a-2",
            TaskKind::Prioritized(Priority::High),
            "Write report",
            false,
        );

        let output = format_tasks(&[done, open]);
        assert!(output.starts_with("Found 2 task(s):"));
        assert!(output.contains("- [x] Buy milk (id: a-1)"));
        assert!(output.contains("- [ ] Write report (High) (id: a-2)"));
    }
}
