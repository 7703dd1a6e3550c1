use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Task status as written to the data file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Todo,
    Complete,
    Cancel,
}

impl TaskStatus {
    /// Keyword used in the data file and on the command line
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::Complete => "complete",
            TaskStatus::Cancel => "cancel",
        }
    }

    /// Marker drawn in front of a task row
    pub fn marker(self) -> &'static str {
        match self {
            TaskStatus::Todo => "[ ]",
            TaskStatus::Complete => "[x]",
            TaskStatus::Cancel => "[-]",
        }
    }

    /// Whether the task still needs doing. Pending tasks sort first.
    pub fn is_pending(self) -> bool {
        self == TaskStatus::Todo
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    /// Accepts the file keywords plus a few aliases typed on the command line
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "todo" | "pending" => Ok(TaskStatus::Todo),
            "complete" | "done" => Ok(TaskStatus::Complete),
            "cancel" | "cancelled" | "canceled" => Ok(TaskStatus::Cancel),
            other => Err(other.to_string()),
        }
    }
}

/// In-memory identity of a task. Never persisted; reassigned on every load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single memo entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Assigned by the owning `MemoList`
    #[serde(skip)]
    pub id: TaskId,
    /// Text as the user typed it
    pub text: String,
    pub status: TaskStatus,
}

impl Task {
    /// Create a fresh todo task. The id is filled in when the task joins a list.
    pub fn new(text: impl Into<String>) -> Self {
        Task {
            id: TaskId::default(),
            text: text.into(),
            status: TaskStatus::Todo,
        }
    }

    pub fn with_status(text: impl Into<String>, status: TaskStatus) -> Self {
        Task {
            status,
            ..Task::new(text)
        }
    }
}

// Records compare by content only; ids are session-local.
impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text && self.status == other.status
    }
}

impl Eq for Task {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&TaskStatus::Complete).unwrap();
        assert_eq!(json, "\"complete\"");
        let parsed: TaskStatus = serde_json::from_str("\"cancel\"").unwrap();
        assert_eq!(parsed, TaskStatus::Cancel);
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!(serde_json::from_str::<TaskStatus>("\"doing\"").is_err());
    }

    #[test]
    fn task_record_shape() {
        let task = Task::with_status("buy milk", TaskStatus::Todo);
        let json = serde_json::to_string(&task).unwrap();
        assert_eq!(json, r#"{"text":"buy milk","status":"todo"}"#);
    }

    #[test]
    fn id_is_not_part_of_equality() {
        let mut a = Task::new("x");
        let b = Task::new("x");
        a.id = TaskId(7);
        assert_eq!(a, b);
    }

    #[test]
    fn parse_status_aliases() {
        assert_eq!("done".parse::<TaskStatus>(), Ok(TaskStatus::Complete));
        assert_eq!(" Cancelled ".parse::<TaskStatus>(), Ok(TaskStatus::Cancel));
        assert_eq!("todo".parse::<TaskStatus>(), Ok(TaskStatus::Todo));
        assert_eq!("later".parse::<TaskStatus>(), Err("later".to_string()));
    }

    #[test]
    fn only_todo_is_pending() {
        assert!(TaskStatus::Todo.is_pending());
        assert!(!TaskStatus::Complete.is_pending());
        assert!(!TaskStatus::Cancel.is_pending());
    }
}
