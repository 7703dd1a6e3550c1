use serde::Serialize;

use crate::model::task::{Task, TaskStatus};
use crate::ops::stats::StatusCounts;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    /// 1-based display position
    pub position: usize,
    pub text: String,
    pub status: TaskStatus,
}

#[derive(Serialize)]
pub struct StatsJson {
    #[serde(flatten)]
    pub counts: StatusCounts,
    pub total: usize,
}

pub fn task_to_json(position: usize, task: &Task) -> TaskJson {
    TaskJson {
        position,
        text: task.text.clone(),
        status: task.status,
    }
}

pub fn stats_to_json(counts: StatusCounts) -> StatsJson {
    StatsJson {
        counts,
        total: counts.total(),
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

/// `  2. [x] buy milk`
pub fn format_task_line(position: usize, task: &Task, width: usize) -> String {
    format!(
        "{:>width$}. {} {}",
        position,
        task.status.marker(),
        task.text,
        width = width
    )
}

/// `todo: 2  complete: 1  cancel: 0  total: 3`
pub fn format_stats(counts: StatusCounts) -> String {
    format!(
        "todo: {}  complete: {}  cancel: {}  total: {}",
        counts.todo,
        counts.complete,
        counts.cancel,
        counts.total()
    )
}
