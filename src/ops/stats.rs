use serde::Serialize;

use crate::model::memo::MemoList;
use crate::model::task::TaskStatus;

/// Number of tasks in each status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub todo: usize,
    pub complete: usize,
    pub cancel: usize,
}

impl StatusCounts {
    pub fn total(&self) -> usize {
        self.todo + self.complete + self.cancel
    }

    /// Compact form shown in the title bar: `(todo:2 complete:1 cancel:0)`
    pub fn summary(&self) -> String {
        format!(
            "(todo:{} complete:{} cancel:{})",
            self.todo, self.complete, self.cancel
        )
    }
}

pub fn status_counts(list: &MemoList) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for task in list.tasks() {
        match task.status {
            TaskStatus::Todo => counts.todo += 1,
            TaskStatus::Complete => counts.complete += 1,
            TaskStatus::Cancel => counts.cancel += 1,
        }
    }
    counts
}
