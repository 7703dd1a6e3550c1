use serde::{Deserialize, Serialize, Serializer};

use super::task::{Task, TaskId};

/// The ordered task list. Serializes as a bare JSON array of records.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "Vec<Task>")]
pub struct MemoList {
    tasks: Vec<Task>,
    next_id: u64,
}

impl MemoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Current display position of a task
    pub fn position_of(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    /// Append a task, assigning it a fresh id
    pub fn push(&mut self, mut task: Task) -> TaskId {
        let id = self.allocate_id();
        task.id = id;
        self.tasks.push(task);
        id
    }

    /// Mutable access to the backing vector. Callers may reorder or drop
    /// tasks but must not invent new ones; use `push` for that.
    pub fn tasks_mut(&mut self) -> &mut Vec<Task> {
        &mut self.tasks
    }

    fn allocate_id(&mut self) -> TaskId {
        self.next_id += 1;
        TaskId(self.next_id)
    }
}

impl From<Vec<Task>> for MemoList {
    fn from(tasks: Vec<Task>) -> Self {
        let mut list = MemoList::new();
        for task in tasks {
            list.push(task);
        }
        list
    }
}

impl Serialize for MemoList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.tasks.serialize(serializer)
    }
}

/// Lists compare by their records in order
impl PartialEq for MemoList {
    fn eq(&self, other: &Self) -> bool {
        self.tasks == other.tasks
    }
}

impl Eq for MemoList {}
