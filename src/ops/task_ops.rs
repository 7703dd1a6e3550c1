use crate::model::memo::MemoList;
use crate::model::task::{Task, TaskId, TaskStatus};

/// Error type for task operations
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TaskError {
    #[error("no task at position {index} (list has {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("task not found: {0}")]
    NotFound(TaskId),
    #[error("unknown status \"{0}\" (expected todo, complete or cancel)")]
    InvalidStatus(String),
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

/// Append a new todo task. Blank text (after trimming) is ignored.
/// The stored text is kept exactly as typed.
pub fn add_task(list: &mut MemoList, text: &str) -> Option<TaskId> {
    if text.trim().is_empty() {
        return None;
    }
    Some(list.push(Task::new(text)))
}

/// Set the status of the task at `index`
pub fn set_status(list: &mut MemoList, index: usize, status: TaskStatus) -> Result<(), TaskError> {
    let len = list.len();
    let task = list
        .tasks_mut()
        .get_mut(index)
        .ok_or(TaskError::IndexOutOfRange { index, len })?;
    task.status = status;
    Ok(())
}

pub fn set_status_by_id(list: &mut MemoList, id: TaskId, status: TaskStatus) -> Result<(), TaskError> {
    let index = list.position_of(id).ok_or(TaskError::NotFound(id))?;
    set_status(list, index, status)
}

/// Remove and return the task at `index`
pub fn remove_task(list: &mut MemoList, index: usize) -> Result<Task, TaskError> {
    let len = list.len();
    if index >= len {
        return Err(TaskError::IndexOutOfRange { index, len });
    }
    Ok(list.tasks_mut().remove(index))
}

pub fn remove_by_id(list: &mut MemoList, id: TaskId) -> Result<Task, TaskError> {
    let index = list.position_of(id).ok_or(TaskError::NotFound(id))?;
    remove_task(list, index)
}

/// Drop every task, returning how many were removed
pub fn clear(list: &mut MemoList) -> usize {
    let count = list.len();
    list.tasks_mut().clear();
    count
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

/// Stable partition: pending tasks first, then complete/cancel, each group
/// keeping its relative order. Returns whether anything moved.
pub fn sort_by_status(list: &mut MemoList) -> bool {
    if is_sorted(list) {
        return false;
    }
    let tasks = list.tasks_mut();
    let (pending, finished): (Vec<Task>, Vec<Task>) =
        tasks.drain(..).partition(|t| t.status.is_pending());
    tasks.extend(pending);
    tasks.extend(finished);
    true
}

/// True when no finished task precedes a pending one
pub fn is_sorted(list: &MemoList) -> bool {
    let mut seen_finished = false;
    for task in list.tasks() {
        if task.status.is_pending() {
            if seen_finished {
                return false;
            }
        } else {
            seen_finished = true;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts(list: &MemoList) -> Vec<&str> {
        list.tasks().iter().map(|t| t.text.as_str()).collect()
    }

    fn sample_list() -> MemoList {
        MemoList::from(vec![
            Task::with_status("a", TaskStatus::Complete),
            Task::with_status("b", TaskStatus::Todo),
            Task::with_status("c", TaskStatus::Cancel),
            Task::with_status("d", TaskStatus::Todo),
            Task::with_status("e", TaskStatus::Complete),
        ])
    }

    #[test]
    fn add_blank_is_noop() {
        let mut list = MemoList::new();
        assert_eq!(add_task(&mut list, ""), None);
        assert_eq!(add_task(&mut list, "   "), None);
        assert_eq!(add_task(&mut list, "\t\n"), None);
        assert!(list.is_empty());
    }

    #[test]
    fn add_appends_one_todo() {
        let mut list = sample_list();
        let id = add_task(&mut list, "buy milk").unwrap();
        assert_eq!(list.len(), 6);
        let last = list.tasks().last().unwrap();
        assert_eq!(last.id, id);
        assert_eq!(last.text, "buy milk");
        assert_eq!(last.status, TaskStatus::Todo);
    }

    #[test]
    fn add_keeps_text_verbatim() {
        let mut list = MemoList::new();
        add_task(&mut list, "  padded  ").unwrap();
        assert_eq!(list.tasks()[0].text, "  padded  ");
    }

    #[test]
    fn set_status_by_index() {
        let mut list = sample_list();
        set_status(&mut list, 1, TaskStatus::Cancel).unwrap();
        assert_eq!(list.tasks()[1].status, TaskStatus::Cancel);
    }

    #[test]
    fn set_status_out_of_range() {
        let mut list = sample_list();
        assert_eq!(
            set_status(&mut list, 5, TaskStatus::Todo),
            Err(TaskError::IndexOutOfRange { index: 5, len: 5 })
        );
    }

    #[test]
    fn set_status_by_id_survives_reorder() {
        let mut list = sample_list();
        let id = list.tasks()[3].id; // "d"
        sort_by_status(&mut list);
        set_status_by_id(&mut list, id, TaskStatus::Complete).unwrap();
        assert_eq!(list.find(id).unwrap().text, "d");
        assert_eq!(list.find(id).unwrap().status, TaskStatus::Complete);
    }

    #[test]
    fn remove_only_task_leaves_empty() {
        let mut list = MemoList::new();
        add_task(&mut list, "only").unwrap();
        let removed = remove_task(&mut list, 0).unwrap();
        assert_eq!(removed.text, "only");
        assert!(list.is_empty());
    }

    #[test]
    fn remove_out_of_range() {
        let mut list = MemoList::new();
        assert_eq!(
            remove_task(&mut list, 0).unwrap_err(),
            TaskError::IndexOutOfRange { index: 0, len: 0 }
        );
    }

    #[test]
    fn remove_unknown_id() {
        let mut list = sample_list();
        assert_eq!(
            remove_by_id(&mut list, TaskId(999)).unwrap_err(),
            TaskError::NotFound(TaskId(999))
        );
    }

    #[test]
    fn clear_reports_count() {
        let mut list = sample_list();
        assert_eq!(clear(&mut list), 5);
        assert!(list.is_empty());
        assert_eq!(clear(&mut list), 0);
    }

    #[test]
    fn sort_is_stable_partition() {
        let mut list = sample_list();
        assert!(sort_by_status(&mut list));
        assert_eq!(texts(&list), vec!["b", "d", "a", "c", "e"]);
        assert!(is_sorted(&list));
    }

    #[test]
    fn sort_is_idempotent() {
        let mut list = sample_list();
        sort_by_status(&mut list);
        let once = list.clone();
        assert!(!sort_by_status(&mut list));
        assert_eq!(list, once);
        assert_eq!(texts(&list), texts(&once));
    }

    #[test]
    fn sort_keeps_ids_with_tasks() {
        let mut list = sample_list();
        let before: Vec<(TaskId, String)> =
            list.tasks().iter().map(|t| (t.id, t.text.clone())).collect();
        sort_by_status(&mut list);
        for (id, text) in before {
            assert_eq!(list.find(id).unwrap().text, text);
        }
    }

    #[test]
    fn no_finished_task_precedes_todo_after_sort() {
        let mut list = MemoList::new();
        for (i, status) in [
            TaskStatus::Cancel,
            TaskStatus::Todo,
            TaskStatus::Complete,
            TaskStatus::Cancel,
            TaskStatus::Todo,
            TaskStatus::Todo,
        ]
        .into_iter()
        .enumerate()
        {
            list.push(Task::with_status(format!("t{}", i), status));
        }
        sort_by_status(&mut list);
        let first_finished = list
            .tasks()
            .iter()
            .position(|t| !t.status.is_pending())
            .unwrap();
        assert!(list.tasks()[first_finished..]
            .iter()
            .all(|t| !t.status.is_pending()));
        assert_eq!(texts(&list), vec!["t1", "t4", "t5", "t0", "t2", "t3"]);
    }
}
