//! The task list bound to its data file.
//!
//! Every mutation goes through here so the UI and the command line share the
//! same follow-up: resort, recount, save. Saving is best effort; a failed
//! write is logged and remembered in `last_save_error`, never propagated.
//! A data file that couldn't be loaded is copied aside by the first save,
//! never overwritten without that copy.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::io::store_io::{self, StoreError};
use crate::model::memo::MemoList;
use crate::model::task::{Task, TaskId, TaskStatus};
use crate::ops::stats::{StatusCounts, status_counts};
use crate::ops::task_ops::{self, TaskError};

pub struct Session {
    list: MemoList,
    data_file: PathBuf,
    counts: StatusCounts,
    last_save_error: Option<String>,
    /// The file on disk failed to load and has no copy yet
    needs_backup: bool,
}

impl Session {
    /// Load the data file (or start empty) and bind to it
    pub fn open(data_file: impl Into<PathBuf>) -> Self {
        let data_file = data_file.into();
        let (list, needs_backup) = store_io::load_or_empty(&data_file);
        let mut session = Self::with_list(list, data_file);
        session.needs_backup = needs_backup;
        session
    }

    /// Bind an existing list to a data file without touching disk
    pub fn with_list(list: MemoList, data_file: impl Into<PathBuf>) -> Self {
        let counts = status_counts(&list);
        Session {
            list,
            data_file: data_file.into(),
            counts,
            last_save_error: None,
            needs_backup: false,
        }
    }

    pub fn list(&self) -> &MemoList {
        &self.list
    }

    pub fn tasks(&self) -> &[Task] {
        self.list.tasks()
    }

    pub fn counts(&self) -> StatusCounts {
        self.counts
    }

    /// Message from the most recent failed save, cleared by a successful one
    pub fn last_save_error(&self) -> Option<&str> {
        self.last_save_error.as_deref()
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Add a todo. Blank text changes nothing and saves nothing.
    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        let id = task_ops::add_task(&mut self.list, text)?;
        debug!(%id, "added task");
        self.commit();
        Some(id)
    }

    pub fn set_status(&mut self, index: usize, status: TaskStatus) -> Result<TaskId, TaskError> {
        task_ops::set_status(&mut self.list, index, status)?;
        let id = self.list.tasks()[index].id;
        debug!(%id, %status, "status changed");
        self.commit();
        Ok(id)
    }

    pub fn set_status_by_id(&mut self, id: TaskId, status: TaskStatus) -> Result<(), TaskError> {
        task_ops::set_status_by_id(&mut self.list, id, status)?;
        debug!(%id, %status, "status changed");
        self.commit();
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<Task, TaskError> {
        let task = task_ops::remove_task(&mut self.list, index)?;
        debug!(id = %task.id, "removed task");
        self.commit();
        Ok(task)
    }

    pub fn remove_by_id(&mut self, id: TaskId) -> Result<Task, TaskError> {
        let task = task_ops::remove_by_id(&mut self.list, id)?;
        debug!(%id, "removed task");
        self.commit();
        Ok(task)
    }

    /// Remove everything. An already-empty list is left alone.
    pub fn clear(&mut self) -> usize {
        if self.list.is_empty() {
            return 0;
        }
        let removed = task_ops::clear(&mut self.list);
        info!(removed, "cleared all tasks");
        self.commit();
        removed
    }

    /// Resort and save, whether or not anything moved
    pub fn sort(&mut self) {
        self.commit();
    }

    // -----------------------------------------------------------------------
    // Persistence
    // -----------------------------------------------------------------------

    /// Save now, reporting the outcome
    pub fn save(&mut self) -> Result<(), StoreError> {
        match self.write_out() {
            Ok(()) => {
                self.last_save_error = None;
                Ok(())
            }
            Err(e) => {
                warn!("{}", e);
                self.last_save_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Final save on a confirmed exit
    pub fn close(&mut self) -> Result<(), StoreError> {
        info!(tasks = self.list.len(), "closing");
        self.save()
    }

    /// Copy an unreadable file aside if needed, then write the list.
    /// A failed copy stops the write.
    fn write_out(&mut self) -> Result<(), StoreError> {
        if self.needs_backup && self.data_file.exists() {
            let backup = store_io::back_up_unreadable(&self.data_file).map_err(|e| {
                StoreError::Backup {
                    path: self.data_file.clone(),
                    source: e,
                }
            })?;
            warn!(backup = %backup.display(), "kept a copy of the unreadable file");
        }
        self.needs_backup = false;
        store_io::save_tasks(&self.data_file, &self.list)
    }

    /// Post-mutation bookkeeping: resort, recount, best-effort save
    fn commit(&mut self) {
        task_ops::sort_by_status(&mut self.list);
        self.counts = status_counts(&self.list);
        let _ = self.save();
    }
}
