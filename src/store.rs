//! In-memory task store.
//!
//! The store owns the active task list and the deletion history. The history
//! is published as snapshots on a [`tokio::sync::watch`] channel: the history
//! dialog subscribes to it and never mutates it. Every mutation goes through
//! the store, which republishes the snapshot afterwards.

use crate::config::DisplayConfig;
use crate::entities::{DeletedTask, Task};
use crate::utils::datetime;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::watch;
use uuid::Uuid;

/// Errors raised by store mutations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Task not found: {0}")]
    NotFound(Uuid),

    #[error("Deleted task not found in history: {0}")]
    NotInHistory(Uuid),
}

/// Turns a deletion instant into display text.
///
/// The history rows call this and show the result verbatim.
pub trait TimestampFormatter: Send + Sync {
    fn format_timestamp(&self, at: DateTime<Utc>) -> String;
}

/// Formatter driven by the `[display]` configuration section
#[derive(Debug, Clone, Default)]
pub struct DateTimeFormatter {
    display: DisplayConfig,
}

impl DateTimeFormatter {
    pub fn new(display: DisplayConfig) -> Self {
        Self { display }
    }
}

impl TimestampFormatter for DateTimeFormatter {
    fn format_timestamp(&self, at: DateTime<Utc>) -> String {
        datetime::format_human_datetime(
            at,
            &self.display.date_format,
            &self.display.time_format,
            self.display.relative_dates,
        )
    }
}

pub struct TaskStore {
    tasks: Vec<Task>,
    deleted: Vec<DeletedTask>,
    deleted_tx: watch::Sender<Vec<DeletedTask>>,
    formatter: Arc<dyn TimestampFormatter>,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new(Vec::<String>::new(), DisplayConfig::default())
    }
}

impl TaskStore {
    /// Create a store whose active list holds one task per seed title
    pub fn new<I, S>(seed: I, display: DisplayConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let (deleted_tx, _) = watch::channel(Vec::new());
        Self {
            tasks: seed.into_iter().map(Task::new).collect(),
            deleted: Vec::new(),
            deleted_tx,
            formatter: Arc::new(DateTimeFormatter::new(display)),
        }
    }

    /// Replace the timestamp formatter handed out to subscribers
    pub fn with_formatter(mut self, formatter: Arc<dyn TimestampFormatter>) -> Self {
        self.formatter = formatter;
        self
    }

    /// Active tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Deletion history, most recently deleted first
    pub fn history(&self) -> &[DeletedTask] {
        &self.deleted
    }

    /// Subscribe to deletion history snapshots
    pub fn deleted_tasks(&self) -> watch::Receiver<Vec<DeletedTask>> {
        self.deleted_tx.subscribe()
    }

    pub fn formatter(&self) -> Arc<dyn TimestampFormatter> {
        Arc::clone(&self.formatter)
    }

    /// Append a new task to the active list
    pub fn add_task(&mut self, title: impl Into<String>) -> Task {
        let task = Task::new(title);
        self.tasks.push(task.clone());
        task
    }

    /// Move an active task into the history, stamped with the current time
    pub fn delete_task(&mut self, id: Uuid) -> Result<DeletedTask, StoreError> {
        self.delete_task_at(id, Utc::now())
    }

    /// Move an active task into the history with an explicit deletion time
    pub fn delete_task_at(&mut self, id: Uuid, deleted_at: DateTime<Utc>) -> Result<DeletedTask, StoreError> {
        let index = self
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(StoreError::NotFound(id))?;

        let deleted = DeletedTask::from_task(self.tasks.remove(index), deleted_at);
        self.deleted.insert(0, deleted.clone());
        self.publish();
        log::debug!("Store: moved task {} to history", id);
        Ok(deleted)
    }

    /// Restore a deleted task to the end of the active list
    pub fn undo_delete(&mut self, deleted: &DeletedTask) -> Result<Task, StoreError> {
        let record = self.take_from_history(deleted.id)?;
        let task = record.to_task();
        self.tasks.push(task.clone());
        self.publish();
        log::debug!("Store: recovered task {}", deleted.id);
        Ok(task)
    }

    /// Remove a deleted task for good
    pub fn delete_forever(&mut self, deleted: &DeletedTask) -> Result<(), StoreError> {
        self.take_from_history(deleted.id)?;
        self.publish();
        log::debug!("Store: purged task {}", deleted.id);
        Ok(())
    }

    fn take_from_history(&mut self, id: Uuid) -> Result<DeletedTask, StoreError> {
        let index = self
            .deleted
            .iter()
            .position(|record| record.id == id)
            .ok_or(StoreError::NotInHistory(id))?;
        Ok(self.deleted.remove(index))
    }

    fn publish(&self) {
        self.deleted_tx.send_replace(self.deleted.clone());
    }
}
