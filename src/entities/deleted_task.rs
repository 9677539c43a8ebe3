use super::task::Task;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A task removed from the active list, pending recovery or permanent deletion.
///
/// Records are owned by the task store; the UI only ever reads them and sends
/// them back inside outbound actions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeletedTask {
    pub id: Uuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub deleted_at: DateTime<Utc>,
}

impl DeletedTask {
    /// Soft-delete `task` at the given instant
    pub fn from_task(task: Task, deleted_at: DateTime<Utc>) -> Self {
        Self {
            id: task.id,
            title: task.title,
            created_at: task.created_at,
            deleted_at,
        }
    }

    /// The active task this record restores to
    pub fn to_task(&self) -> Task {
        Task {
            id: self.id,
            title: self.title.clone(),
            created_at: self.created_at,
        }
    }
}
