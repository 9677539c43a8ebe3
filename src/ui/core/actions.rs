use crate::entities::DeletedTask;
use uuid::Uuid;

/// Actions emitted by components.
///
/// Actions are fire-and-forget: the emitting component does not wait for a
/// result and any resulting change reaches it through the store's published
/// data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Task operations
    DeleteTask(Uuid),

    // History operations
    ShowHistory,
    HideHistory,
    UndoDelete(DeletedTask),
    DeleteForever(DeletedTask),

    // App control
    Quit,
    None,
}

impl Action {
    pub fn is_none(&self) -> bool {
        matches!(self, Action::None)
    }
}
