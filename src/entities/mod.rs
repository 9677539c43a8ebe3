pub mod deleted_task;
pub mod task;

pub use deleted_task::DeletedTask;
pub use task::Task;
