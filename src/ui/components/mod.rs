//! Reusable UI components

pub mod dialogs;
pub mod dropdown_action;
pub mod history_dialog;
pub mod history_row;
pub mod scrollbar_helper;
pub mod status_bar;
pub mod task_list_component;

// Component exports
pub use dropdown_action::{DropdownAction, MenuItem};
pub use history_dialog::HistoryDialog;
pub use history_row::{HistoryRow, MenuState};
pub use status_bar::StatusBar;
pub use task_list_component::TaskListComponent;
