//! Constants used throughout the application
//!
//! This module centralizes UI text, messages and layout values
//! to improve maintainability and consistency.

// Dialog and menu labels
pub const HISTORY_TITLE: &str = "History";
pub const TASKS_TITLE: &str = "Tasks";
pub const MENU_RECOVER: &str = "Recover";
pub const MENU_DELETE: &str = "Delete";
pub const ICON_RECOVER: &str = "↶";
pub const ICON_DELETE: &str = "✗";
pub const ICON_MORE_OPTIONS: &str = "⋮";
pub const ELLIPSIS: &str = "…";
pub const HISTORY_EMPTY: &str = "No deleted tasks";
pub const TASKS_EMPTY: &str = "Nothing to do. Press 'H' to browse the history.";

// Success Messages
pub const SUCCESS_TASK_DELETED: &str = "✅ Task moved to history";
pub const SUCCESS_TASK_RECOVERED: &str = "✅ Task recovered";
pub const SUCCESS_TASK_PURGED: &str = "✅ Task deleted forever";

// Error Messages
pub const ERROR_TASK_DELETE_FAILED: &str = "❌ Failed to delete task";
pub const ERROR_TASK_RECOVER_FAILED: &str = "❌ Failed to recover task";
pub const ERROR_TASK_PURGE_FAILED: &str = "❌ Failed to delete task forever";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";

// UI Layout Constants
/// Minimum history dialog width in columns
pub const HISTORY_MIN_WIDTH: u16 = 30;
/// Maximum history dialog width in columns
pub const HISTORY_MAX_WIDTH: u16 = 120;
/// Default history dialog width in columns
pub const HISTORY_DEFAULT_WIDTH: u16 = 50;
/// Height of the history dialog including borders
pub const HISTORY_HEIGHT: u16 = 20;
/// Lines occupied by one history row (title, timestamp, spacing)
pub const HISTORY_ROW_HEIGHT: u16 = 3;
/// Width of the overflow menu popup including borders
pub const MENU_WIDTH: u16 = 24;
/// Height of the overflow menu popup including borders
pub const MENU_HEIGHT: u16 = 3;
