//! Minitodo - a minimalist terminal to-do list
//!
//! This library provides a small terminal interface for managing a to-do
//! list whose deleted tasks are kept in a recoverable history. Deleted tasks
//! can be recovered or purged for good from the "History" dialog.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`entities`] - Task and deleted-task records
//! * [`store`] - In-memory task store publishing the deletion history
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Utility functions and helpers

/// Configuration module for managing application settings
pub mod config;

/// Application constants and UI text
pub mod constants;

/// Task records shown by the UI
pub mod entities;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// In-memory task store and the deleted-task subscription
pub mod store;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling
pub mod utils;

pub use entities::{deleted_task::DeletedTask, task::Task};
