//! Utility modules for the Minitodo application.
//!
//! - [`datetime`] - Date and time formatting used for deletion timestamps

pub mod datetime;
