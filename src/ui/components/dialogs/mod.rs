//! Shared building blocks for modal dialogs

pub mod common;
