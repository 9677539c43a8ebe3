//! Core UI functionality for the Minitodo application.
//!
//! This module contains the building blocks every screen relies on:
//!
//! - [`actions`] - Actions emitted by components and routed by the app
//! - [`component`] - Base component trait and rendering abstraction
//! - [`event_handler`] - Terminal event polling (keys, mouse, resize, ticks)
//!
//! Components never mutate application data directly. They translate input
//! into an [`Action`], which the [`AppComponent`](crate::ui::app_component::AppComponent)
//! hands to the task store.

pub mod actions;
pub mod component;
pub mod event_handler;

pub use actions::Action;
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
