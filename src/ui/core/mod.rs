//! Core UI functionality for the todo list.
//!
//! This module contains the building blocks every component relies on.
//!
//! # Module Components
//!
//! - [`actions`] - User intents produced by components
//! - [`component`] - Base component trait and hit testing
//! - [`event_handler`] - Terminal input polling and double-click detection
//!
//! # Architecture
//!
//! 1. **Events** are read from the terminal and translated by the [`EventHandler`]
//! 2. **Components** implement the [`Component`] trait and turn events into [`Action`]s
//! 3. **Actions** travel up to the application, which dispatches task operations
//!    into a [`crate::actions::TodoActions`] implementation
//!
//! Components hold only their own UI state; task data always flows down from the
//! caller.

pub mod actions;
pub mod component;
pub mod event_handler;

pub use actions::Action;
pub use component::Component;
pub use event_handler::{ClickTracker, EventHandler, EventType};
