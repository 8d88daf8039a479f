//! todomvc - the TodoMVC view layer as a terminal user interface
//!
//! This library provides the components of a single-screen todo list: a
//! header for new todos, a list that can be filtered and edited inline, and a
//! footer with counts and filter links. Components never own task data; they
//! report user intent through the [`actions::TodoActions`] interface and are
//! handed the updated collection afterwards.
//!
//! # Modules
//!
//! * [`actions`] - The six-operation interface user intent is reported through
//! * [`config`] - Application configuration management
//! * [`store`] - In-memory task collection used by the binary
//! * [`todo`] - Task records and filtering rules
//! * [`ui`] - Terminal user interface components and rendering

/// Typed action interface and closure-backed implementation
pub mod actions;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// File logging setup
pub mod logger;

/// In-memory task store
pub mod store;

/// Task records, filters and counts
pub mod todo;

/// Terminal user interface components and rendering
pub mod ui;

pub use actions::{ActionsError, CallbackActions, TodoActions};
pub use todo::{Filter, Task, TaskId};
