//! Constants used throughout the application
//!
//! UI text, key hints and default values live here so the components and the
//! configuration agree on them.

// Header
pub const APP_TITLE: &str = "todos";
pub const NEW_TODO_PLACEHOLDER: &str = "What needs to be done?";

// Footer
pub const CLEAR_COMPLETED_LABEL: &str = "Clear completed";
pub const FOOTER_FILTER_SEPARATOR: &str = "  ";

// Toggle-all row
pub const TOGGLE_ALL_LABEL: &str = "Mark all as complete";

// Status line hints
pub const HINT_LIST: &str =
    "Space: toggle • Enter: edit • d: delete • a: all • 1/2/3: filter • c: clear • n: new • q: quit";
pub const HINT_EDITING: &str = "Enter: save • Esc/Tab: leave field (edits are saved)";
pub const HINT_NEW_TODO: &str = "Enter: add • Esc/Tab: back to list";

// Files
pub const CONFIG_FILE_NAME: &str = "todomvc.toml";
pub const APP_DIR_NAME: &str = "todomvc";
pub const LOG_FILE_NAME: &str = "todomvc.log";

// Input timing
/// Default window for folding two clicks into a double-click
pub const DOUBLE_CLICK_DEFAULT_MS: u64 = 400;
pub const DOUBLE_CLICK_MIN_MS: u64 = 100;
pub const DOUBLE_CLICK_MAX_MS: u64 = 2000;

/// Task seeded into a fresh store when the binary starts
pub const WELCOME_TODO: &str = "Learn Rust";
