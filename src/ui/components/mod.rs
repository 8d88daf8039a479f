//! Reusable UI components

pub mod footer;
pub mod header;
pub mod main_section;
pub mod text_editor;
pub mod todo_item;

// Component exports
pub use footer::{Footer, FooterHit, FooterProps};
pub use header::Header;
pub use main_section::MainSection;
pub use text_editor::{TextEditor, TextEditorProps};
pub use todo_item::{RowClasses, TodoItem};
