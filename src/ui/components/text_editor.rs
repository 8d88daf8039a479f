//! Controlled single-line text field.
//!
//! Used both for composing a new todo (header) and for editing an existing
//! one inline. The draft is seeded once from [`TextEditorProps::text`] and then
//! evolves on its own; later changes to the caller's text are not picked up.
//!
//! Commit rules:
//! - Enter saves the trimmed draft. In new-todo mode the draft is then cleared.
//! - Losing focus saves the raw draft, except in new-todo mode where nothing
//!   is saved.

use crate::ui::core::component::hit;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Default)]
pub struct TextEditorProps {
    pub text: String,
    pub placeholder: String,
    /// Styling only: rendered as an inline edit field
    pub editing: bool,
    /// Composing a brand-new todo rather than editing one
    pub new_todo: bool,
}

#[derive(Debug, Clone)]
pub struct TextEditor {
    draft: String,
    cursor_position: usize,
    placeholder: String,
    editing: bool,
    new_todo: bool,
    area: Rect,
}

impl TextEditor {
    pub fn new(props: TextEditorProps) -> Self {
        let cursor_position = props.text.chars().count();
        Self {
            draft: props.text,
            cursor_position,
            placeholder: props.placeholder,
            editing: props.editing,
            new_todo: props.new_todo,
            area: Rect::default(),
        }
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// Whether the last rendered field covers `(column, row)`
    pub fn contains(&self, column: u16, row: u16) -> bool {
        hit(self.area, column, row)
    }

    /// Handle a key press. Returns the saved text when the key committed.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<String> {
        match key.code {
            KeyCode::Enter => Some(self.submit()),
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                self.insert_char(c);
                None
            }
            KeyCode::Backspace => {
                if self.cursor_position > 0 {
                    let byte_pos = self.byte_offset(self.cursor_position - 1);
                    self.draft.remove(byte_pos);
                    self.cursor_position -= 1;
                }
                None
            }
            KeyCode::Delete => {
                if self.cursor_position < self.char_count() {
                    let byte_pos = self.byte_offset(self.cursor_position);
                    self.draft.remove(byte_pos);
                }
                None
            }
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                if self.cursor_position < self.char_count() {
                    self.cursor_position += 1;
                }
                None
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                None
            }
            KeyCode::End => {
                self.cursor_position = self.char_count();
                None
            }
            _ => None,
        }
    }

    /// Enter-commit: hand back the trimmed draft.
    pub fn submit(&mut self) -> String {
        let text = self.draft.trim().to_string();
        if self.new_todo {
            self.draft.clear();
            self.cursor_position = 0;
        }
        text
    }

    /// Focus left the field. Returns the untrimmed draft for edits, nothing for new todos.
    pub fn blur(&mut self) -> Option<String> {
        if self.new_todo {
            None
        } else {
            Some(self.draft.clone())
        }
    }

    fn insert_char(&mut self, c: char) {
        let byte_pos = self.byte_offset(self.cursor_position);
        self.draft.insert(byte_pos, c);
        self.cursor_position += 1;
    }

    fn char_count(&self) -> usize {
        self.draft.chars().count()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.draft
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.draft.len())
    }

    /// Display width of the draft before the cursor, in terminal cells
    fn cursor_column(&self) -> u16 {
        let width = self.draft[..self.byte_offset(self.cursor_position)].width();
        u16::try_from(width).unwrap_or(u16::MAX)
    }

    pub fn render(&mut self, f: &mut Frame, rect: Rect, focused: bool) {
        self.area = rect;

        let text_style = if self.editing {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        };

        let line = if self.draft.is_empty() {
            Line::from(Span::styled(
                self.placeholder.clone(),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            ))
        } else {
            Line::from(Span::styled(self.draft.clone(), text_style))
        };

        // Keep the cursor on screen for drafts wider than the field
        let cursor_column = self.cursor_column();
        let scroll = cursor_column.saturating_sub(rect.width.saturating_sub(1));
        f.render_widget(Paragraph::new(line).style(text_style).scroll((0, scroll)), rect);

        if focused && rect.width > 0 && rect.height > 0 {
            let x = rect.x.saturating_add(cursor_column - scroll);
            f.set_cursor_position((x, rect.y));
        }
    }
}
