//! Title plus the new-todo field.

use crate::constants::APP_TITLE;
use crate::ui::components::text_editor::{TextEditor, TextEditorProps};
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub struct Header {
    editor: TextEditor,
    pub focused: bool,
}

impl Header {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            editor: TextEditor::new(TextEditorProps {
                placeholder: placeholder.into(),
                new_todo: true,
                ..Default::default()
            }),
            focused: false,
        }
    }

    pub fn editor(&self) -> &TextEditor {
        &self.editor
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.editor.contains(column, row)
    }

    fn handle_save(&self, text: String) -> Action {
        if text.is_empty() {
            Action::None
        } else {
            Action::AddTodo(text)
        }
    }
}

impl Component for Header {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Tab => Action::FocusList,
            _ => match self.editor.handle_key(key) {
                Some(text) => self.handle_save(text),
                None => Action::None,
            },
        }
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) -> Action {
        self.focused = false;
        // New-todo drafts are never committed by leaving the field
        match self.editor.blur() {
            Some(text) => self.handle_save(text),
            None => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let [title_area, input_area] = Layout::vertical([Constraint::Length(1), Constraint::Length(3)]).areas(rect);

        let title = Paragraph::new(APP_TITLE)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));
        f.render_widget(title, title_area);

        let border_color = if self.focused { Color::Cyan } else { Color::DarkGray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(border_color));
        let inner = block.inner(input_area);
        f.render_widget(block, input_area);

        let focused = self.focused;
        self.editor.render(f, inner, focused);
    }
}
