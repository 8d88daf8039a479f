//! One row of the todo list.
//!
//! A row is either viewing (checkbox, label, delete glyph) or editing, in
//! which case an inline [`TextEditor`] replaces the label. The editor is mounted
//! on double-click (or Enter) and dropped after any save.

use crate::icons::IconService;
use crate::todo::{Task, TaskId};
use crate::ui::components::text_editor::{TextEditor, TextEditorProps};
use crate::ui::core::component::hit;
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Presentation classes of a row. Styling only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowClasses {
    pub completed: bool,
    pub editing: bool,
}

/// Screen regions of the last rendered row
#[derive(Debug, Clone, Copy, Default)]
struct RowAreas {
    row: Rect,
    checkbox: Rect,
    label: Rect,
    destroy: Rect,
}

#[derive(Debug, Clone)]
pub struct TodoItem {
    task: Task,
    editor: Option<TextEditor>,
    pub selected: bool,
    pub icons: IconService,
    areas: RowAreas,
}

impl TodoItem {
    pub fn new(task: Task) -> Self {
        Self {
            task,
            editor: None,
            selected: false,
            icons: IconService::default(),
            areas: RowAreas::default(),
        }
    }

    pub fn id(&self) -> TaskId {
        self.task.id
    }

    pub fn task(&self) -> &Task {
        &self.task
    }

    /// Replace the task with a fresh copy from the store. Editing state is kept.
    pub fn set_task(&mut self, task: Task) {
        self.task = task;
    }

    pub fn is_editing(&self) -> bool {
        self.editor.is_some()
    }

    pub fn editor(&self) -> Option<&TextEditor> {
        self.editor.as_ref()
    }

    pub fn classes(&self) -> RowClasses {
        RowClasses {
            completed: self.task.completed,
            editing: self.is_editing(),
        }
    }

    /// Switch to editing with the task's current text.
    pub fn begin_editing(&mut self) {
        if self.editor.is_none() {
            log::debug!("item {}: begin editing", self.task.id);
            self.editor = Some(TextEditor::new(TextEditorProps {
                text: self.task.text.clone(),
                editing: true,
                ..Default::default()
            }));
        }
    }

    /// Apply a save coming from the editor and leave editing mode.
    pub fn handle_save(&mut self, text: String) -> Action {
        let id = self.task.id;
        self.editor = None;
        if text.is_empty() {
            Action::DeleteTodo(id)
        } else {
            Action::EditTodo { id, text }
        }
    }

    /// Whether the last rendered row covers `(column, row)`
    pub fn contains(&self, column: u16, row: u16) -> bool {
        hit(self.areas.row, column, row)
    }

    /// Whether a click at `(column, row)` lands outside this row's open editor
    pub fn click_leaves_editor(&self, column: u16, row: u16) -> bool {
        self.editor
            .as_ref()
            .is_some_and(|editor| !editor.contains(column, row))
    }
}

impl Component for TodoItem {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.is_editing() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Tab) {
                return self.on_blur();
            }
            return match self.editor.as_mut().and_then(|editor| editor.handle_key(key)) {
                Some(text) => self.handle_save(text),
                None => Action::None,
            };
        }

        match key.code {
            KeyCode::Char(' ') => Action::CompleteTodo(self.task.id),
            KeyCode::Enter | KeyCode::Char('e') => {
                self.begin_editing();
                Action::None
            }
            KeyCode::Delete | KeyCode::Char('d') => Action::DeleteTodo(self.task.id),
            _ => Action::None,
        }
    }

    fn handle_click(&mut self, column: u16, row: u16) -> Action {
        if self.is_editing() {
            return Action::None;
        }
        if hit(self.areas.checkbox, column, row) {
            Action::CompleteTodo(self.task.id)
        } else if hit(self.areas.destroy, column, row) {
            Action::DeleteTodo(self.task.id)
        } else {
            Action::None
        }
    }

    fn handle_double_click(&mut self, column: u16, row: u16) -> Action {
        if !self.is_editing() && hit(self.areas.label, column, row) {
            self.begin_editing();
            Action::None
        } else {
            self.handle_click(column, row)
        }
    }

    fn on_blur(&mut self) -> Action {
        match self.editor.as_mut().and_then(TextEditor::blur) {
            Some(text) => self.handle_save(text),
            None => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let marker = if self.selected { self.icons.selected() } else { " " };
        let marker_span = Span::styled(
            format!("{} ", marker),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        );
        let marker_width = cell_width(&marker_span);
        self.areas = RowAreas {
            row: rect,
            ..RowAreas::default()
        };

        let Some(editor) = self.editor.as_mut() else {
            self.render_view(f, rect, marker_span, marker_width);
            return;
        };

        f.render_widget(Paragraph::new(Line::from(marker_span)), rect);
        let editor_area = Rect {
            x: rect.x.saturating_add(marker_width.min(rect.width)),
            width: rect.width.saturating_sub(marker_width),
            ..rect
        };
        editor.render(f, editor_area, self.selected);
    }
}

/// Display width of `span`, clamped to what a terminal row can hold
fn cell_width(span: &Span) -> u16 {
    u16::try_from(span.width()).unwrap_or(u16::MAX)
}

impl TodoItem {
    fn render_view(&mut self, f: &mut Frame, rect: Rect, marker_span: Span<'static>, marker_width: u16) {
        let classes = self.classes();

        let checkbox_style = if classes.completed {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::White)
        };
        let checkbox_span = Span::styled(self.icons.checkbox(classes.completed).to_string(), checkbox_style);
        let checkbox_width = cell_width(&checkbox_span);

        let label_style = match (classes.completed, self.selected) {
            (true, _) => Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT),
            (false, true) => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            (false, false) => Style::default().fg(Color::White),
        };
        let label_span = Span::styled(self.task.text.clone(), label_style);
        let label_width = cell_width(&label_span);

        let destroy_span = Span::styled(self.icons.destroy().to_string(), Style::default().fg(Color::Red));
        let destroy_width = cell_width(&destroy_span);

        let checkbox_x = rect.x.saturating_add(marker_width);
        let label_x = checkbox_x.saturating_add(checkbox_width).saturating_add(1);
        let destroy_x = rect.right().saturating_sub(destroy_width).max(label_x);

        // An empty label still gets one cell so it can be double-clicked
        let label_room = destroy_x.saturating_sub(label_x);
        let label_hit_width = label_width.max(1).min(label_room);

        self.areas.checkbox = Rect::new(checkbox_x, rect.y, checkbox_width, 1).intersection(rect);
        self.areas.label = Rect::new(label_x, rect.y, label_hit_width, 1).intersection(rect);
        self.areas.destroy = Rect::new(destroy_x, rect.y, destroy_width, 1).intersection(rect);

        let line = Line::from(vec![marker_span, checkbox_span, Span::raw(" "), label_span]);
        f.render_widget(Paragraph::new(line), rect);
        // Drawn last so an overlong label never hides it
        f.render_widget(Paragraph::new(Line::from(destroy_span)), self.areas.destroy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn item() -> TodoItem {
        TodoItem::new(Task::new(1, "buy milk", false))
    }

    fn render(item: &mut TodoItem) {
        let mut terminal = Terminal::new(TestBackend::new(30, 1)).unwrap();
        terminal.draw(|f| item.render(f, f.area())).unwrap();
    }

    fn clear_draft(item: &mut TodoItem) {
        for _ in 0..item.task().text.chars().count() {
            item.handle_key_events(key(KeyCode::Backspace));
        }
    }

    #[test]
    fn test_starts_viewing() {
        let item = item();
        assert!(!item.is_editing());
        assert_eq!(item.classes(), RowClasses::default());
    }

    #[test]
    fn test_enter_with_empty_text_deletes() {
        let mut item = item();
        item.begin_editing();
        assert!(item.is_editing());

        clear_draft(&mut item);
        let action = item.handle_key_events(key(KeyCode::Enter));

        assert_eq!(action, Action::DeleteTodo(TaskId(1)));
        assert!(!item.is_editing());
    }

    #[test]
    fn test_enter_with_new_text_edits_trimmed() {
        let mut item = item();
        item.begin_editing();
        clear_draft(&mut item);
        for c in " walk dog ".chars() {
            item.handle_key_events(key(KeyCode::Char(c)));
        }

        let action = item.handle_key_events(key(KeyCode::Enter));

        assert_eq!(
            action,
            Action::EditTodo {
                id: TaskId(1),
                text: "walk dog".to_string()
            }
        );
        assert!(!item.is_editing());
    }

    #[test]
    fn test_whitespace_only_enter_deletes() {
        let mut item = item();
        item.begin_editing();
        clear_draft(&mut item);
        item.handle_key_events(key(KeyCode::Char(' ')));
        assert_eq!(item.handle_key_events(key(KeyCode::Enter)), Action::DeleteTodo(TaskId(1)));
    }

    #[test]
    fn test_blur_commits_raw_text() {
        let mut item = item();
        item.begin_editing();
        item.handle_key_events(key(KeyCode::Char(' ')));

        let action = item.on_blur();

        assert_eq!(
            action,
            Action::EditTodo {
                id: TaskId(1),
                text: "buy milk ".to_string()
            }
        );
        assert!(!item.is_editing());
    }

    #[test]
    fn test_escape_is_a_blur_not_a_cancel() {
        let mut item = item();
        item.begin_editing();
        let action = item.handle_key_events(key(KeyCode::Esc));
        assert!(matches!(action, Action::EditTodo { .. }));
        assert!(!item.is_editing());
    }

    #[test]
    fn test_blur_while_viewing_does_nothing() {
        let mut item = item();
        assert_eq!(item.on_blur(), Action::None);
    }

    #[test]
    fn test_viewing_keys() {
        let mut item = item();
        assert_eq!(item.handle_key_events(key(KeyCode::Char(' '))), Action::CompleteTodo(TaskId(1)));
        assert_eq!(item.handle_key_events(key(KeyCode::Char('d'))), Action::DeleteTodo(TaskId(1)));
        assert!(!item.is_editing());
    }

    #[test]
    fn test_editor_keeps_draft_when_task_changes() {
        let mut item = item();
        item.begin_editing();
        item.set_task(Task::new(1, "buy oat milk", true));

        assert_eq!(item.editor().map(TextEditor::draft), Some("buy milk"));
        assert_eq!(
            item.classes(),
            RowClasses {
                completed: true,
                editing: true
            }
        );
    }

    #[test]
    fn test_mouse_regions() {
        let mut item = item();
        render(&mut item);

        // "  [ ] buy milk ... x": checkbox at 2..5, label from 6, destroy in last column
        assert_eq!(item.handle_click(3, 0), Action::CompleteTodo(TaskId(1)));
        assert_eq!(item.handle_click(29, 0), Action::DeleteTodo(TaskId(1)));
        assert_eq!(item.handle_click(20, 0), Action::None);

        assert_eq!(item.handle_double_click(7, 0), Action::None);
        assert!(item.is_editing());
    }

    #[test]
    fn test_empty_label_can_still_be_double_clicked() {
        let mut item = TodoItem::new(Task::new(1, "", false));
        render(&mut item);

        // Label starts right after "  [ ] "
        assert_eq!(item.handle_double_click(6, 0), Action::None);
        assert!(item.is_editing());
    }

    #[test]
    fn test_very_long_label_keeps_row_layout() {
        let mut item = TodoItem::new(Task::new(1, "a".repeat(65_530), false));
        let mut terminal = Terminal::new(TestBackend::new(40, 1)).unwrap();
        terminal.draw(|f| item.render(f, f.area())).unwrap();

        assert_eq!(item.handle_click(3, 0), Action::CompleteTodo(TaskId(1)));
        assert_eq!(item.handle_click(39, 0), Action::DeleteTodo(TaskId(1)));

        let row: String = terminal.backend().buffer().content.iter().map(|cell| cell.symbol()).collect();
        assert!(row.starts_with("  [ ] aaaa"));
        assert!(row.ends_with("ax"));
    }
}
