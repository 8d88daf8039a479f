//! The list container.
//!
//! `MainSection` receives the full task collection from its caller and never
//! modifies it. It owns only UI state: the current [`Filter`], the selection,
//! and one [`TodoItem`] per task (reconciled by id so an open editor survives
//! a refresh). From that it derives the visible subset, the toggle-all state
//! and the footer counts on every render.

use crate::constants::TOGGLE_ALL_LABEL;
use crate::icons::IconService;
use crate::todo::{self, Filter, Task, TaskId};
use crate::ui::components::footer::{Footer, FooterHit, FooterProps};
use crate::ui::components::todo_item::TodoItem;
use crate::ui::core::component::hit;
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::collections::HashMap;

pub struct MainSection {
    tasks: Vec<Task>,
    items: HashMap<TaskId, TodoItem>,
    filter: Filter,
    /// Index into the visible subset
    selected_index: usize,
    scroll_offset: usize,
    pub focused: bool,
    pub icons: IconService,
    footer: Footer,
    toggle_all_area: Option<Rect>,
    rows: Vec<(TaskId, Rect)>,
}

impl Default for MainSection {
    fn default() -> Self {
        Self::new()
    }
}

impl MainSection {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            items: HashMap::new(),
            filter: Filter::default(),
            selected_index: 0,
            scroll_offset: 0,
            focused: true,
            icons: IconService::default(),
            footer: Footer::new(),
            toggle_all_area: None,
            rows: Vec::new(),
        }
    }

    /// Take a new task collection from the caller.
    pub fn set_tasks(&mut self, tasks: Vec<Task>) {
        let selected_id = self.selected_id();

        let mut previous = std::mem::take(&mut self.items);
        for task in &tasks {
            let item = match previous.remove(&task.id) {
                Some(mut item) => {
                    item.set_task(task.clone());
                    item
                }
                None => TodoItem::new(task.clone()),
            };
            self.items.insert(task.id, item);
        }
        self.tasks = tasks;

        self.restore_selection(selected_id);
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// Select a filter. Purely local, nothing is reported to the caller.
    pub fn show(&mut self, filter: Filter) {
        if filter != self.filter {
            log::debug!("filter: {:?} -> {:?}", self.filter, filter);
        }
        let selected_id = self.selected_id();
        self.filter = filter;
        self.restore_selection(selected_id);
    }

    pub fn visible_tasks(&self) -> Vec<&Task> {
        todo::visible(&self.tasks, self.filter)
    }

    pub fn completed_count(&self) -> usize {
        todo::completed_count(&self.tasks)
    }

    pub fn active_count(&self) -> usize {
        self.tasks.len() - self.completed_count()
    }

    /// Checked state of the toggle-all control, `None` while it is hidden.
    pub fn toggle_all_checked(&self) -> Option<bool> {
        if self.tasks.is_empty() {
            None
        } else {
            Some(self.completed_count() == self.tasks.len())
        }
    }

    /// Footer contents, `None` while it is hidden.
    pub fn footer_props(&self) -> Option<FooterProps> {
        if self.tasks.is_empty() {
            return None;
        }
        let completed_count = self.completed_count();
        Some(FooterProps {
            active_count: self.tasks.len() - completed_count,
            completed_count,
            filter: self.filter,
        })
    }

    pub fn selected_id(&self) -> Option<TaskId> {
        self.visible_tasks().get(self.selected_index).map(|task| task.id)
    }

    pub fn item(&self, id: TaskId) -> Option<&TodoItem> {
        self.items.get(&id)
    }

    /// Ids of every row with an open editor, in list order
    pub fn editing_ids(&self) -> Vec<TaskId> {
        self.tasks
            .iter()
            .map(|task| task.id)
            .filter(|id| self.items.get(id).is_some_and(TodoItem::is_editing))
            .collect()
    }

    /// Whether keys currently go to an open editor
    pub fn is_capturing_input(&self) -> bool {
        self.selected_id()
            .and_then(|id| self.items.get(&id))
            .is_some_and(TodoItem::is_editing)
    }

    pub fn select_next(&mut self) {
        let len = self.visible_tasks().len();
        if len > 0 {
            self.selected_index = (self.selected_index + 1) % len;
        }
    }

    pub fn select_previous(&mut self) {
        let len = self.visible_tasks().len();
        if len > 0 {
            self.selected_index = if self.selected_index == 0 {
                len - 1
            } else {
                self.selected_index - 1
            };
        }
    }

    fn select_id(&mut self, id: TaskId) {
        if let Some(index) = self.visible_tasks().iter().position(|task| task.id == id) {
            self.selected_index = index;
        }
    }

    fn restore_selection(&mut self, selected_id: Option<TaskId>) {
        let visible = self.visible_tasks();
        let position = selected_id.and_then(|id| visible.iter().position(|task| task.id == id));
        let len = visible.len();
        self.selected_index = match position {
            Some(index) => index,
            None => self.selected_index.min(len.saturating_sub(1)),
        };
    }

    fn selected_item_mut(&mut self) -> Option<&mut TodoItem> {
        let id = self.selected_id()?;
        self.items.get_mut(&id)
    }

    fn toggle_all(&self) -> Action {
        if self.tasks.is_empty() {
            Action::None
        } else {
            Action::CompleteAll
        }
    }

    fn clear_completed(&self) -> Action {
        if self.completed_count() > 0 {
            Action::ClearCompleted
        } else {
            Action::None
        }
    }

    fn row_at(&self, column: u16, row: u16) -> Option<TaskId> {
        self.rows
            .iter()
            .find(|(_, rect)| hit(*rect, column, row))
            .map(|(id, _)| *id)
    }

    /// Blur every open editor the click did not land in.
    fn blur_editors_outside(&mut self, column: u16, row: u16) -> Action {
        let mut action = Action::None;
        for task in &self.tasks {
            if let Some(item) = self.items.get_mut(&task.id) {
                if item.click_leaves_editor(column, row) {
                    action = action.and(item.on_blur());
                }
            }
        }
        action
    }
}

impl Component for MainSection {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if let Some(item) = self.selected_item_mut() {
            if item.is_editing() {
                return item.handle_key_events(key);
            }
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                Action::None
            }
            KeyCode::Home => {
                self.selected_index = 0;
                Action::None
            }
            KeyCode::End => {
                self.selected_index = self.visible_tasks().len().saturating_sub(1);
                Action::None
            }
            KeyCode::Char('1') => {
                self.show(Filter::All);
                Action::None
            }
            KeyCode::Char('2') => {
                self.show(Filter::Active);
                Action::None
            }
            KeyCode::Char('3') => {
                self.show(Filter::Completed);
                Action::None
            }
            KeyCode::Char('f') => {
                self.show(self.filter.next());
                Action::None
            }
            KeyCode::Char('a') => self.toggle_all(),
            KeyCode::Char('c') => self.clear_completed(),
            _ => match self.selected_item_mut() {
                Some(item) => item.handle_key_events(key),
                None => Action::None,
            },
        }
    }

    fn handle_click(&mut self, column: u16, row: u16) -> Action {
        let action = self.blur_editors_outside(column, row);

        if self.toggle_all_area.is_some_and(|rect| hit(rect, column, row)) {
            return action.and(self.toggle_all());
        }

        if let Some(footer_hit) = self.footer.hit_test(column, row) {
            return match footer_hit {
                FooterHit::Show(filter) => {
                    self.show(filter);
                    action
                }
                FooterHit::ClearCompleted => action.and(self.clear_completed()),
            };
        }

        match self.row_at(column, row) {
            Some(id) => {
                self.select_id(id);
                let item_action = self
                    .items
                    .get_mut(&id)
                    .map(|item| item.handle_click(column, row))
                    .unwrap_or(Action::None);
                action.and(item_action)
            }
            None => action,
        }
    }

    fn handle_double_click(&mut self, column: u16, row: u16) -> Action {
        let Some(id) = self.row_at(column, row) else {
            return self.handle_click(column, row);
        };

        let action = self.blur_editors_outside(column, row);
        self.select_id(id);
        let item_action = self
            .items
            .get_mut(&id)
            .map(|item| item.handle_double_click(column, row))
            .unwrap_or(Action::None);
        action.and(item_action)
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) -> Action {
        self.focused = false;
        let mut action = Action::None;
        for task in &self.tasks {
            if let Some(item) = self.items.get_mut(&task.id) {
                action = action.and(item.on_blur());
            }
        }
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.rows.clear();

        if self.tasks.is_empty() {
            self.toggle_all_area = None;
            self.footer = Footer::new();
            let hint = Paragraph::new("Nothing to do yet.").style(Style::default().fg(Color::DarkGray));
            f.render_widget(hint, rect);
            return;
        }

        let [toggle_area, list_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(rect);

        // Toggle all
        let checked = self.toggle_all_checked().unwrap_or(false);
        let toggle_style = if checked {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let toggle = Line::from(vec![
            Span::raw("  "),
            Span::styled(self.icons.checkbox(checked), toggle_style),
            Span::raw(" "),
            Span::styled(self.icons.toggle_all(), toggle_style),
            Span::raw(" "),
            Span::styled(TOGGLE_ALL_LABEL, Style::default().fg(Color::DarkGray)),
        ]);
        f.render_widget(Paragraph::new(toggle), toggle_area);
        self.toggle_all_area = Some(toggle_area);

        // Items
        let visible: Vec<TaskId> = self.visible_tasks().iter().map(|task| task.id).collect();
        let height = list_area.height as usize;
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        } else if height > 0 && self.selected_index >= self.scroll_offset + height {
            self.scroll_offset = self.selected_index + 1 - height;
        }
        self.scroll_offset = self.scroll_offset.min(visible.len().saturating_sub(height.max(1)));

        for (offset, id) in visible.iter().skip(self.scroll_offset).take(height).enumerate() {
            let row = Rect::new(list_area.x, list_area.y + offset as u16, list_area.width, 1);
            let selected = self.focused && self.scroll_offset + offset == self.selected_index;
            if let Some(item) = self.items.get_mut(id) {
                item.selected = selected;
                item.icons = self.icons.clone();
                item.render(f, row);
                self.rows.push((*id, row));
            }
        }

        // Footer
        if let Some(props) = self.footer_props() {
            self.footer.render(f, footer_area, props);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn section(tasks: Vec<Task>) -> MainSection {
        let mut section = MainSection::new();
        section.set_tasks(tasks);
        section
    }

    #[test]
    fn test_single_active_task_scenario() {
        let mut section = section(vec![Task::new(1, "buy milk", false)]);

        section.show(Filter::Active);
        assert_eq!(section.visible_tasks().len(), 1);

        section.show(Filter::Completed);
        assert!(section.visible_tasks().is_empty());

        assert_eq!(section.toggle_all_checked(), Some(false));
    }

    #[test]
    fn test_toggle_all_hidden_when_empty() {
        let section = section(Vec::new());
        assert_eq!(section.toggle_all_checked(), None);
        assert_eq!(section.footer_props(), None);
    }

    #[test]
    fn test_toggle_all_checked_when_everything_done() {
        let section = section(vec![Task::new(1, "a", true), Task::new(2, "b", true)]);
        assert_eq!(section.toggle_all_checked(), Some(true));
    }

    #[test]
    fn test_counts_ignore_filter() {
        let mut section = section(vec![
            Task::new(1, "a", true),
            Task::new(2, "b", false),
            Task::new(3, "c", false),
        ]);
        section.show(Filter::Completed);

        let props = section.footer_props().unwrap();
        assert_eq!(props.completed_count, 1);
        assert_eq!(props.active_count, 2);
        assert_eq!(props.filter, Filter::Completed);
    }

    #[test]
    fn test_filter_keys_are_local() {
        let mut section = section(vec![Task::new(1, "a", false)]);
        assert_eq!(section.handle_key_events(key(KeyCode::Char('3'))), Action::None);
        assert_eq!(section.filter(), Filter::Completed);
        assert_eq!(section.handle_key_events(key(KeyCode::Char('f'))), Action::None);
        assert_eq!(section.filter(), Filter::All);
    }

    #[test]
    fn test_toggle_all_and_clear_completed_keys() {
        let mut section = section(vec![Task::new(1, "a", false)]);
        assert_eq!(section.handle_key_events(key(KeyCode::Char('a'))), Action::CompleteAll);
        // Nothing completed yet
        assert_eq!(section.handle_key_events(key(KeyCode::Char('c'))), Action::None);

        section.set_tasks(vec![Task::new(1, "a", true)]);
        assert_eq!(section.handle_key_events(key(KeyCode::Char('c'))), Action::ClearCompleted);
    }

    #[test]
    fn test_editing_survives_refresh_and_selection_follows_id() {
        let mut section = section(vec![Task::new(1, "a", false), Task::new(2, "b", false)]);
        section.handle_key_events(key(KeyCode::Down));
        section.handle_key_events(key(KeyCode::Enter));
        assert_eq!(section.editing_ids(), vec![TaskId(2)]);

        section.set_tasks(vec![
            Task::new(0, "new", false),
            Task::new(1, "a", false),
            Task::new(2, "b", false),
        ]);

        assert_eq!(section.selected_id(), Some(TaskId(2)));
        assert_eq!(section.editing_ids(), vec![TaskId(2)]);
        assert!(section.is_capturing_input());
    }

    #[test]
    fn test_selection_clamped_when_filter_hides_it() {
        let mut section = section(vec![
            Task::new(1, "a", false),
            Task::new(2, "b", false),
            Task::new(3, "c", true),
        ]);
        section.handle_key_events(key(KeyCode::End));
        assert_eq!(section.selected_id(), Some(TaskId(3)));

        section.show(Filter::Active);
        assert_eq!(section.selected_id(), Some(TaskId(2)));
    }

    #[test]
    fn test_keys_go_to_open_editor() {
        let mut section = section(vec![Task::new(1, "a", false)]);
        section.handle_key_events(key(KeyCode::Enter));

        // 'a' is typed, not toggle-all
        assert_eq!(section.handle_key_events(key(KeyCode::Char('a'))), Action::None);
        assert_eq!(
            section.handle_key_events(key(KeyCode::Enter)),
            Action::EditTodo {
                id: TaskId(1),
                text: "aa".to_string()
            }
        );
        assert!(section.editing_ids().is_empty());
    }

    #[test]
    fn test_blur_commits_every_open_editor() {
        let mut section = section(vec![Task::new(1, "a", false), Task::new(2, "b", false)]);
        section.handle_key_events(key(KeyCode::Enter));

        let action = section.on_blur();

        assert_eq!(
            action,
            Action::EditTodo {
                id: TaskId(1),
                text: "a".to_string()
            }
        );
        assert!(!section.focused);
        assert!(section.editing_ids().is_empty());
    }

    #[test]
    fn test_removed_tasks_drop_their_items() {
        let mut section = section(vec![Task::new(1, "a", false), Task::new(2, "b", false)]);
        section.set_tasks(vec![Task::new(2, "b", false)]);
        assert!(section.item(TaskId(1)).is_none());
        assert!(section.item(TaskId(2)).is_some());
    }

    #[test]
    fn test_items_do_not_enforce_a_single_editor() {
        let tasks = vec![Task::new(1, "a", false), Task::new(2, "b", false)];
        let mut section = section(tasks.clone());
        for id in [TaskId(1), TaskId(2)] {
            if let Some(item) = section.items.get_mut(&id) {
                item.begin_editing();
            }
        }

        section.set_tasks(tasks);

        assert_eq!(section.editing_ids(), vec![TaskId(1), TaskId(2)]);
    }
}
