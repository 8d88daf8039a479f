use crate::actions::TodoActions;
use crate::config::UiConfig;
use crate::constants::{HINT_EDITING, HINT_LIST, HINT_NEW_TODO};
use crate::icons::IconService;
use crate::todo::Task;
use crate::ui::components::{Header, MainSection};
use crate::ui::core::{Action, Component, EventType};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Which component receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    NewTodo,
    #[default]
    List,
}

/// Composition root: header, list and status line.
///
/// Task data is never owned here. After every event the caller hands the
/// store's current collection back through [`AppComponent::set_tasks`].
pub struct AppComponent {
    header: Header,
    main_section: MainSection,
    focus: Focus,
    icons: IconService,
    should_quit: bool,
}

impl Default for AppComponent {
    fn default() -> Self {
        Self::new(&UiConfig::default())
    }
}

impl AppComponent {
    pub fn new(config: &UiConfig) -> Self {
        let icons = IconService::new(config.icon_theme);
        let mut main_section = MainSection::new();
        main_section.icons = icons.clone();
        main_section.on_focus();

        Self {
            header: Header::new(config.placeholder.clone()),
            main_section,
            focus: Focus::List,
            icons,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn main_section(&self) -> &MainSection {
        &self.main_section
    }

    /// Re-render step: supply the latest task collection.
    pub fn set_tasks(&mut self, tasks: Vec<Task>) {
        self.main_section.set_tasks(tasks);
    }

    /// Route one input event through the component tree and dispatch the
    /// resulting task operations into `actions`.
    ///
    /// Returns true when the screen needs redrawing.
    pub fn handle_event(&mut self, event: EventType, actions: &mut dyn TodoActions) -> bool {
        let action = match event {
            EventType::Resize(_, _) => return true,
            EventType::Tick | EventType::Other => return false,
            event => self.handle_events(event),
        };
        let action = self.update(action);

        let dispatched = action.clone().dispatch(actions);
        if dispatched > 0 {
            log::info!("dispatched {:?}", action);
        }
        true
    }

    fn set_focus(&mut self, focus: Focus) -> Action {
        if focus == self.focus {
            return Action::None;
        }
        log::debug!("focus: {:?} -> {:?}", self.focus, focus);
        let action = match self.focus {
            Focus::NewTodo => self.header.on_blur(),
            Focus::List => self.main_section.on_blur(),
        };
        self.focus = focus;
        match focus {
            Focus::NewTodo => self.header.on_focus(),
            Focus::List => self.main_section.on_focus(),
        }
        action
    }

    /// Handle keyboard shortcuts that belong to no single component
    fn handle_global_key(&mut self, key: KeyEvent) -> Option<Action> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Action::Quit);
        }
        if self.focus != Focus::List || self.main_section.is_capturing_input() {
            return None;
        }
        match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('n') | KeyCode::Tab => Some(Action::FocusNewTodo),
            KeyCode::Char('t') => Some(Action::CycleIconTheme),
            _ => None,
        }
    }

    fn status_hint(&self) -> &'static str {
        match self.focus {
            Focus::NewTodo => HINT_NEW_TODO,
            Focus::List if self.main_section.is_capturing_input() => HINT_EDITING,
            Focus::List => HINT_LIST,
        }
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if let Some(action) = self.handle_global_key(key) {
            return action;
        }
        match self.focus {
            Focus::NewTodo => self.header.handle_key_events(key),
            Focus::List => self.main_section.handle_key_events(key),
        }
    }

    fn handle_click(&mut self, column: u16, row: u16) -> Action {
        if self.header.contains(column, row) {
            self.set_focus(Focus::NewTodo)
        } else {
            let action = self.set_focus(Focus::List);
            action.and(self.main_section.handle_click(column, row))
        }
    }

    fn handle_double_click(&mut self, column: u16, row: u16) -> Action {
        if self.header.contains(column, row) {
            self.set_focus(Focus::NewTodo)
        } else {
            let action = self.set_focus(Focus::List);
            action.and(self.main_section.handle_double_click(column, row))
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                log::info!("quit requested");
                self.should_quit = true;
                Action::None
            }
            Action::FocusNewTodo => self.set_focus(Focus::NewTodo),
            Action::FocusList => self.set_focus(Focus::List),
            Action::CycleIconTheme => {
                self.icons.cycle_icon_theme();
                self.main_section.icons = self.icons.clone();
                Action::None
            }
            Action::Batch(actions) => actions
                .into_iter()
                .fold(Action::None, |acc, action| acc.and(self.update(action))),
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let [header_area, list_area, status_area] =
            Layout::vertical([Constraint::Length(4), Constraint::Min(0), Constraint::Length(1)]).areas(rect);

        self.header.render(f, header_area);
        self.main_section.render(f, list_area);

        let status = Paragraph::new(self.status_hint())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(status, status_area);
    }
}
