use super::actions::Action;
use super::event_handler::EventType;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Position, Rect},
    Frame,
};

pub trait Component {
    fn handle_events(&mut self, event: EventType) -> Action {
        match event {
            EventType::Key(key) => self.handle_key_events(key),
            EventType::Click { column, row } => self.handle_click(column, row),
            EventType::DoubleClick { column, row } => self.handle_double_click(column, row),
            _ => Action::None,
        }
    }

    fn handle_key_events(&mut self, key: KeyEvent) -> Action;

    fn handle_click(&mut self, _column: u16, _row: u16) -> Action {
        Action::None
    }

    // A double-click is two clicks unless the component says otherwise
    fn handle_double_click(&mut self, column: u16, row: u16) -> Action {
        self.handle_click(column, row)
    }

    fn update(&mut self, action: Action) -> Action {
        // Default implementation passes action through
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect);

    // Optional lifecycle methods
    fn on_focus(&mut self) {}
    fn on_blur(&mut self) -> Action {
        Action::None
    }
}

/// Whether `(column, row)` falls inside `rect`.
pub fn hit(rect: Rect, column: u16, row: u16) -> bool {
    rect.contains(Position::new(column, row))
}
