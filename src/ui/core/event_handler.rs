use crossterm::event::{poll, Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use std::time::Instant;
use tokio::time::Duration;

/// Idle wait between polls when no terminal event is pending
const TICK: Duration = Duration::from_millis(16);

/// Folds two left clicks on the same cell into a double-click.
#[derive(Debug, Clone)]
pub struct ClickTracker {
    window: Duration,
    last: Option<(Instant, u16, u16)>,
}

impl ClickTracker {
    pub fn new(window: Duration) -> Self {
        Self { window, last: None }
    }

    /// Record a left click at `now` and classify it.
    pub fn register(&mut self, column: u16, row: u16, now: Instant) -> EventType {
        if let Some((at, last_column, last_row)) = self.last.take() {
            if last_column == column && last_row == row && now.saturating_duration_since(at) <= self.window {
                // A third click starts a new pair
                return EventType::DoubleClick { column, row };
            }
        }
        self.last = Some((now, column, row));
        EventType::Click { column, row }
    }
}

pub struct EventHandler {
    clicks: ClickTracker,
    last_render_time: Instant,
}

impl EventHandler {
    pub fn new() -> Self {
        Self::with_double_click(Duration::from_millis(crate::constants::DOUBLE_CLICK_DEFAULT_MS))
    }

    pub fn with_double_click(window: Duration) -> Self {
        Self {
            clicks: ClickTracker::new(window),
            last_render_time: Instant::now(),
        }
    }

    pub async fn next_event(&mut self) -> anyhow::Result<EventType> {
        // Check for terminal events without blocking first
        if poll(Duration::from_millis(0))? {
            let event = crossterm::event::read()?;
            return Ok(self.translate(event, Instant::now()));
        }

        // If no immediate event, wait a bit and return tick
        tokio::time::sleep(TICK).await;
        Ok(EventType::Tick)
    }

    /// Map a raw terminal event onto the events components understand.
    pub fn translate(&mut self, event: Event, now: Instant) -> EventType {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => EventType::Key(key),
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => self.clicks.register(column, row, now),
            Event::Resize(w, h) => EventType::Resize(w, h),
            _ => EventType::Other,
        }
    }

    /// Note that a frame was just drawn
    pub fn mark_rendered(&mut self) {
        self.last_render_time = Instant::now();
    }

    /// Check if we should render based on timing
    pub fn should_render(&self) -> bool {
        self.last_render_time.elapsed() >= TICK // Cap at ~60 FPS
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventType {
    Key(KeyEvent),
    Click { column: u16, row: u16 },
    DoubleClick { column: u16, row: u16 },
    Resize(u16, u16),
    Tick,
    Other,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
