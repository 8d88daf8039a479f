//! Terminal setup and the main event loop

use crate::config::Config;
use crate::store::TodoStore;
use crate::ui::app_component::AppComponent;
use crate::ui::core::{Component, EventHandler, EventType};
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use tokio::time::Duration;

/// Run the todo list until the user quits
pub async fn run_app(config: Config, mut store: TodoStore) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if config.ui.mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppComponent::new(&config.ui);
    app.set_tasks(store.tasks().to_vec());
    let mut event_handler = EventHandler::with_double_click(Duration::from_millis(config.ui.double_click_ms));

    let result = run_app_loop(&mut terminal, &mut app, &mut store, &mut event_handler).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    store: &mut TodoStore,
    event_handler: &mut EventHandler,
) -> Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render && event_handler.should_render() {
            terminal.draw(|f| app.render(f, f.area()))?;
            event_handler.mark_rendered();
            needs_render = false;
        }

        let event = event_handler.next_event().await?;
        needs_render |= apply_event(app, store, event);

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Feed one event to the app, let it dispatch into `store`, then hand the
/// store's tasks back down.
///
/// Returns true when the screen needs redrawing.
pub fn apply_event(app: &mut AppComponent, store: &mut TodoStore, event: EventType) -> bool {
    let changed = app.handle_event(event, store);
    if changed {
        app.set_tasks(store.tasks().to_vec());
    }
    changed
}
