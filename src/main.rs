use anyhow::Result;
use todomvc::actions::TodoActions;
use todomvc::config::Config;
use todomvc::constants::WELCOME_TODO;
use todomvc::store::TodoStore;
use todomvc::{logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;

    if let Some(path) = logger::init(&config.logging)? {
        eprintln!("Logging to {}", path.display());
    }

    let mut store = TodoStore::new();
    store.add_todo(WELCOME_TODO.to_string());

    // Run the TUI application
    ui::run_app(config, store).await?;

    Ok(())
}
