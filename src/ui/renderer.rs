//! Terminal setup and the main event loop

use crate::config::Config;
use crate::logger::Logger;
use crate::store::TaskStore;
use crate::ui::app_component::AppComponent;
use crate::ui::core::{Component, EventHandler, EventType};
use anyhow::{Context, Result};
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

/// Run the main TUI application
pub async fn run_app(config: Config) -> Result<()> {
    let logger = Logger::from_config(config.logging.enabled)?;
    logger.log(format!("Startup: {} seed tasks", config.tasks.seed.len()));

    let store = TaskStore::new(config.tasks.seed.clone(), config.display.clone());
    let mouse_enabled = config.ui.mouse_enabled;
    let mut app = AppComponent::new(store, config, logger);

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut event_handler = EventHandler::new();
    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|f| {
                let area = f.area();
                app.render(f, area);
            })?;
            needs_render = false;
        }

        let event = event_handler.next_event().await?;
        needs_render = !matches!(event, EventType::Tick | EventType::Other);
        app.handle_event(event);

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
