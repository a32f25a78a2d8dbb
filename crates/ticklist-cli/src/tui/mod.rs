//! Terminal UI for ticklist.
//!
//! Provides an interactive list view with:
//! - A new-item input
//! - The filtered item list with in-place editing
//! - A footer with the active count, filter selectors and Clear Completed

mod app;
mod components;
mod event;
mod ui;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io::stdout;

use app::App;
use ticklist_core::{Config, Storage, TodoStore};

/// Run the TUI application.
pub async fn run<S: Storage>(config: Config, store: TodoStore<S>) -> color_eyre::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new(config, store);

    // Run the main loop
    let result = app.run(&mut terminal).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
