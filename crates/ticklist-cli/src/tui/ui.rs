//! UI rendering for the TUI.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use ticklist_core::Storage;

use super::app::{App, InputMode};
use super::components::{footer, input, todo_list};

/// Render the entire UI.
pub fn render<S: Storage>(app: &App<S>, frame: &mut Frame) {
    let area = frame.area();

    // Main layout: header, input, list, footer, status
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Length(3), // New-item input
            Constraint::Min(3),    // Item list
            Constraint::Length(3), // Footer
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    render_header(app, frame, chunks[0]);
    input::render(app, frame, chunks[1]);
    todo_list::render(app, frame, chunks[2]);
    footer::render(app, frame, chunks[3]);
    render_status_bar(app, frame, chunks[4]);
}

/// Render the title and the toggle-all control.
fn render_header<S: Storage>(app: &App<S>, frame: &mut Frame, area: Rect) {
    let toggle_label = if app.store.all_completed() && !app.store.items().is_empty() {
        "[A] Deselect all"
    } else {
        "[A] Select all"
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " Todo List ",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(toggle_label, Style::default().fg(Color::DarkGray)),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(header, area);
}

/// Render the status bar.
fn render_status_bar<S: Storage>(app: &App<S>, frame: &mut Frame, area: Rect) {
    let mode_str = match app.input_mode {
        InputMode::Normal => {
            "[a] Add  [e] Edit  [x] Toggle  [d] Delete  [1-3] Filter  [c] Clear  [q] Quit"
        }
        InputMode::Adding => "[Enter] Add  [Esc] Done",
        InputMode::Editing(_) => "[Enter/Esc] Finish editing",
    };

    let status = match &app.status_message {
        Some(message) => format!("{}  |  {}", mode_str, message),
        None => mode_str.to_string(),
    };

    let status_bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status_bar, area);
}
