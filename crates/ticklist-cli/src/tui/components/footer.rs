//! Footer component: active count, filter selectors and Clear Completed.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Tabs},
};

use ticklist_core::{Filter, Storage};

use crate::tui::app::App;

/// Render the footer.
pub fn render<S: Storage>(app: &App<S>, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(20), // Count
            Constraint::Min(30),    // Filters
            Constraint::Length(22), // Clear Completed
        ])
        .split(inner_area);

    let count = Paragraph::new(format!("{} items left!", app.store.active_count()))
        .style(Style::default().fg(Color::Gray));
    frame.render_widget(count, chunks[0]);

    let titles: Vec<String> = Filter::ALL
        .iter()
        .map(|filter| format!("{} {}", filter.index() + 1, filter.title()))
        .collect();

    let filters = Tabs::new(titles)
        .select(app.store.filter().index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .divider(" | ");
    frame.render_widget(filters, chunks[1]);

    let clear_style = if app.store.completed_count() > 0 {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let clear = Paragraph::new("[c] Clear Completed")
        .style(clear_style)
        .alignment(Alignment::Right);
    frame.render_widget(clear, chunks[2]);
}
