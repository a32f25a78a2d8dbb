//! Item list component.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

use ticklist_core::Storage;

use crate::tui::app::App;

/// Render the filtered item list.
///
/// The highlighted row carries the delete hint; the row being edited shows
/// its text as an input with a cursor.
pub fn render<S: Storage>(app: &App<S>, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", app.store.filter().title()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let visible = app.visible_items();
    if visible.is_empty() {
        let empty = Paragraph::new("Nothing here").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner_area);
        return;
    }

    let editing = app.editing_id();

    let items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let selected = index == app.selected;

            let checkbox = if item.completed { "[x] " } else { "[ ] " };
            let checkbox_style = if item.completed {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let mut spans = vec![
                Span::raw(if selected { "> " } else { "  " }),
                Span::styled(checkbox, checkbox_style),
            ];

            if editing == Some(item.id) {
                spans.push(Span::styled(
                    format!("{}_", item.text),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::UNDERLINED),
                ));
            } else {
                let text_style = if item.completed {
                    Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT)
                } else {
                    Style::default().fg(Color::White)
                };
                spans.push(Span::styled(item.text.as_str(), text_style));
                if selected {
                    spans.push(Span::styled("  [d] delete", Style::default().fg(Color::Red)));
                }
            }

            let mut line = Line::from(spans);
            if selected {
                line = line.style(Style::default().add_modifier(Modifier::BOLD));
            }
            ListItem::new(line)
        })
        .collect();

    // Keep the highlighted row on screen
    let visible_height = inner_area.height as usize;
    let start_index = (app.selected + 1).saturating_sub(visible_height);

    let rows: Vec<ListItem> = items
        .into_iter()
        .skip(start_index)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(rows), inner_area);
}
