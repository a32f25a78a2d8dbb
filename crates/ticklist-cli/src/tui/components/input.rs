//! New-item input field component.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use ticklist_core::Storage;

use crate::tui::app::{App, InputMode};

/// Render the new-item input field.
pub fn render<S: Storage>(app: &App<S>, frame: &mut Frame, area: Rect) {
    let adding = app.input_mode == InputMode::Adding;

    let border_style = if adding {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .title(" New ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);

    let inner_area = block.inner(area);

    let (input_text, text_style) = if adding {
        (format!("{}_", app.input_buffer), Style::default().fg(Color::White))
    } else if app.input_buffer.is_empty() {
        (app.config.ui.placeholder.clone(), Style::default().fg(Color::DarkGray))
    } else {
        (app.input_buffer.clone(), Style::default().fg(Color::DarkGray))
    };

    let input = Paragraph::new(input_text).style(text_style).block(block);

    frame.render_widget(input, area);

    if adding {
        let x = cursor_x(inner_area, app.input_buffer.chars().count());
        frame.set_cursor_position(Position::new(x, inner_area.y));
    }
}

/// Column of the cursor after `typed` characters, kept inside `inner`.
fn cursor_x(inner: Rect, typed: usize) -> u16 {
    let typed = u16::try_from(typed).unwrap_or(u16::MAX);
    inner
        .x
        .saturating_add(typed.min(inner.width.saturating_sub(1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_follows_text() {
        let inner = Rect::new(2, 1, 20, 1);
        assert_eq!(cursor_x(inner, 0), 2);
        assert_eq!(cursor_x(inner, 5), 7);
    }

    #[test]
    fn test_cursor_clamped_to_field() {
        let inner = Rect::new(2, 1, 20, 1);
        assert_eq!(cursor_x(inner, 19), 21);
        assert_eq!(cursor_x(inner, 500), 21);
        assert_eq!(cursor_x(inner, 100_000), 21);

        // Zero-width field pins the cursor at its left edge
        assert_eq!(cursor_x(Rect::new(2, 1, 0, 1), 3), 2);
    }
}
