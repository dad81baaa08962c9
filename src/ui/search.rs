//! Search widget rendering.
//!
//! Displays the search input bar.

use crate::app::{App, UiMode};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Shown while the search box is empty and unfocused.
const PLACEHOLDER: &str = "Search shipments...";

/// Render the search widget.
///
/// # Arguments
/// * `app` - Application state
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Details
/// Displays a search input bar with the current term, or a placeholder when
/// the term is empty. Highlights when in search mode.
pub fn render_search(app: &App, area: Rect, buf: &mut Buffer) {
    let is_active = app.mode == UiMode::Search;
    let term = &app.view.search_term;

    let mut spans = vec![Span::styled(
        if is_active { "Search: " } else { "Search (press '/'): " },
        Style::default().fg(Color::Yellow),
    )];
    if term.is_empty() && !is_active {
        spans.push(Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray)));
    } else {
        spans.push(Span::styled(
            term.as_str(),
            Style::default().fg(if is_active { Color::White } else { Color::Gray }),
        ));
    }
    if is_active {
        spans.push(Span::styled("_", Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title("Search")
            .borders(Borders::ALL)
            .style(if is_active {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            }),
    );

    Widget::render(paragraph, area, buf);
}
