//! Tabs widget rendering.
//!
//! Displays the category tab headers above the shipment table.

use crate::app::App;
use crate::filter::Tab;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Render the tabs widget.
///
/// # Arguments
/// * `app` - Application state
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Details
/// Displays the five category tabs horizontally, each prefixed with the digit
/// that selects it. Highlights the active tab.
pub fn render_tabs(app: &App, area: Rect, buf: &mut Buffer) {
    let active_tab = app.view.active_tab;

    let mut spans = Vec::new();
    for (i, tab) in Tab::ALL.into_iter().enumerate() {
        let is_active = tab == active_tab;
        let style = if is_active {
            Style::default()
                .fg(Color::Yellow)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }

        let tab_text = if is_active {
            format!("▶ {} {} ◀", i + 1, tab.label())
        } else {
            format!("  {} {}  ", i + 1, tab.label())
        };
        spans.push(Span::styled(tab_text, style));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .title("Tabs (Tab/Shift-Tab)")
                .borders(Borders::ALL),
        )
        .alignment(Alignment::Center);

    Widget::render(paragraph, area, buf);
}
