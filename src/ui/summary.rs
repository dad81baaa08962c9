//! Summary cards rendering.

use crate::app::App;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Render the four summary cards side by side.
///
/// # Details
/// Counts are recomputed from the full shipment list on every render; search
/// and tab do not affect them.
pub fn render_summary(app: &App, area: Rect, buf: &mut Buffer) {
    let summary = app.summary();
    let columns = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);

    for (card, column) in summary.cards().iter().zip(columns.iter()) {
        let lines = vec![
            Line::from(Span::styled(
                card.value.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(card.caption, Style::default().fg(Color::Gray))),
        ];
        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .title(Span::styled(card.title, Style::default().fg(Color::Cyan)))
                .borders(Borders::ALL),
        );
        Widget::render(paragraph, *column, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Tab;
    use crate::shipments::source::demo_shipments;
    use crate::ui::buffer_text;

    #[test]
    fn test_cards_show_counts() {
        let app = App::new(demo_shipments(), Tab::Delivered, false);
        let area = Rect::new(0, 0, 120, 4);
        let mut buf = Buffer::empty(area);
        render_summary(&app, area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("Total Shipments"));
        assert!(text.contains("Out for Delivery"));
        assert!(text.contains("Successfully completed"));
        let second_row = text.lines().nth(1).unwrap();
        assert!(second_row.contains('4'));
        assert_eq!(second_row.matches('1').count(), 3);
    }
}
