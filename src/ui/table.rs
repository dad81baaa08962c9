//! Shipment table rendering.
//!
//! Displays the filtered shipments with selection highlighting, or the
//! empty-state message when nothing matches.

use crate::app::App;
use crate::shipments::{Shipment, StatusGlyph};
use crate::ui::WIDE_LAYOUT_MIN_WIDTH;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};

/// Color of each status glyph.
pub fn glyph_color(glyph: StatusGlyph) -> Color {
    match glyph {
        StatusGlyph::Pending => Color::Yellow,
        StatusGlyph::InMotion => Color::Blue,
        StatusGlyph::Alert => Color::Magenta,
        StatusGlyph::Completed => Color::Green,
        StatusGlyph::Package => Color::Gray,
    }
}

/// Render the shipment table.
///
/// # Arguments
/// * `app` - Application state
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Details
/// Columns: Tracking ID, Description, Date, Status. The date column is
/// dropped on narrow terminals. An empty result renders the header followed
/// by a centered empty-state message.
pub fn render_table(app: &App, area: Rect, buf: &mut Buffer) {
    let visible = app.visible_shipments();
    let show_date = area.width >= WIDE_LAYOUT_MIN_WIDTH;

    let title = format!(
        "{} ({}/{})",
        app.view.active_tab.label(),
        visible.len(),
        app.shipments.len()
    );
    let block = Block::default().title(title).borders(Borders::ALL);

    let mut header_cells = vec!["Tracking ID", "Description"];
    if show_date {
        header_cells.push("Date");
    }
    header_cells.push("Status");
    let header = Row::new(header_cells).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let widths = if show_date {
        vec![
            Constraint::Length(20),
            Constraint::Min(20),
            Constraint::Length(14),
            Constraint::Length(20),
        ]
    } else {
        vec![
            Constraint::Length(20),
            Constraint::Min(12),
            Constraint::Length(20),
        ]
    };

    if visible.is_empty() {
        let inner = block.inner(area);
        let table = Table::new(Vec::<Row>::new(), widths)
            .header(header)
            .block(block);
        Widget::render(table, area, buf);

        // Header takes the first inner row.
        if inner.height > 1 {
            let message_area = Rect {
                y: inner.y + 1 + (inner.height - 1) / 2,
                height: 1,
                ..inner
            };
            let message = Paragraph::new(app.empty_state_message())
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center);
            Widget::render(message, message_area, buf);
        }
        return;
    }

    let rows: Vec<Row> = visible
        .iter()
        .map(|shipment| shipment_row(shipment, show_date, app.local_time))
        .collect();

    let selected = app.selected_index.min(visible.len() - 1);
    let mut table_state = TableState::default().with_selected(Some(selected));

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(
            Style::default()
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    StatefulWidget::render(table, area, buf, &mut table_state);
}

fn shipment_row(shipment: &Shipment, show_date: bool, local_time: bool) -> Row<'_> {
    let glyph = shipment.glyph();
    let status = Line::from(vec![
        Span::styled(glyph.symbol(), Style::default().fg(glyph_color(glyph))),
        Span::raw(" "),
        Span::raw(shipment.status_label()),
    ]);

    let mut cells = vec![
        Cell::from(Span::styled(
            shipment.id.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Cell::from(shipment.description.as_str()),
    ];
    if show_date {
        cells.push(Cell::from(shipment.format_date(local_time)));
    }
    cells.push(Cell::from(status));
    Row::new(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::UiMode;
    use crate::filter::Tab;
    use crate::shipments::source::demo_shipments;
    use crate::ui::buffer_text;

    fn render(app: &App, width: u16) -> String {
        let area = Rect::new(0, 0, width, 10);
        let mut buf = Buffer::empty(area);
        render_table(app, area, &mut buf);
        buffer_text(&buf)
    }

    #[test]
    fn test_rows_in_source_order() {
        let app = App::new(demo_shipments(), Tab::All, false);
        let text = render(&app, 110);
        let electronics = text.find("Electronics Package").unwrap();
        let clothing = text.find("Clothing Items").unwrap();
        let books = text.find("Books and Stationery").unwrap();
        let glass = text.find("Fragile Glassware").unwrap();
        assert!(electronics < clothing && clothing < books && books < glass);
        assert!(text.contains("All Shipments (4/4)"));
    }

    #[test]
    fn test_wide_table_shows_dates_and_status() {
        let app = App::new(demo_shipments(), Tab::All, false);
        let text = render(&app, 110);
        assert!(text.contains("Date"));
        assert!(text.contains("Jun 5, 2023"));
        assert!(text.contains("✔ Delivered"));
        assert!(text.contains("◷ Registered"));
    }

    #[test]
    fn test_narrow_table_hides_dates() {
        let app = App::new(demo_shipments(), Tab::All, false);
        let text = render(&app, 80);
        assert!(!text.contains("Jun 5, 2023"));
        assert!(text.contains("Tracking ID"));
    }

    #[test]
    fn test_empty_state_message() {
        let mut app = App::new(demo_shipments(), Tab::Delivered, false);
        app.mode = UiMode::Search;
        for ch in "clothing".chars() {
            app.add_search_char(ch);
        }
        let text = render(&app, 110);
        assert!(text.contains("No delivered shipments found"));
        assert!(text.contains("Delivered (0/4)"));
        assert!(!text.contains("Clothing Items"));
    }

    #[test]
    fn test_unknown_status_renders_generic_glyph() {
        let mut shipments = demo_shipments();
        shipments[0].status_code = 0;
        shipments[0].status.clear();
        let app = App::new(shipments, Tab::All, false);
        let text = render(&app, 110);
        assert!(text.contains("□ Unknown"));
    }
}
