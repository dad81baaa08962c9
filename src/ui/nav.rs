//! Navigation bar and menu overlay rendering.

use crate::app::App;
use crate::nav::NavLink;
use crate::ui::WIDE_LAYOUT_MIN_WIDTH;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

/// Brand shown at the left of the navigation bar.
const BRAND: &str = "dPackChain";

/// Width of the menu overlay panel.
const MENU_WIDTH: u16 = 30;

/// Render the navigation bar.
///
/// # Details
/// Wide terminals show every link inline, with the two buttons boxed.
/// Narrow terminals show only the brand and the menu hint.
pub fn render_nav(app: &App, area: Rect, buf: &mut Buffer) {
    let accent = Style::default().fg(Color::Cyan);
    let hint_style = if app.nav.is_open() {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let mut spans = vec![
        Span::styled("▣ ", accent),
        Span::styled(BRAND, accent.add_modifier(Modifier::BOLD)),
        Span::raw("   "),
    ];

    if area.width >= WIDE_LAYOUT_MIN_WIDTH {
        for link in NavLink::ALL {
            if link.is_button() {
                spans.push(Span::styled(
                    format!("[ {} ]", link.label()),
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                ));
            } else {
                spans.push(Span::styled(link.label(), Style::default().fg(Color::White)));
            }
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled("(m: menu)", hint_style));
    } else {
        spans.push(Span::styled("☰ Menu (m)", hint_style.fg(Color::Cyan)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title("Shipment Dashboard")
            .borders(Borders::ALL),
    );

    Widget::render(paragraph, area, buf);
}

/// Render the menu overlay when it is open.
///
/// # Details
/// Draws a panel on the right edge over whatever is below it and highlights
/// the current entry.
pub fn render_menu(app: &App, area: Rect, buf: &mut Buffer) {
    if !app.nav.is_open() {
        return;
    }

    let width = MENU_WIDTH.min(area.width);
    let panel = Rect {
        x: area.x + area.width - width,
        width,
        ..area
    };
    Widget::render(Clear, panel, buf);

    let items: Vec<ListItem> = NavLink::ALL
        .iter()
        .map(|link| {
            let style = if link.is_button() {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(link.label(), style)))
        })
        .collect();

    let highlighted = NavLink::ALL
        .iter()
        .position(|link| *link == app.nav.highlighted());
    let mut list_state = ListState::default();
    list_state.select(highlighted);

    let list = List::new(items)
        .block(
            Block::default()
                .title("Menu (Esc to close)")
                .borders(Borders::ALL),
        )
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    StatefulWidget::render(list, panel, buf, &mut list_state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Tab;
    use crate::shipments::source::demo_shipments;
    use crate::ui::buffer_text;

    fn render_bar(width: u16) -> String {
        let app = App::new(demo_shipments(), Tab::All, false);
        let area = Rect::new(0, 0, width, 3);
        let mut buf = Buffer::empty(area);
        render_nav(&app, area, &mut buf);
        buffer_text(&buf)
    }

    #[test]
    fn test_wide_nav_shows_links() {
        let text = render_bar(140);
        assert!(text.contains(BRAND));
        assert!(text.contains("How It Works"));
        assert!(text.contains("[ Register Shipment ]"));
        assert!(!text.contains("☰ Menu"));
    }

    #[test]
    fn test_narrow_nav_shows_menu_hint() {
        let text = render_bar(60);
        assert!(text.contains(BRAND));
        assert!(text.contains("☰ Menu (m)"));
        assert!(!text.contains("How It Works"));
    }

    #[test]
    fn test_menu_hidden_when_closed() {
        let app = App::new(demo_shipments(), Tab::All, false);
        let area = Rect::new(0, 0, 80, 12);
        let mut buf = Buffer::empty(area);
        render_menu(&app, area, &mut buf);
        assert!(!buffer_text(&buf).contains("Menu"));
    }

    #[test]
    fn test_menu_overlay_lists_entries() {
        let mut app = App::new(demo_shipments(), Tab::All, false);
        app.toggle_menu();
        app.menu_next();
        let area = Rect::new(0, 0, 80, 12);
        let mut buf = Buffer::empty(area);
        render_menu(&app, area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("Menu (Esc to close)"));
        assert!(text.contains("▶ Features"));
        assert!(text.contains("Track Package"));
    }
}
