//! Row action popup rendering.

use crate::app::{App, UiMode};
use crate::ui::centered_rect;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, StatefulWidget, Widget},
};

/// Render the action popup for the selected shipment.
///
/// Only drawn in Actions mode.
pub fn render_actions(app: &App, area: Rect, buf: &mut Buffer) {
    if app.mode != UiMode::Actions {
        return;
    }
    let Some(shipment) = app.selected_shipment() else {
        return;
    };

    let actions = app.selected_actions();
    let popup = centered_rect(40, actions.len() as u16 + 2, area);
    Widget::render(Clear, popup, buf);

    let items: Vec<ListItem> = actions
        .iter()
        .map(|action| ListItem::new(action.label()))
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(app.action_index.min(actions.len().saturating_sub(1))));

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!("Actions: {}", shipment.id))
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Yellow)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    StatefulWidget::render(list, popup, buf, &mut list_state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Tab;
    use crate::shipments::source::demo_shipments;
    use crate::ui::buffer_text;

    #[test]
    fn test_popup_for_delivered_shipment() {
        let mut app = App::new(demo_shipments(), Tab::All, false);
        app.open_actions();
        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);
        render_actions(&app, area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("Actions: DPC-1234-5678-90"));
        assert!(text.contains("▶ View Details"));
        assert!(text.contains("View Proof of Delivery"));
        assert!(text.contains("View on Blockchain"));
    }

    #[test]
    fn test_popup_hidden_in_list_mode() {
        let app = App::new(demo_shipments(), Tab::All, false);
        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);
        render_actions(&app, area, &mut buf);
        assert!(!buffer_text(&buf).contains("Actions"));
    }
}
