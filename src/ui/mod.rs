//! UI components module.
//!
//! Contains ratatui widgets for displaying the dashboard.

pub mod actions;
pub mod nav;
pub mod search;
pub mod summary;
pub mod table;
pub mod tabs;

pub use actions::render_actions;
pub use nav::{render_menu, render_nav};
pub use search::render_search;
pub use summary::render_summary;
pub use table::render_table;
pub use tabs::render_tabs;

use ratatui::layout::{Constraint, Layout, Rect};

/// Terminals at least this wide get the inline navigation links and the
/// date column.
pub const WIDE_LAYOUT_MIN_WIDTH: u16 = 100;

/// Screen regions of the dashboard, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardLayout {
    /// Navigation bar
    pub nav: Rect,
    /// Summary cards
    pub summary: Rect,
    /// Search box
    pub search: Rect,
    /// Tab strip
    pub tabs: Rect,
    /// Shipment table
    pub table: Rect,
    /// Status line
    pub status: Rect,
}

/// Split the frame into dashboard regions.
pub fn dashboard_layout(area: Rect) -> DashboardLayout {
    let [nav, summary, search, tabs, table, status] = Layout::vertical([
        Constraint::Length(3), // Navigation bar
        Constraint::Length(4), // Summary cards
        Constraint::Length(3), // Search bar
        Constraint::Length(3), // Tabs
        Constraint::Min(0),    // Shipment table
        Constraint::Length(1), // Status bar
    ])
    .areas(area);

    DashboardLayout {
        nav,
        summary,
        search,
        tabs,
        table,
        status,
    }
}

/// Rectangle of at most `width` x `height` centered in `area`.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Flatten a buffer into newline-separated rows of text.
///
/// Cells covered by a wide symbol (e.g. `☰`) are skipped, so each row reads
/// the way it appears on screen.
#[cfg(test)]
pub(crate) fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    use unicode_width::UnicodeWidthStr;

    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            let mut row = String::new();
            let mut x = area.left();
            while x < area.right() {
                let symbol = buf[(x, y)].symbol();
                row.push_str(symbol);
                x += symbol.width().max(1) as u16;
            }
            row
        })
        .collect::<Vec<_>>()
        .join("\n")
}
