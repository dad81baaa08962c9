//! Application state management.
//!
//! Holds the shipment list, the view snapshot (search text and tab), the
//! navigation menu, row selection and UI mode.

use crate::filter::{Tab, empty_state_message, filter_shipments};
use crate::nav::NavState;
use crate::shipments::{Shipment, ShipmentAction, actions_for};
use crate::summary::Summary;
use std::cmp;
use tracing::{debug, info};

/// UI input mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Normal table view
    List,
    /// Typing into the search box
    Search,
    /// Navigation menu overlay is open
    Menu,
    /// Row action popup is open
    Actions,
}

/// Search text and active tab.
///
/// Snapshots are immutable; update functions return a new value and the
/// caller swaps it in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    /// Free-text filter
    pub search_term: String,
    /// Selected category
    pub active_tab: Tab,
}

impl ViewState {
    /// Create a view on `tab` with an empty search.
    pub fn new(active_tab: Tab) -> Self {
        Self {
            search_term: String::new(),
            active_tab,
        }
    }

    /// Same view with a different tab.
    pub fn with_tab(&self, active_tab: Tab) -> Self {
        Self {
            active_tab,
            ..self.clone()
        }
    }

    /// Same view with a different search term.
    pub fn with_search_term(&self, search_term: impl Into<String>) -> Self {
        Self {
            search_term: search_term.into(),
            ..self.clone()
        }
    }

    /// Same view with `ch` appended to the search term.
    pub fn push_search_char(&self, ch: char) -> Self {
        let mut search_term = self.search_term.clone();
        search_term.push(ch);
        self.with_search_term(search_term)
    }

    /// Same view with the last search character removed.
    pub fn pop_search_char(&self) -> Self {
        let mut search_term = self.search_term.clone();
        search_term.pop();
        self.with_search_term(search_term)
    }
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    /// All shipments, in source order; never mutated after start-up
    pub shipments: Vec<Shipment>,
    /// Current search text and tab
    pub view: ViewState,
    /// Navigation menu state
    pub nav: NavState,
    /// Current UI mode
    pub mode: UiMode,
    /// Selected row in the visible list
    pub selected_index: usize,
    /// Highlighted entry in the row action popup
    pub action_index: usize,
    /// Status message to display
    pub status_message: Option<String>,
    /// Format dates in the local zone instead of UTC
    pub local_time: bool,
}

impl App {
    /// Create a new application state.
    ///
    /// # Arguments
    /// * `shipments` - Full shipment sequence
    /// * `default_tab` - Tab selected on start-up
    /// * `local_time` - Whether dates are shown in the local zone
    pub fn new(shipments: Vec<Shipment>, default_tab: Tab, local_time: bool) -> Self {
        Self {
            shipments,
            view: ViewState::new(default_tab),
            nav: NavState::default(),
            mode: UiMode::List,
            selected_index: 0,
            action_index: 0,
            status_message: None,
            local_time,
        }
    }

    /// Shipments visible under the current search and tab.
    pub fn visible_shipments(&self) -> Vec<&Shipment> {
        filter_shipments(&self.shipments, &self.view.search_term, self.view.active_tab)
    }

    /// Summary counts over all shipments.
    pub fn summary(&self) -> Summary {
        Summary::from_shipments(&self.shipments)
    }

    /// Message for the active tab when nothing matches.
    pub fn empty_state_message(&self) -> String {
        empty_state_message(self.view.active_tab)
    }

    /// Currently selected shipment, if any row is visible.
    pub fn selected_shipment(&self) -> Option<&Shipment> {
        self.visible_shipments().get(self.selected_index).copied()
    }

    /// Replace the view snapshot and keep the selection in range.
    fn set_view(&mut self, view: ViewState) {
        self.view = view;
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let visible = self.visible_shipments().len();
        self.selected_index = cmp::min(self.selected_index, visible.saturating_sub(1));
    }

    /// Move selection up, wrapping to the bottom.
    pub fn move_up(&mut self) {
        let len = self.visible_shipments().len();
        if len == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = len - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Move selection down, wrapping to the top.
    pub fn move_down(&mut self) {
        let len = self.visible_shipments().len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Add a character to the search term. Only works in Search mode.
    pub fn add_search_char(&mut self, ch: char) {
        if self.mode == UiMode::Search {
            let view = self.view.push_search_char(ch);
            self.set_view(view);
        }
    }

    /// Remove the last search character. Only works in Search mode.
    pub fn remove_search_char(&mut self) {
        if self.mode == UiMode::Search {
            let view = self.view.pop_search_char();
            self.set_view(view);
        }
    }

    /// Clear the search term.
    pub fn clear_search(&mut self) {
        let view = self.view.with_search_term(String::new());
        self.set_view(view);
    }

    /// Switch to `tab` and reset the selection.
    pub fn select_tab(&mut self, tab: Tab) {
        debug!(tab = %tab, "tab selected");
        let view = self.view.with_tab(tab);
        self.selected_index = 0;
        self.set_view(view);
    }

    /// Switch to the next tab.
    pub fn next_tab(&mut self) {
        self.select_tab(self.view.active_tab.next());
    }

    /// Switch to the previous tab.
    pub fn prev_tab(&mut self) {
        self.select_tab(self.view.active_tab.prev());
    }

    /// Open or close the navigation menu.
    pub fn toggle_menu(&mut self) {
        if self.nav.is_open() {
            self.close_menu();
        } else {
            self.nav = self.nav.open();
            self.mode = UiMode::Menu;
        }
    }

    /// Close the navigation menu.
    pub fn close_menu(&mut self) {
        self.nav = self.nav.close();
        self.mode = UiMode::List;
    }

    /// Highlight the next menu entry.
    pub fn menu_next(&mut self) {
        self.nav = self.nav.next();
    }

    /// Highlight the previous menu entry.
    pub fn menu_prev(&mut self) {
        self.nav = self.nav.prev();
    }

    /// Follow the highlighted menu entry.
    ///
    /// # Details
    /// Closes the menu and reports the route; there is no router behind it.
    pub fn activate_menu_entry(&mut self) {
        let link = self.nav.highlighted();
        info!(href = link.href(), "navigation requested");
        self.close_menu();
        self.set_status(format!("Navigate: {} ({})", link.label(), link.href()));
    }

    /// Actions offered for the selected shipment.
    pub fn selected_actions(&self) -> Vec<ShipmentAction> {
        self.selected_shipment().map(actions_for).unwrap_or_default()
    }

    /// Open the row action popup for the selected shipment.
    pub fn open_actions(&mut self) {
        if self.selected_shipment().is_some() {
            self.action_index = 0;
            self.mode = UiMode::Actions;
        }
    }

    /// Close the row action popup.
    pub fn close_actions(&mut self) {
        self.mode = UiMode::List;
    }

    /// Highlight the next row action, wrapping.
    pub fn action_next(&mut self) {
        let len = self.selected_actions().len();
        if len > 0 {
            self.action_index = (self.action_index + 1) % len;
        }
    }

    /// Highlight the previous row action, wrapping.
    pub fn action_prev(&mut self) {
        let len = self.selected_actions().len();
        if len > 0 {
            self.action_index = (self.action_index + len - 1) % len;
        }
    }

    /// Run the highlighted row action and close the popup.
    pub fn run_selected_action(&mut self) {
        let outcome = self.selected_shipment().and_then(|shipment| {
            actions_for(shipment)
                .get(self.action_index)
                .map(|action| action.outcome(shipment))
        });
        self.close_actions();
        if let Some(message) = outcome {
            info!(outcome = %message, "row action");
            self.set_status(message);
        }
    }

    /// Set status message.
    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }
}
