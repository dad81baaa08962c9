//! Shipment filtering by search text and category tab.
//!
//! Both predicates run in a single stable pass: the output keeps the source
//! order and never re-sorts.

use crate::shipments::{Shipment, ShipmentStatus};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Category tab over status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tab {
    /// Passthrough, shows every status
    #[default]
    All,
    /// Status code 1
    Registered,
    /// Status code 2
    InTransit,
    /// Status code 3
    OutForDelivery,
    /// Status code 4
    Delivered,
}

/// Error returned when parsing an unknown tab id.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown tab '{0}' (expected one of: all, registered, in-transit, out-for-delivery, delivered)")]
pub struct UnknownTab(pub String);

impl Tab {
    /// Tabs in display order.
    pub const ALL: [Tab; 5] = [
        Tab::All,
        Tab::Registered,
        Tab::InTransit,
        Tab::OutForDelivery,
        Tab::Delivered,
    ];

    /// Kebab-case identifier, e.g. `out-for-delivery`.
    pub fn id(self) -> &'static str {
        match self {
            Tab::All => "all",
            Tab::Registered => "registered",
            Tab::InTransit => "in-transit",
            Tab::OutForDelivery => "out-for-delivery",
            Tab::Delivered => "delivered",
        }
    }

    /// Tab header label.
    pub fn label(self) -> &'static str {
        match self {
            Tab::All => "All Shipments",
            Tab::Registered => "Registered",
            Tab::InTransit => "In Transit",
            Tab::OutForDelivery => "Out for Delivery",
            Tab::Delivered => "Delivered",
        }
    }

    /// Status selected by this tab, or None for `All`.
    pub fn status(self) -> Option<ShipmentStatus> {
        match self {
            Tab::All => None,
            Tab::Registered => Some(ShipmentStatus::Registered),
            Tab::InTransit => Some(ShipmentStatus::InTransit),
            Tab::OutForDelivery => Some(ShipmentStatus::OutForDelivery),
            Tab::Delivered => Some(ShipmentStatus::Delivered),
        }
    }

    /// Position in [`Tab::ALL`].
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|tab| *tab == self)
            .unwrap_or_default()
    }

    /// Next tab, wrapping to the first.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous tab, wrapping to the last.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Tab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.id() == s)
            .ok_or_else(|| UnknownTab(s.to_string()))
    }
}

/// Whether a shipment passes the search predicate.
///
/// # Details
/// An empty term matches everything. Otherwise the id or the description
/// must contain the term, ignoring case.
pub fn matches_search(shipment: &Shipment, search_term: &str) -> bool {
    if search_term.is_empty() {
        return true;
    }
    let needle = search_term.to_lowercase();
    shipment.id.to_lowercase().contains(&needle)
        || shipment.description.to_lowercase().contains(&needle)
}

/// Whether a shipment passes the tab predicate.
pub fn matches_tab(shipment: &Shipment, tab: Tab) -> bool {
    tab.status()
        .is_none_or(|status| shipment.status_code == status.code())
}

/// Derive the visible shipments for a search term and tab.
///
/// # Arguments
/// * `shipments` - Full source sequence
/// * `search_term` - Free-text filter over id and description
/// * `tab` - Category tab
///
/// # Returns
/// * `Vec<&Shipment>` - Shipments passing both predicates, in source order
pub fn filter_shipments<'a>(
    shipments: &'a [Shipment],
    search_term: &str,
    tab: Tab,
) -> Vec<&'a Shipment> {
    shipments
        .iter()
        .filter(|shipment| matches_search(shipment, search_term) && matches_tab(shipment, tab))
        .collect()
}

/// Message shown instead of an empty table, e.g. `No in transit shipments found`.
pub fn empty_state_message(tab: Tab) -> String {
    format!("No {} shipments found", tab.id().replace('-', " "))
}
