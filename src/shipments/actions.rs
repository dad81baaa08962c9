//! Per-shipment row actions.

use crate::shipments::models::{Shipment, ShipmentStatus};

/// Action offered for a single table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipmentAction {
    /// Open the tracking page for the shipment
    ViewDetails,
    /// Delivered shipments only
    ViewProofOfDelivery,
    /// Shipments that are not delivered yet
    UpdateStatus,
    /// Show the on-chain record
    ViewOnBlockchain,
}

impl ShipmentAction {
    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            ShipmentAction::ViewDetails => "View Details",
            ShipmentAction::ViewProofOfDelivery => "View Proof of Delivery",
            ShipmentAction::UpdateStatus => "Update Status",
            ShipmentAction::ViewOnBlockchain => "View on Blockchain",
        }
    }

    /// Status line reported after choosing this action for `shipment`.
    ///
    /// # Details
    /// There is no backend, so every action only reports what it would open.
    pub fn outcome(self, shipment: &Shipment) -> String {
        match self {
            ShipmentAction::ViewDetails => format!("Navigate: {}", detail_route(&shipment.id)),
            other => format!("{}: {}", other.label(), shipment.id),
        }
    }
}

/// Actions available for a shipment, in menu order.
pub fn actions_for(shipment: &Shipment) -> Vec<ShipmentAction> {
    let middle = if shipment.known_status() == Some(ShipmentStatus::Delivered) {
        ShipmentAction::ViewProofOfDelivery
    } else {
        ShipmentAction::UpdateStatus
    };
    vec![ShipmentAction::ViewDetails, middle, ShipmentAction::ViewOnBlockchain]
}

/// Client-side route of the shipment detail page.
pub fn detail_route(id: &str) -> String {
    format!("/track?id={id}")
}
