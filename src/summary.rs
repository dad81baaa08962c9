//! Summary counters over the full shipment sequence.

use crate::shipments::{Shipment, ShipmentStatus};

/// Counts shown in the summary cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    /// All shipments
    pub total: usize,
    /// Status code 2
    pub in_transit: usize,
    /// Status code 3
    pub out_for_delivery: usize,
    /// Status code 4
    pub delivered: usize,
}

/// One summary card: title, count and caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryCard {
    /// Card heading
    pub title: &'static str,
    /// Count shown in bold
    pub value: usize,
    /// Caption under the count
    pub caption: &'static str,
}

impl Summary {
    /// Count shipments by status. Unfiltered; search and tab do not apply.
    pub fn from_shipments(shipments: &[Shipment]) -> Self {
        let count = |status: ShipmentStatus| {
            shipments
                .iter()
                .filter(|shipment| shipment.status_code == status.code())
                .count()
        };
        Self {
            total: shipments.len(),
            in_transit: count(ShipmentStatus::InTransit),
            out_for_delivery: count(ShipmentStatus::OutForDelivery),
            delivered: count(ShipmentStatus::Delivered),
        }
    }

    /// Cards in display order.
    pub fn cards(&self) -> [SummaryCard; 4] {
        [
            SummaryCard {
                title: "Total Shipments",
                value: self.total,
                caption: "All time",
            },
            SummaryCard {
                title: "In Transit",
                value: self.in_transit,
                caption: "Currently moving",
            },
            SummaryCard {
                title: "Out for Delivery",
                value: self.out_for_delivery,
                caption: "Arriving soon",
            },
            SummaryCard {
                title: "Delivered",
                value: self.delivered,
                caption: "Successfully completed",
            },
        ]
    }
}
