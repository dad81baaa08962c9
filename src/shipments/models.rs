//! Shipment records and the status lookup table.
//!
//! Contains the shipment record, the status code mapping shared by the text
//! label and the status glyph, and the display date formatter.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder shown when a shipment date cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

/// Label shown for status codes outside the lookup table.
pub const UNKNOWN_STATUS: &str = "Unknown";

/// Short display format, e.g. `Jun 5, 2023`.
const DATE_FORMAT: &str = "%b %-d, %Y";

/// Lifecycle stage of a shipment.
///
/// This is the single lookup table for status codes: both the text label and
/// the glyph are derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShipmentStatus {
    /// Code 1
    Registered,
    /// Code 2
    InTransit,
    /// Code 3
    OutForDelivery,
    /// Code 4
    Delivered,
}

impl ShipmentStatus {
    /// All statuses in lifecycle order.
    pub const ALL: [ShipmentStatus; 4] = [
        ShipmentStatus::Registered,
        ShipmentStatus::InTransit,
        ShipmentStatus::OutForDelivery,
        ShipmentStatus::Delivered,
    ];

    /// Look up a status by its integer code.
    ///
    /// # Returns
    /// * `Option<ShipmentStatus>` - Status or None for codes outside 1..=4
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.code() == code)
    }

    /// Integer code of this status.
    pub fn code(self) -> i32 {
        match self {
            ShipmentStatus::Registered => 1,
            ShipmentStatus::InTransit => 2,
            ShipmentStatus::OutForDelivery => 3,
            ShipmentStatus::Delivered => 4,
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            ShipmentStatus::Registered => "Registered",
            ShipmentStatus::InTransit => "In Transit",
            ShipmentStatus::OutForDelivery => "Out for Delivery",
            ShipmentStatus::Delivered => "Delivered",
        }
    }

    /// Display glyph category.
    pub fn glyph(self) -> StatusGlyph {
        match self {
            ShipmentStatus::Registered => StatusGlyph::Pending,
            ShipmentStatus::InTransit => StatusGlyph::InMotion,
            ShipmentStatus::OutForDelivery => StatusGlyph::Alert,
            ShipmentStatus::Delivered => StatusGlyph::Completed,
        }
    }
}

/// Glyph category shown next to a status label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusGlyph {
    /// Waiting to be picked up
    Pending,
    /// Moving between hubs
    InMotion,
    /// Near delivery
    Alert,
    /// Delivered
    Completed,
    /// Fallback for unknown codes
    Package,
}

impl StatusGlyph {
    /// Map any status code to a glyph. Unknown codes degrade to `Package`.
    pub fn for_code(code: i32) -> Self {
        ShipmentStatus::from_code(code).map_or(StatusGlyph::Package, ShipmentStatus::glyph)
    }

    /// Terminal symbol for this glyph.
    pub fn symbol(self) -> &'static str {
        match self {
            StatusGlyph::Pending => "◷",
            StatusGlyph::InMotion => "➜",
            StatusGlyph::Alert => "!",
            StatusGlyph::Completed => "✔",
            StatusGlyph::Package => "□",
        }
    }
}

/// Represents one tracked package.
///
/// Serialized with camelCase keys (`statusCode`). `status` may be omitted in
/// input files, in which case it is filled from the lookup table on load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    /// Tracking identifier
    pub id: String,
    /// Free-text label
    pub description: String,
    /// Sender address (display only)
    pub sender: String,
    /// Receiver address (display only)
    pub receiver: String,
    /// Human-readable status label
    #[serde(default)]
    pub status: String,
    /// ISO timestamp, kept verbatim
    pub date: String,
    /// Integer lifecycle stage
    pub status_code: i32,
}

impl Shipment {
    /// Create a shipment whose label and code come from the same status.
    ///
    /// # Arguments
    /// * `id` - Tracking identifier
    /// * `description` - Free-text label
    /// * `sender` - Sender address
    /// * `receiver` - Receiver address
    /// * `date` - ISO timestamp
    /// * `status` - Lifecycle stage
    ///
    /// # Returns
    /// * `Shipment` - New shipment
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        sender: impl Into<String>,
        receiver: impl Into<String>,
        date: impl Into<String>,
        status: ShipmentStatus,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            sender: sender.into(),
            receiver: receiver.into(),
            status: status.label().to_string(),
            date: date.into(),
            status_code: status.code(),
        }
    }

    /// Status from the lookup table, if the code is known.
    pub fn known_status(&self) -> Option<ShipmentStatus> {
        ShipmentStatus::from_code(self.status_code)
    }

    /// Glyph for this shipment's status code.
    pub fn glyph(&self) -> StatusGlyph {
        StatusGlyph::for_code(self.status_code)
    }

    /// Label to display for this shipment.
    ///
    /// # Details
    /// Uses the stored label, falling back to the lookup table and then to
    /// [`UNKNOWN_STATUS`] when the record carries no label.
    pub fn status_label(&self) -> &str {
        if !self.status.is_empty() {
            return &self.status;
        }
        self.known_status()
            .map_or(UNKNOWN_STATUS, ShipmentStatus::label)
    }

    /// Whether the stored label agrees with the code under the lookup table.
    pub fn status_matches_code(&self) -> bool {
        self.known_status()
            .is_some_and(|status| status.label() == self.status)
    }

    /// Format the shipment date for display.
    ///
    /// # Arguments
    /// * `local_time` - Format in the local zone instead of UTC
    pub fn format_date(&self, local_time: bool) -> String {
        format_date(&self.date, local_time)
    }
}

/// Format an ISO timestamp as a short date such as `Jun 5, 2023`.
///
/// # Arguments
/// * `value` - Timestamp string (RFC 3339, naive date-time, or plain date)
/// * `local_time` - Format in the local zone instead of UTC
///
/// # Returns
/// * `String` - Formatted date, or [`INVALID_DATE`] if the input does not parse
pub fn format_date(value: &str, local_time: bool) -> String {
    let formatted = if local_time {
        format_in_zone(value, &Local)
    } else {
        format_in_zone(value, &Utc)
    };
    formatted.unwrap_or_else(|| INVALID_DATE.to_string())
}

fn format_in_zone<Tz: TimeZone>(value: &str, zone: &Tz) -> Option<String>
where
    Tz::Offset: fmt::Display,
{
    parse_timestamp(value, zone).map(|timestamp| timestamp.format(DATE_FORMAT).to_string())
}

/// Parse a timestamp into `zone`.
///
/// Inputs with an offset are converted; inputs without one are wall-clock
/// times in `zone`.
fn parse_timestamp<Tz: TimeZone>(value: &str, zone: &Tz) -> Option<DateTime<Tz>> {
    let value = value.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.with_timezone(zone));
    }
    let naive = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })?;
    zone.from_local_datetime(&naive).earliest()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_table_roundtrip() {
        for status in ShipmentStatus::ALL {
            assert_eq!(ShipmentStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(ShipmentStatus::from_code(0), None);
        assert_eq!(ShipmentStatus::from_code(5), None);
    }

    #[test]
    fn test_glyph_for_code() {
        assert_eq!(StatusGlyph::for_code(1), StatusGlyph::Pending);
        assert_eq!(StatusGlyph::for_code(2), StatusGlyph::InMotion);
        assert_eq!(StatusGlyph::for_code(3), StatusGlyph::Alert);
        assert_eq!(StatusGlyph::for_code(4), StatusGlyph::Completed);
        assert_eq!(StatusGlyph::for_code(-3), StatusGlyph::Package);
        assert_eq!(StatusGlyph::for_code(99), StatusGlyph::Package);
    }

    #[test]
    fn test_shipment_new_keeps_label_and_code_in_sync() {
        let shipment = Shipment::new(
            "DPC-1",
            "Box",
            "0x1",
            "0x2",
            "2023-06-05T14:30:00Z",
            ShipmentStatus::OutForDelivery,
        );
        assert_eq!(shipment.status, "Out for Delivery");
        assert_eq!(shipment.status_code, 3);
        assert!(shipment.status_matches_code());
    }

    #[test]
    fn test_status_label_fallbacks() {
        let mut shipment = Shipment::new("a", "b", "c", "d", "e", ShipmentStatus::Delivered);
        shipment.status.clear();
        assert_eq!(shipment.status_label(), "Delivered");

        shipment.status_code = 12;
        assert_eq!(shipment.status_label(), UNKNOWN_STATUS);
        assert_eq!(shipment.glyph(), StatusGlyph::Package);
    }

    #[test]
    fn test_format_date_rfc3339() {
        assert_eq!(format_date("2023-06-05T14:30:00Z", false), "Jun 5, 2023");
        assert_eq!(format_date("2023-06-10T10:30:00Z", false), "Jun 10, 2023");
        assert_eq!(format_date("2023-12-31T23:30:00-02:00", false), "Jan 1, 2024");
    }

    #[test]
    fn test_format_date_without_offset() {
        assert_eq!(format_date("2023-06-08T09:15:00", false), "Jun 8, 2023");
        assert_eq!(format_date("2023-06-08T09:15:00.250", false), "Jun 8, 2023");
        assert_eq!(format_date("2023-06-09", false), "Jun 9, 2023");
    }

    #[test]
    fn test_format_date_invalid() {
        assert_eq!(format_date("not a date", false), INVALID_DATE);
        assert_eq!(format_date("", true), INVALID_DATE);
        assert_eq!(format_date("2023-13-40", false), INVALID_DATE);
    }

    #[test]
    fn test_naive_timestamp_is_wall_clock_in_zone() {
        let new_york = chrono::FixedOffset::west_opt(4 * 3600).unwrap();
        assert_eq!(
            format_in_zone("2023-06-08T00:30:00", &new_york).as_deref(),
            Some("Jun 8, 2023")
        );
        assert_eq!(
            format_in_zone("2023-06-08", &new_york).as_deref(),
            Some("Jun 8, 2023")
        );
        assert_eq!(
            format_in_zone("2023-06-08T00:30:00Z", &new_york).as_deref(),
            Some("Jun 7, 2023")
        );
    }

    #[test]
    fn test_format_date_does_not_touch_record() {
        let shipment = Shipment::new("a", "b", "c", "d", "2023-06-05T14:30:00Z", ShipmentStatus::Registered);
        let _ = shipment.format_date(false);
        assert_eq!(shipment.date, "2023-06-05T14:30:00Z");
    }

    #[test]
    fn test_deserialize_camel_case_without_status() {
        let json = r#"{
            "id": "DPC-9",
            "description": "Spare Parts",
            "sender": "0xaaaa",
            "receiver": "0xbbbb",
            "date": "2023-07-01T08:00:00Z",
            "statusCode": 2
        }"#;
        let shipment: Shipment = serde_json::from_str(json).unwrap();
        assert_eq!(shipment.status_code, 2);
        assert!(shipment.status.is_empty());
        assert_eq!(shipment.status_label(), "In Transit");
    }
}
