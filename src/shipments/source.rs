//! Shipment sources.
//!
//! The "list shipments" read interface and its implementations: the built-in
//! demo records and a local JSON file.

use crate::shipments::models::{Shipment, ShipmentStatus};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors raised while listing shipments.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The shipments file could not be read.
    #[error("failed to read shipments file {}", .path.display())]
    Read {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// The shipments file is not a JSON array of shipment records.
    #[error("failed to parse shipments file {}", .path.display())]
    Parse {
        /// File that failed
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}

/// Read interface returning an ordered sequence of shipments.
#[allow(async_fn_in_trait)]
pub trait ShipmentSource {
    /// Short description used in log lines and status messages.
    fn describe(&self) -> String;

    /// List all shipments, in source order.
    async fn list_shipments(&self) -> Result<Vec<Shipment>, StoreError>;
}

/// Built-in demo records.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoSource;

impl ShipmentSource for DemoSource {
    fn describe(&self) -> String {
        "built-in demo data".to_string()
    }

    async fn list_shipments(&self) -> Result<Vec<Shipment>, StoreError> {
        Ok(demo_shipments())
    }
}

/// Shipments read from a JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Create a source reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ShipmentSource for JsonFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn list_shipments(&self) -> Result<Vec<Shipment>, StoreError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| StoreError::Read {
                path: self.path.clone(),
                source,
            })?;

        let shipments: Vec<Shipment> =
            serde_json::from_str(&content).map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            })?;

        debug!(path = %self.path.display(), count = shipments.len(), "parsed shipments file");
        Ok(shipments.into_iter().map(fill_status_label).collect())
    }
}

/// Fill a missing label from the lookup table and report disagreeing ones.
///
/// Mismatches are data-entry problems, so the stored label is kept.
fn fill_status_label(mut shipment: Shipment) -> Shipment {
    if shipment.status.is_empty() {
        if let Some(status) = shipment.known_status() {
            shipment.status = status.label().to_string();
        }
    } else if !shipment.status_matches_code() {
        warn!(
            id = %shipment.id,
            status = %shipment.status,
            status_code = shipment.status_code,
            "status label does not match status code"
        );
    }
    shipment
}

/// The four demo shipments shown when no data file is configured.
pub fn demo_shipments() -> Vec<Shipment> {
    vec![
        Shipment::new(
            "DPC-1234-5678-90",
            "Electronics Package",
            "0x1234...5678",
            "0xabcd...ef01",
            "2023-06-05T14:30:00Z",
            ShipmentStatus::Delivered,
        ),
        Shipment::new(
            "DPC-2345-6789-01",
            "Clothing Items",
            "0x1234...5678",
            "0xbcde...f012",
            "2023-06-08T09:15:00Z",
            ShipmentStatus::InTransit,
        ),
        Shipment::new(
            "DPC-3456-7890-12",
            "Books and Stationery",
            "0x1234...5678",
            "0xcdef...0123",
            "2023-06-09T11:45:00Z",
            ShipmentStatus::OutForDelivery,
        ),
        Shipment::new(
            "DPC-4567-8901-23",
            "Fragile Glassware",
            "0x1234...5678",
            "0xdefg...1234",
            "2023-06-10T10:30:00Z",
            ShipmentStatus::Registered,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_demo_shipments_order() {
        let codes: Vec<i32> = demo_shipments().iter().map(|s| s.status_code).collect();
        assert_eq!(codes, vec![4, 2, 3, 1]);
        assert!(demo_shipments().iter().all(Shipment::status_matches_code));
    }

    #[tokio::test]
    async fn test_demo_source_lists_demo_data() {
        let shipments = DemoSource.list_shipments().await.unwrap();
        assert_eq!(shipments, demo_shipments());
    }

    #[tokio::test]
    async fn test_json_source_fills_missing_status() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("shipments.json");
        fs::write(
            &path,
            r#"[
                {"id": "A-1", "description": "Tea", "sender": "s", "receiver": "r",
                 "date": "2023-01-02T00:00:00Z", "statusCode": 3},
                {"id": "A-2", "description": "Coffee", "sender": "s", "receiver": "r",
                 "status": "Delivered", "date": "2023-01-03T00:00:00Z", "statusCode": 4}
            ]"#,
        )
        .unwrap();

        let source = JsonFileSource::new(&path);
        let shipments = source.list_shipments().await.unwrap();
        assert_eq!(shipments.len(), 2);
        assert_eq!(shipments[0].id, "A-1");
        assert_eq!(shipments[0].status, "Out for Delivery");
        assert_eq!(shipments[1].status, "Delivered");
    }

    #[tokio::test]
    async fn test_json_source_keeps_mismatched_label() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("shipments.json");
        fs::write(
            &path,
            r#"[{"id": "B-1", "description": "Desk", "sender": "s", "receiver": "r",
                 "status": "Delivered", "date": "2023-01-02", "statusCode": 1}]"#,
        )
        .unwrap();

        let shipments = JsonFileSource::new(&path).list_shipments().await.unwrap();
        assert_eq!(shipments[0].status, "Delivered");
        assert_eq!(shipments[0].status_code, 1);
    }

    #[tokio::test]
    async fn test_json_source_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let source = JsonFileSource::new(temp_dir.path().join("nope.json"));
        let err = source.list_shipments().await.unwrap_err();
        assert!(matches!(err, StoreError::Read { .. }));
    }

    #[tokio::test]
    async fn test_json_source_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("shipments.json");
        fs::write(&path, r#"{"not": "an array"}"#).unwrap();

        let err = JsonFileSource::new(&path).list_shipments().await.unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));
        assert!(err.to_string().contains("shipments.json"));
    }
}
