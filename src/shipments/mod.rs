//! Shipment data: records, status lookup, and sources.

pub mod actions;
pub mod models;
pub mod source;

pub use actions::{ShipmentAction, actions_for};
pub use models::{Shipment, ShipmentStatus, StatusGlyph};
pub use source::{DemoSource, JsonFileSource, ShipmentSource};
