//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod create_shipment;
pub mod list_shipments;

// Re-exports
pub use config::ShippingConfig;
pub use create_shipment::{CreateShipmentInput, CreateShipmentOutput, CreateShipmentUseCase};
pub use list_shipments::ListShipmentsUseCase;
