//! Shipping Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository and collaborator traits
//! - `application/` - Use cases (the shipment-creation pipeline)
//! - `infra/` - Database and upstream service implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Pipeline
//! Creating a shipment runs a fixed, short-circuiting sequence:
//! caller identity → origin postal code → destination postal code →
//! freight quote → durable write → confirmation. The first failing stage
//! terminates the request with a stage-specific error; nothing is written
//! unless every stage succeeded.
//!
//! ## Collaborators
//! Address validation, freight pricing, and storage are injected behind
//! capability traits; the pipeline never retries or caches them.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::ShippingConfig;
pub use error::{ShippingError, ShippingResult};
pub use infra::address_api::HttpAddressValidator;
pub use infra::freight_api::HttpFreightGateway;
pub use infra::postgres::PgShipmentRepository;
pub use presentation::router::shipping_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgShipmentRepository as ShipmentStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}
