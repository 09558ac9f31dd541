//! Infrastructure Layer
//!
//! Database implementations and upstream service adapters.

pub mod address_api;
pub mod freight_api;
pub mod postgres;

pub use address_api::HttpAddressValidator;
pub use freight_api::HttpFreightGateway;
pub use postgres::PgShipmentRepository;
