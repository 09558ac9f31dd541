//! Presentation Layer
//!
//! HTTP handlers, DTOs, and router.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::ShippingAppState;
pub use router::{shipping_router, shipping_router_generic};
