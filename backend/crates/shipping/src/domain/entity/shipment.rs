//! Shipment Entity
//!
//! One record per accepted shipment request. Written exactly once by the
//! creation pipeline and never mutated afterwards.

use chrono::{DateTime, Utc};
use kernel::id::{OwnerId, ShipmentId};

use crate::domain::gateway::FreightQuote;
use crate::domain::value_object::{package_spec::PackageSpec, postal_code::PostalCode};

/// Shipment entity
#[derive(Debug, Clone)]
pub struct Shipment {
    /// Internal UUID identifier (never exposed to clients)
    pub shipment_id: ShipmentId,
    /// Authenticated caller that registered the shipment
    pub owner_id: OwnerId,
    /// Sender postal code
    pub origin: PostalCode,
    /// Recipient postal code
    pub destination: PostalCode,
    /// Package weight and dimensions
    pub package: PackageSpec,
    /// Price quoted by the freight service
    pub price: f64,
    /// Delivery lead time quoted by the freight service, in days
    pub lead_time_days: i32,
    /// Assigned at the moment the quote is accepted
    pub created_at: DateTime<Utc>,
}

impl Shipment {
    /// Create a shipment from an accepted quote
    pub fn new(
        owner_id: OwnerId,
        origin: PostalCode,
        destination: PostalCode,
        package: PackageSpec,
        quote: &FreightQuote,
    ) -> Self {
        Self {
            shipment_id: ShipmentId::new(),
            owner_id,
            origin,
            destination,
            package,
            price: quote.price,
            lead_time_days: quote.lead_time_days,
            created_at: Utc::now(),
        }
    }
}
