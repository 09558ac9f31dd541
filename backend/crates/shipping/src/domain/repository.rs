//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::OwnerId;

use crate::domain::entity::shipment::Shipment;
use crate::error::ShippingResult;

/// Shipment repository trait
#[trait_variant::make(ShipmentRepository: Send)]
pub trait LocalShipmentRepository {
    /// Persist a new shipment
    async fn create(&self, shipment: &Shipment) -> ShippingResult<()>;

    /// All shipments registered by an owner, newest first
    async fn find_by_owner(&self, owner_id: &OwnerId) -> ShippingResult<Vec<Shipment>>;
}
