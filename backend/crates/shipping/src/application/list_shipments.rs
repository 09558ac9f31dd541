//! List Shipments Use Case
//!
//! Returns the caller's own shipments, newest first.

use std::sync::Arc;

use kernel::id::OwnerId;

use crate::domain::entity::shipment::Shipment;
use crate::domain::repository::ShipmentRepository;
use crate::error::{ShippingError, ShippingResult};

/// List shipments use case
pub struct ListShipmentsUseCase<R>
where
    R: ShipmentRepository,
{
    repo: Arc<R>,
}

impl<R> ListShipmentsUseCase<R>
where
    R: ShipmentRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, principal: Option<OwnerId>) -> ShippingResult<Vec<Shipment>> {
        let owner_id = principal.ok_or(ShippingError::Unauthenticated)?;
        self.repo.find_by_owner(&owner_id).await
    }
}
