//! Create Shipment Use Case
//!
//! Registers a new shipment: caller identity, origin and destination
//! postal codes, freight quote, then a single durable write. The stages
//! run strictly in this order and the first failure terminates the
//! request; nothing is persisted unless every stage succeeded.

use std::sync::Arc;

use kernel::id::OwnerId;

use crate::domain::entity::shipment::Shipment;
use crate::domain::gateway::{AddressValidator, FreightGateway, QuoteOutcome};
use crate::domain::repository::ShipmentRepository;
use crate::domain::value_object::{package_spec::PackageSpec, postal_code::PostalCode};
use crate::error::{ShippingError, ShippingResult};

/// Create shipment input
///
/// Structurally valid by construction; semantic checks (do these postal
/// codes exist, will anyone carry this package) belong to the pipeline.
#[derive(Debug, Clone)]
pub struct CreateShipmentInput {
    pub origin: PostalCode,
    pub destination: PostalCode,
    pub package: PackageSpec,
}

/// Create shipment output
///
/// Echoes the request fields plus the accepted quote, taken from the
/// entity that was just written. Internal identifiers stay internal.
#[derive(Debug, Clone)]
pub struct CreateShipmentOutput {
    pub origin: PostalCode,
    pub destination: PostalCode,
    pub package: PackageSpec,
    pub price: f64,
    pub lead_time_days: i32,
}

impl From<&Shipment> for CreateShipmentOutput {
    fn from(shipment: &Shipment) -> Self {
        Self {
            origin: shipment.origin.clone(),
            destination: shipment.destination.clone(),
            package: shipment.package,
            price: shipment.price,
            lead_time_days: shipment.lead_time_days,
        }
    }
}

/// Create shipment use case
pub struct CreateShipmentUseCase<V, G, R>
where
    V: AddressValidator,
    G: FreightGateway,
    R: ShipmentRepository,
{
    validator: Arc<V>,
    gateway: Arc<G>,
    repo: Arc<R>,
}

impl<V, G, R> CreateShipmentUseCase<V, G, R>
where
    V: AddressValidator,
    G: FreightGateway,
    R: ShipmentRepository,
{
    pub fn new(validator: Arc<V>, gateway: Arc<G>, repo: Arc<R>) -> Self {
        Self {
            validator,
            gateway,
            repo,
        }
    }

    /// Run the creation pipeline for one request
    ///
    /// Every stage is attempted at most once; there is no retry, no
    /// caching, and no state shared between invocations.
    pub async fn execute(
        &self,
        principal: Option<OwnerId>,
        input: CreateShipmentInput,
    ) -> ShippingResult<CreateShipmentOutput> {
        // Stage 1: an authenticated caller must exist before anything runs
        let owner_id = principal.ok_or(ShippingError::Unauthenticated)?;

        // Stage 2: origin postal code
        let origin_check = self.validator.check_postal_code(&input.origin).await?;
        if !origin_check.accepted {
            return Err(ShippingError::origin_rejected(origin_check.reason));
        }

        // Stage 3: destination postal code, only after the origin passed
        let destination_check = self.validator.check_postal_code(&input.destination).await?;
        if !destination_check.accepted {
            return Err(ShippingError::destination_rejected(destination_check.reason));
        }

        // Stage 4: freight quote for the validated route
        let quote = match self
            .gateway
            .quote(&input.origin, &input.destination, &input.package)
            .await?
        {
            QuoteOutcome::Accepted(quote) => quote,
            QuoteOutcome::Rejected { reason } => {
                return Err(ShippingError::quote_rejected(reason));
            }
        };

        // Stage 5: the single durable write
        let shipment = Shipment::new(
            owner_id,
            input.origin,
            input.destination,
            input.package,
            &quote,
        );
        self.repo.create(&shipment).await?;

        tracing::info!(
            shipment_id = %shipment.shipment_id,
            owner_id = %shipment.owner_id,
            origin = %shipment.origin,
            destination = %shipment.destination,
            price = shipment.price,
            lead_time_days = shipment.lead_time_days,
            "Shipment created"
        );

        // Stage 6: confirmation built from the values just written
        Ok(CreateShipmentOutput::from(&shipment))
    }
}
