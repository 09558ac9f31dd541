//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::create_shipment::{CreateShipmentInput, CreateShipmentOutput};
use crate::domain::entity::shipment::Shipment;
use crate::domain::value_object::{package_spec::PackageSpec, postal_code::PostalCode};
use crate::error::{ShippingError, ShippingResult};

// ============================================================================
// Create Shipment
// ============================================================================

/// Create shipment request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShipmentRequest {
    pub origin_postal_code: String,
    pub destination_postal_code: String,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub width_cm: f64,
    pub length_cm: f64,
}

impl CreateShipmentRequest {
    /// Structural validation: postal code shape and positive measurements.
    /// Whether the codes exist is decided later, by the address service.
    pub fn into_input(self) -> ShippingResult<CreateShipmentInput> {
        let origin = PostalCode::parse(&self.origin_postal_code)
            .map_err(|e| ShippingError::Validation(e.message().to_string()))?;
        let destination = PostalCode::parse(&self.destination_postal_code)
            .map_err(|e| ShippingError::Validation(e.message().to_string()))?;
        let package = PackageSpec::new(self.weight_kg, self.height_cm, self.width_cm, self.length_cm)
            .map_err(|e| ShippingError::Validation(e.message().to_string()))?;

        Ok(CreateShipmentInput {
            origin,
            destination,
            package,
        })
    }
}

/// Confirmation returned for a created shipment
///
/// Echoes the request plus the quoted price and lead time. Internal
/// identifiers are deliberately absent.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentResponse {
    pub origin_postal_code: String,
    pub destination_postal_code: String,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub width_cm: f64,
    pub length_cm: f64,
    pub price: f64,
    pub lead_time_days: i32,
}

impl From<CreateShipmentOutput> for ShipmentResponse {
    fn from(output: CreateShipmentOutput) -> Self {
        Self {
            origin_postal_code: output.origin.into_inner(),
            destination_postal_code: output.destination.into_inner(),
            weight_kg: output.package.weight_kg,
            height_cm: output.package.height_cm,
            width_cm: output.package.width_cm,
            length_cm: output.package.length_cm,
            price: output.price,
            lead_time_days: output.lead_time_days,
        }
    }
}

// ============================================================================
// List Shipments
// ============================================================================

/// One shipment in the caller's listing
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentSummary {
    pub origin_postal_code: String,
    pub destination_postal_code: String,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub width_cm: f64,
    pub length_cm: f64,
    pub price: f64,
    pub lead_time_days: i32,
    pub created_at: DateTime<Utc>,
}

impl From<&Shipment> for ShipmentSummary {
    fn from(shipment: &Shipment) -> Self {
        Self {
            origin_postal_code: shipment.origin.as_str().to_string(),
            destination_postal_code: shipment.destination.as_str().to_string(),
            weight_kg: shipment.package.weight_kg,
            height_cm: shipment.package.height_cm,
            width_cm: shipment.package.width_cm,
            length_cm: shipment.package.length_cm,
            price: shipment.price,
            lead_time_days: shipment.lead_time_days,
            created_at: shipment.created_at,
        }
    }
}

/// List shipments response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentListResponse {
    pub shipments: Vec<ShipmentSummary>,
}
