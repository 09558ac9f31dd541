//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use std::sync::Arc;

use kernel::id::OwnerId;
use platform::principal::extract_principal;

use crate::application::{CreateShipmentUseCase, ListShipmentsUseCase};
use crate::domain::gateway::{AddressValidator, FreightGateway};
use crate::domain::repository::ShipmentRepository;
use crate::error::ShippingResult;
use crate::presentation::dto::{
    CreateShipmentRequest, ShipmentListResponse, ShipmentResponse, ShipmentSummary,
};

/// Shared state for shipping handlers
#[derive(Clone)]
pub struct ShippingAppState<V, G, R>
where
    V: AddressValidator + Clone + Send + Sync + 'static,
    G: FreightGateway + Clone + Send + Sync + 'static,
    R: ShipmentRepository + Clone + Send + Sync + 'static,
{
    pub validator: Arc<V>,
    pub gateway: Arc<G>,
    pub repo: Arc<R>,
}

/// Resolve the caller identity the auth proxy injected, if any.
/// The pipeline itself decides what an absent identity means.
fn resolve_principal(headers: &HeaderMap) -> Option<OwnerId> {
    extract_principal(headers)
        .ok()
        .map(|p| OwnerId::from_uuid(p.user_id))
}

// ============================================================================
// Create Shipment
// ============================================================================

/// POST /api/shipments
pub async fn create_shipment<V, G, R>(
    State(state): State<ShippingAppState<V, G, R>>,
    headers: HeaderMap,
    Json(req): Json<CreateShipmentRequest>,
) -> ShippingResult<Json<ShipmentResponse>>
where
    V: AddressValidator + Clone + Send + Sync + 'static,
    G: FreightGateway + Clone + Send + Sync + 'static,
    R: ShipmentRepository + Clone + Send + Sync + 'static,
{
    let principal = resolve_principal(&headers);

    let input = req.into_input()?;

    let use_case = CreateShipmentUseCase::new(
        state.validator.clone(),
        state.gateway.clone(),
        state.repo.clone(),
    );

    let output = use_case.execute(principal, input).await?;

    Ok(Json(ShipmentResponse::from(output)))
}

// ============================================================================
// List Shipments
// ============================================================================

/// GET /api/shipments
pub async fn list_shipments<V, G, R>(
    State(state): State<ShippingAppState<V, G, R>>,
    headers: HeaderMap,
) -> ShippingResult<Json<ShipmentListResponse>>
where
    V: AddressValidator + Clone + Send + Sync + 'static,
    G: FreightGateway + Clone + Send + Sync + 'static,
    R: ShipmentRepository + Clone + Send + Sync + 'static,
{
    let principal = resolve_principal(&headers);

    let use_case = ListShipmentsUseCase::new(state.repo.clone());

    let shipments = use_case.execute(principal).await?;

    Ok(Json(ShipmentListResponse {
        shipments: shipments.iter().map(ShipmentSummary::from).collect(),
    }))
}
