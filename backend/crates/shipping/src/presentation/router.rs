//! Shipping Router

use axum::{Router, routing::post};
use std::sync::Arc;

use crate::domain::gateway::{AddressValidator, FreightGateway};
use crate::domain::repository::ShipmentRepository;
use crate::infra::address_api::HttpAddressValidator;
use crate::infra::freight_api::HttpFreightGateway;
use crate::infra::postgres::PgShipmentRepository;
use crate::presentation::handlers::{self, ShippingAppState};

/// Create the shipping router with the production collaborators
pub fn shipping_router(
    repo: PgShipmentRepository,
    validator: HttpAddressValidator,
    gateway: HttpFreightGateway,
) -> Router {
    shipping_router_generic(repo, validator, gateway)
}

/// Create a generic shipping router for any collaborator implementations
pub fn shipping_router_generic<V, G, R>(repo: R, validator: V, gateway: G) -> Router
where
    V: AddressValidator + Clone + Send + Sync + 'static,
    G: FreightGateway + Clone + Send + Sync + 'static,
    R: ShipmentRepository + Clone + Send + Sync + 'static,
{
    let state = ShippingAppState {
        validator: Arc::new(validator),
        gateway: Arc::new(gateway),
        repo: Arc::new(repo),
    };

    Router::new()
        .route(
            "/",
            post(handlers::create_shipment::<V, G, R>).get(handlers::list_shipments::<V, G, R>),
        )
        .with_state(state)
}
