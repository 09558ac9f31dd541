//! Outbound Collaborator Contracts
//!
//! Interfaces for the external services the shipment pipeline depends on.
//! Implementations are in the infrastructure layer; tests substitute stubs.

use crate::domain::value_object::{package_spec::PackageSpec, postal_code::PostalCode};
use crate::error::ShippingResult;

/// Verdict of the address service for a single postal code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressCheck {
    pub accepted: bool,
    /// Explanatory text, when the service supplies one
    pub reason: Option<String>,
}

impl AddressCheck {
    /// Postal code accepted
    pub fn accept() -> Self {
        Self {
            accepted: true,
            reason: None,
        }
    }

    /// Postal code rejected, with the service's reason if any
    pub fn reject(reason: Option<String>) -> Self {
        Self {
            accepted: false,
            reason,
        }
    }
}

/// Price and lead time for an accepted quote request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreightQuote {
    pub price: f64,
    pub lead_time_days: i32,
}

/// Outcome of a quote request
///
/// Price and lead time exist only on acceptance; a rejection carries at
/// most an explanatory reason.
#[derive(Debug, Clone, PartialEq)]
pub enum QuoteOutcome {
    Accepted(FreightQuote),
    Rejected { reason: Option<String> },
}

/// Address validation service trait
#[trait_variant::make(AddressValidator: Send)]
pub trait LocalAddressValidator {
    /// Check whether a postal code designates a real delivery area
    async fn check_postal_code(&self, code: &PostalCode) -> ShippingResult<AddressCheck>;
}

/// Freight pricing service trait
#[trait_variant::make(FreightGateway: Send)]
pub trait LocalFreightGateway {
    /// Request a price and lead time for the given route and package
    async fn quote(
        &self,
        origin: &PostalCode,
        destination: &PostalCode,
        package: &PackageSpec,
    ) -> ShippingResult<QuoteOutcome>;
}
