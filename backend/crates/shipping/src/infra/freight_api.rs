//! Freight Service Adapter
//!
//! HTTP implementation of [`FreightGateway`]. An accepted quote must
//! carry both price and lead time; anything else from the wire is an
//! upstream error.

use serde::{Deserialize, Serialize};

use crate::domain::gateway::{FreightGateway, FreightQuote, QuoteOutcome};
use crate::domain::value_object::{package_spec::PackageSpec, postal_code::PostalCode};
use crate::error::{ShippingError, ShippingResult};

/// HTTP-backed freight pricing service
#[derive(Clone)]
pub struct HttpFreightGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpFreightGateway {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

/// Wire format of a quote request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QuoteRequestBody<'a> {
    origin_postal_code: &'a str,
    destination_postal_code: &'a str,
    weight_kg: f64,
    height_cm: f64,
    width_cm: f64,
    length_cm: f64,
}

/// Wire format of the freight service answer
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuoteResponseBody {
    accepted: bool,
    reason: Option<String>,
    price: Option<f64>,
    lead_time_days: Option<i32>,
}

impl FreightGateway for HttpFreightGateway {
    async fn quote(
        &self,
        origin: &PostalCode,
        destination: &PostalCode,
        package: &PackageSpec,
    ) -> ShippingResult<QuoteOutcome> {
        let url = format!("{}/v1/quotes", self.base_url);

        let body = QuoteRequestBody {
            origin_postal_code: origin.as_str(),
            destination_postal_code: destination.as_str(),
            weight_kg: package.weight_kg,
            height_cm: package.height_cm,
            width_cm: package.width_cm,
            length_cm: package.length_cm,
        };

        let response = self.client.post(&url).json(&body).send().await.map_err(|e| {
            ShippingError::Upstream(format!("Freight service request failed: {e}"))
        })?;

        if !response.status().is_success() {
            return Err(ShippingError::Upstream(format!(
                "Freight service returned {}",
                response.status()
            )));
        }

        let body: QuoteResponseBody = response.json().await.map_err(|e| {
            ShippingError::Upstream(format!("Freight service sent an invalid body: {e}"))
        })?;

        if !body.accepted {
            return Ok(QuoteOutcome::Rejected { reason: body.reason });
        }

        match (body.price, body.lead_time_days) {
            (Some(price), Some(lead_time_days)) => Ok(QuoteOutcome::Accepted(FreightQuote {
                price,
                lead_time_days,
            })),
            _ => Err(ShippingError::Upstream(
                "Freight service accepted the quote without price or lead time".to_string(),
            )),
        }
    }
}
