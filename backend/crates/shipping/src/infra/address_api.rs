//! Address Service Adapter
//!
//! HTTP implementation of [`AddressValidator`]. Only the service's own
//! verdict rejects a postal code; transport and decoding failures are
//! upstream errors, never rejections.

use serde::Deserialize;

use crate::domain::gateway::{AddressCheck, AddressValidator};
use crate::domain::value_object::postal_code::PostalCode;
use crate::error::{ShippingError, ShippingResult};

/// HTTP-backed address validation service
#[derive(Clone)]
pub struct HttpAddressValidator {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAddressValidator {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

/// Wire format of the address service verdict
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PostalCodeCheckBody {
    valid: bool,
    reason: Option<String>,
}

impl AddressValidator for HttpAddressValidator {
    async fn check_postal_code(&self, code: &PostalCode) -> ShippingResult<AddressCheck> {
        let url = format!("{}/v1/postal-codes/{}", self.base_url, code);

        let response = self.client.get(&url).send().await.map_err(|e| {
            ShippingError::Upstream(format!("Address service request failed: {e}"))
        })?;

        if !response.status().is_success() {
            return Err(ShippingError::Upstream(format!(
                "Address service returned {}",
                response.status()
            )));
        }

        let body: PostalCodeCheckBody = response.json().await.map_err(|e| {
            ShippingError::Upstream(format!("Address service sent an invalid body: {e}"))
        })?;

        Ok(if body.valid {
            AddressCheck::accept()
        } else {
            AddressCheck::reject(body.reason)
        })
    }
}
