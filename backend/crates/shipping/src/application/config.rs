//! Application Configuration
//!
//! Configuration for the shipping application layer. Environment reading
//! stays in the api binary; this struct only holds resolved values.

use std::time::Duration;

/// Shipping application configuration
#[derive(Debug, Clone)]
pub struct ShippingConfig {
    /// Base URL of the address validation service
    pub address_api_base_url: String,
    /// Base URL of the freight pricing service
    pub freight_api_base_url: String,
    /// Per-request timeout for both upstream services
    pub upstream_timeout: Duration,
}

impl Default for ShippingConfig {
    fn default() -> Self {
        Self {
            address_api_base_url: "http://localhost:9101".to_string(),
            freight_api_base_url: "http://localhost:9102".to_string(),
            upstream_timeout: Duration::from_secs(10),
        }
    }
}

impl ShippingConfig {
    /// Get the upstream timeout in milliseconds
    pub fn upstream_timeout_ms(&self) -> u64 {
        self.upstream_timeout.as_millis() as u64
    }
}
