//! Outbound HTTP client construction
//!
//! One place to build the `reqwest` client used for upstream service
//! calls, so every adapter gets the same timeouts and User-Agent.

use std::time::Duration;

/// User-Agent sent on every upstream call
pub const SERVICE_USER_AGENT: &str = concat!("shipping-api/", env!("CARGO_PKG_VERSION"));

/// Connect timeout applied independently of the request timeout
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Build the shared outbound HTTP client
///
/// ## Arguments
/// * `timeout` - Total per-request timeout (connect timeout is fixed)
///
/// ## Returns
/// A configured `reqwest::Client`, or the builder error
pub fn build_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(SERVICE_USER_AGENT)
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(timeout)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_client() {
        let client = build_client(Duration::from_secs(10));
        assert!(client.is_ok());
    }

    #[test]
    fn test_user_agent_carries_version() {
        assert!(SERVICE_USER_AGENT.starts_with("shipping-api/"));
    }
}
