//! Authenticated-principal utilities
//!
//! Common functions for reading the caller identity that the fronting
//! auth proxy injects into each request.

use axum::http::HeaderMap;
use uuid::Uuid;

/// Header carrying the authenticated subject, set by the auth proxy.
///
/// The proxy strips any client-supplied value before forwarding, so a
/// present header is trusted to identify an authenticated caller.
pub const PRINCIPAL_HEADER: &str = "x-auth-user";

/// Authenticated principal resolved from request headers
///
/// The service itself never authenticates; it only reads the identity
/// the transport layer established.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal {
    /// Unique identifier of the authenticated caller
    pub user_id: Uuid,
}

impl Principal {
    /// Create a principal from a known user ID
    pub fn new(user_id: Uuid) -> Self {
        Self { user_id }
    }
}

/// Error when extracting the principal
#[derive(Debug, Clone, thiserror::Error)]
pub enum PrincipalError {
    #[error("Missing required header: {0}")]
    MissingHeader(String),

    #[error("Malformed principal header: {0}")]
    Malformed(String),
}

/// Extract the authenticated principal from request headers
///
/// ## Arguments
/// * `headers` - HTTP request headers
///
/// ## Returns
/// * `Ok(Principal)` - Successfully resolved caller identity
/// * `Err(PrincipalError)` - Header missing or not a valid UUID
pub fn extract_principal(headers: &HeaderMap) -> Result<Principal, PrincipalError> {
    let raw = headers
        .get(PRINCIPAL_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| PrincipalError::MissingHeader(PRINCIPAL_HEADER.to_string()))?;

    let user_id = Uuid::parse_str(raw.trim())
        .map_err(|_| PrincipalError::Malformed(raw.to_string()))?;

    Ok(Principal::new(user_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_extract_principal() {
        let mut headers = HeaderMap::new();
        headers.insert(
            PRINCIPAL_HEADER,
            HeaderValue::from_static("5e0d8f2e-7c6a-4f70-9a14-3d2b8a6c1e55"),
        );

        let principal = extract_principal(&headers).unwrap();
        assert_eq!(
            principal.user_id,
            "5e0d8f2e-7c6a-4f70-9a14-3d2b8a6c1e55".parse::<Uuid>().unwrap()
        );
    }

    #[test]
    fn test_extract_principal_missing_header() {
        let headers = HeaderMap::new();
        let result = extract_principal(&headers);
        assert!(matches!(result, Err(PrincipalError::MissingHeader(_))));
    }

    #[test]
    fn test_extract_principal_malformed() {
        let mut headers = HeaderMap::new();
        headers.insert(PRINCIPAL_HEADER, HeaderValue::from_static("not-a-uuid"));

        let result = extract_principal(&headers);
        assert!(matches!(result, Err(PrincipalError::Malformed(_))));
    }
}
