//! Shipping Error Types
//!
//! This module provides shipping-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Shipping-specific result type alias
pub type ShippingResult<T> = Result<T, ShippingError>;

/// Request field names as they appear on the wire
pub const FIELD_ORIGIN: &str = "originPostalCode";
pub const FIELD_DESTINATION: &str = "destinationPostalCode";

/// Fallback messages used when a collaborator rejects without explanatory
/// text. A rejection must never reach the caller with an empty message.
pub const DEFAULT_ORIGIN_REJECTED: &str = "Origin postal code is invalid.";
pub const DEFAULT_DESTINATION_REJECTED: &str = "Destination postal code is invalid.";
pub const DEFAULT_QUOTE_REJECTED: &str = "Freight quote is currently unavailable.";

/// Shipping-specific error variants
#[derive(Debug, Error)]
pub enum ShippingError {
    /// No authenticated caller identity reached the pipeline
    #[error("Caller identity is missing")]
    Unauthenticated,

    /// A postal code was rejected by the address service
    #[error("{message}")]
    InvalidPostalCode {
        /// `originPostalCode` or `destinationPostalCode`
        field: &'static str,
        message: String,
    },

    /// The freight service declined to quote the request
    #[error("{message}")]
    QuoteUnavailable { message: String },

    /// Structurally malformed request data
    #[error("Invalid request: {0}")]
    Validation(String),

    /// An upstream service could not be reached or answered garbage
    #[error("Upstream service error: {0}")]
    Upstream(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Collaborator reasons pass through only when non-empty
fn reason_or(reason: Option<String>, fallback: &'static str) -> String {
    match reason {
        Some(r) if !r.trim().is_empty() => r,
        _ => fallback.to_string(),
    }
}

impl ShippingError {
    /// Origin postal code rejected by the address service
    pub fn origin_rejected(reason: Option<String>) -> Self {
        ShippingError::InvalidPostalCode {
            field: FIELD_ORIGIN,
            message: reason_or(reason, DEFAULT_ORIGIN_REJECTED),
        }
    }

    /// Destination postal code rejected by the address service
    pub fn destination_rejected(reason: Option<String>) -> Self {
        ShippingError::InvalidPostalCode {
            field: FIELD_DESTINATION,
            message: reason_or(reason, DEFAULT_DESTINATION_REJECTED),
        }
    }

    /// Quote request rejected by the freight service
    pub fn quote_rejected(reason: Option<String>) -> Self {
        ShippingError::QuoteUnavailable {
            message: reason_or(reason, DEFAULT_QUOTE_REJECTED),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ShippingError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ShippingError::InvalidPostalCode { .. } | ShippingError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            ShippingError::QuoteUnavailable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ShippingError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ShippingError::Database(_) | ShippingError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ShippingError::Unauthenticated => ErrorKind::Unauthorized,
            ShippingError::InvalidPostalCode { .. } | ShippingError::Validation(_) => {
                ErrorKind::BadRequest
            }
            ShippingError::QuoteUnavailable { .. } => ErrorKind::UnprocessableEntity,
            ShippingError::Upstream(_) => ErrorKind::BadGateway,
            ShippingError::Database(_) | ShippingError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            ShippingError::InvalidPostalCode { field, message } => {
                AppError::new(self.kind(), message.clone()).with_field(*field)
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            ShippingError::Database(e) => {
                tracing::error!(error = %e, "Shipping database error");
            }
            ShippingError::Upstream(msg) => {
                tracing::error!(message = %msg, "Upstream service failure");
            }
            ShippingError::Internal(msg) => {
                tracing::error!(message = %msg, "Shipping internal error");
            }
            ShippingError::Unauthenticated => {
                tracing::warn!("Shipment request without authenticated principal");
            }
            _ => {
                tracing::debug!(error = %self, "Shipping error");
            }
        }
    }
}

impl IntoResponse for ShippingError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_reason_falls_back() {
        let err = ShippingError::origin_rejected(Some("   ".to_string()));
        match err {
            ShippingError::InvalidPostalCode { field, message } => {
                assert_eq!(field, FIELD_ORIGIN);
                assert_eq!(message, DEFAULT_ORIGIN_REJECTED);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_collaborator_reason_passes_through() {
        let err = ShippingError::destination_rejected(Some("CEP inexistente".to_string()));
        match err {
            ShippingError::InvalidPostalCode { field, message } => {
                assert_eq!(field, FIELD_DESTINATION);
                assert_eq!(message, "CEP inexistente");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_app_error_carries_field() {
        let app = ShippingError::origin_rejected(None).to_app_error();
        assert_eq!(app.field(), Some(FIELD_ORIGIN));
        assert_eq!(app.status_code(), 400);
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ShippingError::Unauthenticated.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ShippingError::quote_rejected(None).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ShippingError::Upstream("down".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
    }
}
