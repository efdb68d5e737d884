//! Create-order error taxonomy and its HTTP mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use super::types::ErrorResponse;
use crate::payment::GatewayError;

/// Sent when the error carries no message of its own
pub const FALLBACK_ERROR_MESSAGE: &str = "Failed to create order";
/// Sent instead of gateway text when pass-through is disabled
pub const GENERIC_GATEWAY_MESSAGE: &str = "Payment gateway error";

#[derive(Debug, Error)]
pub enum OrderError {
    /// Any verb other than POST
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// Gateway credentials absent or blank; the gateway is never called
    #[error("Payment gateway is not configured: missing {}", .missing.join(", "))]
    Configuration { missing: Vec<&'static str> },

    /// Malformed JSON, wrong field types, non-numeric or overflowing amount
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl OrderError {
    /// Every failure past the method gate is a 500; `kind()` tells them apart.
    pub fn status(&self) -> StatusCode {
        match self {
            OrderError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            OrderError::Configuration { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            OrderError::Validation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            OrderError::Gateway(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable name for logs
    pub fn kind(&self) -> &'static str {
        match self {
            OrderError::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            OrderError::Configuration { .. } => "CONFIGURATION_ERROR",
            OrderError::Validation(_) => "VALIDATION_ERROR",
            OrderError::Gateway(_) => "GATEWAY_ERROR",
        }
    }

    /// Message placed in the client-facing `error` field.
    pub fn client_message(&self, expose_gateway_errors: bool) -> String {
        if let OrderError::Gateway(_) = self
            && !expose_gateway_errors
        {
            return GENERIC_GATEWAY_MESSAGE.to_string();
        }

        let message = self.to_string();
        if message.trim().is_empty() {
            FALLBACK_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }

    pub fn into_client_response(self, expose_gateway_errors: bool) -> Response {
        let body = ErrorResponse::new(self.client_message(expose_gateway_errors));
        (self.status(), Json(body)).into_response()
    }
}

/// Only safe where no gateway text can be involved: gateway errors are
/// always answered with the generic message here. Handlers that hold the
/// `expose_gateway_errors` setting use [`OrderError::into_client_response`].
impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        self.into_client_response(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected(description: &str) -> OrderError {
        OrderError::Gateway(GatewayError::Rejected {
            status: 400,
            code: None,
            description: description.to_string(),
        })
    }

    #[test]
    fn test_http_status() {
        assert_eq!(
            OrderError::MethodNotAllowed.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            OrderError::Configuration {
                missing: vec!["key_id"]
            }
            .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            OrderError::Validation("bad".to_string()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            rejected("Card declined").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_configuration_message_names_missing_fields() {
        let err = OrderError::Configuration {
            missing: vec!["key_id", "key_secret"],
        };
        assert_eq!(
            err.to_string(),
            "Payment gateway is not configured: missing key_id, key_secret"
        );
        assert_eq!(err.kind(), "CONFIGURATION_ERROR");
    }

    #[test]
    fn test_gateway_message_pass_through() {
        assert_eq!(rejected("Card declined").client_message(true), "Card declined");
        assert_eq!(
            rejected("Card declined").client_message(false),
            GENERIC_GATEWAY_MESSAGE
        );
        // Only gateway text is hidden
        assert_eq!(
            OrderError::Validation("amount is required".to_string()).client_message(false),
            "amount is required"
        );
    }

    #[test]
    fn test_empty_message_falls_back() {
        assert_eq!(rejected("").client_message(true), FALLBACK_ERROR_MESSAGE);
        assert_eq!(
            OrderError::Gateway(GatewayError::Transport("  ".to_string())).client_message(true),
            FALLBACK_ERROR_MESSAGE
        );
    }

    #[tokio::test]
    async fn test_into_response_body() {
        let response = OrderError::MethodNotAllowed.into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let parsed: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed, ErrorResponse::new("Method Not Allowed"));
    }

    #[tokio::test]
    async fn test_into_response_never_leaks_gateway_text() {
        let response = rejected("Authentication failed for key rzp_live_x").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let parsed: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed, ErrorResponse::new(GENERIC_GATEWAY_MESSAGE));
    }
}
