//! Create-order handlers

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::{Method, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::Instrument;
use uuid::Uuid;

use super::super::error::OrderError;
use super::super::state::AppState;

/// Create a payment gateway order
///
/// POST /api/create-order
///
/// The body is read raw so that the configuration gate runs before any
/// parsing; validation happens inside the order service. A body that cannot
/// be read at all (over the size limit, broken stream) is a validation error.
#[utoipa::path(
    post,
    path = "/api/create-order",
    request_body(content = crate::gateway::types::OrderRequest, description = "Checkout order request", content_type = "application/json"),
    responses(
        (status = 200, description = "Gateway order object, passed through unmodified", content_type = "application/json"),
        (status = 405, description = "Method not allowed", body = crate::gateway::types::ErrorResponse),
        (status = 500, description = "Gateway not configured, invalid request body or gateway failure", body = crate::gateway::types::ErrorResponse)
    ),
    tag = "Checkout"
)]
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("create_order", %request_id);

    async move {
        let result = match body {
            Ok(body) => {
                tracing::debug!("Received {} byte body", body.len());
                state.order_service.create_order(&body).await
            }
            Err(rejection) => state.order_service.ensure_configured().and_then(|()| {
                Err(OrderError::Validation(format!(
                    "Invalid request body: {}",
                    rejection.body_text()
                )))
            }),
        };

        match result {
            Ok(order) => (StatusCode::OK, Json(order)).into_response(),
            Err(e) => {
                match &e {
                    OrderError::Validation(_) => {
                        tracing::warn!(kind = e.kind(), "Create order rejected: {}", e)
                    }
                    OrderError::Gateway(g) => tracing::error!(
                        kind = e.kind(),
                        upstream_status = ?g.upstream_status(),
                        "Create order failed: {}",
                        e
                    ),
                    _ => tracing::error!(kind = e.kind(), "Create order failed: {}", e),
                }
                e.into_client_response(state.expose_gateway_errors)
            }
        }
    }
    .instrument(span)
    .await
}

/// Method fallback for the create-order route: every verb except POST.
pub async fn method_not_allowed(method: Method) -> impl IntoResponse {
    tracing::warn!("Create order called with {}", method);
    ([(header::ALLOW, "POST")], OrderError::MethodNotAllowed)
}
