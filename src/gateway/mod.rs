pub mod error;
pub mod handlers;
pub mod openapi;
pub mod services;
pub mod state;
pub mod types;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use state::AppState;

/// Route the checkout front-end posts to
pub const CREATE_ORDER_PATH: &str = "/api/create-order";
pub const HEALTH_PATH: &str = "/api/v1/health";

/// Build the HTTP router.
///
/// The create-order route answers every non-POST verb itself (405 with a
/// JSON body) so the method gate never reaches the order service.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            CREATE_ORDER_PATH,
            post(handlers::create_order).fallback(handlers::method_not_allowed),
        )
        .route(HEALTH_PATH, get(handlers::health_check))
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
}

/// Start HTTP Gateway server
pub async fn run_server(host: &str, port: u16, state: Arc<AppState>) -> std::io::Result<()> {
    let app = build_router(state);

    let addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&addr).await.map_err(|e| {
        tracing::error!("Failed to bind to {}: {} (port already in use?)", addr, e);
        e
    })?;

    tracing::info!("Checkout gateway listening on http://{}", addr);
    tracing::info!("Create order: POST {}", CREATE_ORDER_PATH);
    tracing::info!("API Docs: http://{}/docs", addr);

    axum::serve(listener, app).await
}
