//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::gateway::handlers::HealthResponse;
use crate::gateway::types::{ErrorResponse, OrderOptions, OrderRequest};

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Checkout Orders API",
        version = "1.0.0",
        description = "Creates payment gateway orders for the checkout front-end.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::order::create_order,
        crate::gateway::handlers::health::health_check,
    ),
    components(
        schemas(OrderRequest, OrderOptions, ErrorResponse, HealthResponse)
    ),
    tags(
        (name = "Checkout", description = "Payment gateway order creation"),
        (name = "System", description = "Health and service metadata"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_endpoints() {
        let json = ApiDoc::openapi().to_pretty_json().unwrap();
        assert!(json.contains("/api/create-order"));
        assert!(json.contains("/api/v1/health"));
        assert!(json.contains("OrderRequest"));
        assert!(json.contains("ErrorResponse"));
    }
}
