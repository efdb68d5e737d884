use std::sync::Arc;

use super::services::OrderService;

/// Gateway 应用状态 (共享, 只读)
#[derive(Clone)]
pub struct AppState {
    /// Create-order pipeline (gateway client + credentials)
    pub order_service: Arc<OrderService>,
    /// Pass gateway error text through to clients
    pub expose_gateway_errors: bool,
}

impl AppState {
    pub fn new(order_service: OrderService, expose_gateway_errors: bool) -> Self {
        Self {
            order_service: Arc::new(order_service),
            expose_gateway_errors,
        }
    }
}
