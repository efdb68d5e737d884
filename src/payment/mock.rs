//! Mock payment gateway
//!
//! Echoes the requested options back as a gateway-shaped order object.
//! Counts calls and remembers the last options so tests can assert on
//! exactly what would have been sent over the wire.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::json;

use super::{GatewayCredentials, GatewayError, GatewayOrder, OrderOptions, PaymentGateway};

#[derive(Default)]
pub struct MockGateway {
    calls: AtomicUsize,
    last_options: Mutex<Option<OrderOptions>>,
    failure: Mutex<Option<String>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with a gateway rejection carrying `message`.
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.failure.lock().unwrap_or_else(|e| e.into_inner()) = Some(message.into());
    }

    /// Number of `create_order` calls received so far
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Options passed to the most recent call
    pub fn last_options(&self) -> Option<OrderOptions> {
        self.last_options
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[async_trait]
impl PaymentGateway for MockGateway {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn create_order(
        &self,
        _credentials: &GatewayCredentials,
        options: &OrderOptions,
    ) -> Result<GatewayOrder, GatewayError> {
        let seq = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        *self.last_options.lock().unwrap_or_else(|e| e.into_inner()) = Some(options.clone());

        let failure = self
            .failure
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone();
        if let Some(description) = failure {
            return Err(GatewayError::Rejected {
                status: 400,
                code: Some("BAD_REQUEST_ERROR".to_string()),
                description,
            });
        }

        let order = json!({
            "id": format!("order_mock_{}", seq),
            "entity": "order",
            "amount": options.amount,
            "amount_paid": 0,
            "amount_due": options.amount,
            "currency": options.currency,
            "receipt": options.receipt,
            "offer_id": null,
            "status": "created",
            "attempts": 0,
            "notes": [],
            "created_at": chrono::Utc::now().timestamp(),
        });
        serde_json::value::to_raw_value(&order)
            .map_err(|e| GatewayError::Decode(format!("Failed to encode mock order: {}", e)))
    }
}
