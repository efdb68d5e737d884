//! Order Service - create-order pipeline
//!
//! Keeps the business steps out of the HTTP handler:
//! configuration gate -> parse -> translate -> gateway call.
//! The method gate lives in the router, in front of all of this.

use std::sync::Arc;

use crate::gateway::error::OrderError;
use crate::gateway::types::{OrderRequest, now_ms};
use crate::payment::{GatewayCredentials, GatewayOrder, PaymentGateway, order_id};

/// Order Service - holds the gateway client and the credentials it uses
pub struct OrderService {
    gateway: Arc<dyn PaymentGateway>,
    credentials: GatewayCredentials,
}

impl OrderService {
    pub fn new(gateway: Arc<dyn PaymentGateway>, credentials: GatewayCredentials) -> Self {
        Self {
            gateway,
            credentials,
        }
    }

    pub fn gateway_name(&self) -> &'static str {
        self.gateway.name()
    }

    /// Credentials must be usable before the body is even looked at.
    pub fn ensure_configured(&self) -> Result<(), OrderError> {
        let missing = self.credentials.missing_fields();
        if !missing.is_empty() {
            return Err(OrderError::Configuration { missing });
        }
        Ok(())
    }

    /// Create a gateway order from a raw request body.
    pub async fn create_order(&self, body: &[u8]) -> Result<GatewayOrder, OrderError> {
        self.create_order_at(body, now_ms()).await
    }

    /// Same as [`create_order`](Self::create_order) with an explicit clock
    /// reading for receipt generation.
    pub async fn create_order_at(
        &self,
        body: &[u8],
        now_ms: i64,
    ) -> Result<GatewayOrder, OrderError> {
        // 1. Configuration gate
        self.ensure_configured()?;

        // 2. Parse and translate
        let request = OrderRequest::parse(body).map_err(OrderError::Validation)?;
        let options = request
            .into_order_options(now_ms)
            .map_err(OrderError::Validation)?;

        tracing::info!(
            gateway = self.gateway.name(),
            amount = options.amount,
            currency = %options.currency,
            receipt = %options.receipt,
            "Creating gateway order"
        );

        // 3. Gateway call
        let order = self.gateway.create_order(&self.credentials, &options).await?;

        let created_id = order_id(&order);
        tracing::info!(
            order_id = created_id.as_deref().unwrap_or("-"),
            receipt = %options.receipt,
            "Gateway order created"
        );
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payment::MockGateway;
    use serde_json::Value;

    const NOW_MS: i64 = 1_703_494_800_000;

    fn service_with(credentials: GatewayCredentials) -> (OrderService, Arc<MockGateway>) {
        let mock = Arc::new(MockGateway::new());
        (OrderService::new(mock.clone(), credentials), mock)
    }

    fn configured() -> (OrderService, Arc<MockGateway>) {
        service_with(GatewayCredentials::new("rzp_test_abc", "s3cret"))
    }

    #[tokio::test]
    async fn test_full_request_reaches_gateway() {
        let (service, mock) = configured();

        let order = service
            .create_order_at(br#"{"amount": 100, "currency": "USD", "receipt": "r1"}"#, NOW_MS)
            .await
            .unwrap();
        let order: Value = serde_json::from_str(order.get()).unwrap();

        assert_eq!(order["amount"], 10000);
        assert_eq!(order["currency"], "USD");
        assert_eq!(order["receipt"], "r1");
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_defaults_reach_gateway() {
        let (service, mock) = configured();

        service
            .create_order_at(br#"{"amount": 50}"#, NOW_MS)
            .await
            .unwrap();

        let sent = mock.last_options().unwrap();
        assert_eq!(sent.amount, 5000);
        assert_eq!(sent.currency, "INR");
        assert_eq!(sent.receipt, "receipt_1703494800000");
        assert_eq!(sent.payment_capture, 1);
    }

    #[tokio::test]
    async fn test_missing_credentials_skip_gateway() {
        for (id, secret, expected) in [
            ("", "s3cret", vec!["key_id"]),
            ("rzp_test_abc", "", vec!["key_secret"]),
            ("", "", vec!["key_id", "key_secret"]),
        ] {
            let (service, mock) = service_with(GatewayCredentials::new(id, secret));

            let err = service
                .create_order_at(br#"{"amount": 50}"#, NOW_MS)
                .await
                .unwrap_err();

            match err {
                OrderError::Configuration { missing } => assert_eq!(missing, expected),
                other => panic!("expected configuration error, got {:?}", other),
            }
            assert_eq!(mock.call_count(), 0);
        }
    }

    #[tokio::test]
    async fn test_configuration_checked_before_body() {
        let (service, _mock) = service_with(GatewayCredentials::default());

        let err = service.create_order_at(b"not json", NOW_MS).await.unwrap_err();
        assert!(matches!(err, OrderError::Configuration { .. }));
    }

    #[tokio::test]
    async fn test_validation_errors_skip_gateway() {
        let (service, mock) = configured();

        for body in [
            &b"not json"[..],
            &br#"{"currency": "USD"}"#[..],
            &br#"{"amount": "abc"}"#[..],
            &br#"{"amount": [1]}"#[..],
        ] {
            let err = service.create_order_at(body, NOW_MS).await.unwrap_err();
            assert!(
                matches!(err, OrderError::Validation(_)),
                "unexpected error: {:?}",
                err
            );
        }
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_gateway_error_propagates() {
        let (service, mock) = configured();
        mock.fail_with("Card declined");

        let err = service
            .create_order_at(br#"{"amount": 50}"#, NOW_MS)
            .await
            .unwrap_err();

        assert!(matches!(err, OrderError::Gateway(_)));
        assert_eq!(err.to_string(), "Card declined");
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_generated_receipt_uses_wall_clock() {
        let (service, mock) = configured();

        let before = now_ms();
        service.create_order(br#"{"amount": 1}"#).await.unwrap();
        let after = now_ms();

        let receipt = mock.last_options().unwrap().receipt;
        let millis: i64 = receipt
            .strip_prefix("receipt_")
            .expect("generated receipt prefix")
            .parse()
            .expect("generated receipt digits");
        assert!(before <= millis && millis <= after);
    }
}
