//! Payment Gateway Client
//!
//! The checkout service talks to exactly one external system: a payment
//! gateway exposing a "create order" operation. This module defines the
//! seam ([`PaymentGateway`]) and its implementations:
//! - [`RazorpayGateway`]: real HTTP client (reqwest)
//! - [`MockGateway`]: in-process echo gateway for local runs and tests

pub mod error;
pub mod mock;
pub mod razorpay;

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use utoipa::ToSchema;

use crate::config::{GatewayProvider, PaymentGatewayConfig};

pub use error::GatewayError;
pub use mock::MockGateway;
pub use razorpay::RazorpayGateway;

/// The gateway's order object exactly as it arrived on the wire
pub type GatewayOrder = Box<RawValue>;

/// Order parameters sent to the gateway (trusted, already translated).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrderOptions {
    /// Amount in minor currency units (e.g. paise)
    #[schema(example = 10000)]
    pub amount: i64,
    #[schema(example = "INR")]
    pub currency: String,
    #[schema(example = "receipt_1703494800000")]
    pub receipt: String,
    /// 1 = capture funds immediately on authorization
    #[schema(example = 1)]
    pub payment_capture: u8,
}

/// Gateway API key pair.
///
/// Loaded once at startup; shared read-only by every request.
#[derive(Clone, Default, Deserialize)]
pub struct GatewayCredentials {
    #[serde(default)]
    key_id: String,
    #[serde(default)]
    key_secret: String,
}

impl GatewayCredentials {
    pub fn new(key_id: impl Into<String>, key_secret: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            key_secret: key_secret.into(),
        }
    }

    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    pub fn key_secret(&self) -> &str {
        &self.key_secret
    }

    /// Replace either half of the pair when an override is given.
    pub fn with_overrides(mut self, key_id: Option<String>, key_secret: Option<String>) -> Self {
        if let Some(id) = key_id {
            self.key_id = id;
        }
        if let Some(secret) = key_secret {
            self.key_secret = secret;
        }
        self
    }

    /// Names of the credential fields that are absent or blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.key_id.trim().is_empty() {
            missing.push("key_id");
        }
        if self.key_secret.trim().is_empty() {
            missing.push("key_secret");
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

// Never print the secret.
impl fmt::Debug for GatewayCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayCredentials")
            .field("key_id", &self.key_id)
            .field(
                "key_secret",
                &if self.key_secret.is_empty() {
                    "<empty>"
                } else {
                    "<redacted>"
                },
            )
            .finish()
    }
}

/// External payment gateway: "create order" is the only operation we need.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Short provider name used in logs and the health endpoint
    fn name(&self) -> &'static str;

    /// Create a gateway order and return the gateway's order object verbatim.
    async fn create_order(
        &self,
        credentials: &GatewayCredentials,
        options: &OrderOptions,
    ) -> Result<GatewayOrder, GatewayError>;
}

#[derive(Deserialize)]
struct OrderId {
    #[serde(default)]
    id: Option<String>,
}

/// `id` of a gateway order object, if it has one.
pub fn order_id(order: &RawValue) -> Option<String> {
    serde_json::from_str::<OrderId>(order.get()).ok()?.id
}

/// Build the gateway selected in configuration.
pub fn build_gateway(
    config: &PaymentGatewayConfig,
) -> Result<Arc<dyn PaymentGateway>, GatewayError> {
    match config.provider {
        GatewayProvider::Razorpay => Ok(Arc::new(RazorpayGateway::new(config)?)),
        GatewayProvider::Mock => {
            tracing::warn!("Using mock payment gateway - no real orders will be created");
            Ok(Arc::new(MockGateway::new()))
        }
    }
}
