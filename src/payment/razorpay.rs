//! Razorpay Orders API client
//!
//! `POST {base_url}/orders` with HTTP basic auth (`key_id:key_secret`).
//! Error replies look like `{"error": {"code": "...", "description": "..."}}`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, info};

use super::{GatewayCredentials, GatewayError, GatewayOrder, OrderOptions, PaymentGateway};
use crate::config::PaymentGatewayConfig;

/// HTTP client for the Razorpay Orders API
pub struct RazorpayGateway {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

impl RazorpayGateway {
    /// Create a client. No request timeout is applied unless configured.
    pub fn new(config: &PaymentGatewayConfig) -> Result<Self, GatewayError> {
        info!("Initializing Razorpay gateway at {}", config.base_url);

        let mut builder = reqwest::Client::builder();
        if let Some(timeout_ms) = config.request_timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }
        let client = builder
            .build()
            .map_err(|e| GatewayError::Client(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn orders_url(&self) -> String {
        format!("{}/orders", self.base_url)
    }
}

#[async_trait]
impl PaymentGateway for RazorpayGateway {
    fn name(&self) -> &'static str {
        "razorpay"
    }

    async fn create_order(
        &self,
        credentials: &GatewayCredentials,
        options: &OrderOptions,
    ) -> Result<GatewayOrder, GatewayError> {
        debug!(receipt = %options.receipt, "POST {}", self.orders_url());

        let response = self
            .client
            .post(self.orders_url())
            .basic_auth(credentials.key_id(), Some(credentials.key_secret()))
            .json(options)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| GatewayError::Transport(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(rejection_from_body(status, &body));
        }

        order_from_body(&body)
    }
}

/// Keep a 2xx body as-is; it only has to be well-formed JSON.
fn order_from_body(body: &[u8]) -> Result<GatewayOrder, GatewayError> {
    serde_json::from_slice(body)
        .map_err(|e| GatewayError::Decode(format!("Failed to parse response: {}", e)))
}

/// Map a non-2xx reply to [`GatewayError::Rejected`].
///
/// Uses the gateway's own description when present, else the status reason.
fn rejection_from_body(status: StatusCode, body: &[u8]) -> GatewayError {
    let parsed = serde_json::from_slice::<ErrorEnvelope>(body).ok();
    let (code, description) = match parsed {
        Some(envelope) => (envelope.error.code, envelope.error.description),
        None => (None, None),
    };

    let description = description
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Payment gateway error")
                .to_string()
        });

    GatewayError::Rejected {
        status: status.as_u16(),
        code,
        description,
    }
}
