//! Checkout order request and its translation into gateway options

use serde::Deserialize;
use utoipa::ToSchema;

use super::money::MajorAmount;
use crate::payment::OrderOptions;

/// Currency used when the client does not name one
pub const DEFAULT_CURRENCY: &str = "INR";
/// Prefix of generated receipts: `receipt_<unix millis>`
pub const RECEIPT_PREFIX: &str = "receipt_";
/// `payment_capture` value meaning "capture immediately"
pub const AUTO_CAPTURE: u8 = 1;

/// Checkout order request (HTTP request deserialization)
///
/// Unknown fields are ignored. Empty `currency`/`receipt` strings are
/// treated the same as absent ones.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct OrderRequest {
    /// Amount in whole currency units, number or numeric string
    #[schema(value_type = f64, example = 100)]
    pub amount: MajorAmount,
    /// ISO currency code, passed through as-is (default "INR")
    #[serde(default)]
    #[schema(example = "USD")]
    pub currency: Option<String>,
    /// Reconciliation reference (default `receipt_<unix millis>`)
    #[serde(default)]
    #[schema(example = "r1")]
    pub receipt: Option<String>,
}

impl OrderRequest {
    /// Parse a raw request body.
    pub fn parse(body: &[u8]) -> Result<Self, String> {
        serde_json::from_slice(body).map_err(|e| format!("Invalid request body: {}", e))
    }

    /// Translate into the options sent to the gateway.
    ///
    /// `now_ms` is only used when a receipt has to be generated.
    pub fn into_order_options(self, now_ms: i64) -> Result<OrderOptions, String> {
        let amount = self.amount.to_minor_units()?;

        let currency = non_empty(self.currency).unwrap_or_else(|| DEFAULT_CURRENCY.to_string());
        let receipt = non_empty(self.receipt).unwrap_or_else(|| generated_receipt(now_ms));

        Ok(OrderOptions {
            amount,
            currency,
            receipt,
            payment_capture: AUTO_CAPTURE,
        })
    }
}

/// Current wall-clock time in milliseconds since the Unix epoch
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Default receipt for a request that did not carry one.
///
/// Not unique: two requests in the same millisecond get the same value.
pub fn generated_receipt(now_ms: i64) -> String {
    format!("{}{}", RECEIPT_PREFIX, now_ms)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW_MS: i64 = 1_703_494_800_000;

    fn translate(body: &str) -> Result<OrderOptions, String> {
        OrderRequest::parse(body.as_bytes())?.into_order_options(NOW_MS)
    }

    #[test]
    fn test_all_fields_pass_through() {
        let options = translate(r#"{"amount": 100, "currency": "USD", "receipt": "r1"}"#).unwrap();
        assert_eq!(
            options,
            OrderOptions {
                amount: 10000,
                currency: "USD".to_string(),
                receipt: "r1".to_string(),
                payment_capture: 1,
            }
        );
    }

    #[test]
    fn test_defaults_applied() {
        let options = translate(r#"{"amount": 50}"#).unwrap();
        assert_eq!(options.amount, 5000);
        assert_eq!(options.currency, "INR");
        assert_eq!(options.receipt, "receipt_1703494800000");
        assert_eq!(options.payment_capture, AUTO_CAPTURE);
    }

    #[test]
    fn test_empty_and_null_optionals_use_defaults() {
        let options = translate(r#"{"amount": "5", "currency": "", "receipt": null}"#).unwrap();
        assert_eq!(options.amount, 500);
        assert_eq!(options.currency, "INR");
        assert_eq!(options.receipt, generated_receipt(NOW_MS));
    }

    #[test]
    fn test_currency_is_not_normalized() {
        let options = translate(r#"{"amount": 1, "currency": "usd"}"#).unwrap();
        assert_eq!(options.currency, "usd");
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let options = translate(r#"{"amount": 1, "notes": {"sku": "A1"}}"#).unwrap();
        assert_eq!(options.amount, 100);
    }

    #[test]
    fn test_invalid_bodies() {
        let err = translate("not json").unwrap_err();
        assert!(err.starts_with("Invalid request body"));

        let err = translate(r#"{"currency": "USD"}"#).unwrap_err();
        assert!(err.contains("missing field `amount`"));

        let err = translate(r#"{"amount": "ten"}"#).unwrap_err();
        assert!(err.contains("amount must be numeric"));

        let err = translate(r#"{"amount": 1, "currency": 840}"#).unwrap_err();
        assert!(err.starts_with("Invalid request body"));
    }

    #[test]
    fn test_now_ms_is_milliseconds() {
        let ms = now_ms();
        // Later than 2023-01-01 and within seconds of chrono's own reading
        assert!(ms > 1_672_531_200_000);
        assert!((chrono::Utc::now().timestamp() * 1000 - ms).abs() < 5_000);
    }

    #[test]
    fn test_overflow_surfaces_from_translation() {
        let err = translate(r#"{"amount": 9223372036854775807}"#).unwrap_err();
        assert!(err.contains("out of range"));
    }
}
