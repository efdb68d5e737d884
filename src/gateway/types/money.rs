//! Checkout amount handling
//!
//! Clients send amounts in whole currency units, either as a JSON number
//! (`100`, `12.5`) or a numeric string (`"100"`). The gateway wants integer
//! minor units, so the value is truncated to a whole number and scaled.

use std::str::FromStr;

use rust_decimal::prelude::*;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Minor units per whole unit (paise per rupee, cents per dollar)
pub const MINOR_UNITS_PER_MAJOR: i64 = 100;

/// Amount in whole currency units, as received from the checkout client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MajorAmount(Decimal);

impl MajorAmount {
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    pub fn inner(self) -> Decimal {
        self.0
    }

    /// Truncate toward zero to whole units, then scale to minor units.
    ///
    /// `12.75` becomes `1200`, `-3.9` becomes `-300`. No range policy is
    /// applied here; only values that do not fit an `i64` are rejected.
    pub fn to_minor_units(self) -> Result<i64, String> {
        let whole = self
            .0
            .trunc()
            .to_i64()
            .ok_or_else(|| format!("amount {} is out of range", self.0))?;

        whole
            .checked_mul(MINOR_UNITS_PER_MAJOR)
            .ok_or_else(|| format!("amount {} is out of range", self.0))
    }
}

impl FromStr for MajorAmount {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("amount cannot be empty".to_string());
        }
        Decimal::from_str(trimmed)
            .map(MajorAmount)
            .map_err(|_| format!("amount must be numeric, got {:?}", s))
    }
}

impl<'de> Deserialize<'de> for MajorAmount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        match Value::deserialize(deserializer)? {
            Value::Number(n) => {
                let decimal = if let Some(i) = n.as_i64() {
                    Some(Decimal::from(i))
                } else if let Some(u) = n.as_u64() {
                    Some(Decimal::from(u))
                } else {
                    n.as_f64().and_then(Decimal::from_f64)
                };
                decimal
                    .map(MajorAmount)
                    .ok_or_else(|| D::Error::custom(format!("amount {} is out of range", n)))
            }
            Value::String(s) => s.parse().map_err(D::Error::custom),
            Value::Null => Err(D::Error::custom("amount is required")),
            _ => Err(D::Error::custom(
                "amount must be a number or a numeric string",
            )),
        }
    }
}
