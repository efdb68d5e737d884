//! Gateway types module
//!
//! ## Input Types
//! - [`MajorAmount`]: whole-unit amount accepted as number or numeric string
//! - [`OrderRequest`]: checkout request deserialization and translation
//!
//! ## Output Types
//! - [`ErrorResponse`]: `{"error": ...}` body
//!
//! [`OrderOptions`] is owned by the payment module and re-exported here.

pub mod money;
pub mod order;
pub mod response;

pub use crate::payment::OrderOptions;
pub use money::{MINOR_UNITS_PER_MAJOR, MajorAmount};
pub use order::{
    AUTO_CAPTURE, DEFAULT_CURRENCY, OrderRequest, RECEIPT_PREFIX, generated_receipt, now_ms,
};
pub use response::ErrorResponse;
