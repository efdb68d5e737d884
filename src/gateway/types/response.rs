//! Response bodies
//!
//! Success bodies are the gateway's order object, passed through untouched,
//! so the only shape owned here is the error body.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body: `{"error": "<message>"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Card declined")]
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
