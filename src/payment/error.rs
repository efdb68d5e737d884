use thiserror::Error;

/// Failure raised while asking the payment gateway to create an order.
///
/// The `Display` text of every variant is the message surfaced to the
/// checkout client, so it carries no prefixes of its own.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Network, TLS or timeout failure before a response arrived
    #[error("{0}")]
    Transport(String),

    /// The gateway answered with a non-success status
    #[error("{description}")]
    Rejected {
        status: u16,
        code: Option<String>,
        description: String,
    },

    /// The gateway answered 2xx but the body was not JSON
    #[error("{0}")]
    Decode(String),

    /// Local client could not be built
    #[error("{0}")]
    Client(String),
}

impl GatewayError {
    /// HTTP status reported by the gateway, if it answered at all.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            GatewayError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}
