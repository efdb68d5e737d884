//! Checkout Orders - payment gateway order creation service
//!
//! Accepts checkout requests from the storefront, translates them into
//! payment gateway orders (whole units -> minor units, defaults for
//! currency and receipt, auto-capture) and returns the gateway's order
//! object untouched.
//!
//! # Modules
//!
//! - [`config`] - YAML configuration + credential overrides from the environment
//! - [`logging`] - tracing subscriber with rolling file output
//! - [`payment`] - payment gateway client seam (Razorpay, mock)
//! - [`gateway`] - HTTP surface: router, handlers, order service, errors

pub mod config;
pub mod gateway;
pub mod logging;
pub mod payment;

// Convenient re-exports at crate root
pub use config::{AppConfig, ConfigError, GatewayProvider, PaymentGatewayConfig};
pub use gateway::error::OrderError;
pub use gateway::services::OrderService;
pub use gateway::state::AppState;
pub use gateway::types::{ErrorResponse, MajorAmount, OrderRequest};
pub use payment::{
    GatewayCredentials, GatewayError, GatewayOrder, MockGateway, OrderOptions, PaymentGateway,
    RazorpayGateway,
};
