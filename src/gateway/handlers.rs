//! HTTP handlers

pub mod health;
pub mod order;

pub use health::{HealthResponse, health_check};
pub use order::{create_order, method_not_allowed};
