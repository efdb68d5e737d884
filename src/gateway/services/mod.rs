//! Gateway services - business logic separated from HTTP handlers

pub mod order;

pub use order::OrderService;
