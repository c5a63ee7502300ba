//! HTTP handlers for the gateway.

pub mod generate;
pub mod health;

pub use generate::{generate, method_not_allowed};
pub use health::{health_check, metrics_endpoint, readiness_check};
