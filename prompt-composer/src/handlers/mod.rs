pub mod app;
pub mod compose;
pub mod metrics;
