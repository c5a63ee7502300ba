pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

use services::Composer;
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub composer: Arc<Composer>,
}

impl AppState {
    pub fn new(composer: Arc<Composer>) -> Self {
        Self { composer }
    }
}
