//! Upstream generation providers.
//!
//! The gateway talks to its upstream through [`GenerationProvider`] so the
//! HTTP layer can be exercised against an in-process mock.

pub mod gemini;
pub mod mock;

use crate::models::{UpstreamPayload, UpstreamResponse};
use async_trait::async_trait;
use thiserror::Error;

pub use gemini::GeminiProvider;
pub use mock::MockProvider;

/// Error type for provider operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("API error {status}: {body}")]
    ApiError { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Make exactly one upstream call. Never retries.
    async fn generate(&self, payload: &UpstreamPayload)
        -> Result<UpstreamResponse, ProviderError>;
}
