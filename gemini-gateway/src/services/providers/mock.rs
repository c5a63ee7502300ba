//! In-process provider for tests.

use super::{GenerationProvider, ProviderError};
use crate::models::{UpstreamPayload, UpstreamResponse};
use async_trait::async_trait;
use axum::body::Bytes;
use std::sync::Mutex;

/// Replies with a fixed result and records every payload it is given.
pub struct MockProvider {
    reply: Result<UpstreamResponse, ProviderError>,
    received: Mutex<Vec<UpstreamPayload>>,
}

impl MockProvider {
    /// Reply with `body`, which must be valid JSON.
    pub fn succeeding(body: impl Into<Bytes>) -> Self {
        Self::with_reply(UpstreamResponse::from_bytes(body.into()))
    }

    pub fn failing(error: ProviderError) -> Self {
        Self::with_reply(Err(error))
    }

    fn with_reply(reply: Result<UpstreamResponse, ProviderError>) -> Self {
        Self {
            reply,
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.received.lock().map(|r| r.len()).unwrap_or_default()
    }

    pub fn received(&self) -> Vec<UpstreamPayload> {
        self.received
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl GenerationProvider for MockProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn generate(
        &self,
        payload: &UpstreamPayload,
    ) -> Result<UpstreamResponse, ProviderError> {
        if let Ok(mut received) = self.received.lock() {
            received.push(payload.clone());
        }
        self.reply.clone()
    }
}
