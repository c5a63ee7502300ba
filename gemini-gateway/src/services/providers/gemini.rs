//! Gemini `generateContent` client.

use super::{GenerationProvider, ProviderError};
use crate::config::GoogleConfig;
use crate::models::{UpstreamPayload, UpstreamResponse};
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};

pub struct GeminiProvider {
    endpoint: String,
    api_key: Secret<String>,
    client: Client,
}

impl GeminiProvider {
    /// No request timeout is set: the call resolves when the upstream does.
    pub fn new(config: &GoogleConfig) -> Self {
        Self {
            endpoint: config.generate_content_url(),
            api_key: config.api_key.clone(),
            client: Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl GenerationProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn generate(
        &self,
        payload: &UpstreamPayload,
    ) -> Result<UpstreamResponse, ProviderError> {
        tracing::debug!(
            endpoint = %self.endpoint,
            parts = payload.parts().count(),
            "Sending request to Gemini API"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(self.api_key.expose_secret())
            .json(payload)
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ProviderError::NetworkError(e.without_url().to_string()))?;

        UpstreamResponse::from_bytes(body)
    }
}
