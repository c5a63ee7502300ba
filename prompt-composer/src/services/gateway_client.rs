//! HTTP client for the gemini-gateway.

use crate::config::GatewaySettings;
use crate::error::ComposerError;
use reqwest::Client;
use service_core::dtos::PromptRequest;
use service_core::middleware::REQUEST_ID_HEADER;

pub struct GatewayClient {
    client: Client,
    generate_url: String,
}

impl GatewayClient {
    pub fn new(settings: &GatewaySettings) -> Self {
        Self {
            client: Client::new(),
            generate_url: format!("{}/api/generate", settings.url.trim_end_matches('/')),
        }
    }

    pub fn generate_url(&self) -> &str {
        &self.generate_url
    }

    /// Send one prompt and return the gateway's body exactly as received.
    pub async fn generate(
        &self,
        request: &PromptRequest,
        request_id: Option<&str>,
    ) -> Result<String, ComposerError> {
        let mut builder = self.client.post(&self.generate_url).json(request);
        if let Some(id) = request_id {
            builder = builder.header(REQUEST_ID_HEADER, id);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::error!("Failed to send POST request to {}: {}", self.generate_url, e);
            ComposerError::GatewayUnreachable(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(status = %status, "Gateway returned an error");
            return Err(ComposerError::GatewayStatus(status.as_u16()));
        }

        response.text().await.map_err(|e| {
            tracing::error!("Failed to read gateway response body: {}", e);
            ComposerError::GatewayUnreachable(e.to_string())
        })
    }
}
