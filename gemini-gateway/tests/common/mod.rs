#![allow(dead_code)]

use gemini_gateway::config::{GatewayConfig, GoogleConfig};
use gemini_gateway::services::providers::GenerationProvider;
use gemini_gateway::startup::{build_router, AppState, Application};
use secrecy::Secret;
use service_core::config::Config as CoreConfig;
use std::sync::Arc;

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_MODEL: &str = "gemini-2.0-flash";
pub const GENERATE_PATH: &str = "/models/gemini-2.0-flash:generateContent";

pub fn test_config(api_base: &str) -> GatewayConfig {
    GatewayConfig {
        common: CoreConfig { port: 0 },
        google: GoogleConfig {
            api_key: Secret::new(TEST_API_KEY.to_string()),
            api_base: api_base.to_string(),
            model: TEST_MODEL.to_string(),
        },
        max_body_bytes: 1024 * 1024,
        otlp_endpoint: None,
    }
}

/// In-process router backed by the given provider.
pub fn router_with(provider: Arc<dyn GenerationProvider>) -> axum::Router {
    build_router(AppState { provider }, 1024 * 1024)
}

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawn the real application pointed at `api_base` (usually a wiremock server).
    pub async fn spawn(api_base: &str) -> Self {
        let app = Application::build(test_config(api_base))
            .await
            .expect("Failed to build test application");

        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address, client }
    }

    pub fn generate_url(&self) -> String {
        format!("{}/api/generate", self.address)
    }

    pub async fn post_generate(&self, body: serde_json::Value) -> reqwest::Response {
        self.client
            .post(self.generate_url())
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}
