//! Cross-service workflow integration tests library.
//!
//! Spawns the gateway and the composer in-process on random ports, with a
//! wiremock server standing in for the Gemini API, so a test can drive the
//! whole chain through the composer's HTML form.

use anyhow::{anyhow, Context, Result};
use gemini_gateway::config::{GatewayConfig, GoogleConfig};
use gemini_gateway::startup::Application;
use prompt_composer::config::{GatewaySettings, Settings};
use prompt_composer::startup::{build_app_state, build_router};
use secrecy::Secret;
use service_core::config::Config as CoreConfig;
use std::sync::Once;
use std::time::Duration;
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "workflow-test-key";
pub const TEST_MODEL: &str = "gemini-2.0-flash";
pub const GEMINI_PATH: &str = "/models/gemini-2.0-flash:generateContent";

static INIT: Once = Once::new();

/// Initialize tracing for tests (only once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("info,workflow_tests=debug")
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Running gateway + composer pair wired to a mock Gemini endpoint.
pub struct WorkflowTestContext {
    pub gemini: MockServer,
    pub gateway_address: String,
    pub composer_address: String,
    pub client: reqwest::Client,
}

impl WorkflowTestContext {
    pub async fn new() -> Result<Self> {
        init_tracing();

        let gemini = MockServer::start().await;
        let gateway_address = spawn_gateway(&gemini.uri()).await?;
        let composer_address = spawn_composer(&gateway_address).await?;

        let client = reqwest::Client::new();
        wait_for_health(&client, &gateway_address).await?;
        wait_for_health(&client, &composer_address).await?;

        Ok(Self {
            gemini,
            gateway_address,
            composer_address,
            client,
        })
    }

    /// Load the form page and return the `form_id` it was rendered with.
    pub async fn fresh_form_id(&self) -> Result<String> {
        let page = self
            .client
            .get(format!("{}/", self.composer_address))
            .send()
            .await?
            .text()
            .await?;
        extract_form_id(&page).ok_or_else(|| anyhow!("form page has no form_id"))
    }

    /// Submit the composer form the way a browser would.
    pub async fn submit_form(
        &self,
        form_id: &str,
        prompt: &str,
        image: Option<(&str, &str, Vec<u8>)>,
    ) -> Result<reqwest::Response> {
        let mut form = reqwest::multipart::Form::new()
            .text("form_id", form_id.to_string())
            .text("prompt", prompt.to_string());

        if let Some((file_name, mime, bytes)) = image {
            let part = reqwest::multipart::Part::bytes(bytes)
                .file_name(file_name.to_string())
                .mime_str(mime)?;
            form = form.part("image", part);
        }

        Ok(self
            .client
            .post(format!("{}/", self.composer_address))
            .multipart(form)
            .send()
            .await?)
    }
}

async fn spawn_gateway(api_base: &str) -> Result<String> {
    let config = GatewayConfig {
        common: CoreConfig { port: 0 },
        google: GoogleConfig {
            api_key: Secret::new(TEST_API_KEY.to_string()),
            api_base: api_base.to_string(),
            model: TEST_MODEL.to_string(),
        },
        max_body_bytes: 10 * 1024 * 1024,
        otlp_endpoint: None,
    };

    let app = Application::build(config)
        .await
        .map_err(|e| anyhow!("Failed to build gateway: {}", e))?;
    let address = format!("http://127.0.0.1:{}", app.port());

    tokio::spawn(async move {
        app.run_until_stopped().await.ok();
    });

    Ok(address)
}

async fn spawn_composer(gateway_url: &str) -> Result<String> {
    let settings = Settings {
        gateway: GatewaySettings {
            url: gateway_url.to_string(),
        },
        ..Settings::default()
    };
    let router = build_router(build_app_state(&settings), settings.server.max_upload_bytes);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .context("Failed to bind composer listener")?;
    let address = format!("http://{}", listener.local_addr()?);

    tokio::spawn(async move {
        axum_serve(listener, router).await;
    });

    Ok(address)
}

async fn axum_serve(listener: tokio::net::TcpListener, router: service_core::axum::Router) {
    if let Err(e) = service_core::axum::serve(listener, router).await {
        tracing::error!("Composer server error: {}", e);
    }
}

async fn wait_for_health(client: &reqwest::Client, address: &str) -> Result<()> {
    let health_url = format!("{}/health", address);
    for _ in 0..50 {
        if client.get(&health_url).send().await.is_ok() {
            return Ok(());
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    Err(anyhow!("{} never became healthy", address))
}

/// Pull the hidden `form_id` value out of a rendered form page.
pub fn extract_form_id(page: &str) -> Option<String> {
    let marker = "name=\"form_id\" value=\"";
    let start = page.find(marker)? + marker.len();
    let end = page[start..].find('"')? + start;
    Some(page[start..end].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_form_id_from_page() {
        let page = r#"<input type="hidden" name="form_id" value="6f1c2d3e-0000-4000-8000-000000000001">"#;
        assert_eq!(
            extract_form_id(page).as_deref(),
            Some("6f1c2d3e-0000-4000-8000-000000000001")
        );
    }

    #[test]
    fn missing_form_id_is_none() {
        assert!(extract_form_id("<form></form>").is_none());
    }
}
