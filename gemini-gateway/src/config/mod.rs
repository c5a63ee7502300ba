use secrecy::Secret;
use service_core::config::{self as core_config, get_env};
use service_core::error::AppError;

/// Gemini REST API root.
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used when `GEMINI_MODEL` is not set.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

/// Default inbound body limit (10MB). Base64 inflates images by a third, so
/// axum's 2MB default rejects ordinary phone photos.
const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub common: core_config::Config,
    pub google: GoogleConfig,
    /// Inbound request body limit in bytes.
    pub max_body_bytes: usize,
    /// OTLP collector endpoint; span export is off when unset.
    pub otlp_endpoint: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GoogleConfig {
    pub api_key: Secret<String>,
    pub api_base: String,
    pub model: String,
}

impl GoogleConfig {
    /// The fixed upstream endpoint every prompt is forwarded to.
    pub fn generate_content_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        )
    }
}

impl GatewayConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;

        let max_body_bytes = get_env(
            "GATEWAY_MAX_BODY_BYTES",
            Some(&DEFAULT_MAX_BODY_BYTES.to_string()),
        )?
        .parse()
        .map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!("GATEWAY_MAX_BODY_BYTES is invalid: {}", e))
        })?;

        Ok(GatewayConfig {
            common: common_config,
            google: GoogleConfig {
                api_key: Secret::new(get_env("GOOGLE_API_KEY", None)?),
                api_base: get_env("GEMINI_API_BASE", Some(DEFAULT_GEMINI_API_BASE))?,
                model: get_env("GEMINI_MODEL", Some(DEFAULT_GEMINI_MODEL))?,
            },
            max_body_bytes,
            otlp_endpoint: std::env::var("OTLP_ENDPOINT")
                .ok()
                .filter(|endpoint| !endpoint.is_empty()),
        })
    }
}
