use axum::http::StatusCode;
use thiserror::Error;

/// Shown for every failure; details stay in the server log.
pub const GENERIC_ALERT: &str = "Something went wrong. Please try again.";

#[derive(Debug, Error)]
pub enum ComposerError {
    #[error("A prompt is required")]
    MissingPrompt,

    #[error("Invalid form submission: {0}")]
    InvalidForm(String),

    #[error("This form already has a request in progress")]
    AlreadySubmitting,

    #[error("Gateway unreachable: {0}")]
    GatewayUnreachable(String),

    #[error("Gateway responded with status {0}")]
    GatewayStatus(u16),
}

impl ComposerError {
    /// Status for the re-rendered form page.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ComposerError::MissingPrompt => StatusCode::UNPROCESSABLE_ENTITY,
            ComposerError::InvalidForm(_) => StatusCode::BAD_REQUEST,
            ComposerError::AlreadySubmitting => StatusCode::CONFLICT,
            ComposerError::GatewayUnreachable(_) | ComposerError::GatewayStatus(_) => {
                StatusCode::BAD_GATEWAY
            }
        }
    }

    /// User-visible notification text.
    pub fn alert(&self) -> &'static str {
        match self {
            ComposerError::MissingPrompt => "Please enter a prompt.",
            ComposerError::AlreadySubmitting => "Your previous request is still running.",
            _ => GENERIC_ALERT,
        }
    }
}
