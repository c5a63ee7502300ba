//! Client-facing errors for the generate endpoint.
//!
//! Only two outcomes are visible to callers: 405 for a wrong method and a
//! generic 500 for everything else. The underlying cause is logged here and
//! never serialised into the response.

use crate::services::providers::ProviderError;
use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Upstream failure: {0}")]
    Upstream(#[from] ProviderError),
}

/// JSON body sent with every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

impl GatewayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            GatewayError::InvalidRequest(_) | GatewayError::Upstream(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn client_message(&self) -> &'static str {
        match self {
            GatewayError::MethodNotAllowed => METHOD_NOT_ALLOWED_MESSAGE,
            GatewayError::InvalidRequest(_) | GatewayError::Upstream(_) => INTERNAL_ERROR_MESSAGE,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        match &self {
            GatewayError::MethodNotAllowed => {
                tracing::warn!("Rejected request with unsupported method");
            }
            GatewayError::InvalidRequest(reason) => {
                tracing::error!(reason = %reason, "Rejected invalid generate request");
            }
            GatewayError::Upstream(err) => {
                tracing::error!(error = %err, "Upstream generation call failed");
            }
        }

        let mut response = (
            self.status_code(),
            Json(ErrorBody {
                message: self.client_message().to_string(),
            }),
        )
            .into_response();

        if matches!(self, GatewayError::MethodNotAllowed) {
            response
                .headers_mut()
                .insert(header::ALLOW, HeaderValue::from_static("POST"));
        }

        response
    }
}
