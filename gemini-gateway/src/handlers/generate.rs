use crate::error::GatewayError;
use crate::models::UpstreamPayload;
use crate::startup::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use metrics::counter;
use service_core::dtos::PromptRequest;
use validator::Validate;

/// `POST /api/generate`: forward one prompt upstream and relay the answer.
///
/// The body is parsed by hand rather than with the `Json` extractor so that
/// malformed input takes the same logged-500 path as every other failure.
pub async fn generate(State(state): State<AppState>, body: Bytes) -> Result<Response, GatewayError> {
    let request: PromptRequest = serde_json::from_slice(&body)
        .map_err(|e| GatewayError::InvalidRequest(format!("Malformed request body: {}", e)))?;
    request
        .validate()
        .map_err(|e| GatewayError::InvalidRequest(e.to_string()))?;

    let has_image = request.image.is_some();
    let payload = UpstreamPayload::from_prompt(request)?;

    tracing::info!(
        provider = state.provider.name(),
        parts = payload.parts().count(),
        has_image,
        "Forwarding prompt upstream"
    );

    let result = state.provider.generate(&payload).await;
    let outcome = if result.is_ok() { "success" } else { "failure" };
    counter!("gateway_upstream_requests_total", "outcome" => outcome).increment(1);

    let upstream = result?;
    tracing::info!(bytes = upstream.as_bytes().len(), "Relaying upstream response");

    Ok((
        [(header::CONTENT_TYPE, "application/json")],
        upstream.into_bytes(),
    )
        .into_response())
}

/// Fallback for every method other than POST on the generate route.
pub async fn method_not_allowed() -> GatewayError {
    GatewayError::MethodNotAllowed
}
