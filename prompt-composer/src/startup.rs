use axum::{extract::DefaultBodyLimit, middleware::from_fn, routing::get, Router};
use service_core::middleware::{metrics_middleware, page_security_headers, request_id_middleware};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::Settings;
use crate::handlers::{
    app::{health_check, index},
    compose::submit_handler,
};
use crate::services::{Composer, GatewayClient};
use crate::AppState;

/// Wire the composer against the gateway named in `settings`.
pub fn build_app_state(settings: &Settings) -> AppState {
    let client = GatewayClient::new(&settings.gateway);
    tracing::info!(endpoint = %client.generate_url(), "Configured gateway client");
    AppState::new(Arc::new(Composer::new(client)))
}

pub fn build_router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/", get(index).post(submit_handler))
        .route("/health", get(health_check))
        .route("/metrics", get(crate::handlers::metrics::metrics))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(from_fn(page_security_headers))
        .layer(from_fn(metrics_middleware))
        // Add tracing layer
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        // Add tracing middleware for request_id
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}
