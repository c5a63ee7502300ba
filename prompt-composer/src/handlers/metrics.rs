use axum::response::IntoResponse;

pub async fn metrics() -> impl IntoResponse {
    (
        [("content-type", "text/plain; charset=utf-8")],
        service_core::observability::render_metrics(),
    )
}
