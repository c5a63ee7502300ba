//! Gateway behaviour against an in-process provider.

mod common;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use gemini_gateway::models::{InlineData, Part};
use gemini_gateway::services::providers::{MockProvider, ProviderError};
use http_body_util::BodyExt;
use serde_json::json;
use std::sync::Arc;
use tower::util::ServiceExt;

async fn send(
    provider: Arc<MockProvider>,
    method: Method,
    body: &str,
) -> (StatusCode, String) {
    let response = common::router_with(provider)
        .oneshot(
            Request::builder()
                .method(method)
                .uri("/api/generate")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn non_post_never_reaches_provider() {
    let provider = Arc::new(MockProvider::succeeding(r#"{"candidates":[]}"#));

    for method in [Method::GET, Method::PUT, Method::DELETE, Method::PATCH, Method::HEAD] {
        let (status, _) = send(provider.clone(), method.clone(), r#"{"prompt":"hello"}"#).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "method {}", method);
    }

    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn provider_receives_text_then_image() {
    let provider = Arc::new(MockProvider::succeeding(r#"{"candidates":[]}"#));

    let body = json!({
        "prompt": "Describe this image",
        "image": { "mimeType": "image/png", "data": "iVBORw0KGgo=" }
    })
    .to_string();
    let (status, _) = send(provider.clone(), Method::POST, &body).await;

    assert_eq!(status, StatusCode::OK);
    let received = provider.received();
    assert_eq!(received.len(), 1);

    let parts: Vec<&Part> = received[0].parts().collect();
    assert_eq!(
        parts,
        vec![
            &Part::Text {
                text: "Describe this image".to_string()
            },
            &Part::InlineData {
                inline_data: InlineData {
                    mime_type: "image/png".to_string(),
                    data: "iVBORw0KGgo=".to_string(),
                }
            },
        ]
    );
}

#[tokio::test]
async fn provider_success_is_passed_through() {
    let upstream = r#"{"candidates":[{"content":{"parts":[{"text":"A cat."}]}}]}"#;
    let provider = Arc::new(MockProvider::succeeding(upstream));

    let (status, body) = send(provider, Method::POST, r#"{"prompt":"hello"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, upstream);
}

#[tokio::test]
async fn provider_failure_is_generic_500() {
    let provider = Arc::new(MockProvider::failing(ProviderError::NetworkError(
        "connection reset by peer".to_string(),
    )));

    let (status, body) = send(provider.clone(), Method::POST, r#"{"prompt":"hello"}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, r#"{"message":"Internal Server Error"}"#);
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn request_without_prompt_or_image_makes_no_call() {
    let provider = Arc::new(MockProvider::succeeding(r#"{"candidates":[]}"#));

    let (status, body) = send(provider.clone(), Method::POST, r#"{"prompt":""}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, r#"{"message":"Internal Server Error"}"#);
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn image_with_empty_data_makes_no_call() {
    let provider = Arc::new(MockProvider::succeeding(r#"{"candidates":[]}"#));

    let body = json!({
        "prompt": "hello",
        "image": { "mimeType": "image/png", "data": "" }
    })
    .to_string();
    let (status, _) = send(provider.clone(), Method::POST, &body).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(provider.calls(), 0);
}
