#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use prompt_composer::config::{GatewaySettings, Settings};
use prompt_composer::startup::{build_app_state, build_router};
use prompt_composer::AppState;
use tower::util::ServiceExt;
use uuid::Uuid;

pub const BOUNDARY: &str = "----composer-test-boundary";

/// Eight-byte PNG signature; enough for a declared `image/png` upload.
pub const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

pub fn state_for(gateway_url: &str) -> AppState {
    let settings = Settings {
        gateway: GatewaySettings {
            url: gateway_url.to_string(),
        },
        ..Settings::default()
    };
    build_app_state(&settings)
}

pub fn router_for(state: AppState) -> Router {
    build_router(state, 1024 * 1024)
}

pub struct ImagePart<'a> {
    pub file_name: &'a str,
    pub content_type: &'a str,
    pub bytes: &'a [u8],
}

/// Hand-built `multipart/form-data` body, as a browser would send it.
pub fn multipart_body(form_id: Option<Uuid>, prompt: &str, image: Option<ImagePart<'_>>) -> Vec<u8> {
    let mut body = Vec::new();

    if let Some(form_id) = form_id {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"form_id\"\r\n\r\n{form_id}\r\n"
            )
            .as_bytes(),
        );
    }

    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"prompt\"\r\n\r\n{prompt}\r\n"
        )
        .as_bytes(),
    );

    if let Some(image) = image {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
                image.file_name, image.content_type
            )
            .as_bytes(),
        );
        body.extend_from_slice(image.bytes);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub async fn submit(router: Router, body: Vec<u8>) -> (StatusCode, String) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .header(
                    "content-type",
                    format!("multipart/form-data; boundary={BOUNDARY}"),
                )
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}
