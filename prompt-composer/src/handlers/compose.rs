use crate::error::ComposerError;
use crate::handlers::app::IndexTemplate;
use crate::models::{ImageUpload, PromptForm};
use crate::AppState;
use axum::{
    extract::{Multipart, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use service_core::middleware::REQUEST_ID_HEADER;
use uuid::Uuid;

/// `POST /`: read the multipart form, submit it, and re-render the page
/// with either the gateway body or an alert.
pub async fn submit_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Response {
    let request_id = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok());

    let (form_id, form) = match read_form(multipart).await {
        Ok(parsed) => parsed,
        Err(e) => return render_failure(e, String::new()),
    };
    let prompt = form.prompt.clone();

    match state.composer.submit(form_id, form, request_id).await {
        Ok(body) => {
            tracing::info!(form_id = %form_id, bytes = body.len(), "Gateway call succeeded");
            IndexTemplate {
                form_id: Uuid::new_v4(),
                prompt,
                response: Some(body),
                alert: None,
            }
            .into_response()
        }
        Err(e) => render_failure(e, prompt),
    }
}

fn render_failure(error: ComposerError, prompt: String) -> Response {
    match &error {
        ComposerError::MissingPrompt | ComposerError::AlreadySubmitting => {
            tracing::warn!(error = %error, "Form submission refused");
        }
        _ => tracing::error!(error = %error, "Form submission failed"),
    }

    (
        error.status_code(),
        IndexTemplate {
            form_id: Uuid::new_v4(),
            prompt,
            response: None,
            alert: Some(error.alert()),
        },
    )
        .into_response()
}

async fn read_form(mut multipart: Multipart) -> Result<(Uuid, PromptForm), ComposerError> {
    let mut form_id = None;
    let mut form = PromptForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ComposerError::InvalidForm(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "form_id" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ComposerError::InvalidForm(e.to_string()))?;
                form_id = Some(
                    Uuid::parse_str(text.trim())
                        .map_err(|e| ComposerError::InvalidForm(format!("form_id: {}", e)))?,
                );
            }
            "prompt" => {
                form.prompt = field
                    .text()
                    .await
                    .map_err(|e| ComposerError::InvalidForm(e.to_string()))?;
            }
            "image" => {
                let file_name = field.file_name().unwrap_or("unnamed").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();

                let bytes = field.bytes().await.map_err(|e| {
                    tracing::error!("Failed to read file {}: {}", file_name, e);
                    ComposerError::InvalidForm(format!("{}: Failed to read file", file_name))
                })?;

                tracing::debug!(
                    file_name = %file_name,
                    content_type = %content_type,
                    size = bytes.len(),
                    "Received image upload"
                );

                form.image = Some(ImageUpload {
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            other => {
                tracing::debug!(field = %other, "Ignoring unknown form field");
            }
        }
    }

    let form_id = form_id.ok_or_else(|| ComposerError::InvalidForm("missing form_id".to_string()))?;
    Ok((form_id, form))
}
