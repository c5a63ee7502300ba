//! Wire types shared by the composer and the gateway.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /api/generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PromptRequest {
    /// User prompt text.
    #[serde(default)]
    pub prompt: String,

    /// Optional image, already base64-encoded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub image: Option<ImageInput>,
}

/// Inline image attached to a prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ImageInput {
    #[validate(length(min = 1, message = "Image MIME type is required"))]
    pub mime_type: String,

    /// Base64 (standard alphabet) image bytes.
    #[validate(length(min = 1, message = "Image data is required"))]
    pub data: String,
}
