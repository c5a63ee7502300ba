//! Request and response bodies exchanged with the Gemini `generateContent`
//! endpoint.

use crate::error::GatewayError;
use crate::services::providers::ProviderError;
use axum::body::Bytes;
use serde::{Deserialize, Serialize};
use service_core::dtos::PromptRequest;

/// Body POSTed upstream: a single user turn made of one or more parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamPayload {
    pub contents: Vec<Content>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

impl UpstreamPayload {
    /// Text part first, then the image part. Empty values are dropped; a
    /// request that leaves no parts at all is rejected.
    pub fn from_prompt(request: PromptRequest) -> Result<Self, GatewayError> {
        let PromptRequest { prompt, image } = request;

        let text = Some(prompt)
            .filter(|text| !text.is_empty())
            .map(|text| Part::Text { text });
        let inline = image.map(|image| Part::InlineData {
            inline_data: InlineData {
                mime_type: image.mime_type,
                data: image.data,
            },
        });

        let parts: Vec<Part> = [text, inline].into_iter().flatten().collect();
        if parts.is_empty() {
            return Err(GatewayError::InvalidRequest(
                "Request has neither prompt text nor image".to_string(),
            ));
        }

        Ok(Self {
            contents: vec![Content { parts }],
        })
    }

    pub fn parts(&self) -> impl Iterator<Item = &Part> {
        self.contents.iter().flat_map(|content| content.parts.iter())
    }
}

/// Raw upstream JSON, kept as received so the relay never reorders or
/// rewrites fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse(Bytes);

impl UpstreamResponse {
    /// Accepts the body only if it is well-formed JSON.
    pub fn from_bytes(body: Bytes) -> Result<Self, ProviderError> {
        serde_json::from_slice::<serde::de::IgnoredAny>(&body)
            .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;
        Ok(Self(body))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Bytes {
        self.0
    }
}
