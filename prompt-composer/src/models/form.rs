use crate::error::ComposerError;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use service_core::dtos::{ImageInput, PromptRequest};

/// Values collected from one form submission.
#[derive(Debug, Clone, Default)]
pub struct PromptForm {
    pub prompt: String,
    pub image: Option<ImageUpload>,
}

/// A file picked in the image input.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// Content type declared by the browser for the file.
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl PromptForm {
    /// Build the gateway request. The image is fully base64-encoded here, so
    /// a request never leaves with a partial image.
    pub fn compose(self) -> Result<PromptRequest, ComposerError> {
        if self.prompt.trim().is_empty() {
            return Err(ComposerError::MissingPrompt);
        }

        // Browsers submit an empty part when no file was chosen.
        let image = self
            .image
            .filter(|upload| !upload.bytes.is_empty())
            .map(|upload| ImageInput {
                mime_type: upload.content_type,
                data: STANDARD.encode(&upload.bytes),
            });

        Ok(PromptRequest {
            prompt: self.prompt,
            image,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn upload(bytes: &[u8]) -> ImageUpload {
        ImageUpload {
            content_type: "image/png".to_string(),
            bytes: bytes.to_vec(),
        }
    }

    #[test]
    fn text_only_form_has_no_image() {
        let request = PromptForm {
            prompt: "hello".to_string(),
            image: None,
        }
        .compose()
        .unwrap();

        assert_eq!(request.prompt, "hello");
        assert!(request.image.is_none());
    }

    #[test]
    fn image_is_base64_encoded_with_declared_type() {
        let request = PromptForm {
            prompt: "Describe this image".to_string(),
            image: Some(upload(PNG_HEADER)),
        }
        .compose()
        .unwrap();

        let image = request.image.unwrap();
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.data, "iVBORw0KGgo=");
        assert_eq!(STANDARD.decode(&image.data).unwrap(), PNG_HEADER);
    }

    #[test]
    fn empty_file_counts_as_no_image() {
        let request = PromptForm {
            prompt: "hello".to_string(),
            image: Some(upload(&[])),
        }
        .compose()
        .unwrap();

        assert!(request.image.is_none());
    }

    #[test]
    fn blank_prompt_is_rejected() {
        let err = PromptForm {
            prompt: "   ".to_string(),
            image: Some(upload(PNG_HEADER)),
        }
        .compose()
        .unwrap_err();

        assert!(matches!(err, ComposerError::MissingPrompt));
    }
}
