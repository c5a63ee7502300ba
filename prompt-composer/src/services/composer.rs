use crate::error::ComposerError;
use crate::models::PromptForm;
use crate::services::{GatewayClient, InFlightForms};
use uuid::Uuid;

/// Turns a submitted form into exactly one gateway call.
pub struct Composer {
    client: GatewayClient,
    in_flight: InFlightForms,
}

impl Composer {
    pub fn new(client: GatewayClient) -> Self {
        Self {
            client,
            in_flight: InFlightForms::new(),
        }
    }

    pub fn in_flight(&self) -> &InFlightForms {
        &self.in_flight
    }

    /// Claim the form, encode it, call the gateway once and return the body
    /// verbatim. The claim is released when this returns, success or not.
    pub async fn submit(
        &self,
        form_id: Uuid,
        form: PromptForm,
        request_id: Option<&str>,
    ) -> Result<String, ComposerError> {
        let _claim = self
            .in_flight
            .try_claim(form_id)
            .ok_or(ComposerError::AlreadySubmitting)?;

        let request = form.compose()?;

        tracing::info!(
            form_id = %form_id,
            has_image = request.image.is_some(),
            gateway = %self.client.generate_url(),
            "Submitting prompt to gateway"
        );

        self.client.generate(&request, request_id).await
    }
}
