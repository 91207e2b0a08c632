use crate::client::{ApiSettings, ContactForm, FormConfig};
use crate::constant::ANTI_FORGERY_HEADER_KEY;
use crate::error::ClientError;
use crate::request::{SubmissionResult, SubmitContactFormData};
use reqwest::Client;
use secrecy::ExposeSecret;
use std::time::Duration;

/// Submits a rendered contact form to the service and reflects the outcome in the form.
pub struct SubmissionClient {
    http_client: Client,
    settings: ApiSettings,
    config: FormConfig,
}

impl SubmissionClient {
    pub fn new(
        settings: ApiSettings,
        config: FormConfig,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ClientError::BuildHttpClientError)?;
        Ok(Self {
            http_client,
            settings,
            config,
        })
    }

    /// Handle one submit of `form`.
    ///
    /// Never fails: every outcome ends up as the form's message.
    #[tracing::instrument(name = "Submitting the contact form", skip(self, form))]
    pub async fn submit(&self, form: &mut ContactForm) {
        form.clear_message();

        let payload = match form.fields.collect(&self.config.to_email) {
            Ok(payload) => payload,
            Err(e) => {
                form.show_error(e.to_string());
                return;
            }
        };

        match self.dispatch(&payload).await {
            Ok(result) if result.success => {
                form.show_success(self.config.success_message.as_str());
                form.fields.reset();
            }
            Ok(result) => {
                form.show_error(with_detail(
                    &self.config.error_message,
                    result.message.as_deref(),
                ));
            }
            Err(e) => {
                tracing::error!("Error submitting form: {:?}", e);
                form.show_error(with_detail(
                    &self.config.error_message,
                    Some(&e.to_string()),
                ));
            }
        }
    }

    // The body is read whatever the status code is, failures carry their reason in it.
    async fn dispatch(
        &self,
        payload: &SubmitContactFormData,
    ) -> Result<SubmissionResult, ClientError> {
        let result = self
            .http_client
            .post(self.settings.endpoint())
            .header(ANTI_FORGERY_HEADER_KEY, self.settings.nonce.expose_secret())
            .json(payload)
            .send()
            .await?
            .json::<SubmissionResult>()
            .await?;
        Ok(result)
    }
}

fn with_detail(message: &str, detail: Option<&str>) -> String {
    match detail {
        Some(detail) if !detail.is_empty() => format!("{} ({})", message, detail),
        _ => message.to_string(),
    }
}
