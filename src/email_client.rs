use crate::constant::HEADER_KEY;
use crate::domain::OutboundEmail;
use crate::error::BizErrorEnum;
use async_trait::async_trait;
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;
use std::time::Duration;

/// Anything able to deliver a composed contact form email.
#[async_trait]
pub trait MailSender: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<(), BizErrorEnum>;
}

/// `MailSender` backed by a Postmark-style HTTP email API.
#[derive(Debug)]
pub struct EmailClient {
    http_client: Client,
    base_url: Url,
    authorization_token: Secret<String>,
}

impl EmailClient {
    pub fn new(
        base_url: String,
        authorization_token: Secret<String>,
        timeout: Duration,
    ) -> Result<Self, BizErrorEnum> {
        let base_url = Url::parse(&base_url).map_err(|e| {
            tracing::error!("Failed to parse url: url={}, e={:?}", base_url, e);
            BizErrorEnum::ParseUrlError
        })?;
        let http_client = Client::builder()
            // timeout is a MUST option for client
            .timeout(timeout)
            .build()
            .map_err(BizErrorEnum::BuildHttpClientError)?;
        Ok(EmailClient {
            http_client,
            base_url,
            authorization_token,
        })
    }

    #[tracing::instrument(
        name = "Sending an email through the email API",
        skip(self, email),
        fields(recipient = %email.recipient)
    )]
    pub async fn send_email(&self, email: &OutboundEmail) -> Result<(), BizErrorEnum> {
        let url = self.base_url.join("/email").map_err(|e| {
            tracing::error!("Url failed to join /email: {:?}", e);
            BizErrorEnum::JoinUrlError
        })?;
        tracing::debug!(headers = ?email.headers(), "Composed contact form email");

        let request_body = SendEmailRequest {
            from: &email.from,
            to: email.recipient.as_ref(),
            reply_to: email.reply_to.as_ref(),
            subject: &email.subject,
            html_body: &email.html_body,
            text_body: &email.text_body,
        };
        self.http_client
            .post(url)
            .header(HEADER_KEY, self.authorization_token.expose_secret())
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send email: {:?}", e);
                BizErrorEnum::SendEmailError(e)
            })?
            .error_for_status()
            .map_err(|e| {
                tracing::error!("Email API rejected the email: {:?}", e);
                BizErrorEnum::SendEmailError(e)
            })?;
        Ok(())
    }
}

#[async_trait]
impl MailSender for EmailClient {
    async fn send(&self, email: &OutboundEmail) -> Result<(), BizErrorEnum> {
        self.send_email(email).await
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    reply_to: &'a str,
    subject: &'a str,
    html_body: &'a str,
    text_body: &'a str,
}
