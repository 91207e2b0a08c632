use crate::constant::EMAIL_SENT;
use crate::domain::{ContactSubmission, OutboundEmail};
use crate::email_client::MailSender;
use crate::error::SubmitContactFormError;
use crate::request::{SubmissionResult, SubmitContactFormData};
use actix_web::{web, HttpResponse};

#[tracing::instrument(
    name = "Handling a contact form submission",
    skip(body, mail_sender),
    fields(
        sender_email = tracing::field::Empty,
        recipient_email = tracing::field::Empty
    )
)]
pub async fn submit_contact_form(
    body: web::Json<SubmitContactFormData>,
    mail_sender: web::Data<dyn MailSender>,
) -> Result<HttpResponse, SubmitContactFormError> {
    let submission: ContactSubmission = body.into_inner().try_into().map_err(|e| {
        tracing::warn!("Rejected contact form submission: {}", e);
        SubmitContactFormError::ValidationError(e)
    })?;
    tracing::Span::current()
        .record("sender_email", &tracing::field::display(submission.email()))
        .record("recipient_email", &tracing::field::display(submission.to_email()));

    let email = OutboundEmail::compose(&submission);
    mail_sender
        .send(&email)
        .await
        .map_err(SubmitContactFormError::DeliveryError)?;

    tracing::info!("Contact form email sent.");
    Ok(HttpResponse::Ok().json(SubmissionResult::success(EMAIL_SENT)))
}
