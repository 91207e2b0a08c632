use crate::constant::{EMAIL_NOT_SENT, INVALID_REQUEST_PAYLOAD};
use crate::domain::InvalidReason;
use crate::error::BizErrorEnum;
use crate::request::SubmissionResult;
use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use std::fmt::{Debug, Formatter};

#[derive(thiserror::Error)]
pub enum SubmitContactFormError {
    #[error("{0}")]
    ValidationError(InvalidReason),

    #[error("{}", INVALID_REQUEST_PAYLOAD)]
    MalformedPayload(#[source] JsonPayloadError),

    #[error("{}", EMAIL_NOT_SENT)]
    DeliveryError(#[source] BizErrorEnum),
}

// We are still using a bespoke implementation of `Debug`
// to get a nice report using the error source chain
impl Debug for SubmitContactFormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        crate::error::error_chain_fmt(self, f)
    }
}

impl ResponseError for SubmitContactFormError {
    fn status_code(&self) -> StatusCode {
        match self {
            SubmitContactFormError::ValidationError(_)
            | SubmitContactFormError::MalformedPayload(_) => StatusCode::BAD_REQUEST,
            SubmitContactFormError::DeliveryError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    // Every failure still answers with a `SubmissionResult` body,
    // the client reads it whatever the status code is.
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(SubmissionResult::failure(self.to_string()))
    }
}
