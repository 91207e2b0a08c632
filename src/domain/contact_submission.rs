use crate::constant::{ALL_FIELDS_REQUIRED, INVALID_EMAIL_FORMAT};
use crate::domain::ContactEmail;

/// A contact form submission whose fields are sanitized and validated.
#[derive(Debug)]
pub struct ContactSubmission {
    name: String,
    email: ContactEmail,
    subject: String,
    message: String,
    to_email: ContactEmail,
}
impl ContactSubmission {
    pub fn new(
        name: String,
        email: ContactEmail,
        subject: String,
        message: String,
        to_email: ContactEmail,
    ) -> Self {
        Self {
            name,
            email,
            subject,
            message,
            to_email,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &ContactEmail {
        &self.email
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn to_email(&self) -> &ContactEmail {
        &self.to_email
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    FieldsMissing,
    EmailFormatWrong,
}
impl InvalidReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvalidReason::FieldsMissing => ALL_FIELDS_REQUIRED,
            InvalidReason::EmailFormatWrong => INVALID_EMAIL_FORMAT,
        }
    }
}

impl std::fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
