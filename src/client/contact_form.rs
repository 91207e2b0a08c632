use crate::error::ClientError;
use crate::request::SubmitContactFormData;

/// Values currently typed into the form controls.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormFields {
    /// Build the request payload, refusing to do so while a visitor field is empty.
    ///
    /// The recipient and email syntax are left to the service.
    pub fn collect(&self, to_email: &str) -> Result<SubmitContactFormData, ClientError> {
        if self.name.is_empty()
            || self.email.is_empty()
            || self.subject.is_empty()
            || self.message.is_empty()
        {
            return Err(ClientError::IncompleteFields);
        }
        Ok(SubmitContactFormData {
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
            subject: Some(self.subject.clone()),
            message: Some(self.message.clone()),
            to_email: Some(to_email.to_string()),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStatus {
    Success,
    Error,
}

/// The single result message displayed under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormMessage {
    pub text: String,
    pub status: MessageStatus,
}

#[derive(Debug, Default)]
pub struct ContactForm {
    pub fields: FormFields,
    message: Option<FormMessage>,
}

impl ContactForm {
    pub fn new(fields: FormFields) -> Self {
        Self {
            fields,
            message: None,
        }
    }

    pub fn message(&self) -> Option<&FormMessage> {
        self.message.as_ref()
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    pub fn show_success(&mut self, text: impl Into<String>) {
        self.message = Some(FormMessage {
            text: text.into(),
            status: MessageStatus::Success,
        });
    }

    pub fn show_error(&mut self, text: impl Into<String>) {
        self.message = Some(FormMessage {
            text: text.into(),
            status: MessageStatus::Error,
        });
    }
}
