use crate::domain::{
    sanitize_email, sanitize_text_field, sanitize_textarea_field, ContactEmail, ContactSubmission,
    InvalidReason,
};
use serde::{Deserialize, Serialize};

/// Wire payload of a contact form submission.
///
/// A missing or `null` field decodes as `None` and is rejected like an empty one,
/// any other shape mismatch fails the decode.
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SubmitContactFormData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_email: Option<String>,
}

impl TryFrom<SubmitContactFormData> for ContactSubmission {
    type Error = InvalidReason;

    fn try_from(data: SubmitContactFormData) -> Result<Self, Self::Error> {
        let name = sanitize_text_field(data.name.as_deref().unwrap_or_default());
        let email = sanitize_email(data.email.as_deref().unwrap_or_default());
        let subject = sanitize_text_field(data.subject.as_deref().unwrap_or_default());
        let message = sanitize_textarea_field(data.message.as_deref().unwrap_or_default());
        let to_email = sanitize_email(data.to_email.as_deref().unwrap_or_default());

        if [&name, &email, &subject, &message, &to_email]
            .iter()
            .any(|field| field.is_empty())
        {
            return Err(InvalidReason::FieldsMissing);
        }

        let email = ContactEmail::parse(email)?;
        let to_email = ContactEmail::parse(to_email)?;
        Ok(ContactSubmission::new(name, email, subject, message, to_email))
    }
}
