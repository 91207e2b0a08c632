use crate::domain::contact_submission::InvalidReason;

/// A sanitized email address that passed syntax validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEmail(String);
impl ContactEmail {
    /// Expects an already sanitized address.
    pub fn parse(email: String) -> Result<Self, InvalidReason> {
        if !validator::validate_email(&email) {
            return Err(InvalidReason::EmailFormatWrong);
        }
        Ok(Self(email))
    }
}

impl AsRef<str> for ContactEmail {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for ContactEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
