mod contact_email;
mod contact_submission;
mod outbound_email;
mod sanitize;

pub use contact_email::ContactEmail;
pub use contact_submission::{ContactSubmission, InvalidReason};
pub use outbound_email::OutboundEmail;
pub use sanitize::{sanitize_email, sanitize_text_field, sanitize_textarea_field};
