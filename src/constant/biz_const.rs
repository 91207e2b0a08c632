/// environment variable
pub const LOCAL_ENVIRONMENT: &str = "local";
pub const PRODUCTION_ENVIRONMENT: &str = "production";

/// http request header's key
pub const HEADER_KEY: &str = "X-Postmark-Server-Token";
pub const ANTI_FORGERY_HEADER_KEY: &str = "X-WP-Nonce";

/// contact form route, relative to the REST root
pub const ROUTE_NAMESPACE: &str = "demo-theme/v1";
pub const SUBMIT_CONTACT_FORM_PATH: &str = "submit-contact-form";

/// outbound email
pub const MAIL_SUBJECT_PREFIX: &str = "Contact Form Submission: ";
pub const MAIL_CONTENT_TYPE: &str = "text/html; charset=UTF-8";

/// submission result messages
pub const ALL_FIELDS_REQUIRED: &str = "All fields are required.";
pub const INVALID_EMAIL_FORMAT: &str = "Invalid email format.";
pub const INVALID_REQUEST_PAYLOAD: &str = "Invalid request payload.";
pub const EMAIL_SENT: &str = "Email sent successfully!";
pub const EMAIL_NOT_SENT: &str = "Failed to send email.";

/// shown by the client before any request is made
pub const FILL_IN_ALL_FIELDS: &str = "Please fill in all fields.";
