//! The browser side of the contact form: render-time configuration, form state,
//! and the client that submits the form to the service.

mod api_settings;
mod contact_form;
mod form_config;
mod submission_client;

pub use api_settings::ApiSettings;
pub use contact_form::{ContactForm, FormFields, FormMessage, MessageStatus};
pub use form_config::FormConfig;
pub use submission_client::SubmissionClient;
