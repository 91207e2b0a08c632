mod submission_result;
mod submit_contact_form_data;

pub use submission_result::SubmissionResult;
pub use submit_contact_form_data::SubmitContactFormData;
