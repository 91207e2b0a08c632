use crate::constant::{MAIL_CONTENT_TYPE, MAIL_SUBJECT_PREFIX};
use crate::domain::{ContactEmail, ContactSubmission};

/// The email handed to a `MailSender` for one contact form submission.
#[derive(Debug, Clone)]
pub struct OutboundEmail {
    pub recipient: ContactEmail,
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
    pub from: String,
    pub reply_to: ContactEmail,
}

impl OutboundEmail {
    /// Only sanitized values reach the bodies, and they are HTML-escaped on the way in.
    pub fn compose(submission: &ContactSubmission) -> Self {
        let name = htmlescape::encode_minimal(submission.name());
        let email = htmlescape::encode_minimal(submission.email().as_ref());
        let subject = htmlescape::encode_minimal(submission.subject());
        let message = nl2br(&htmlescape::encode_minimal(submission.message()));

        let html_body = format!(
            "<p><strong>Name:</strong> {}</p>\
            <p><strong>Email:</strong> {}</p>\
            <p><strong>Subject:</strong> {}</p>\
            <p><strong>Message:</strong><br>{}</p>",
            name, email, subject, message
        );
        let text_body = format!(
            "Name: {}\nEmail: {}\nSubject: {}\nMessage:\n{}",
            submission.name(),
            submission.email(),
            submission.subject(),
            submission.message()
        );

        Self {
            recipient: submission.to_email().clone(),
            subject: format!("{}{}", MAIL_SUBJECT_PREFIX, submission.subject()),
            html_body,
            text_body,
            from: mailbox(submission.name(), submission.email()),
            reply_to: submission.email().clone(),
        }
    }

    /// The mail headers this email stands for.
    ///
    /// The email API takes `From` and `ReplyTo` as body fields and derives the content type
    /// from `HtmlBody`, so these are only logged when sending.
    pub fn headers(&self) -> Vec<String> {
        vec![
            format!("Content-Type: {}", MAIL_CONTENT_TYPE),
            format!("From: {}", self.from),
            format!("Reply-To: {}", self.reply_to),
        ]
    }
}

// Characters that may not appear in an unquoted display name.
const MAILBOX_SPECIALS: &[char] = &[
    '(', ')', '<', '>', '[', ']', ':', ';', '@', '\\', ',', '.', '"',
];

fn mailbox(name: &str, email: &ContactEmail) -> String {
    if name.contains(MAILBOX_SPECIALS) {
        let escaped = name.replace('\\', "\\\\").replace('"', "\\\"");
        format!("\"{}\" <{}>", escaped, email)
    } else {
        format!("{} <{}>", name, email)
    }
}

fn nl2br(text: &str) -> String {
    text.replace('\n', "<br />\n")
}
