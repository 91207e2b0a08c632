//! Normalization of visitor input before it is validated or embedded in an email.
//!
//! Every function here is idempotent: feeding its output back in returns it unchanged.

use once_cell::sync::Lazy;
use regex::Regex;

// `<script>` and `<style>` lose their content too, not only the tags.
static SCRIPT_OR_STYLE_ELEMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<(script|style)\b[^>]*>.*?</(script|style)\s*>").unwrap()
});

// A `<` only opens a tag when a name, a closing slash, a comment or a
// processing instruction follows it. `a < b` is left alone.
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[a-zA-Z/!?][^>]*>").unwrap());

const EMAIL_SPECIAL_CHARACTERS: [char; 21] = [
    '!', '#', '$', '%', '&', '\'', '*', '+', '/', '=', '?', '^', '_', '`', '{', '|', '}', '~',
    '.', '@', '-',
];

/// Sanitize a single-line text field such as a name or a subject.
///
/// Control characters are removed (whitespace ones turn into spaces), markup is
/// stripped and whitespace runs collapse into a single space.
pub fn sanitize_text_field(input: &str) -> String {
    let without_controls: String = input
        .chars()
        .filter_map(|c| {
            if c.is_whitespace() {
                Some(' ')
            } else if c.is_control() {
                None
            } else {
                Some(c)
            }
        })
        .collect();
    strip_all_tags(&without_controls)
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}

/// Sanitize a multi-line text field, keeping its line breaks.
pub fn sanitize_textarea_field(input: &str) -> String {
    let normalized = input.replace("\r\n", "\n").replace('\r', "\n");
    let without_controls: String = normalized
        .chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect();
    strip_all_tags(&without_controls).trim().to_string()
}

/// Sanitize an email address by dropping every character an address cannot contain.
///
/// Syntax is not judged here, see `ContactEmail::parse`.
pub fn sanitize_email(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_alphanumeric() || EMAIL_SPECIAL_CHARACTERS.contains(c))
        .collect()
}

/// Removing a tag can bring the pieces of another one together (`<<b>i>`),
/// so keep stripping until nothing changes.
fn strip_all_tags(input: &str) -> String {
    let mut current = input.to_string();
    loop {
        let stripped = SCRIPT_OR_STYLE_ELEMENT.replace_all(&current, "");
        let stripped = TAG.replace_all(&stripped, "").into_owned();
        if stripped == current {
            return current;
        }
        current = stripped;
    }
}
