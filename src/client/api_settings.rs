use crate::constant::{ROUTE_NAMESPACE, SUBMIT_CONTACT_FORM_PATH};
use secrecy::Secret;
use serde::Deserialize;

/// REST root and anti-forgery token handed to the page by the host.
#[derive(Deserialize, Clone)]
pub struct ApiSettings {
    pub root: String,
    pub nonce: Secret<String>,
}

impl ApiSettings {
    pub fn new(root: impl Into<String>, nonce: Secret<String>) -> Self {
        Self {
            root: root.into(),
            nonce,
        }
    }

    pub fn endpoint(&self) -> String {
        let separator = if self.root.ends_with('/') { "" } else { "/" };
        format!(
            "{}{}{}/{}",
            self.root, separator, ROUTE_NAMESPACE, SUBMIT_CONTACT_FORM_PATH
        )
    }
}
