use crate::constant::FILL_IN_ALL_FIELDS;
use std::fmt::{Debug, Formatter};

#[derive(thiserror::Error)]
pub enum ClientError {
    #[error("{}", FILL_IN_ALL_FIELDS)]
    IncompleteFields,

    #[error("Failed to build the submission http client.")]
    BuildHttpClientError(#[source] reqwest::Error),

    // Shown to the visitor as is, keep the underlying description.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

impl Debug for ClientError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        crate::error::error_chain_fmt(self, f)
    }
}
