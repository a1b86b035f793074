//! Error types for the Done queue client.

use thiserror::Error;

/// Errors that may occur while talking to the Done service.
#[derive(Debug, Error)]
pub enum DoneError {
    /// The exchange could not be completed, or a success response body
    /// could not be decoded. Carries the transport error unchanged.
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    /// A response arrived, but its status was outside the success range.
    #[error("{label}: {status} {status_text}")]
    Status {
        label: &'static str,
        status: u16,
        status_text: String,
    },
}

impl DoneError {
    pub(crate) fn from_status(label: &'static str, status: reqwest::StatusCode) -> Self {
        Self::Status {
            label,
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("").to_owned(),
        }
    }
}
