//! Notification Errors

use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned while delivering a notification.
#[derive(Debug, Error)]
pub enum NotificationError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The delivery API answered with a non-success status.
    #[error("delivery failed with status {status}: {body}")]
    Rejected { status: StatusCode, body: String },

    /// The delivery API answered successfully but reported a failure.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}
