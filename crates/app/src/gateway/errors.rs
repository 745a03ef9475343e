//! Payment gateway errors.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned while charging through the payment gateway.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The gateway refused to process the charge.
    #[error("gateway rejected the charge with status {status}: {message}")]
    Rejected { status: StatusCode, message: String },
}

impl GatewayError {
    /// Detail suitable for returning to the caller.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::Http(_) => "payment gateway unavailable".to_string(),
            Self::Rejected { message, .. } => message.clone(),
        }
    }
}
