//! Webhook events service errors.

use sqlx::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WebhookEventsServiceError {
    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for WebhookEventsServiceError {
    fn from(error: Error) -> Self {
        Self::Sql(error)
    }
}
