//! Checkout Errors

use thiserror::Error;

use crate::{
    domain::{
        checkout::validation::ValidationError, notifications::NotificationError,
        purchases::PersistenceError,
    },
    gateway::GatewayError,
};

/// Errors surfaced by the checkout flows.
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("invalid request: {0}")]
    Validation(#[from] ValidationError),

    #[error("payment gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("could not record purchase: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("notification could not be delivered: {0}")]
    Notification(#[from] NotificationError),
}
