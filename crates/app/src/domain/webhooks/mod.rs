//! Payment gateway webhook events

pub mod errors;
pub mod records;
mod repository;
pub mod service;

pub use errors::WebhookEventsServiceError;
pub use service::*;
