//! Storefront Domain Concerns

pub mod checkout;
pub mod notifications;
pub mod purchases;
pub mod webhooks;
