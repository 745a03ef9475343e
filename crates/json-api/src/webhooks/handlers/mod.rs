//! Webhook Handlers

pub(crate) mod create;
