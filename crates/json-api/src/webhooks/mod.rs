//! Gateway Webhooks

mod handlers;

pub(crate) use handlers::*;
