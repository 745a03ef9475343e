//! Order Confirmations

mod handlers;

pub(crate) use handlers::*;
