//! Bank Transfers

mod handlers;

pub(crate) use handlers::*;
