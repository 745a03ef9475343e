//! Order Confirmation Handlers

pub(crate) mod create;
