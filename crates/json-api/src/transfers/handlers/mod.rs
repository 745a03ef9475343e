//! Bank Transfer Handlers

pub(crate) mod create;
