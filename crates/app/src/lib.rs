//! Storefront domain, persistence and external collaborators.

pub mod context;
pub mod database;
pub mod domain;
pub mod gateway;
pub mod health;

#[cfg(test)]
mod test;

mod uuids;
