//! Checkout

pub mod errors;
pub mod requests;
pub mod service;
pub mod validation;

pub use errors::CheckoutError;
pub use service::*;
pub use validation::ValidationError;
