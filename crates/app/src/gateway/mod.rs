//! Payment gateway collaborator.

pub mod errors;
pub mod mercado_pago;
pub mod models;

use async_trait::async_trait;
use mockall::automock;

pub use errors::GatewayError;
pub use mercado_pago::{MercadoPagoConfig, MercadoPagoGateway};

use crate::gateway::models::{Charge, ChargeRequest};

#[automock]
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Charge a tokenised card and return the processor's verdict.
    async fn charge(&self, request: ChargeRequest) -> Result<Charge, GatewayError>;
}
