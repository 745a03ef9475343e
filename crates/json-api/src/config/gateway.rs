//! Payment Gateway Config

use clap::Args;

use storefront_app::gateway::{MercadoPagoConfig, mercado_pago::DEFAULT_BASE_URL};

/// Mercado Pago settings.
#[derive(Debug, Args)]
pub struct GatewayConfig {
    /// Mercado Pago API address
    #[arg(long, env = "MERCADO_PAGO_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub mercado_pago_base_url: String,

    /// Mercado Pago seller access token
    #[arg(long, env = "MERCADO_PAGO_ACCESS_TOKEN", hide_env_values = true)]
    pub mercado_pago_access_token: String,
}

impl GatewayConfig {
    pub(crate) fn to_gateway_config(&self) -> MercadoPagoConfig {
        MercadoPagoConfig {
            base_url: self.mercado_pago_base_url.clone(),
            access_token: self.mercado_pago_access_token.clone(),
        }
    }
}
