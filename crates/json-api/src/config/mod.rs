//! Server configuration module

use clap::Parser;

use storefront_app::context::AppSettings;

use crate::config::{
    db::DatabaseConfig,
    gateway::GatewayConfig,
    logging::LoggingConfig,
    notifications::{BankConfig, EmailSettings, TelegramSettings},
    server::ServerRuntimeConfig,
};

pub(crate) mod db;
pub(crate) mod gateway;
pub(crate) mod logging;
pub(crate) mod notifications;
pub(crate) mod server;

/// Storefront JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "storefront-json", about = "Storefront JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Payment gateway settings.
    #[command(flatten)]
    pub gateway: GatewayConfig,

    /// Chat notification settings.
    #[command(flatten)]
    pub telegram: TelegramSettings,

    /// Email delivery settings.
    #[command(flatten)]
    pub email: EmailSettings,

    /// Bank account shown in transfer instructions.
    #[command(flatten)]
    pub bank: BankConfig,

    /// Deployment environment reported by the health endpoints.
    #[arg(long, env = "APP_ENV", default_value = "development")]
    pub environment: String,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }

    /// Collaborator settings for the application context.
    #[must_use]
    pub fn app_settings(&self) -> AppSettings {
        AppSettings {
            gateway: self.gateway.to_gateway_config(),
            telegram: self.telegram.to_telegram_config(),
            email: self.email.to_email_config(),
            notifier: notifications::notifier_settings(&self.telegram, &self.email, &self.bank),
        }
    }
}
