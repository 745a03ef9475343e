//! App Context

use std::sync::Arc;

use sqlx::migrate::MigrateError;
use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::{
        checkout::{CheckoutService, DefaultCheckoutService},
        notifications::{
            EmailConfig, HttpMailer, Notifier, NotifierSettings, TelegramConfig, TelegramNotifier,
        },
        purchases::{PgPurchasesService, PurchasesService},
        webhooks::{PgWebhookEventsService, WebhookEventsService},
    },
    gateway::{MercadoPagoConfig, MercadoPagoGateway},
    health::{HealthCheck, PgHealthCheck},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrations(#[source] MigrateError),
}

/// Collaborator settings needed to build the application services.
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub gateway: MercadoPagoConfig,
    pub telegram: TelegramConfig,
    pub email: EmailConfig,
    pub notifier: NotifierSettings,
}

#[derive(Clone)]
pub struct AppContext {
    pub purchases: Arc<dyn PurchasesService>,
    pub checkout: Arc<dyn CheckoutService>,
    pub webhooks: Arc<dyn WebhookEventsService>,
    pub health: Arc<dyn HealthCheck>,
}

impl AppContext {
    /// Wire every service around an open database handle.
    #[must_use]
    pub fn new(db: Db, settings: AppSettings) -> Self {
        let purchases: Arc<dyn PurchasesService> = Arc::new(PgPurchasesService::new(db.clone()));

        let notifier = Notifier::new(
            Arc::new(TelegramNotifier::new(settings.telegram)),
            Arc::new(HttpMailer::new(settings.email)),
            settings.notifier,
        );

        let checkout = DefaultCheckoutService::new(
            purchases.clone(),
            Arc::new(MercadoPagoGateway::new(settings.gateway)),
            notifier,
        );

        Self {
            purchases,
            checkout: Arc::new(checkout),
            webhooks: Arc::new(PgWebhookEventsService::new(db.clone())),
            health: Arc::new(PgHealthCheck::new(db)),
        }
    }

    /// Open the connection pool, optionally applying pending migrations.
    ///
    /// # Errors
    ///
    /// Returns an error when connecting or migrating fails.
    pub async fn connect_database(
        url: &str,
        max_connections: u32,
        run_migrations: bool,
    ) -> Result<Db, AppInitError> {
        let pool = database::connect(url, max_connections)
            .await
            .map_err(AppInitError::Database)?;

        if run_migrations {
            database::migrate(&pool)
                .await
                .map_err(AppInitError::Migrations)?;
        }

        Ok(Db::new(pool))
    }
}
