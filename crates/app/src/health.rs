//! Dependency health probes.

use async_trait::async_trait;
use mockall::automock;

use crate::database::Db;

#[automock]
#[async_trait]
pub trait HealthCheck: Send + Sync {
    /// Confirm the database answers queries.
    async fn database(&self) -> Result<(), sqlx::Error>;
}

#[derive(Debug, Clone)]
pub struct PgHealthCheck {
    db: Db,
}

impl PgHealthCheck {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HealthCheck for PgHealthCheck {
    async fn database(&self) -> Result<(), sqlx::Error> {
        self.db.ping().await
    }
}
