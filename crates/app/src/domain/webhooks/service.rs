//! Webhook events service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::webhooks::{
        errors::WebhookEventsServiceError,
        records::{NewWebhookEvent, WebhookEventRecord},
        repository::PgWebhookEventsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgWebhookEventsService {
    db: Db,
    repository: PgWebhookEventsRepository,
}

impl PgWebhookEventsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgWebhookEventsRepository::new(),
        }
    }
}

#[async_trait]
impl WebhookEventsService for PgWebhookEventsService {
    async fn record_event(
        &self,
        event: NewWebhookEvent,
    ) -> Result<WebhookEventRecord, WebhookEventsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let created = self.repository.create_event(&mut tx, &event).await?;

        tx.commit().await?;

        Ok(created)
    }
}

#[automock]
#[async_trait]
pub trait WebhookEventsService: Send + Sync {
    /// Stores a raw gateway notification as received. No reconciliation is performed.
    async fn record_event(
        &self,
        event: NewWebhookEvent,
    ) -> Result<WebhookEventRecord, WebhookEventsServiceError>;
}
