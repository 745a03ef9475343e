//! Webhook Events Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use serde_json::Value;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as, types::Json};

use crate::domain::webhooks::records::{NewWebhookEvent, WebhookEventRecord, WebhookEventUuid};

const CREATE_WEBHOOK_EVENT_SQL: &str = include_str!("sql/create_webhook_event.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgWebhookEventsRepository;

impl PgWebhookEventsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_event(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        event: &NewWebhookEvent,
    ) -> Result<WebhookEventRecord, sqlx::Error> {
        query_as::<Postgres, WebhookEventRecord>(CREATE_WEBHOOK_EVENT_SQL)
            .bind(event.uuid.into_uuid())
            .bind(event.topic())
            .bind(event.resource_id())
            .bind(Json(&event.payload))
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for WebhookEventRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: WebhookEventUuid::from_uuid(row.try_get("uuid")?),
            topic: row.try_get("topic")?,
            resource_id: row.try_get("resource_id")?,
            payload: row.try_get::<Json<Value>, _>("payload")?.0,
            received_at: row.try_get::<SqlxTimestamp, _>("received_at")?.to_jiff(),
        })
    }
}
