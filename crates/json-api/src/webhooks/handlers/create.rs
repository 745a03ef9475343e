//! Payment Webhook Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use storefront_app::domain::webhooks::records::{NewWebhookEvent, WebhookEventUuid};

use crate::extensions::*;

/// Webhook Acknowledgement
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct WebhookAcknowledgement {
    /// Always `received`
    pub status: String,
}

/// Payment Webhook Handler
///
/// Acknowledges every notification with 200. Parseable payloads are stored as received;
/// failures are only logged so the gateway never retries on our account.
#[endpoint(
    tags("webhooks"),
    summary = "Receive Payment Webhook",
    responses(
        (status_code = StatusCode::OK, description = "Notification acknowledged"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<WebhookAcknowledgement>, StatusError> {
    let state = depot.state()?;

    match req.parse_json::<Value>().await {
        Ok(payload) => {
            let event = NewWebhookEvent {
                uuid: WebhookEventUuid::new(),
                payload,
            };

            let topic = event.topic();
            let resource_id = event.resource_id();

            match state.app.webhooks.record_event(event).await {
                Ok(record) => info!(
                    event_uuid = %record.uuid,
                    topic = ?topic,
                    resource_id = ?resource_id,
                    "payment webhook stored"
                ),
                Err(error) => warn!(
                    topic = ?topic,
                    resource_id = ?resource_id,
                    "failed to store payment webhook: {error}"
                ),
            }
        }
        Err(error) => warn!("ignoring unparseable payment webhook: {error}"),
    }

    Ok(Json(WebhookAcknowledgement {
        status: "received".to_string(),
    }))
}
