//! Webhook Event Records

use jiff::Timestamp;
use serde_json::Value;

use crate::uuids::TypedUuid;

/// Webhook Event UUID
pub type WebhookEventUuid = TypedUuid<WebhookEventRecord>;

/// Webhook Event Record
#[derive(Debug, Clone, PartialEq)]
pub struct WebhookEventRecord {
    pub uuid: WebhookEventUuid,
    pub topic: Option<String>,
    pub resource_id: Option<String>,
    pub payload: Value,
    pub received_at: Timestamp,
}

/// New Webhook Event Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewWebhookEvent {
    pub uuid: WebhookEventUuid,
    pub payload: Value,
}

impl NewWebhookEvent {
    /// Notification kind, read from `type` or the legacy `topic` field.
    #[must_use]
    pub fn topic(&self) -> Option<String> {
        ["type", "topic"]
            .iter()
            .find_map(|key| self.payload.get(key).and_then(Value::as_str))
            .map(ToString::to_string)
    }

    /// Identifier of the resource the notification refers to.
    ///
    /// Gateways send either `data.id` (string or number) or a `resource` URL/id.
    #[must_use]
    pub fn resource_id(&self) -> Option<String> {
        let data_id = self.payload.get("data").and_then(|data| data.get("id"));

        match data_id.or_else(|| self.payload.get("resource")) {
            Some(Value::String(id)) => Some(id.clone()),
            Some(Value::Number(id)) => Some(id.to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn event(payload: Value) -> NewWebhookEvent {
        NewWebhookEvent {
            uuid: WebhookEventUuid::new(),
            payload,
        }
    }

    #[test]
    fn reads_type_and_numeric_data_id() {
        let event = event(json!({ "type": "payment", "data": { "id": 123_456 } }));

        assert_eq!(event.topic().as_deref(), Some("payment"));
        assert_eq!(event.resource_id().as_deref(), Some("123456"));
    }

    #[test]
    fn falls_back_to_topic_and_resource() {
        let event = event(json!({ "topic": "merchant_order", "resource": "https://example.com/1" }));

        assert_eq!(event.topic().as_deref(), Some("merchant_order"));
        assert_eq!(event.resource_id().as_deref(), Some("https://example.com/1"));
    }

    #[test]
    fn missing_fields_yield_none() {
        let event = event(json!({ "unexpected": true }));

        assert!(event.topic().is_none());
        assert!(event.resource_id().is_none());
    }
}
