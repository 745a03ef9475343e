//! Transactional email delivery.

use async_trait::async_trait;
use mockall::automock;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use crate::domain::notifications::NotificationError;

/// A fully rendered email ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingEmail {
    pub to: String,
    pub from: String,
    pub subject: String,
    pub text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
}

#[automock]
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver an email.
    async fn send(&self, email: OutgoingEmail) -> Result<(), NotificationError>;
}

/// Configuration for the transactional email API.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// Endpoint accepting a JSON message, e.g. `"https://api.resend.com/emails"`.
    pub api_url: String,

    /// API key sent as a bearer token.
    pub api_key: String,
}

/// Mailer that posts JSON messages to an HTTP email API.
#[derive(Debug, Clone)]
pub struct HttpMailer {
    config: EmailConfig,
    http: Client,
}

impl HttpMailer {
    #[must_use]
    pub fn new(config: EmailConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<(), NotificationError> {
        let response = self
            .http
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&email)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            return Err(NotificationError::Rejected { status, body });
        }

        debug!(to = %email.to, subject = %email.subject, "email delivered");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn text_only_email_omits_html() -> serde_json::Result<()> {
        let email = OutgoingEmail {
            to: "buyer@example.com".to_string(),
            from: "shop@example.com".to_string(),
            subject: "Hello".to_string(),
            text: "Body".to_string(),
            html: None,
        };

        assert_eq!(
            serde_json::to_value(&email)?,
            json!({
                "to": "buyer@example.com",
                "from": "shop@example.com",
                "subject": "Hello",
                "text": "Body"
            })
        );

        Ok(())
    }
}
