//! Telegram Bot API chat notifier.

use async_trait::async_trait;
use mockall::automock;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::notifications::NotificationError;

/// Default Telegram Bot API address.
pub const DEFAULT_API_BASE: &str = "https://api.telegram.org";

#[automock]
#[async_trait]
pub trait ChatNotifier: Send + Sync {
    /// Post a plain-text message to a chat.
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), NotificationError>;
}

/// Configuration for the Telegram Bot API.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// API address, e.g. `"https://api.telegram.org"`.
    pub api_base: String,

    /// Bot token issued by `BotFather`.
    pub bot_token: String,
}

#[derive(Debug, Clone)]
pub struct TelegramNotifier {
    config: TelegramConfig,
    http: Client,
}

impl TelegramNotifier {
    #[must_use]
    pub fn new(config: TelegramConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    fn send_message_url(&self) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.config.api_base.trim_end_matches('/'),
            self.config.bot_token
        )
    }
}

#[async_trait]
impl ChatNotifier for TelegramNotifier {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), NotificationError> {
        let response = self
            .http
            .post(self.send_message_url())
            .json(&SendMessageBody { chat_id, text })
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            return Err(NotificationError::Rejected { status, body });
        }

        let parsed: SendMessageResponse = response.json().await?;

        if !parsed.ok {
            return Err(NotificationError::UnexpectedResponse(
                parsed
                    .description
                    .unwrap_or_else(|| "telegram reported failure".to_string()),
            ));
        }

        debug!(chat_id, "telegram message delivered");

        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct SendMessageBody<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendMessageResponse {
    ok: bool,
    description: Option<String>,
}
