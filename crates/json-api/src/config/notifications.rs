//! Notification Config

use clap::Args;

use storefront_app::domain::notifications::{
    EmailConfig, NotifierSettings, TelegramConfig, models::BankDetails,
    telegram::DEFAULT_API_BASE,
};

/// Telegram bot settings.
#[derive(Debug, Args)]
pub struct TelegramSettings {
    /// Telegram Bot API address
    #[arg(long, env = "TELEGRAM_API_BASE", default_value = DEFAULT_API_BASE)]
    pub telegram_api_base: String,

    /// Telegram bot token
    #[arg(long, env = "TELEGRAM_BOT_TOKEN", hide_env_values = true)]
    pub telegram_bot_token: String,

    /// Chat that receives sale announcements
    #[arg(long, env = "TELEGRAM_CHAT_ID")]
    pub telegram_chat_id: String,
}

impl TelegramSettings {
    pub(crate) fn to_telegram_config(&self) -> TelegramConfig {
        TelegramConfig {
            api_base: self.telegram_api_base.clone(),
            bot_token: self.telegram_bot_token.clone(),
        }
    }
}

/// Transactional email settings.
#[derive(Debug, Args)]
pub struct EmailSettings {
    /// Email API endpoint
    #[arg(long, env = "EMAIL_API_URL", default_value = "https://api.resend.com/emails")]
    pub email_api_url: String,

    /// Email API key
    #[arg(long, env = "EMAIL_API_KEY", hide_env_values = true)]
    pub email_api_key: String,

    /// Sender address for customer emails
    #[arg(long, env = "EMAIL_SENDER")]
    pub email_sender: String,
}

impl EmailSettings {
    pub(crate) fn to_email_config(&self) -> EmailConfig {
        EmailConfig {
            api_url: self.email_api_url.clone(),
            api_key: self.email_api_key.clone(),
        }
    }
}

/// Bank account details for transfer instructions.
#[derive(Debug, Args)]
pub struct BankConfig {
    /// Account holder name
    #[arg(long, env = "BANK_ACCOUNT_HOLDER", default_value = "")]
    pub bank_account_holder: String,

    /// Bank name
    #[arg(long, env = "BANK_NAME", default_value = "")]
    pub bank_name: String,

    /// Account number
    #[arg(long, env = "BANK_ACCOUNT_NUMBER", default_value = "")]
    pub bank_account_number: String,

    /// Account alias
    #[arg(long, env = "BANK_ACCOUNT_ALIAS", default_value = "")]
    pub bank_account_alias: String,
}

pub(crate) fn notifier_settings(
    telegram: &TelegramSettings,
    email: &EmailSettings,
    bank: &BankConfig,
) -> NotifierSettings {
    NotifierSettings {
        chat_id: telegram.telegram_chat_id.clone(),
        sender: email.email_sender.clone(),
        bank: BankDetails {
            holder: bank.bank_account_holder.clone(),
            bank: bank.bank_name.clone(),
            account: bank.bank_account_number.clone(),
            alias: bank.bank_account_alias.clone(),
        },
    }
}
