//! Notifications

pub mod email;
pub mod errors;
pub mod fanout;
pub mod messages;
pub mod models;
pub mod telegram;

pub use email::{EmailConfig, HttpMailer, Mailer, MockMailer, OutgoingEmail};
pub use errors::NotificationError;
pub use fanout::{Notifier, NotifierSettings};
pub use telegram::{ChatNotifier, MockChatNotifier, TelegramConfig, TelegramNotifier};
