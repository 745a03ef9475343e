//! Notification fan-out across chat and email.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::notifications::{
    ChatNotifier, Mailer, NotificationError, OutgoingEmail,
    messages::{
        order_confirmation_email, sale_chat_message, sale_confirmation_email,
        transfer_chat_message, transfer_instructions_email,
    },
    models::{
        BankDetails, Delivery, FanOutReport, OrderConfirmation, RenderedEmail, SaleNotice,
        TransferNotice,
    },
};

/// Addresses and account details used when rendering notifications.
#[derive(Debug, Clone, Default)]
pub struct NotifierSettings {
    /// Chat that receives shop-owner announcements.
    pub chat_id: String,

    /// Sender address for customer emails.
    pub sender: String,

    /// Account customers transfer to.
    pub bank: BankDetails,
}

#[derive(Clone)]
pub struct Notifier {
    chat: Arc<dyn ChatNotifier>,
    mailer: Arc<dyn Mailer>,
    settings: Arc<NotifierSettings>,
}

impl Notifier {
    #[must_use]
    pub fn new(
        chat: Arc<dyn ChatNotifier>,
        mailer: Arc<dyn Mailer>,
        settings: NotifierSettings,
    ) -> Self {
        Self {
            chat,
            mailer,
            settings: Arc::new(settings),
        }
    }

    fn address(&self, to: &str, rendered: RenderedEmail) -> OutgoingEmail {
        OutgoingEmail {
            to: to.to_string(),
            from: self.settings.sender.clone(),
            subject: rendered.subject,
            text: rendered.text,
            html: rendered.html,
        }
    }

    async fn chat(&self, text: &str) -> Delivery {
        match self.chat.send_message(&self.settings.chat_id, text).await {
            Ok(()) => Delivery::Sent,
            Err(error) => {
                warn!(%error, "chat notification failed");

                Delivery::Failed(error.to_string())
            }
        }
    }

    /// Announce an approved sale on chat and email the customer a receipt.
    ///
    /// Both channels are attempted independently and failures are only logged.
    pub async fn sale_confirmed(&self, sale: &SaleNotice) -> FanOutReport {
        let chat = self.chat(&sale_chat_message(sale)).await;

        let email = match sale.customer_email.as_deref().filter(|to| !to.is_empty()) {
            Some(to) => {
                let email = self.address(to, sale_confirmation_email(sale));

                match self.mailer.send(email).await {
                    Ok(()) => Delivery::Sent,
                    Err(error) => {
                        warn!(%error, payment_id = %sale.payment_id, "sale receipt email failed");

                        Delivery::Failed(error.to_string())
                    }
                }
            }
            None => Delivery::Skipped,
        };

        info!(
            payment_id = %sale.payment_id,
            chat_sent = chat.is_sent(),
            email_sent = email.is_sent(),
            "sale notifications dispatched"
        );

        FanOutReport { chat, email }
    }

    /// Email bank transfer instructions to the customer.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError`] when the email could not be delivered.
    pub async fn transfer_instructions(
        &self,
        transfer: &TransferNotice,
    ) -> Result<(), NotificationError> {
        let rendered = transfer_instructions_email(transfer, &self.settings.bank);

        self.mailer
            .send(self.address(&transfer.customer_email, rendered))
            .await
    }

    /// Announce a registered bank transfer on chat. Failures are only logged.
    pub async fn transfer_registered(&self, transfer: &TransferNotice) -> Delivery {
        self.chat(&transfer_chat_message(transfer)).await
    }

    /// Email an order confirmation to the customer.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError`] when the email could not be delivered.
    pub async fn order_confirmation(
        &self,
        order: &OrderConfirmation,
    ) -> Result<(), NotificationError> {
        let rendered = order_confirmation_email(order);

        self.mailer
            .send(self.address(&order.customer_email, rendered))
            .await
    }
}
