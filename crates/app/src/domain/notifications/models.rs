//! Notification Models

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::domain::purchases::data::NewPurchaseItem;

/// An approved card sale, as announced to the shop owner and the customer.
#[derive(Debug, Clone, PartialEq)]
pub struct SaleNotice {
    pub payment_id: String,
    pub amount: Decimal,
    pub net_amount: Option<Decimal>,
    pub status: String,
    pub payment_method: String,
    pub card_type: Option<String>,
    pub customer_email: Option<String>,
    pub description: Option<String>,
    pub date: Timestamp,
    pub installments: Option<i32>,
    pub card_last_digits: Option<String>,
}

/// A bank transfer awaiting the customer's payment.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferNotice {
    pub reference: String,
    pub amount: Decimal,
    pub customer_email: String,
    pub items: Vec<NewPurchaseItem>,
}

/// An order confirmation requested outside the payment flows.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderConfirmation {
    pub order_id: String,
    pub customer_email: String,
    pub items: Vec<NewPurchaseItem>,
    pub total: Decimal,
}

/// Bank account the customer transfers to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BankDetails {
    pub holder: String,
    pub bank: String,
    pub account: String,
    pub alias: String,
}

/// Subject and bodies of an email before addressing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEmail {
    pub subject: String,
    pub text: String,
    pub html: Option<String>,
}

/// Outcome of a single best-effort delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Sent,
    Skipped,
    Failed(String),
}

impl Delivery {
    #[must_use]
    pub fn is_sent(&self) -> bool {
        matches!(self, Self::Sent)
    }
}

/// Per-channel result of the sale fan-out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FanOutReport {
    pub chat: Delivery,
    pub email: Delivery,
}
