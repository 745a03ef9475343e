//! Purchase Data

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::domain::purchases::records::PurchaseUuid;

/// New Purchase Item Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewPurchaseItem {
    pub product_name: String,
    pub quantity: i32,
    pub price: Decimal,
}

/// Card metadata reported by the payment gateway.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardDetails {
    pub card_type: Option<String>,
    pub installments: Option<i32>,
    pub last_digits: Option<String>,
}

/// New Card Payment Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewCardPayment {
    pub uuid: PurchaseUuid,
    pub payment_id: String,
    pub amount: Decimal,
    pub net_amount: Option<Decimal>,
    pub customer_email: String,
    pub payment_method: String,
    pub payment_status: String,
    pub description: Option<String>,
    pub purchase_date: Timestamp,
    pub card: CardDetails,
    pub items: Vec<NewPurchaseItem>,
}

/// New Bank Transfer Data
///
/// Method, status and description are fixed by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBankTransfer {
    pub uuid: PurchaseUuid,
    pub payment_id: String,
    pub amount: Decimal,
    pub customer_email: String,
    pub purchase_date: Timestamp,
    pub items: Vec<NewPurchaseItem>,
}
