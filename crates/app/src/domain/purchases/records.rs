//! Purchase Records

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::uuids::TypedUuid;

/// Payment method recorded for bank transfers.
pub const TRANSFER_PAYMENT_METHOD: &str = "transfer";

/// Status recorded for bank transfers awaiting reconciliation.
pub const PENDING_PAYMENT_STATUS: &str = "pending";

/// Description recorded for bank transfers.
pub const BANK_TRANSFER_DESCRIPTION: &str = "Bank transfer";

/// Purchase UUID
pub type PurchaseUuid = TypedUuid<PurchaseRecord>;

/// Purchase Record
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseRecord {
    pub uuid: PurchaseUuid,
    pub payment_id: String,
    pub amount: Decimal,
    pub net_amount: Option<Decimal>,
    pub customer_email: String,
    pub payment_method: String,
    pub payment_status: String,
    pub description: Option<String>,
    pub purchase_date: Timestamp,
    pub card_type: Option<String>,
    pub installments: Option<i32>,
    pub card_last_digits: Option<String>,
    pub items: Vec<PurchaseItemRecord>,
    pub created_at: Timestamp,
}

/// Purchase Item UUID
pub type PurchaseItemUuid = TypedUuid<PurchaseItemRecord>;

/// Purchase Item Record
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseItemRecord {
    pub uuid: PurchaseItemUuid,
    pub purchase_uuid: PurchaseUuid,
    pub product_name: String,
    pub quantity: i32,
    pub price: Decimal,
    pub created_at: Timestamp,
}
