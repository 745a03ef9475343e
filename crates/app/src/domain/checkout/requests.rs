//! Checkout Requests

use rust_decimal::Decimal;

use crate::{
    domain::purchases::{data::NewPurchaseItem, records::PurchaseUuid},
    gateway::models::ChargeStatus,
};

/// Charge description used when the request does not carry one.
pub const DEFAULT_DESCRIPTION: &str = "Product purchase";

/// Installment count used when the request does not carry one.
pub const DEFAULT_INSTALLMENTS: i32 = 1;

/// Prefix of locally generated bank transfer references.
pub const TRANSFER_REFERENCE_PREFIX: &str = "TRANSFER-";

/// Payer details attached to a card payment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayerDetails {
    pub email: String,
    pub identification_type: Option<String>,
    pub identification_number: Option<String>,
}

/// Card Payment Request
#[derive(Debug, Clone, PartialEq)]
pub struct CardPaymentRequest {
    pub token: String,
    pub amount: Decimal,
    pub installments: Option<i32>,
    pub payment_method_id: String,
    pub description: Option<String>,
    pub payer: PayerDetails,
    pub items: Vec<NewPurchaseItem>,
}

/// Card Payment Outcome
///
/// Mirrors the gateway's verdict. `purchase` is set only when the charge was approved
/// and recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct CardPaymentOutcome {
    pub status: ChargeStatus,
    pub status_detail: Option<String>,
    pub id: String,
    pub transaction_amount: Decimal,
    pub purchase: Option<PurchaseUuid>,
}

/// Bank Transfer Request
#[derive(Debug, Clone, PartialEq)]
pub struct BankTransferRequest {
    pub amount: Decimal,
    pub customer_email: String,
    pub items: Vec<NewPurchaseItem>,
}

/// Bank Transfer Outcome
#[derive(Debug, Clone, PartialEq)]
pub struct BankTransferOutcome {
    pub reference: String,
    pub purchase: PurchaseUuid,
    pub amount: Decimal,
}

/// Order Confirmation Request
#[derive(Debug, Clone, PartialEq)]
pub struct OrderConfirmationRequest {
    pub email: String,
    pub order_id: String,
    pub items: Vec<NewPurchaseItem>,
    pub total: Decimal,
}
