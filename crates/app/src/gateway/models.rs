//! Payment gateway models.

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identification document type sent when the payer does not provide one.
pub const DEFAULT_IDENTIFICATION_TYPE: &str = "DNI";

/// Charge Request
#[derive(Debug, Clone, PartialEq)]
pub struct ChargeRequest {
    pub token: String,
    pub amount: Decimal,
    pub installments: i32,
    pub payment_method_id: String,
    pub description: String,
    pub payer: Payer,
}

/// Payer details forwarded to the gateway.
#[derive(Debug, Clone, PartialEq)]
pub struct Payer {
    pub email: String,
    pub identification_type: String,
    pub identification_number: Option<String>,
}

/// Charge status reported by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargeStatus {
    Pending,
    Approved,
    Authorized,
    InProcess,
    InMediation,
    Rejected,
    Cancelled,
    Refunded,
    ChargedBack,
    #[serde(other)]
    Unknown,
}

impl ChargeStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Authorized => "authorized",
            Self::InProcess => "in_process",
            Self::InMediation => "in_mediation",
            Self::Rejected => "rejected",
            Self::Cancelled => "cancelled",
            Self::Refunded => "refunded",
            Self::ChargedBack => "charged_back",
            Self::Unknown => "unknown",
        }
    }

    #[must_use]
    pub const fn is_approved(self) -> bool {
        matches!(self, Self::Approved)
    }
}

impl Display for ChargeStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Charge
#[derive(Debug, Clone, PartialEq)]
pub struct Charge {
    pub id: String,
    pub status: ChargeStatus,
    pub status_detail: Option<String>,
    pub amount: Decimal,
    pub net_amount: Option<Decimal>,
    pub payer_email: Option<String>,
    pub payment_method_id: Option<String>,
    pub payment_type_id: Option<String>,
    pub card_last_four: Option<String>,
    pub description: Option<String>,
    pub installments: Option<i32>,
    pub created_at: Option<Timestamp>,
}
