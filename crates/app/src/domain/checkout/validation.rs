//! Inbound request validation.
//!
//! Every check runs before any external collaborator is called.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::{
    checkout::requests::{BankTransferRequest, CardPaymentRequest, OrderConfirmationRequest},
    purchases::data::NewPurchaseItem,
};

/// Largest value a `NUMERIC(10,2)` money column holds.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_410_065_407, 2, 0, false, 2);

/// Money carries whole cents.
const MONEY_SCALE: u32 = 2;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("invalid email address: {0:?}")]
    InvalidEmail(String),

    #[error("{0} must not be negative")]
    NegativeAmount(&'static str),

    #[error("{0} must not have more than two decimal places")]
    SubCentAmount(&'static str),

    #[error("{0} must not exceed 99999999.99")]
    AmountTooLarge(&'static str),

    #[error("installments must be at least 1, got {0}")]
    InvalidInstallments(i32),

    #[error("item {index} has an empty name")]
    EmptyItemName { index: usize },

    #[error("item {index} quantity must be at least 1, got {quantity}")]
    InvalidQuantity { index: usize, quantity: i32 },

    #[error("item {index} price must not be negative")]
    NegativePrice { index: usize },

    #[error("item {index} price must not have more than two decimal places")]
    SubCentPrice { index: usize },

    #[error("item {index} price must not exceed 99999999.99")]
    PriceTooLarge { index: usize },
}

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Missing(field));
    }

    Ok(())
}

fn has_sub_cents(amount: Decimal) -> bool {
    amount.normalize().scale() > MONEY_SCALE
}

/// Checks an amount is non-negative, in whole cents and within the stored range.
fn money(field: &'static str, amount: Decimal) -> Result<(), ValidationError> {
    if amount < Decimal::ZERO {
        return Err(ValidationError::NegativeAmount(field));
    }

    if has_sub_cents(amount) {
        return Err(ValidationError::SubCentAmount(field));
    }

    if amount > MAX_AMOUNT {
        return Err(ValidationError::AmountTooLarge(field));
    }

    Ok(())
}

/// Checks an address has a single `@` with a non-empty local part and a dotted domain.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let invalid = || ValidationError::InvalidEmail(email.to_string());

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;

    let domain_ok = !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty());

    if local.is_empty() || !domain_ok {
        return Err(invalid());
    }

    Ok(())
}

/// Validates every line item. An empty list is allowed.
pub fn validate_items(items: &[NewPurchaseItem]) -> Result<(), ValidationError> {
    for (index, item) in items.iter().enumerate() {
        if item.product_name.trim().is_empty() {
            return Err(ValidationError::EmptyItemName { index });
        }

        if item.quantity < 1 {
            return Err(ValidationError::InvalidQuantity {
                index,
                quantity: item.quantity,
            });
        }

        if item.price < Decimal::ZERO {
            return Err(ValidationError::NegativePrice { index });
        }

        if has_sub_cents(item.price) {
            return Err(ValidationError::SubCentPrice { index });
        }

        if item.price > MAX_AMOUNT {
            return Err(ValidationError::PriceTooLarge { index });
        }
    }

    Ok(())
}

pub fn validate_card_payment(request: &CardPaymentRequest) -> Result<(), ValidationError> {
    require("token", &request.token)?;
    require("payment_method_id", &request.payment_method_id)?;
    money("transaction_amount", request.amount)?;

    if let Some(installments) = request.installments
        && installments < 1
    {
        return Err(ValidationError::InvalidInstallments(installments));
    }

    require("payer.email", &request.payer.email)?;
    validate_email(&request.payer.email)?;
    validate_items(&request.items)
}

pub fn validate_bank_transfer(request: &BankTransferRequest) -> Result<(), ValidationError> {
    money("amount", request.amount)?;
    require("email", &request.customer_email)?;
    validate_email(&request.customer_email)?;
    validate_items(&request.items)
}

pub fn validate_order_confirmation(
    request: &OrderConfirmationRequest,
) -> Result<(), ValidationError> {
    require("email", &request.email)?;
    validate_email(&request.email)?;
    require("order_id", &request.order_id)?;
    money("total", request.total)?;
    validate_items(&request.items)
}

#[cfg(test)]
mod tests {
    use crate::domain::checkout::requests::PayerDetails;

    use super::*;

    fn item(name: &str, quantity: i32, price: Decimal) -> NewPurchaseItem {
        NewPurchaseItem {
            product_name: name.to_string(),
            quantity,
            price,
        }
    }

    fn card_request() -> CardPaymentRequest {
        CardPaymentRequest {
            token: "tok".to_string(),
            amount: Decimal::new(100, 0),
            installments: Some(1),
            payment_method_id: "visa".to_string(),
            description: None,
            payer: PayerDetails {
                email: "buyer@example.com".to_string(),
                ..PayerDetails::default()
            },
            items: vec![item("Mug", 1, Decimal::new(100, 0))],
        }
    }

    #[test]
    fn accepts_valid_card_payment() {
        assert_eq!(validate_card_payment(&card_request()), Ok(()));
    }

    #[test]
    fn rejects_missing_token_and_method() {
        let missing_token = CardPaymentRequest {
            token: "  ".to_string(),
            ..card_request()
        };
        let missing_method = CardPaymentRequest {
            payment_method_id: String::new(),
            ..card_request()
        };

        assert_eq!(
            validate_card_payment(&missing_token),
            Err(ValidationError::Missing("token"))
        );
        assert_eq!(
            validate_card_payment(&missing_method),
            Err(ValidationError::Missing("payment_method_id"))
        );
    }

    #[test]
    fn rejects_negative_amount_and_zero_installments() {
        let negative = CardPaymentRequest {
            amount: Decimal::new(-1, 0),
            ..card_request()
        };
        let no_installments = CardPaymentRequest {
            installments: Some(0),
            ..card_request()
        };

        assert_eq!(
            validate_card_payment(&negative),
            Err(ValidationError::NegativeAmount("transaction_amount"))
        );
        assert_eq!(
            validate_card_payment(&no_installments),
            Err(ValidationError::InvalidInstallments(0))
        );
    }

    #[test]
    fn email_validation() {
        assert!(validate_email("buyer@example.com").is_ok());
        assert!(validate_email("first.last+tag@shop.co.uk").is_ok());

        for bad in [
            "",
            "buyer",
            "@example.com",
            "buyer@",
            "buyer@example",
            "a@b@c.com",
            "a b@c.com",
            "a@.com",
        ] {
            assert!(validate_email(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn item_rules() {
        assert_eq!(validate_items(&[]), Ok(()));
        assert_eq!(
            validate_items(&[item("Mug", 1, Decimal::ZERO), item("", 1, Decimal::ONE)]),
            Err(ValidationError::EmptyItemName { index: 1 })
        );
        assert_eq!(
            validate_items(&[item("Mug", 0, Decimal::ONE)]),
            Err(ValidationError::InvalidQuantity {
                index: 0,
                quantity: 0
            })
        );
        assert_eq!(
            validate_items(&[item("Mug", 1, Decimal::new(-5, 1))]),
            Err(ValidationError::NegativePrice { index: 0 })
        );
    }

    #[test]
    fn amounts_must_be_whole_cents() {
        let sub_cent = BankTransferRequest {
            amount: Decimal::new(10_005, 3),
            customer_email: "buyer@example.com".to_string(),
            items: Vec::new(),
        };
        let trailing_zeros = BankTransferRequest {
            amount: Decimal::new(10_500, 3),
            ..sub_cent.clone()
        };
        let sub_cent_price = BankTransferRequest {
            amount: Decimal::new(10, 0),
            items: vec![item("Mug", 1, Decimal::new(1_999, 3))],
            ..sub_cent.clone()
        };

        assert_eq!(
            validate_bank_transfer(&sub_cent),
            Err(ValidationError::SubCentAmount("amount"))
        );
        assert_eq!(validate_bank_transfer(&trailing_zeros), Ok(()));
        assert_eq!(
            validate_bank_transfer(&sub_cent_price),
            Err(ValidationError::SubCentPrice { index: 0 })
        );
    }

    #[test]
    fn max_amount_is_the_largest_numeric_10_2() {
        assert_eq!(MAX_AMOUNT, Decimal::new(99_999_999_99, 2));
        assert_eq!(MAX_AMOUNT.to_string(), "99999999.99");
    }

    #[test]
    fn amounts_must_fit_the_money_columns() {
        let oversized = CardPaymentRequest {
            amount: Decimal::new(100_000_000_00, 2),
            ..card_request()
        };
        let largest = CardPaymentRequest {
            amount: MAX_AMOUNT,
            items: vec![item("Mug", 1, MAX_AMOUNT)],
            ..card_request()
        };

        assert_eq!(
            validate_card_payment(&oversized),
            Err(ValidationError::AmountTooLarge("transaction_amount"))
        );
        assert_eq!(validate_card_payment(&largest), Ok(()));
        assert_eq!(
            validate_items(&[item("Mug", 1, Decimal::new(100_000_000_00, 2))]),
            Err(ValidationError::PriceTooLarge { index: 0 })
        );
    }

    #[test]
    fn order_total_is_checked_as_money() {
        let request = OrderConfirmationRequest {
            email: "buyer@example.com".to_string(),
            order_id: "ORDER-7".to_string(),
            items: Vec::new(),
            total: Decimal::new(1, 3),
        };

        assert_eq!(
            validate_order_confirmation(&request),
            Err(ValidationError::SubCentAmount("total"))
        );
    }

    #[test]
    fn bank_transfer_requires_valid_email() {
        let request = BankTransferRequest {
            amount: Decimal::new(10, 0),
            customer_email: "not-an-email".to_string(),
            items: Vec::new(),
        };

        assert!(matches!(
            validate_bank_transfer(&request),
            Err(ValidationError::InvalidEmail(_))
        ));
    }

    #[test]
    fn order_confirmation_requires_order_id() {
        let request = OrderConfirmationRequest {
            email: "buyer@example.com".to_string(),
            order_id: String::new(),
            items: Vec::new(),
            total: Decimal::ZERO,
        };

        assert_eq!(
            validate_order_confirmation(&request),
            Err(ValidationError::Missing("order_id"))
        );
    }
}
