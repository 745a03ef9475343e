//! Checkout Service

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::{
    domain::{
        checkout::{
            errors::CheckoutError,
            requests::{
                BankTransferOutcome, BankTransferRequest, CardPaymentOutcome, CardPaymentRequest,
                DEFAULT_DESCRIPTION, DEFAULT_INSTALLMENTS, OrderConfirmationRequest,
                TRANSFER_REFERENCE_PREFIX,
            },
            validation::{validate_bank_transfer, validate_card_payment, validate_order_confirmation},
        },
        notifications::{
            Notifier,
            models::{OrderConfirmation, SaleNotice, TransferNotice},
        },
        purchases::{
            PurchasesService,
            data::{CardDetails, NewBankTransfer, NewCardPayment},
            records::PurchaseUuid,
        },
    },
    gateway::{
        PaymentGateway,
        models::{Charge, ChargeRequest, DEFAULT_IDENTIFICATION_TYPE, Payer},
    },
};

#[derive(Clone)]
pub struct DefaultCheckoutService {
    purchases: Arc<dyn PurchasesService>,
    gateway: Arc<dyn PaymentGateway>,
    notifier: Notifier,
}

impl DefaultCheckoutService {
    #[must_use]
    pub fn new(
        purchases: Arc<dyn PurchasesService>,
        gateway: Arc<dyn PaymentGateway>,
        notifier: Notifier,
    ) -> Self {
        Self {
            purchases,
            gateway,
            notifier,
        }
    }
}

fn charge_request(request: &CardPaymentRequest) -> ChargeRequest {
    ChargeRequest {
        token: request.token.clone(),
        amount: request.amount,
        installments: request.installments.unwrap_or(DEFAULT_INSTALLMENTS),
        payment_method_id: request.payment_method_id.clone(),
        description: request
            .description
            .clone()
            .filter(|description| !description.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
        payer: Payer {
            email: request.payer.email.clone(),
            identification_type: request
                .payer
                .identification_type
                .clone()
                .filter(|kind| !kind.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_IDENTIFICATION_TYPE.to_string()),
            identification_number: request.payer.identification_number.clone(),
        },
    }
}

fn card_payment(
    charge: &Charge,
    charged: &ChargeRequest,
    request: CardPaymentRequest,
) -> NewCardPayment {
    NewCardPayment {
        uuid: PurchaseUuid::new(),
        payment_id: charge.id.clone(),
        amount: charge.amount,
        net_amount: charge.net_amount,
        customer_email: request.payer.email,
        payment_method: charge
            .payment_method_id
            .clone()
            .unwrap_or(request.payment_method_id),
        payment_status: charge.status.to_string(),
        description: charge
            .description
            .clone()
            .or_else(|| Some(charged.description.clone())),
        purchase_date: charge.created_at.unwrap_or_else(Timestamp::now),
        card: CardDetails {
            card_type: charge.payment_type_id.clone(),
            installments: charge.installments.or(Some(charged.installments)),
            last_digits: charge.card_last_four.clone(),
        },
        items: request.items,
    }
}

fn sale_notice(payment: &NewCardPayment) -> SaleNotice {
    SaleNotice {
        payment_id: payment.payment_id.clone(),
        amount: payment.amount,
        net_amount: payment.net_amount,
        status: payment.payment_status.clone(),
        payment_method: payment.payment_method.clone(),
        card_type: payment.card.card_type.clone(),
        customer_email: Some(payment.customer_email.clone()),
        description: payment.description.clone(),
        date: payment.purchase_date,
        installments: payment.card.installments,
        card_last_digits: payment.card.last_digits.clone(),
    }
}

fn transfer_reference() -> String {
    format!("{TRANSFER_REFERENCE_PREFIX}{}", Uuid::now_v7().simple())
}

#[async_trait]
impl CheckoutService for DefaultCheckoutService {
    async fn process_card_payment(
        &self,
        request: CardPaymentRequest,
    ) -> Result<CardPaymentOutcome, CheckoutError> {
        validate_card_payment(&request)?;

        let charged = charge_request(&request);

        let charge = self.gateway.charge(charged.clone()).await?;

        let mut outcome = CardPaymentOutcome {
            status: charge.status,
            status_detail: charge.status_detail.clone(),
            id: charge.id.clone(),
            transaction_amount: charge.amount,
            purchase: None,
        };

        if !charge.status.is_approved() {
            info!(charge_id = %charge.id, status = %charge.status, "charge not approved");

            return Ok(outcome);
        }

        let payment = card_payment(&charge, &charged, request);
        let notice = sale_notice(&payment);

        let purchase = self
            .purchases
            .record_card_payment(payment)
            .await
            .inspect_err(|err| {
                error!(charge_id = %charge.id, error = %err, "approved charge could not be recorded");
            })?;

        info!(charge_id = %charge.id, %purchase, "card payment recorded");

        self.notifier.sale_confirmed(&notice).await;

        outcome.purchase = Some(purchase);

        Ok(outcome)
    }

    async fn process_bank_transfer(
        &self,
        request: BankTransferRequest,
    ) -> Result<BankTransferOutcome, CheckoutError> {
        validate_bank_transfer(&request)?;

        let notice = TransferNotice {
            reference: transfer_reference(),
            amount: request.amount,
            customer_email: request.customer_email,
            items: request.items,
        };

        self.notifier
            .transfer_instructions(&notice)
            .await
            .inspect_err(|err| {
                warn!(reference = %notice.reference, error = %err, "transfer instructions not sent");
            })?;

        let purchase = self
            .purchases
            .record_bank_transfer(NewBankTransfer {
                uuid: PurchaseUuid::new(),
                payment_id: notice.reference.clone(),
                amount: notice.amount,
                customer_email: notice.customer_email.clone(),
                purchase_date: Timestamp::now(),
                items: notice.items.clone(),
            })
            .await?;

        info!(reference = %notice.reference, %purchase, "bank transfer recorded");

        self.notifier.transfer_registered(&notice).await;

        Ok(BankTransferOutcome {
            reference: notice.reference,
            purchase,
            amount: notice.amount,
        })
    }

    async fn send_order_confirmation(
        &self,
        request: OrderConfirmationRequest,
    ) -> Result<(), CheckoutError> {
        validate_order_confirmation(&request)?;

        let order = OrderConfirmation {
            order_id: request.order_id,
            customer_email: request.email,
            items: request.items,
            total: request.total,
        };

        self.notifier.order_confirmation(&order).await?;

        info!(order_id = %order.order_id, "order confirmation sent");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CheckoutService: Send + Sync {
    /// Charge a card, record the purchase when approved and notify about the sale.
    async fn process_card_payment(
        &self,
        request: CardPaymentRequest,
    ) -> Result<CardPaymentOutcome, CheckoutError>;

    /// Email transfer instructions, then record the pending purchase and notify the shop.
    async fn process_bank_transfer(
        &self,
        request: BankTransferRequest,
    ) -> Result<BankTransferOutcome, CheckoutError>;

    /// Email an order confirmation to the customer.
    async fn send_order_confirmation(
        &self,
        request: OrderConfirmationRequest,
    ) -> Result<(), CheckoutError>;
}
