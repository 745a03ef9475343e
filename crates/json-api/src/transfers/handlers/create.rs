//! Register Bank Transfer Handler

use rust_decimal::Decimal;
use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::checkout::requests::BankTransferRequest;

use crate::{
    errors::checkout_status_error,
    extensions::*,
    line_items::{LineItemRequest, into_purchase_items},
};

/// Bank Transfer Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateBankTransferRequest {
    /// Amount the customer will transfer
    #[salvo(schema(value_type = f64))]
    pub amount: Decimal,

    /// Customer email that receives the instructions
    #[serde(default)]
    pub email: String,

    /// Purchased line items
    #[serde(default)]
    pub items: Vec<LineItemRequest>,
}

impl From<CreateBankTransferRequest> for BankTransferRequest {
    fn from(request: CreateBankTransferRequest) -> Self {
        BankTransferRequest {
            amount: request.amount,
            customer_email: request.email,
            items: into_purchase_items(request.items),
        }
    }
}

/// Bank Transfer Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BankTransferCreatedResponse {
    /// Always `success`
    pub status: String,

    /// Reference the customer must quote in the transfer
    pub reference: String,

    /// Recorded purchase UUID
    pub purchase_uuid: Uuid,

    /// Amount awaiting transfer
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub amount: Decimal,
}

/// Register Bank Transfer Handler
///
/// Emails bank instructions to the customer, then records the pending purchase and
/// notifies the shop. Nothing is recorded when the email cannot be sent.
#[endpoint(
    tags("transfers"),
    summary = "Register Bank Transfer",
    responses(
        (status_code = StatusCode::CREATED, description = "Transfer registered"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid request"),
        (status_code = StatusCode::CONFLICT, description = "Reference already recorded"),
        (status_code = StatusCode::BAD_GATEWAY, description = "Instructions could not be emailed"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "transfers.create",
    skip(json, depot, res),
    fields(reference = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CreateBankTransferRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<BankTransferCreatedResponse>, StatusError> {
    let state = depot.state()?;

    let outcome = state
        .app
        .checkout
        .process_bank_transfer(json.into_inner().into())
        .await
        .map_err(checkout_status_error)?;

    tracing::Span::current().record("reference", outcome.reference.as_str());

    res.add_header(LOCATION, format!("/sales/{}", outcome.purchase), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(BankTransferCreatedResponse {
        status: "success".to_string(),
        reference: outcome.reference,
        purchase_uuid: outcome.purchase.into(),
        amount: outcome.amount,
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use storefront_app::domain::{
        checkout::{
            CheckoutError, MockCheckoutService, ValidationError, requests::BankTransferOutcome,
        },
        notifications::NotificationError,
        purchases::{PersistenceError, records::PurchaseUuid},
    };

    use crate::test_helpers::{Mocks, service};

    use super::*;

    fn make_service(checkout: MockCheckoutService) -> Service {
        service(
            Mocks {
                checkout,
                ..Mocks::default()
            },
            Router::with_path("bank-transfers").post(handler),
        )
    }

    fn payload() -> serde_json::Value {
        json!({
            "amount": 30,
            "email": "buyer@example.com",
            "items": [{ "product": { "name": "Tea", "price": 15 }, "quantity": 2 }]
        })
    }

    #[tokio::test]
    async fn test_transfer_registered_returns_201() -> TestResult {
        let purchase = PurchaseUuid::new();

        let mut checkout = MockCheckoutService::new();

        checkout
            .expect_process_bank_transfer()
            .once()
            .withf(|request| {
                request.customer_email == "buyer@example.com"
                    && request.amount == Decimal::new(30, 0)
                    && request.items.first().map(|item| item.quantity) == Some(2)
            })
            .return_once(move |_| {
                Ok(BankTransferOutcome {
                    reference: "TRANSFER-abc".to_string(),
                    purchase,
                    amount: Decimal::new(30, 0),
                })
            });

        let mut res = TestClient::post("http://example.com/bank-transfers")
            .json(&payload())
            .send(&make_service(checkout))
            .await;

        let body: BankTransferCreatedResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some(format!("/sales/{purchase}").as_str()));
        assert_eq!(body.status, "success");
        assert_eq!(body.reference, "TRANSFER-abc");
        assert_eq!(body.purchase_uuid, purchase.into_uuid());

        Ok(())
    }

    #[tokio::test]
    async fn test_email_failure_returns_502() {
        let mut checkout = MockCheckoutService::new();

        checkout.expect_process_bank_transfer().return_once(|_| {
            Err(CheckoutError::Notification(
                NotificationError::UnexpectedResponse("mailbox unavailable".to_string()),
            ))
        });

        let res = TestClient::post("http://example.com/bank-transfers")
            .json(&payload())
            .send(&make_service(checkout))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_GATEWAY));
    }

    #[tokio::test]
    async fn test_store_failures_after_email_map_to_409_and_500() {
        let failures = [
            (
                PersistenceError::AlreadyExists(sqlx::Error::Protocol("duplicate key".to_string())),
                StatusCode::CONFLICT,
            ),
            (
                PersistenceError::Sql(sqlx::Error::PoolTimedOut),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (failure, expected) in failures {
            let mut checkout = MockCheckoutService::new();

            checkout
                .expect_process_bank_transfer()
                .once()
                .return_once(move |_| Err(CheckoutError::Persistence(failure)));

            let res = TestClient::post("http://example.com/bank-transfers")
                .json(&payload())
                .send(&make_service(checkout))
                .await;

            assert_eq!(res.status_code, Some(expected));
            assert!(res.headers().get("location").is_none());
        }
    }

    #[tokio::test]
    async fn test_sub_cent_amount_returns_400() {
        let mut checkout = MockCheckoutService::new();

        checkout
            .expect_process_bank_transfer()
            .once()
            .withf(|request| request.amount == Decimal::new(10_005, 3))
            .return_once(|_| Err(ValidationError::SubCentAmount("amount").into()));

        let res = TestClient::post("http://example.com/bank-transfers")
            .json(&json!({ "amount": "10.005", "email": "buyer@example.com", "items": [] }))
            .send(&make_service(checkout))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }
}
