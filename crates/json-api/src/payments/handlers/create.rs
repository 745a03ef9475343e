//! Process Card Payment Handler

use rust_decimal::Decimal;
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::checkout::requests::{
    CardPaymentOutcome, CardPaymentRequest, PayerDetails,
};

use crate::{
    errors::checkout_status_error,
    extensions::*,
    line_items::{LineItemRequest, into_purchase_items},
};

/// Payer identification document.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct IdentificationRequest {
    /// Document type, defaults to `DNI`
    #[serde(rename = "type")]
    pub kind: Option<String>,

    /// Document number
    pub number: Option<String>,
}

/// Payer details.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct PayerRequest {
    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub identification: IdentificationRequest,
}

/// Process Payment Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProcessPaymentRequest {
    /// Amount to charge
    #[salvo(schema(value_type = f64))]
    pub transaction_amount: Decimal,

    /// Card token produced by the gateway's browser SDK
    #[serde(default)]
    pub token: String,

    /// Charge description
    pub description: Option<String>,

    /// Installment count, defaults to 1
    pub installments: Option<i32>,

    /// Gateway payment method identifier, e.g. `visa`
    #[serde(default)]
    pub payment_method_id: String,

    #[serde(default)]
    pub payer: PayerRequest,

    /// Purchased line items
    #[serde(default)]
    pub items: Vec<LineItemRequest>,
}

impl From<ProcessPaymentRequest> for CardPaymentRequest {
    fn from(request: ProcessPaymentRequest) -> Self {
        CardPaymentRequest {
            token: request.token,
            amount: request.transaction_amount,
            installments: request.installments,
            payment_method_id: request.payment_method_id,
            description: request.description,
            payer: PayerDetails {
                email: request.payer.email,
                identification_type: request.payer.identification.kind,
                identification_number: request.payer.identification.number,
            },
            items: into_purchase_items(request.items),
        }
    }
}

/// Process Payment Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProcessPaymentResponse {
    /// Gateway status, e.g. `approved`
    pub status: String,

    /// Gateway status detail
    pub status_detail: Option<String>,

    /// Gateway charge id
    pub id: String,

    /// Charged amount
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub transaction_amount: Decimal,

    /// Recorded purchase, present when the charge was approved
    pub purchase_uuid: Option<Uuid>,
}

impl From<CardPaymentOutcome> for ProcessPaymentResponse {
    fn from(outcome: CardPaymentOutcome) -> Self {
        Self {
            status: outcome.status.to_string(),
            status_detail: outcome.status_detail,
            id: outcome.id,
            transaction_amount: outcome.transaction_amount,
            purchase_uuid: outcome.purchase.map(Into::into),
        }
    }
}

/// Process Card Payment Handler
///
/// Charges the card through the payment gateway. Approved charges are recorded and
/// announced; the gateway verdict is returned either way.
#[endpoint(
    tags("payments"),
    summary = "Process Card Payment",
    responses(
        (status_code = StatusCode::OK, description = "Gateway verdict"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid request"),
        (status_code = StatusCode::CONFLICT, description = "Payment already recorded"),
        (status_code = StatusCode::BAD_GATEWAY, description = "Payment gateway error"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "payments.create",
    skip(json, depot),
    fields(charge_id = tracing::field::Empty, charge_status = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<ProcessPaymentRequest>,
    depot: &mut Depot,
) -> Result<Json<ProcessPaymentResponse>, StatusError> {
    let state = depot.state()?;

    let outcome = state
        .app
        .checkout
        .process_card_payment(json.into_inner().into())
        .await
        .map_err(checkout_status_error)?;

    let span = tracing::Span::current();

    span.record("charge_id", outcome.id.as_str());
    span.record("charge_status", outcome.status.as_str());

    Ok(Json(outcome.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use storefront_app::{
        domain::{
            checkout::{CheckoutError, MockCheckoutService, ValidationError},
            purchases::{PersistenceError, records::PurchaseUuid},
        },
        gateway::{GatewayError, models::ChargeStatus},
    };

    use crate::test_helpers::{Mocks, service};

    use super::*;

    fn make_service(checkout: MockCheckoutService) -> Service {
        service(
            Mocks {
                checkout,
                ..Mocks::default()
            },
            Router::with_path("process-payment").post(handler),
        )
    }

    fn payload() -> serde_json::Value {
        json!({
            "transaction_amount": 100,
            "token": "card-token",
            "installments": 3,
            "payment_method_id": "visa",
            "payer": {
                "email": "buyer@example.com",
                "identification": { "type": "DNI", "number": "12345678" }
            },
            "items": [{ "product": { "name": "Mug", "price": 50 }, "quantity": 2 }]
        })
    }

    #[tokio::test]
    async fn test_approved_payment_returns_gateway_verdict() -> TestResult {
        let purchase = PurchaseUuid::new();

        let mut checkout = MockCheckoutService::new();

        checkout
            .expect_process_card_payment()
            .once()
            .withf(|request| {
                request.token == "card-token"
                    && request.installments == Some(3)
                    && request.payer.identification_number.as_deref() == Some("12345678")
                    && request.items.len() == 1
            })
            .return_once(move |_| {
                Ok(CardPaymentOutcome {
                    status: ChargeStatus::Approved,
                    status_detail: Some("accredited".to_string()),
                    id: "1234".to_string(),
                    transaction_amount: Decimal::new(100, 0),
                    purchase: Some(purchase),
                })
            });

        let mut res = TestClient::post("http://example.com/process-payment")
            .json(&payload())
            .send(&make_service(checkout))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: ProcessPaymentResponse = res.take_json().await?;

        assert_eq!(body.status, "approved");
        assert_eq!(body.status_detail.as_deref(), Some("accredited"));
        assert_eq!(body.id, "1234");
        assert_eq!(body.transaction_amount, Decimal::new(100, 0));
        assert_eq!(body.purchase_uuid, Some(purchase.into_uuid()));

        Ok(())
    }

    #[tokio::test]
    async fn test_validation_failure_returns_400() {
        let mut checkout = MockCheckoutService::new();

        checkout
            .expect_process_card_payment()
            .once()
            .return_once(|_| Err(ValidationError::Missing("token").into()));

        let res = TestClient::post("http://example.com/process-payment")
            .json(&json!({ "transaction_amount": 100 }))
            .send(&make_service(checkout))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_malformed_body_never_reaches_checkout() {
        let mut checkout = MockCheckoutService::new();

        checkout.expect_process_card_payment().never();

        let res = TestClient::post("http://example.com/process-payment")
            .json(&json!({ "token": "card-token" }))
            .send(&make_service(checkout))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_gateway_failure_returns_502() {
        let mut checkout = MockCheckoutService::new();

        checkout.expect_process_card_payment().return_once(|_| {
            Err(CheckoutError::Gateway(GatewayError::Rejected {
                status: StatusCode::BAD_REQUEST,
                message: "invalid card token".to_string(),
            }))
        });

        let res = TestClient::post("http://example.com/process-payment")
            .json(&payload())
            .send(&make_service(checkout))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_GATEWAY));
    }

    #[tokio::test]
    async fn test_duplicate_payment_returns_409() {
        let mut checkout = MockCheckoutService::new();

        checkout
            .expect_process_card_payment()
            .return_once(|_| {
                Err(PersistenceError::AlreadyExists(sqlx::Error::Protocol(
                    "duplicate key".to_string(),
                ))
                .into())
            });

        let res = TestClient::post("http://example.com/process-payment")
            .json(&payload())
            .send(&make_service(checkout))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));
    }
}
