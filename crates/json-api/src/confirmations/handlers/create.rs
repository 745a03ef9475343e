//! Send Confirmation Email Handler

use rust_decimal::Decimal;
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront_app::domain::checkout::requests::OrderConfirmationRequest;

use crate::{
    errors::checkout_status_error,
    extensions::*,
    line_items::{LineItemRequest, into_purchase_items},
};

/// Send Confirmation Email Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SendConfirmationRequest {
    /// Customer email
    #[serde(default)]
    pub email: String,

    /// Order identifier shown to the customer
    #[serde(default, rename = "orderId", alias = "order_id")]
    pub order_id: String,

    /// Ordered line items
    #[serde(default)]
    pub items: Vec<LineItemRequest>,

    /// Order total
    #[salvo(schema(value_type = f64))]
    pub total: Decimal,
}

impl From<SendConfirmationRequest> for OrderConfirmationRequest {
    fn from(request: SendConfirmationRequest) -> Self {
        OrderConfirmationRequest {
            email: request.email,
            order_id: request.order_id,
            items: into_purchase_items(request.items),
            total: request.total,
        }
    }
}

/// Confirmation Sent Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ConfirmationSentResponse {
    /// Always `success`
    pub status: String,

    /// Human readable outcome
    pub message: String,
}

/// Send Confirmation Email Handler
#[endpoint(
    tags("confirmations"),
    summary = "Send Order Confirmation Email",
    responses(
        (status_code = StatusCode::OK, description = "Email sent"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid request"),
        (status_code = StatusCode::BAD_GATEWAY, description = "Email could not be sent"),
    ),
)]
#[tracing::instrument(name = "confirmations.create", skip(json, depot), err)]
pub(crate) async fn handler(
    json: JsonBody<SendConfirmationRequest>,
    depot: &mut Depot,
) -> Result<Json<ConfirmationSentResponse>, StatusError> {
    let state = depot.state()?;

    state
        .app
        .checkout
        .send_order_confirmation(json.into_inner().into())
        .await
        .map_err(checkout_status_error)?;

    Ok(Json(ConfirmationSentResponse {
        status: "success".to_string(),
        message: "Confirmation email sent".to_string(),
    }))
}
