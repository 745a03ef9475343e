//! Get Sale Handler

use rust_decimal::Decimal;
use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::purchases::records::{PurchaseItemRecord, PurchaseRecord};

use crate::{errors::persistence_status_error, extensions::*};

/// Sale Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SaleItemResponse {
    pub uuid: Uuid,
    pub product_name: String,
    pub quantity: i32,

    /// Unit price
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub price: Decimal,
}

impl From<PurchaseItemRecord> for SaleItemResponse {
    fn from(item: PurchaseItemRecord) -> Self {
        Self {
            uuid: item.uuid.into(),
            product_name: item.product_name,
            quantity: item.quantity,
            price: item.price,
        }
    }
}

/// Sale Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SaleResponse {
    pub uuid: Uuid,

    /// Gateway charge id or bank transfer reference
    pub payment_id: String,

    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub amount: Decimal,

    #[serde(with = "rust_decimal::serde::float_option")]
    #[salvo(schema(value_type = Option<f64>))]
    pub net_amount: Option<Decimal>,

    pub customer_email: String,
    pub payment_method: String,
    pub payment_status: String,
    pub description: Option<String>,

    /// RFC 3339 purchase timestamp
    pub purchase_date: String,

    pub card_type: Option<String>,
    pub installments: Option<i32>,
    pub card_last_digits: Option<String>,

    /// RFC 3339 record creation timestamp
    pub created_at: String,

    /// Line items in insertion order
    pub items: Vec<SaleItemResponse>,
}

impl From<PurchaseRecord> for SaleResponse {
    fn from(purchase: PurchaseRecord) -> Self {
        Self {
            uuid: purchase.uuid.into(),
            payment_id: purchase.payment_id,
            amount: purchase.amount,
            net_amount: purchase.net_amount,
            customer_email: purchase.customer_email,
            payment_method: purchase.payment_method,
            payment_status: purchase.payment_status,
            description: purchase.description,
            purchase_date: purchase.purchase_date.to_string(),
            card_type: purchase.card_type,
            installments: purchase.installments,
            card_last_digits: purchase.card_last_digits,
            created_at: purchase.created_at.to_string(),
            items: purchase.items.into_iter().map(Into::into).collect(),
        }
    }
}

/// Get Sale Handler
#[endpoint(
    tags("sales"),
    summary = "Get Sale",
    responses(
        (status_code = StatusCode::OK, description = "Sale found"),
        (status_code = StatusCode::NOT_FOUND, description = "Sale not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    sale: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<SaleResponse>, StatusError> {
    let state = depot.state()?;

    let purchase = state
        .app
        .purchases
        .get_purchase(sale.into_inner().into())
        .await
        .map_err(persistence_status_error)?;

    Ok(Json(purchase.into()))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::domain::purchases::{MockPurchasesService, PersistenceError};

    use crate::test_helpers::{Mocks, make_purchase, service};

    use super::*;

    fn make_service(purchases: MockPurchasesService) -> Service {
        service(
            Mocks {
                purchases,
                ..Mocks::default()
            },
            Router::with_path("sales/{sale}").get(handler),
        )
    }

    #[tokio::test]
    async fn test_get_sale_returns_nested_items() -> TestResult {
        let purchase = make_purchase("PAY-1", Timestamp::UNIX_EPOCH);
        let uuid = purchase.uuid;

        let mut purchases = MockPurchasesService::new();

        purchases
            .expect_get_purchase()
            .once()
            .withf(move |requested| *requested == uuid)
            .return_once(move |_| Ok(purchase));

        let mut res = TestClient::get(format!("http://example.com/sales/{uuid}"))
            .send(&make_service(purchases))
            .await;

        let body: SaleResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.uuid, uuid.into_uuid());
        assert_eq!(body.net_amount, Some(Decimal::new(9510, 2)));
        assert_eq!(body.purchase_date, "1970-01-01T00:00:00Z");
        assert_eq!(body.items.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_sale_returns_404() {
        let mut purchases = MockPurchasesService::new();

        purchases
            .expect_get_purchase()
            .once()
            .return_once(|_| Err(PersistenceError::NotFound));

        let res = TestClient::get(format!("http://example.com/sales/{}", Uuid::now_v7()))
            .send(&make_service(purchases))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }
}
