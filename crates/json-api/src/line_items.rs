//! Line item payloads shared by the checkout endpoints.

use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use storefront_app::domain::purchases::data::NewPurchaseItem;

/// Product referenced by a line item.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub(crate) struct LineItemProduct {
    /// Product name
    #[serde(default)]
    pub name: String,

    /// Unit price
    #[salvo(schema(value_type = f64))]
    pub price: Decimal,
}

/// Line item as sent by the storefront cart.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub(crate) struct LineItemRequest {
    pub product: LineItemProduct,
    pub quantity: i32,
}

impl From<LineItemRequest> for NewPurchaseItem {
    fn from(item: LineItemRequest) -> Self {
        NewPurchaseItem {
            product_name: item.product.name,
            quantity: item.quantity,
            price: item.product.price,
        }
    }
}

pub(crate) fn into_purchase_items(items: Vec<LineItemRequest>) -> Vec<NewPurchaseItem> {
    items.into_iter().map(Into::into).collect()
}
