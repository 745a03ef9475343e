//! Test Helpers

use rust_decimal::Decimal;
use sqlx::query_scalar;

use crate::{domain::purchases::data::NewPurchaseItem, test::TestContext};

pub(crate) fn item(name: &str, quantity: i32, price: Decimal) -> NewPurchaseItem {
    NewPurchaseItem {
        product_name: name.to_string(),
        quantity,
        price,
    }
}

/// Number of stored purchases carrying `payment_id`.
pub(crate) async fn count_purchases(ctx: &TestContext, payment_id: &str) -> i64 {
    query_scalar("SELECT COUNT(*) FROM purchases WHERE payment_id = $1")
        .bind(payment_id)
        .fetch_one(ctx.db.pool())
        .await
        .expect("Failed to count purchases")
}

/// Number of stored purchase items across all purchases.
pub(crate) async fn count_items(ctx: &TestContext) -> i64 {
    query_scalar("SELECT COUNT(*) FROM purchase_items")
        .fetch_one(ctx.db.pool())
        .await
        .expect("Failed to count purchase items")
}
