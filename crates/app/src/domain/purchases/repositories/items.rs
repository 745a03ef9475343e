//! Purchase Items Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use rust_decimal::Decimal;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};
use uuid::Uuid;

use crate::domain::purchases::{
    data::NewPurchaseItem,
    records::{PurchaseItemRecord, PurchaseItemUuid, PurchaseUuid},
};

const LIST_PURCHASE_ITEMS_SQL: &str = include_str!("../sql/list_purchase_items.sql");
const CREATE_PURCHASE_ITEMS_SQL: &str = include_str!("../sql/create_purchase_items.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgPurchaseItemsRepository;

impl PgPurchaseItemsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Items belonging to any of `purchases`, in insertion order.
    pub(crate) async fn list_purchase_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        purchases: Vec<Uuid>,
    ) -> Result<Vec<PurchaseItemRecord>, sqlx::Error> {
        query_as::<Postgres, PurchaseItemRecord>(LIST_PURCHASE_ITEMS_SQL)
            .bind(purchases)
            .fetch_all(&mut **tx)
            .await
    }

    /// Insert every item of a purchase in a single statement.
    pub(crate) async fn create_purchase_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        purchase: PurchaseUuid,
        items: &[NewPurchaseItem],
    ) -> Result<u64, sqlx::Error> {
        let uuids: Vec<Uuid> = items
            .iter()
            .map(|_| PurchaseItemUuid::new().into_uuid())
            .collect();
        let names: Vec<&str> = items.iter().map(|item| item.product_name.as_str()).collect();
        let quantities: Vec<i32> = items.iter().map(|item| item.quantity).collect();
        let prices: Vec<Decimal> = items.iter().map(|item| item.price).collect();

        let rows_affected = query(CREATE_PURCHASE_ITEMS_SQL)
            .bind(purchase.into_uuid())
            .bind(uuids)
            .bind(names)
            .bind(quantities)
            .bind(prices)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for PurchaseItemRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: PurchaseItemUuid::from_uuid(row.try_get("uuid")?),
            purchase_uuid: PurchaseUuid::from_uuid(row.try_get("purchase_uuid")?),
            product_name: row.try_get("product_name")?,
            quantity: row.try_get("quantity")?,
            price: row.try_get("price")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
