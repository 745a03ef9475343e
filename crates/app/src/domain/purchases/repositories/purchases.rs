//! Purchases Repository

use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use rust_decimal::Decimal;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as, query_scalar};
use uuid::Uuid;

use crate::domain::purchases::records::{PurchaseRecord, PurchaseUuid};

const GET_PURCHASE_SQL: &str = include_str!("../sql/get_purchase.sql");
const LIST_PURCHASES_SQL: &str = include_str!("../sql/list_purchases.sql");
const CREATE_PURCHASE_SQL: &str = include_str!("../sql/create_purchase.sql");

/// Column values for a single `purchases` row.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PurchaseRow<'a> {
    pub uuid: PurchaseUuid,
    pub payment_id: &'a str,
    pub amount: Decimal,
    pub net_amount: Option<Decimal>,
    pub customer_email: &'a str,
    pub payment_method: &'a str,
    pub payment_status: &'a str,
    pub description: Option<&'a str>,
    pub purchase_date: Timestamp,
    pub card_type: Option<&'a str>,
    pub installments: Option<i32>,
    pub card_last_digits: Option<&'a str>,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgPurchasesRepository;

impl PgPurchasesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn get_purchase(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        purchase: PurchaseUuid,
    ) -> Result<PurchaseRecord, sqlx::Error> {
        query_as::<Postgres, PurchaseRecord>(GET_PURCHASE_SQL)
            .bind(purchase.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_purchases(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<PurchaseRecord>, sqlx::Error> {
        query_as::<Postgres, PurchaseRecord>(LIST_PURCHASES_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn create_purchase(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        row: PurchaseRow<'_>,
    ) -> Result<PurchaseUuid, sqlx::Error> {
        let created: Uuid = query_scalar::<Postgres, Uuid>(CREATE_PURCHASE_SQL)
            .bind(row.uuid.into_uuid())
            .bind(row.payment_id)
            .bind(row.amount)
            .bind(row.net_amount)
            .bind(row.customer_email)
            .bind(row.payment_method)
            .bind(row.payment_status)
            .bind(row.description)
            .bind(SqlxTimestamp::from(row.purchase_date))
            .bind(row.card_type)
            .bind(row.installments)
            .bind(row.card_last_digits)
            .fetch_one(&mut **tx)
            .await?;

        Ok(PurchaseUuid::from_uuid(created))
    }
}

impl<'r> FromRow<'r, PgRow> for PurchaseRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: PurchaseUuid::from_uuid(row.try_get("uuid")?),
            payment_id: row.try_get("payment_id")?,
            amount: row.try_get("amount")?,
            net_amount: row.try_get("net_amount")?,
            customer_email: row.try_get("customer_email")?,
            payment_method: row.try_get("payment_method")?,
            payment_status: row.try_get("payment_status")?,
            description: row.try_get("description")?,
            purchase_date: row
                .try_get::<SqlxTimestamp, _>("purchase_date")?
                .to_jiff(),
            card_type: row.try_get("card_type")?,
            installments: row.try_get("installments")?,
            card_last_digits: row.try_get("card_last_digits")?,
            items: Vec::new(),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
