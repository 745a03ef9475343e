//! Purchases service.

use async_trait::async_trait;
use mockall::automock;
use rustc_hash::FxHashMap;
use sqlx::{Postgres, Transaction};

use crate::{
    database::Db,
    domain::purchases::{
        data::{NewBankTransfer, NewCardPayment, NewPurchaseItem},
        errors::PersistenceError,
        records::{
            BANK_TRANSFER_DESCRIPTION, PENDING_PAYMENT_STATUS, PurchaseItemRecord, PurchaseRecord,
            PurchaseUuid, TRANSFER_PAYMENT_METHOD,
        },
        repositories::{PgPurchaseItemsRepository, PgPurchasesRepository, PurchaseRow},
    },
};

#[derive(Debug, Clone)]
pub struct PgPurchasesService {
    db: Db,
    purchases_repository: PgPurchasesRepository,
    items_repository: PgPurchaseItemsRepository,
}

impl PgPurchasesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            purchases_repository: PgPurchasesRepository::new(),
            items_repository: PgPurchaseItemsRepository::new(),
        }
    }

    /// Insert the purchase row and its items inside `tx`.
    async fn insert_purchase(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        row: PurchaseRow<'_>,
        items: &[NewPurchaseItem],
    ) -> Result<PurchaseUuid, PersistenceError> {
        let purchase = self.purchases_repository.create_purchase(tx, row).await?;

        if !items.is_empty() {
            self.items_repository
                .create_purchase_items(tx, purchase, items)
                .await?;
        }

        Ok(purchase)
    }
}

#[async_trait]
impl PurchasesService for PgPurchasesService {
    async fn record_card_payment(
        &self,
        payment: NewCardPayment,
    ) -> Result<PurchaseUuid, PersistenceError> {
        let mut tx = self.db.begin_transaction().await?;

        let row = PurchaseRow {
            uuid: payment.uuid,
            payment_id: &payment.payment_id,
            amount: payment.amount,
            net_amount: payment.net_amount,
            customer_email: &payment.customer_email,
            payment_method: &payment.payment_method,
            payment_status: &payment.payment_status,
            description: payment.description.as_deref(),
            purchase_date: payment.purchase_date,
            card_type: payment.card.card_type.as_deref(),
            installments: payment.card.installments,
            card_last_digits: payment.card.last_digits.as_deref(),
        };

        let purchase = self
            .insert_purchase(&mut tx, row, &payment.items)
            .await?;

        tx.commit().await?;

        Ok(purchase)
    }

    async fn record_bank_transfer(
        &self,
        transfer: NewBankTransfer,
    ) -> Result<PurchaseUuid, PersistenceError> {
        let mut tx = self.db.begin_transaction().await?;

        let row = PurchaseRow {
            uuid: transfer.uuid,
            payment_id: &transfer.payment_id,
            amount: transfer.amount,
            net_amount: None,
            customer_email: &transfer.customer_email,
            payment_method: TRANSFER_PAYMENT_METHOD,
            payment_status: PENDING_PAYMENT_STATUS,
            description: Some(BANK_TRANSFER_DESCRIPTION),
            purchase_date: transfer.purchase_date,
            card_type: None,
            installments: None,
            card_last_digits: None,
        };

        let purchase = self
            .insert_purchase(&mut tx, row, &transfer.items)
            .await?;

        tx.commit().await?;

        Ok(purchase)
    }

    async fn get_purchase(&self, purchase: PurchaseUuid) -> Result<PurchaseRecord, PersistenceError> {
        let mut tx = self.db.begin_transaction().await?;

        let mut record = self
            .purchases_repository
            .get_purchase(&mut tx, purchase)
            .await?;

        let items = self
            .items_repository
            .list_purchase_items(&mut tx, vec![purchase.into_uuid()])
            .await?;

        tx.commit().await?;

        record.items = items;

        Ok(record)
    }

    async fn list_sales(&self) -> Result<Vec<PurchaseRecord>, PersistenceError> {
        let mut tx = self.db.begin_transaction().await?;

        let mut purchases = self.purchases_repository.list_purchases(&mut tx).await?;

        let uuids = purchases
            .iter()
            .map(|purchase| purchase.uuid.into_uuid())
            .collect();

        let items = self
            .items_repository
            .list_purchase_items(&mut tx, uuids)
            .await?;

        tx.commit().await?;

        attach_items(&mut purchases, items);

        Ok(purchases)
    }
}

fn attach_items(purchases: &mut [PurchaseRecord], items: Vec<PurchaseItemRecord>) {
    let mut by_purchase: FxHashMap<PurchaseUuid, Vec<PurchaseItemRecord>> = FxHashMap::default();

    for item in items {
        by_purchase.entry(item.purchase_uuid).or_default().push(item);
    }

    for purchase in purchases {
        if let Some(items) = by_purchase.remove(&purchase.uuid) {
            purchase.items = items;
        }
    }
}

#[automock]
#[async_trait]
pub trait PurchasesService: Send + Sync {
    /// Atomically records an approved card payment and its line items.
    async fn record_card_payment(
        &self,
        payment: NewCardPayment,
    ) -> Result<PurchaseUuid, PersistenceError>;

    /// Atomically records a pending bank transfer and its line items.
    async fn record_bank_transfer(
        &self,
        transfer: NewBankTransfer,
    ) -> Result<PurchaseUuid, PersistenceError>;

    /// Retrieve a single purchase with its items.
    async fn get_purchase(&self, purchase: PurchaseUuid) -> Result<PurchaseRecord, PersistenceError>;

    /// Retrieves every purchase with its items, newest purchase date first.
    async fn list_sales(&self) -> Result<Vec<PurchaseRecord>, PersistenceError>;
}
