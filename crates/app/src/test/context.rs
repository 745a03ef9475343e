//! Test context for service-level integration tests.

use crate::{
    database::Db,
    domain::{purchases::PgPurchasesService, webhooks::PgWebhookEventsService},
};

use super::db::TestDb;

pub(crate) struct TestContext {
    pub db: TestDb,
    pub purchases: PgPurchasesService,
    pub webhooks: PgWebhookEventsService,
}

impl TestContext {
    pub(crate) async fn new() -> Self {
        let test_db = TestDb::new().await;
        let db = Db::new(test_db.pool().clone());

        Self {
            purchases: PgPurchasesService::new(db.clone()),
            webhooks: PgWebhookEventsService::new(db),
            db: test_db,
        }
    }
}
