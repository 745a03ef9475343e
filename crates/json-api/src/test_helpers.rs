//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};

use storefront_app::{
    context::AppContext,
    domain::{
        checkout::MockCheckoutService,
        purchases::{
            MockPurchasesService,
            records::{PurchaseItemRecord, PurchaseItemUuid, PurchaseRecord, PurchaseUuid},
        },
        webhooks::MockWebhookEventsService,
    },
    health::MockHealthCheck,
};

use crate::state::State;

pub(crate) const TEST_ENVIRONMENT: &str = "test";

/// Service mocks backing a test [`AppContext`]. Any call without an expectation fails.
#[derive(Default)]
pub(crate) struct Mocks {
    pub(crate) purchases: MockPurchasesService,
    pub(crate) checkout: MockCheckoutService,
    pub(crate) webhooks: MockWebhookEventsService,
    pub(crate) health: MockHealthCheck,
}

impl Mocks {
    pub(crate) fn into_state(self) -> Arc<State> {
        State::shared(
            AppContext {
                purchases: Arc::new(self.purchases),
                checkout: Arc::new(self.checkout),
                webhooks: Arc::new(self.webhooks),
                health: Arc::new(self.health),
            },
            TEST_ENVIRONMENT,
        )
    }
}

pub(crate) fn service(mocks: Mocks, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(mocks.into_state())).push(route))
}

pub(crate) fn make_purchase(payment_id: &str, purchase_date: Timestamp) -> PurchaseRecord {
    let uuid = PurchaseUuid::new();

    PurchaseRecord {
        uuid,
        payment_id: payment_id.to_string(),
        amount: Decimal::new(100, 0),
        net_amount: Some(Decimal::new(9510, 2)),
        customer_email: "buyer@example.com".to_string(),
        payment_method: "visa".to_string(),
        payment_status: "approved".to_string(),
        description: Some("Product purchase".to_string()),
        purchase_date,
        card_type: Some("credit_card".to_string()),
        installments: Some(1),
        card_last_digits: Some("4242".to_string()),
        items: vec![
            PurchaseItemRecord {
                uuid: PurchaseItemUuid::new(),
                purchase_uuid: uuid,
                product_name: "Mug".to_string(),
                quantity: 2,
                price: Decimal::new(25, 0),
                created_at: purchase_date,
            },
            PurchaseItemRecord {
                uuid: PurchaseItemUuid::new(),
                purchase_uuid: uuid,
                product_name: "Tea".to_string(),
                quantity: 1,
                price: Decimal::new(50, 0),
                created_at: purchase_date,
            },
        ],
        created_at: purchase_date,
    }
}
