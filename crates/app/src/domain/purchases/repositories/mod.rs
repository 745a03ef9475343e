//! Purchase Repositories

mod items;
mod purchases;

pub(crate) use items::PgPurchaseItemsRepository;
pub(crate) use purchases::{PgPurchasesRepository, PurchaseRow};
