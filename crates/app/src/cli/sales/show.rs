use clap::Args;
use storefront_app::domain::purchases::{
    PgPurchasesService, PurchasesService, records::PurchaseUuid,
};

use super::print_purchase;

#[derive(Debug, Args)]
pub(crate) struct ShowSaleArgs {
    /// Purchase UUID
    #[arg(long)]
    uuid: PurchaseUuid,
}

pub(crate) async fn run(service: &PgPurchasesService, args: ShowSaleArgs) -> Result<(), String> {
    let purchase = service
        .get_purchase(args.uuid)
        .await
        .map_err(|error| format!("failed to load sale {}: {error}", args.uuid))?;

    print_purchase(&purchase);

    Ok(())
}
