use clap::Args;
use storefront_app::domain::purchases::{PgPurchasesService, PurchasesService};

use super::print_purchase;

#[derive(Debug, Args)]
pub(crate) struct ListSalesArgs {
    /// Only print the most recent N sales
    #[arg(long)]
    limit: Option<usize>,
}

pub(crate) async fn run(service: &PgPurchasesService, args: ListSalesArgs) -> Result<(), String> {
    let sales = service
        .list_sales()
        .await
        .map_err(|error| format!("failed to list sales: {error}"))?;

    if sales.is_empty() {
        println!("no sales recorded");
        return Ok(());
    }

    for purchase in sales.iter().take(args.limit.unwrap_or(usize::MAX)) {
        print_purchase(purchase);
    }

    Ok(())
}
