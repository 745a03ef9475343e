use clap::{Args, Subcommand};
use storefront_app::{
    database::{self, Db},
    domain::purchases::{PgPurchasesService, records::PurchaseRecord},
};

mod list;
mod show;

#[derive(Debug, Args)]
pub(crate) struct SalesCommand {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true, global = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: SalesSubcommand,
}

#[derive(Debug, Subcommand)]
enum SalesSubcommand {
    List(list::ListSalesArgs),
    Show(show::ShowSaleArgs),
}

pub(crate) async fn run(command: SalesCommand) -> Result<(), String> {
    let database_url = command
        .database_url
        .ok_or_else(|| "DATABASE_URL is required".to_string())?;

    let pool = database::connect(&database_url, 1)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgPurchasesService::new(Db::new(pool.clone()));

    let result = match command.command {
        SalesSubcommand::List(args) => list::run(&service, args).await,
        SalesSubcommand::Show(args) => show::run(&service, args).await,
    };

    pool.close().await;

    result
}

fn print_purchase(purchase: &PurchaseRecord) {
    println!("uuid: {}", purchase.uuid);
    println!("payment_id: {}", purchase.payment_id);
    println!("purchase_date: {}", purchase.purchase_date);
    println!("customer_email: {}", purchase.customer_email);
    println!(
        "method/status: {}/{}",
        purchase.payment_method, purchase.payment_status
    );
    println!("amount: {}", purchase.amount);
    println!(
        "net_amount: {}",
        purchase
            .net_amount
            .map_or_else(|| "none".to_string(), |value| value.to_string())
    );

    for item in &purchase.items {
        println!(
            "  - {} x{} @ {}",
            item.product_name, item.quantity, item.price
        );
    }

    println!();
}
