use clap::{Parser, Subcommand};

mod db;
mod sales;

#[derive(Debug, Parser)]
#[command(name = "storefront-app", about = "Storefront maintenance CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    Sales(sales::SalesCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::Sales(command) => sales::run(command).await,
        }
    }
}
