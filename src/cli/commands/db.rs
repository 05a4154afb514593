use clap::Subcommand;
use serde_json::json;

use crate::cli::utils::output_success;
use crate::cli::OutputFormat;
use crate::config;
use crate::database::{seed, service, DatabaseManager};

#[derive(Subcommand)]
pub enum DbCommands {
    #[command(about = "Create the restaurants, pizzas and restaurant_pizzas tables")]
    Migrate,

    #[command(about = "Insert sample restaurants, pizzas and prices")]
    Seed {
        #[arg(long, help = "Delete existing rows before seeding")]
        reset: bool,
    },

    #[command(about = "Delete every row from all tables")]
    Reset,
}

pub async fn handle(cmd: DbCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let database = &config::config().database;
    let pool = DatabaseManager::connect_and_migrate(database).await?;

    let result = match cmd {
        DbCommands::Migrate => output_success(
            &output_format,
            &format!("Schema is up to date at {}", database.url),
            Some(json!({ "database": database.url })),
        ),
        DbCommands::Seed { reset } => {
            if reset {
                service::reset(&pool).await?;
            }
            let summary = seed::seed(&pool).await?;
            output_success(
                &output_format,
                &format!(
                    "Seeded {} restaurants, {} pizzas and {} restaurant pizzas",
                    summary.restaurants, summary.pizzas, summary.restaurant_pizzas
                ),
                Some(serde_json::to_value(summary)?),
            )
        }
        DbCommands::Reset => {
            service::reset(&pool).await?;
            output_success(&output_format, "Deleted all rows", None)
        }
    };

    DatabaseManager::close(pool).await;
    result
}
