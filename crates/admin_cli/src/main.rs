use std::error::Error;

use clap::{Parser, Subcommand};
use engine::{Engine, NewSweet};
use migration::MigratorTrait;
use sea_orm::{Database, DatabaseConnection};

#[derive(Parser, Debug)]
#[command(name = "dolceria_admin")]
#[command(about = "Admin utilities for Dolceria (seed and inspect the inventory)")]
struct Cli {
    /// Database connection string (also read from `DATABASE_URL`).
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "sqlite:./dolceria.db?mode=rwc"
    )]
    database_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load a starter catalog into an empty inventory.
    Seed,
    /// Print the current inventory.
    List,
}

fn starter_catalog() -> Vec<NewSweet> {
    vec![
        NewSweet::new()
            .name("Dark Chocolate Truffle")
            .category("Chocolate")
            .price(25.99)
            .quantity(10),
        NewSweet::new()
            .name("Milk Chocolate Bar")
            .category("Chocolate")
            .price(4.50)
            .quantity(30),
        NewSweet::new()
            .name("Rock Candy")
            .category("Candy")
            .price(2.00)
            .quantity(50),
        NewSweet::new()
            .name("Lemon Tart")
            .category("Pastry")
            .price(6.25)
            .quantity(8),
        NewSweet::new()
            .name("Almond Praline")
            .category("Nut-Based")
            .price(18.75)
            .quantity(12),
        NewSweet::new()
            .name("Gulab Jamun")
            .category("Milk-Based")
            .price(12.00)
            .quantity(20),
    ]
}

async fn connect_db(
    database_url: &str,
) -> Result<DatabaseConnection, Box<dyn Error + Send + Sync>> {
    let db = Database::connect(database_url).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let cli = Cli::parse();

    let db = connect_db(&cli.database_url).await?;
    let engine = Engine::builder().database(db).build().await?;

    match cli.command {
        Command::Seed => {
            let existing = engine.sweets().await?;
            if !existing.is_empty() {
                eprintln!(
                    "inventory already holds {} sweets, not seeding",
                    existing.len()
                );
                std::process::exit(1);
            }

            for draft in starter_catalog() {
                let sweet = engine.create_sweet(draft).await?;
                println!("seeded: {} ({})", sweet.name, sweet.id);
            }
        }
        Command::List => {
            let sweets = engine.sweets().await?;
            if sweets.is_empty() {
                println!("inventory is empty");
                return Ok(());
            }

            for sweet in sweets {
                println!(
                    "{}  {}  [{}]  {}  x{}",
                    sweet.id, sweet.name, sweet.category, sweet.price, sweet.quantity
                );
            }
        }
    }

    Ok(())
}
