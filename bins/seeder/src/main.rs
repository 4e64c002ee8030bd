//! Demo data seeder for Nirmaan development.
//!
//! Seeds a project budget, a small labour roster and a few expenses. Each
//! table is only seeded while it is empty, so running twice is harmless.
//!
//! Usage: cargo run --bin seeder

use anyhow::Context;
use nirmaan_core::{budget::BudgetService, expense::ExpenseService, labour::LabourService};
use nirmaan_db::{BudgetRepository, ExpenseRepository, LabourRepository};
use nirmaan_shared::config::DatabaseConfig;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const WORKERS: [(&str, Decimal); 4] = [
    ("Ram", dec!(500)),
    ("Shyam", dec!(600)),
    ("Mohan", dec!(550)),
    ("Sita", dec!(450)),
];

const EXPENSES: [(&str, Decimal, &str); 3] = [
    ("Cement", dec!(20000), "2024-01-01"),
    ("Steel", dec!(35000), "2024-01-10"),
    ("Transport", dec!(4500.50), "2024-01-12"),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("DATABASE_URL")
        .or_else(|_| std::env::var("NIRMAAN__DATABASE__URL"))
        .context("DATABASE_URL must be set in environment")?;

    println!("Connecting to database...");
    let db = nirmaan_db::connect(&DatabaseConfig::new(database_url))
        .await
        .context("Failed to connect to database")?;

    println!("Seeding project budget...");
    seed_budget(&BudgetRepository::new(db.clone())).await?;

    println!("Seeding labour roster...");
    seed_labour(&LabourRepository::new(db.clone())).await?;

    println!("Seeding expenses...");
    seed_expenses(&ExpenseRepository::new(db)).await?;

    println!("Seeding complete!");
    Ok(())
}

async fn seed_budget(repo: &BudgetRepository) -> anyhow::Result<()> {
    if repo.current().await?.is_some() {
        println!("  Budget already set, skipping");
        return Ok(());
    }

    let total = BudgetService::validate_total_budget(dec!(500000))?;
    repo.set_total(total).await?;
    println!("  Budget set to {total}");
    Ok(())
}

async fn seed_labour(repo: &LabourRepository) -> anyhow::Result<()> {
    if !repo.list().await?.is_empty() {
        println!("  Workers already present, skipping");
        return Ok(());
    }

    for (name, wage) in WORKERS {
        let id = repo.create(LabourService::validate_new_worker(name, wage)?).await?;
        println!("  Added {name} (id {id})");
    }
    Ok(())
}

async fn seed_expenses(repo: &ExpenseRepository) -> anyhow::Result<()> {
    if !repo.list().await?.is_empty() {
        println!("  Expenses already present, skipping");
        return Ok(());
    }

    for (category, amount, date) in EXPENSES {
        let expense = ExpenseService::validate_new_expense(category, amount, date)?;
        let id = repo.create(expense).await?;
        println!("  Added {category} (id {id})");
    }
    Ok(())
}
