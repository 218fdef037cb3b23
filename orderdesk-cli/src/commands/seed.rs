//! Seed command: load the dataset into a store and exit
//!
//! Meant for file-backed stores. Seed ids are fixed, so seeding the same
//! store twice fails with a conflict.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use orderdesk_server::db::{create_pool, is_in_memory};
use orderdesk_server::seed::migrate_and_load;

use crate::config::OrderdeskConfig;

#[derive(Parser, Debug)]
pub struct SeedArgs {
    /// Database URL, e.g. sqlite://orderdesk.db
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Seed data JSON file (default: embedded dataset)
    #[arg(long, env = "ORDERDESK_SEED_FILE")]
    pub seed_file: Option<PathBuf>,
}

pub async fn run_seed(args: SeedArgs, config: &OrderdeskConfig) -> Result<()> {
    let database_url = config.database_url(args.database_url);
    if is_in_memory(&database_url) {
        tracing::warn!("Seeding an in-memory database; nothing will persist");
    }

    let data = super::seed_data(config.seed_file(args.seed_file).as_deref())?;
    let pool = create_pool(&database_url)
        .await
        .context("Failed to create database pool")?;

    let summary = migrate_and_load(&pool, &data)
        .await
        .context("Failed to load seed data")?;
    pool.close().await;

    println!(
        "Seeded {} users, {} orders, {} offers into {}",
        summary.users, summary.orders, summary.offers, database_url
    );
    Ok(())
}
