//! HTTP server command
//!
//! Opens the store, creates the schema, loads seed data and serves the
//! users/orders/offers API until shutdown.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use orderdesk_server::db::{create_pool, is_in_memory, run_migrations};
use orderdesk_server::{run_server, seed};

use crate::config::OrderdeskConfig;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to [default: 127.0.0.1:5000]
    #[arg(long, short = 'b', env = "ORDERDESK_BIND")]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Request timeout in seconds [default: 30]
    #[arg(long, env = "ORDERDESK_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Database URL [default: sqlite::memory:]
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Skip loading seed data at startup
    #[arg(long)]
    pub no_seed: bool,

    /// Seed data JSON file (default: embedded dataset)
    #[arg(long, env = "ORDERDESK_SEED_FILE")]
    pub seed_file: Option<PathBuf>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, config: &OrderdeskConfig) -> Result<()> {
    let database_url = config.database_url(args.database_url);
    if is_in_memory(&database_url) {
        tracing::info!("Using in-memory database; data is discarded on exit");
    } else {
        tracing::info!("Using database {}", database_url);
    }

    let pool = create_pool(&database_url)
        .await
        .context("Failed to create database pool")?;
    run_migrations(&pool)
        .await
        .context("Failed to create schema")?;

    if config.seed_enabled(args.no_seed) {
        let data = super::seed_data(config.seed_file(args.seed_file).as_deref())?;
        seed::load(&pool, &data)
            .await
            .context("Failed to load seed data")?;
    } else {
        tracing::info!("Seeding disabled");
    }

    let server_config = config.server_config(args.bind, args.cors_permissive, args.timeout);
    tracing::info!("Starting orderdesk server on {}", server_config.bind_addr);

    // Run server (blocks until shutdown)
    run_server(pool, server_config)
        .await
        .context("Server error")?;

    Ok(())
}
