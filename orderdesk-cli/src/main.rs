//! orderdesk CLI - users, orders and offers over HTTP
//!
//! - `serve`: create the store, seed it and run the HTTP API
//! - `seed`: load the seed dataset into a (file-backed) store and exit

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

use config::OrderdeskConfig;
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "orderdesk",
    author,
    version,
    about = "REST backend for users, orders and offers"
)]
struct Cli {
    /// Enable debug logging (when RUST_LOG is not set)
    #[arg(long, global = true)]
    debug: bool,

    /// Export traces over OTLP (needs the `telemetry` feature)
    #[arg(long, global = true)]
    otel: bool,

    /// Config file (default: ~/.orderdesk/config.toml)
    #[arg(long, global = true, env = "ORDERDESK_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::ServeArgs),
    /// Load seed data into a database and exit
    Seed(commands::SeedArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init(&TracingConfig {
        debug: cli.debug,
        otel: cli.otel,
    })?;

    let config = OrderdeskConfig::load(cli.config.as_deref())?;

    let result = match cli.command {
        Commands::Serve(args) => commands::run_serve(args, &config).await,
        Commands::Seed(args) => commands::run_seed(args, &config).await,
    };

    tracing_setup::shutdown_otel();
    result
}
