//! Subcommand implementations

pub mod seed;
pub mod serve;

use std::path::Path;

use anyhow::{Context, Result};
use orderdesk_server::SeedData;

pub use seed::{run_seed, SeedArgs};
pub use serve::{run_serve, ServeArgs};

/// Seed dataset from `path`, or the embedded one.
fn seed_data(path: Option<&Path>) -> Result<SeedData> {
    match path {
        Some(path) => {
            tracing::info!("Reading seed data from {}", path.display());
            SeedData::from_path(path).context("Failed to read seed data")
        }
        None => SeedData::embedded().context("Embedded seed data is invalid"),
    }
}
