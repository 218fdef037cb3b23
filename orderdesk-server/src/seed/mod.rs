//! Startup data loader
//!
//! Fills an empty store with a fixed dataset: all users, then all orders,
//! then all offers, one committed transaction per entity type. Order dates
//! arrive as `MM/DD/YYYY` text and are parsed before anything is written,
//! so a bad date leaves the store untouched.
//!
//! Ids in the dataset are explicit. Loading into a store that already
//! holds them fails with a conflict; the loader is meant to run once
//! against a fresh schema.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use sqlx::SqlitePool;
use thiserror::Error;

use crate::db::repos::insert;
use crate::db::DbError;
use crate::models::{parse_date, Offer, Order, OrderFields, User};

/// Dataset compiled into the binary.
const EMBEDDED_SEED: &str = include_str!("../../data/seed.json");

/// Errors raised while reading or loading seed data.
///
/// All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid seed data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("order {order_id}: invalid {field} '{value}' (expected MM/DD/YYYY): {source}")]
    InvalidDate {
        order_id: i64,
        field: &'static str,
        value: String,
        source: chrono::ParseError,
    },

    #[error("failed to create schema: {0}")]
    Migration(#[source] sqlx::Error),

    #[error(transparent)]
    Database(#[from] DbError),
}

/// An order as it appears in seed data, dates still textual.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedOrder {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub address: String,
    pub price: i64,
    pub customer_id: i64,
    pub executor_id: i64,
}

impl SeedOrder {
    fn parse(&self) -> Result<Order, SeedError> {
        let date = |field: &'static str, value: &str| {
            parse_date(value).map_err(|source| SeedError::InvalidDate {
                order_id: self.id,
                field,
                value: value.to_owned(),
                source,
            })
        };

        Ok(Order {
            id: self.id,
            fields: OrderFields {
                name: self.name.clone(),
                description: self.description.clone(),
                start_date: date("start_date", &self.start_date)?,
                end_date: date("end_date", &self.end_date)?,
                address: self.address.clone(),
                price: self.price,
                customer_id: self.customer_id,
                executor_id: self.executor_id,
            },
        })
    }
}

/// Users, orders and offers to load at startup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub orders: Vec<SeedOrder>,
    #[serde(default)]
    pub offers: Vec<Offer>,
}

impl SeedData {
    /// The dataset shipped with the server.
    pub fn embedded() -> Result<Self, SeedError> {
        Self::from_json(EMBEDDED_SEED)
    }

    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, SeedError> {
        let json = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}

/// Record counts written by [`load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedSummary {
    pub users: usize,
    pub orders: usize,
    pub offers: usize,
}

/// Write `data` into the store.
///
/// Each entity batch commits on its own; a failing batch is rolled back
/// and the error returned, earlier batches stay committed.
pub async fn load(pool: &SqlitePool, data: &SeedData) -> Result<SeedSummary, SeedError> {
    let orders = data
        .orders
        .iter()
        .map(SeedOrder::parse)
        .collect::<Result<Vec<_>, _>>()?;

    let mut tx = pool.begin().await.map_err(DbError::from)?;
    for user in &data.users {
        insert::<User>(&mut tx, Some(user.id), user.fields.clone()).await?;
    }
    tx.commit().await.map_err(DbError::from)?;

    let mut tx = pool.begin().await.map_err(DbError::from)?;
    for order in orders {
        insert::<Order>(&mut tx, Some(order.id), order.fields).await?;
    }
    tx.commit().await.map_err(DbError::from)?;

    let mut tx = pool.begin().await.map_err(DbError::from)?;
    for offer in &data.offers {
        insert::<Offer>(&mut tx, Some(offer.id), offer.fields.clone()).await?;
    }
    tx.commit().await.map_err(DbError::from)?;

    let summary = SeedSummary {
        users: data.users.len(),
        orders: data.orders.len(),
        offers: data.offers.len(),
    };
    tracing::info!(
        users = summary.users,
        orders = summary.orders,
        offers = summary.offers,
        "seed data loaded"
    );
    Ok(summary)
}

/// Create the schema, then [`load`] `data` into it.
pub async fn migrate_and_load(
    pool: &SqlitePool,
    data: &SeedData,
) -> Result<SeedSummary, SeedError> {
    crate::db::run_migrations(pool)
        .await
        .map_err(SeedError::Migration)?;
    load(pool, data).await
}
