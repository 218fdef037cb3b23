//! Database layer - connection pool, schema and repositories
//!
//! - One table per entity, integer primary keys
//! - References between entities are plain integer columns
//! - Every repository call is a single statement; the seed loader batches
//!   one transaction per entity type

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{create_pool, is_in_memory, IN_MEMORY_URL};
pub use repos::{DbError, Entity, EntityFields, Repo};
pub use schema::run_migrations;
