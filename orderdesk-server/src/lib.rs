//! orderdesk-server: HTTP server for users, orders and offers
//!
//! Exposes CRUD endpoints for the three entities over a SQLite store
//! and seeds the store from a fixed dataset at startup.

pub mod db;
pub mod http;
pub mod models;
pub mod seed;
pub mod state;

pub use http::{build_router, run_server, ApiError, ServerConfig, ServerError, DEFAULT_TIMEOUT_SECS};
pub use seed::{SeedData, SeedError, SeedSummary};
pub use state::AppState;
