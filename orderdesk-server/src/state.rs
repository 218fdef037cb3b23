//! Application state handed to every handler through axum's `State`

use std::sync::Arc;
use std::time::{Duration, Instant};

use sqlx::SqlitePool;

/// Cheap-to-clone handle on the store plus process start time.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Inner>,
}

struct Inner {
    pool: SqlitePool,
    started_at: Instant,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            inner: Arc::new(Inner {
                pool,
                started_at: Instant::now(),
            }),
        }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.inner.pool
    }

    pub fn uptime(&self) -> Duration {
        self.inner.started_at.elapsed()
    }
}
