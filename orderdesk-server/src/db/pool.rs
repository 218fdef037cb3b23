//! SQLite connection pool management
//!
//! The default store is in-memory and lives exactly as long as the
//! process. A file URL gives a durable store instead.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// URL of the default, non-persistent store.
pub const IN_MEMORY_URL: &str = "sqlite::memory:";

/// Maximum connections for file-backed stores.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Whether `database_url` names an in-memory SQLite database.
pub fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Create a SQLite connection pool.
///
/// Every in-memory connection is its own database, so an in-memory pool
/// holds a single connection that is never closed. Writes are serialized
/// through it.
///
/// # Errors
///
/// Returns an error if the URL is invalid or the database can't be opened.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("sqlite://orderdesk.db").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    if is_in_memory(database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
    } else {
        SqlitePoolOptions::new()
            .max_connections(DEFAULT_MAX_CONNECTIONS)
            .connect_with(options)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_in_memory_urls() {
        assert!(is_in_memory(IN_MEMORY_URL));
        assert!(is_in_memory("sqlite://file:shared?mode=memory&cache=shared"));
        assert!(!is_in_memory("sqlite://orderdesk.db"));
    }

    #[tokio::test]
    async fn in_memory_pool_keeps_its_database() {
        let pool = create_pool(IN_MEMORY_URL).await.expect("pool creation failed");

        sqlx::query("CREATE TABLE t (v INTEGER)")
            .execute(&pool)
            .await
            .expect("create failed");
        sqlx::query("INSERT INTO t (v) VALUES (7)")
            .execute(&pool)
            .await
            .expect("insert failed");

        let (v,): (i64,) = sqlx::query_as("SELECT v FROM t")
            .fetch_one(&pool)
            .await
            .expect("select failed");
        assert_eq!(v, 7);
    }

    #[tokio::test]
    async fn file_pool_creates_the_database() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orderdesk.db");
        let url = format!("sqlite://{}", path.display());

        let pool = create_pool(&url).await.expect("pool creation failed");
        let (one,): (i64,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(one, 1);
        assert!(path.exists());
    }
}
