//! Table definitions for users, orders and offers

use sqlx::SqlitePool;

/// Create the three entity tables if they don't exist yet.
///
/// `customer_id`, `executor_id` and `order_id` carry no foreign-key
/// constraint: references are by id only and may dangle.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::info!("Running orderdesk migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            age INTEGER NOT NULL,
            email TEXT NOT NULL,
            role TEXT NOT NULL,
            phone TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS orders (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            description TEXT NOT NULL,
            start_date TEXT NOT NULL,
            end_date TEXT NOT NULL,
            address TEXT NOT NULL,
            price INTEGER NOT NULL,
            customer_id INTEGER NOT NULL,
            executor_id INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS offers (
            id INTEGER PRIMARY KEY,
            order_id INTEGER NOT NULL,
            executor_id INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::debug!("orderdesk tables ready");
    Ok(())
}
