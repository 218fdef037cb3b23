//! Repository for the stored entities
//!
//! One generic [`Repo`] serves users, orders and offers. Each entity
//! describes its table through [`Entity`] and binds its own columns
//! through [`EntityFields`]; the SQL itself is shared.

pub mod offers;
pub mod orders;
pub mod users;

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{FromRow, Sqlite, SqliteConnection, SqlitePool};

use crate::models::EntityPayload;

/// Query with positional `?` arguments still to be bound.
pub type SqliteQuery<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: i64 },

    #[error("conflict: {resource} '{id}' already exists")]
    Conflict { resource: &'static str, id: i64 },
}

/// The non-id columns of an entity.
pub trait EntityFields: DeserializeOwned + Send + Sync + 'static {
    /// Column names, in the order [`EntityFields::bind`] binds them.
    const COLUMNS: &'static [&'static str];

    /// Bind one argument per column, in `COLUMNS` order.
    fn bind<'q>(self, query: SqliteQuery<'q>) -> SqliteQuery<'q>;
}

/// A stored record type with an integer primary key.
pub trait Entity: for<'r> FromRow<'r, SqliteRow> + Serialize + Send + Sync + Unpin + 'static {
    /// Name used in errors and logs, e.g. `"user"`.
    const RESOURCE: &'static str;

    const TABLE: &'static str;

    type Fields: EntityFields;
}

/// CRUD over one entity table
pub struct Repo<'a, E> {
    pool: &'a SqlitePool,
    _entity: PhantomData<fn() -> E>,
}

impl<'a, E: Entity> Repo<'a, E> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }

    /// All records in primary-key order.
    pub async fn list(&self) -> Result<Vec<E>, DbError> {
        let sql = format!(
            "SELECT id, {} FROM {} ORDER BY id",
            E::Fields::COLUMNS.join(", "),
            E::TABLE
        );
        let records = sqlx::query_as::<_, E>(&sql).fetch_all(self.pool).await?;
        Ok(records)
    }

    pub async fn get(&self, id: i64) -> Result<E, DbError> {
        let sql = format!(
            "SELECT id, {} FROM {} WHERE id = ?",
            E::Fields::COLUMNS.join(", "),
            E::TABLE
        );
        sqlx::query_as::<_, E>(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(DbError::NotFound {
                resource: E::RESOURCE,
                id,
            })
    }

    /// Insert a record, returning its id.
    ///
    /// Uses the payload's id when it has one, otherwise the store picks
    /// the next free id. Referenced ids are not checked.
    pub async fn create(&self, payload: EntityPayload<E::Fields>) -> Result<i64, DbError> {
        let mut conn = self.pool.acquire().await?;
        insert::<E>(&mut conn, payload.id, payload.fields).await
    }

    /// Replace every field of record `id`.
    pub async fn update(&self, id: i64, fields: E::Fields) -> Result<(), DbError> {
        let assignments = E::Fields::COLUMNS
            .iter()
            .map(|column| format!("{} = ?", column))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!("UPDATE {} SET {} WHERE id = ?", E::TABLE, assignments);

        let result = fields
            .bind(sqlx::query(&sql))
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: E::RESOURCE,
                id,
            });
        }

        tracing::debug!(resource = E::RESOURCE, id, "record replaced");
        Ok(())
    }

    /// Delete record `id`. Records referring to it are left as they are.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let sql = format!("DELETE FROM {} WHERE id = ?", E::TABLE);
        let result = sqlx::query(&sql).bind(id).execute(self.pool).await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: E::RESOURCE,
                id,
            });
        }

        tracing::debug!(resource = E::RESOURCE, id, "record deleted");
        Ok(())
    }
}

/// Insert one record on an open connection or transaction.
///
/// A duplicate explicit id becomes [`DbError::Conflict`].
pub(crate) async fn insert<E: Entity>(
    conn: &mut SqliteConnection,
    id: Option<i64>,
    fields: E::Fields,
) -> Result<i64, DbError> {
    let columns = E::Fields::COLUMNS.join(", ");
    let placeholders = vec!["?"; E::Fields::COLUMNS.len()].join(", ");
    let sql = match id {
        Some(_) => format!(
            "INSERT INTO {} (id, {}) VALUES (?, {})",
            E::TABLE,
            columns,
            placeholders
        ),
        None => format!(
            "INSERT INTO {} ({}) VALUES ({})",
            E::TABLE,
            columns,
            placeholders
        ),
    };

    let mut query = sqlx::query(&sql);
    if let Some(id) = id {
        query = query.bind(id);
    }

    let result = fields
        .bind(query)
        .execute(&mut *conn)
        .await
        .map_err(|e| insert_error(e, E::RESOURCE, id))?;

    let new_id = result.last_insert_rowid();
    tracing::debug!(resource = E::RESOURCE, id = new_id, "record created");
    Ok(new_id)
}

fn insert_error(err: sqlx::Error, resource: &'static str, id: Option<i64>) -> DbError {
    if let (Some(id), sqlx::Error::Database(db)) = (id, &err) {
        if db.is_unique_violation() {
            return DbError::Conflict { resource, id };
        }
    }
    DbError::Sqlx(err)
}
