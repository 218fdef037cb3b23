//! Users: customers and executors alike

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Everything about a user except its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct UserFields {
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
    pub email: String,
    pub role: String,
    pub phone: String,
}

/// Stored user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub fields: UserFields,
}
