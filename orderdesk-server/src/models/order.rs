//! Orders placed by a customer and carried out by an executor

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::date::mdy;

/// Everything about an order except its id.
///
/// `customer_id` and `executor_id` are user ids. They are not checked
/// against the users table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct OrderFields {
    pub name: String,
    pub description: String,
    #[serde(with = "mdy")]
    pub start_date: NaiveDate,
    #[serde(with = "mdy")]
    pub end_date: NaiveDate,
    pub address: String,
    pub price: i64,
    pub customer_id: i64,
    pub executor_id: i64,
}

/// Stored order record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub id: i64,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub fields: OrderFields,
}
