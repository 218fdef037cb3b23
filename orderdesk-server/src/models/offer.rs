//! Offers: a user proposing to execute an order

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct OfferFields {
    pub order_id: i64,
    pub executor_id: i64,
}

/// Stored offer record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Offer {
    pub id: i64,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub fields: OfferFields,
}
