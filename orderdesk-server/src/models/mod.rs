//! Domain models for the three stored entities
//!
//! Records are flat: an integer `id` plus a field set. The field sets are
//! what POST and PUT bodies carry, so a record and its request body share
//! one definition.

pub mod date;
pub mod offer;
pub mod order;
pub mod user;
pub mod validation;

use serde::Deserialize;

pub use date::{format_date, parse_date, DATE_FORMAT};
pub use offer::{Offer, OfferFields};
pub use order::{Order, OrderFields};
pub use user::{User, UserFields};
pub use validation::ValidationError;

/// Request body for create and full-replace update.
///
/// `id` is optional: on create the store assigns one when it is absent,
/// on update it must match the path id when present.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EntityPayload<F> {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(flatten)]
    pub fields: F,
}

impl<F> EntityPayload<F> {
    pub fn new(id: Option<i64>, fields: F) -> Self {
        Self { id, fields }
    }

    /// Fields for a PUT to `path_id`, rejecting a body that names a different record.
    pub fn into_replacement(self, path_id: i64) -> Result<F, ValidationError> {
        match self.id {
            Some(body_id) if body_id != path_id => Err(ValidationError::IdMismatch {
                path: path_id,
                body: body_id,
            }),
            _ => Ok(self.fields),
        }
    }
}
