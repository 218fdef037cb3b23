//! Route handlers organized by resource

pub mod entities;
pub mod health;

use axum::Router;

use crate::models::{Offer, Order, User};
use crate::state::AppState;

/// Health plus the three entity route groups.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(entities::router::<User>("/users"))
        .merge(entities::router::<Order>("/orders"))
        .merge(entities::router::<Offer>("/offers"))
}
