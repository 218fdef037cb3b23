//! CRUD endpoints shared by users, orders and offers
//!
//! Each entity gets a collection route (`GET` list, `POST` create) and an
//! item route keyed by numeric id (`GET`, `PUT` full replace, `DELETE`).

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use crate::db::{Entity, Repo};
use crate::http::error::ApiError;
use crate::http::extractors::{EntityId, ValidJson};
use crate::models::EntityPayload;
use crate::state::AppState;

/// GET /{collection}
async fn list<E: Entity>(State(state): State<AppState>) -> Result<Json<Vec<E>>, ApiError> {
    let records = Repo::<E>::new(state.pool()).list().await?;
    Ok(Json(records))
}

/// POST /{collection} - 201 with an empty body
async fn create<E: Entity>(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<EntityPayload<E::Fields>>,
) -> Result<StatusCode, ApiError> {
    let id = Repo::<E>::new(state.pool()).create(payload).await?;
    tracing::info!(resource = E::RESOURCE, id, "created");
    Ok(StatusCode::CREATED)
}

/// GET /{collection}/{id}
async fn fetch<E: Entity>(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<E>, ApiError> {
    let record = Repo::<E>::new(state.pool()).get(id).await?;
    Ok(Json(record))
}

/// PUT /{collection}/{id} - every field is replaced, 204
async fn replace<E: Entity>(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ValidJson(payload): ValidJson<EntityPayload<E::Fields>>,
) -> Result<StatusCode, ApiError> {
    let fields = payload.into_replacement(id)?;
    Repo::<E>::new(state.pool()).update(id, fields).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /{collection}/{id} - 204, dependents are not touched
async fn remove<E: Entity>(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<StatusCode, ApiError> {
    Repo::<E>::new(state.pool()).delete(id).await?;
    tracing::info!(resource = E::RESOURCE, id, "deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Routes for one entity mounted at `collection`, e.g. `"/users"`.
pub fn router<E: Entity>(collection: &str) -> Router<AppState> {
    Router::new()
        .route(collection, get(list::<E>).post(create::<E>))
        .route(
            &format!("{}/{{id}}", collection),
            get(fetch::<E>).put(replace::<E>).delete(remove::<E>),
        )
}
