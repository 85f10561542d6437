//! Handlers for the `/packing-items` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use packwise_core::error::CoreError;
use packwise_core::progress::PackingProgress;
use packwise_core::types::EntityId;
use packwise_db::models::packing_item::{CreatePackingItem, PackingItem, UpdatePackingItem};
use packwise_db::models::packing_list::PackingList;
use packwise_db::repositories::PackingItemRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::query::PackingItemFilter;
use crate::state::AppState;

/// Response for a packed-flag toggle.
#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub item: PackingItem,
    pub packing_list: Option<PackingList>,
    pub progress: PackingProgress,
}

/// GET /api/v1/packing-items
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<PackingItemFilter>,
) -> AppResult<Json<Vec<PackingItem>>> {
    let items = match filter.packing_list_id {
        Some(list_id) => PackingItemRepo::list_by_packing_list(&state.store, list_id).await,
        None => PackingItemRepo::list(&state.store).await,
    };
    Ok(Json(items))
}

/// POST /api/v1/packing-items
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePackingItem>,
) -> AppResult<(StatusCode, Json<PackingItem>)> {
    let item = PackingItemRepo::create(&state.store, &input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /api/v1/packing-items/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<PackingItem>> {
    let item = PackingItemRepo::find_by_id(&state.store, id)
        .await
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PackingItem",
            id,
        }))?;
    Ok(Json(item))
}

/// PUT /api/v1/packing-items/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(input): Json<UpdatePackingItem>,
) -> AppResult<Json<PackingItem>> {
    let item = PackingItemRepo::update(&state.store, id, &input).await?;
    Ok(Json(item))
}

/// DELETE /api/v1/packing-items/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<StatusCode> {
    PackingItemRepo::delete(&state.store, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/packing-items/{id}/toggle
pub async fn toggle(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<ToggleResponse>> {
    let toggled = PackingItemRepo::toggle_packed(&state.store, id).await?;
    let progress = toggled
        .packing_list
        .as_ref()
        .map(PackingList::progress)
        .unwrap_or_else(PackingProgress::empty);

    Ok(Json(ToggleResponse {
        item: toggled.item,
        packing_list: toggled.packing_list,
        progress,
    }))
}
