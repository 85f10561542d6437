//! Handlers for the `/packing-lists` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use indexmap::IndexMap;
use packwise_core::category::Category;
use packwise_core::error::CoreError;
use packwise_core::grouping::group_by_category;
use packwise_core::progress::PackingProgress;
use packwise_core::types::EntityId;
use packwise_db::models::packing_item::PackingItem;
use packwise_db::models::packing_list::{PackingList, UpdatePackingList};
use packwise_db::repositories::PackingListRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

async fn find_or_404(state: &AppState, id: EntityId) -> AppResult<PackingList> {
    PackingListRepo::find_by_id(&state.store, id)
        .await
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PackingList",
            id,
        }))
}

/// GET /api/v1/packing-lists
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<PackingList>>> {
    Ok(Json(PackingListRepo::list(&state.store).await))
}

/// GET /api/v1/packing-lists/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<PackingList>> {
    Ok(Json(find_or_404(&state, id).await?))
}

/// PUT /api/v1/packing-lists/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(input): Json<UpdatePackingList>,
) -> AppResult<Json<PackingList>> {
    let list = PackingListRepo::update(&state.store, id, &input).await?;
    Ok(Json(list))
}

/// DELETE /api/v1/packing-lists/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<StatusCode> {
    PackingListRepo::delete(&state.store, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/packing-lists/{id}/progress
pub async fn progress(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<DataResponse<PackingProgress>>> {
    let list = find_or_404(&state, id).await?;
    Ok(Json(DataResponse {
        data: list.progress(),
    }))
}

/// GET /api/v1/packing-lists/{id}/items
///
/// Items grouped by category, in first-seen category order.
pub async fn items_by_category(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<DataResponse<IndexMap<Category, Vec<PackingItem>>>>> {
    let snapshot = PackingListRepo::find_with_items(&state.store, id)
        .await
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PackingList",
            id,
        }))?;
    let groups = group_by_category(snapshot.items, |item| item.category);

    tracing::debug!(packing_list_id = %id, groups = groups.len(), "Grouped packing items");
    Ok(Json(DataResponse { data: groups }))
}
