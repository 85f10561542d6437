//! Handlers for the `/last-minute-tasks` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use packwise_core::error::CoreError;
use packwise_core::progress::{count_completed, progress_pct};
use packwise_core::types::EntityId;
use packwise_db::models::last_minute_task::{
    CreateLastMinuteTask, LastMinuteTask, UpdateLastMinuteTask,
};
use packwise_db::repositories::LastMinuteTaskRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Completion summary for the pre-departure checklist.
#[derive(Debug, Serialize)]
pub struct ChecklistProgress {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub percent: u8,
}

/// GET /api/v1/last-minute-tasks
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<LastMinuteTask>>> {
    Ok(Json(LastMinuteTaskRepo::list(&state.store).await))
}

/// POST /api/v1/last-minute-tasks
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateLastMinuteTask>,
) -> AppResult<(StatusCode, Json<LastMinuteTask>)> {
    let task = LastMinuteTaskRepo::create(&state.store, &input).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /api/v1/last-minute-tasks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<LastMinuteTask>> {
    let task = LastMinuteTaskRepo::find_by_id(&state.store, id)
        .await
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "LastMinuteTask",
            id,
        }))?;
    Ok(Json(task))
}

/// PUT /api/v1/last-minute-tasks/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(input): Json<UpdateLastMinuteTask>,
) -> AppResult<Json<LastMinuteTask>> {
    let task = LastMinuteTaskRepo::update(&state.store, id, &input).await?;
    Ok(Json(task))
}

/// DELETE /api/v1/last-minute-tasks/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<StatusCode> {
    LastMinuteTaskRepo::delete(&state.store, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/last-minute-tasks/{id}/toggle
pub async fn toggle(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<LastMinuteTask>> {
    let task = LastMinuteTaskRepo::toggle_completed(&state.store, id).await?;
    Ok(Json(task))
}

/// GET /api/v1/last-minute-tasks/progress
pub async fn progress(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<ChecklistProgress>>> {
    let tasks = LastMinuteTaskRepo::list(&state.store).await;
    let total_tasks = tasks.len();
    let completed_tasks = count_completed(tasks.iter().map(|t| t.is_completed));

    Ok(Json(DataResponse {
        data: ChecklistProgress {
            total_tasks,
            completed_tasks,
            percent: progress_pct(total_tasks, completed_tasks),
        },
    }))
}
