//! Handlers for the `/trips` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use indexmap::IndexMap;
use packwise_core::category::Category;
use packwise_core::error::CoreError;
use packwise_core::generator::generate_packing_items;
use packwise_core::grouping::group_by_category;
use packwise_core::progress::PackingProgress;
use packwise_core::trip::{days_until_departure, trip_duration_days};
use packwise_core::types::EntityId;
use packwise_db::models::packing_item::PackingItem;
use packwise_db::models::packing_list::{PackingList, PackingListWithItems};
use packwise_db::models::trip::{CreateTrip, Trip, TripDetail, TripWithPackingList, UpdateTrip};
use packwise_db::repositories::TripRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Everything the trip screen needs in one response.
#[derive(Debug, Serialize)]
pub struct TripOverview {
    pub trip: Trip,
    pub packing_list: Option<PackingList>,
    pub progress: PackingProgress,
    pub items_by_category: IndexMap<Category, Vec<PackingItem>>,
    /// Negative once the trip has started.
    pub days_until_departure: i64,
    pub duration_days: i64,
}

/// POST /api/v1/trips
///
/// Validates the form, generates the checklist from weather and trip type,
/// and commits trip, list and items as one batch.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTrip>,
) -> AppResult<(StatusCode, Json<TripWithPackingList>)> {
    let new_trip = input.validate()?;
    let templates = generate_packing_items(new_trip.weather, new_trip.trip_type);

    let created = TripRepo::create_with_packing_list(&state.store, new_trip, &templates).await;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/v1/trips
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Trip>>> {
    let trips = TripRepo::list(&state.store).await;
    Ok(Json(trips))
}

/// GET /api/v1/trips/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<Trip>> {
    let trip = TripRepo::find_by_id(&state.store, id)
        .await
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Trip", id }))?;
    Ok(Json(trip))
}

/// PUT /api/v1/trips/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(input): Json<UpdateTrip>,
) -> AppResult<Json<Trip>> {
    let trip = TripRepo::update(&state.store, id, &input).await?;
    Ok(Json(trip))
}

/// DELETE /api/v1/trips/{id}
///
/// Also removes the trip's packing list and items.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<StatusCode> {
    TripRepo::delete(&state.store, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/trips/{id}/overview
///
/// A trip without a packing list reports zero progress and no groups.
pub async fn overview(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<DataResponse<TripOverview>>> {
    let TripDetail { trip, packing_list } = TripRepo::find_detail(&state.store, id)
        .await
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Trip", id }))?;

    let (packing_list, progress, items_by_category) = match packing_list {
        Some(PackingListWithItems {
            packing_list,
            items,
        }) => {
            let progress = packing_list.progress();
            let groups = group_by_category(items, |item| item.category);
            (Some(packing_list), progress, groups)
        }
        None => (None, PackingProgress::empty(), IndexMap::new()),
    };

    let today = Utc::now().date_naive();
    let overview = TripOverview {
        days_until_departure: days_until_departure(trip.start_date, today),
        duration_days: trip_duration_days(trip.start_date, trip.end_date),
        trip,
        packing_list,
        progress,
        items_by_category,
    };

    tracing::debug!(
        trip_id = %id,
        percent = overview.progress.percent,
        "Built trip overview"
    );

    Ok(Json(DataResponse { data: overview }))
}
