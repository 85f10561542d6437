//! Route definitions for the `/last-minute-tasks` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::last_minute_task;
use crate::state::AppState;

/// Routes mounted at `/last-minute-tasks`.
///
/// ```text
/// GET    /                -> list
/// POST   /                -> create
/// GET    /progress        -> progress
/// GET    /{id}            -> get_by_id
/// PUT    /{id}            -> update
/// DELETE /{id}            -> delete
/// POST   /{id}/toggle     -> toggle
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(last_minute_task::list).post(last_minute_task::create),
        )
        .route("/progress", get(last_minute_task::progress))
        .route(
            "/{id}",
            get(last_minute_task::get_by_id)
                .put(last_minute_task::update)
                .delete(last_minute_task::delete),
        )
        .route("/{id}/toggle", post(last_minute_task::toggle))
}
