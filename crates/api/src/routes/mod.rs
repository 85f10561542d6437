pub mod health;
pub mod last_minute_tasks;
pub mod packing_items;
pub mod packing_lists;
pub mod trips;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /trips                                list, create
/// /trips/{id}                           get, update, delete
/// /trips/{id}/overview                  trip + list + progress + groups
///
/// /packing-lists                        list
/// /packing-lists/{id}                   get, update, delete
/// /packing-lists/{id}/progress          packing progress
/// /packing-lists/{id}/items             items grouped by category
///
/// /packing-items                        list (?packing_list_id=), create
/// /packing-items/{id}                   get, update, delete
/// /packing-items/{id}/toggle            flip is_packed (POST)
///
/// /last-minute-tasks                    list, create
/// /last-minute-tasks/progress           checklist completion
/// /last-minute-tasks/{id}               get, update, delete
/// /last-minute-tasks/{id}/toggle        flip is_completed (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/trips", trips::router())
        .nest("/packing-lists", packing_lists::router())
        .nest("/packing-items", packing_items::router())
        .nest("/last-minute-tasks", last_minute_tasks::router())
}
