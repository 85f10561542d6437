//! Route definitions for the `/packing-lists` resource.
//!
//! Packing lists are created together with their trip, so there is no POST.

use axum::routing::get;
use axum::Router;

use crate::handlers::packing_list;
use crate::state::AppState;

/// Routes mounted at `/packing-lists`.
///
/// ```text
/// GET    /                -> list
/// GET    /{id}            -> get_by_id
/// PUT    /{id}            -> update
/// DELETE /{id}            -> delete
/// GET    /{id}/progress   -> progress
/// GET    /{id}/items      -> items_by_category
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(packing_list::list))
        .route(
            "/{id}",
            get(packing_list::get_by_id)
                .put(packing_list::update)
                .delete(packing_list::delete),
        )
        .route("/{id}/progress", get(packing_list::progress))
        .route("/{id}/items", get(packing_list::items_by_category))
}
