//! Route definitions for the `/packing-items` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::packing_item;
use crate::state::AppState;

/// Routes mounted at `/packing-items`.
///
/// ```text
/// GET    /                -> list (optional ?packing_list_id=)
/// POST   /                -> create
/// GET    /{id}            -> get_by_id
/// PUT    /{id}            -> update
/// DELETE /{id}            -> delete
/// POST   /{id}/toggle     -> toggle
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(packing_item::list).post(packing_item::create))
        .route(
            "/{id}",
            get(packing_item::get_by_id)
                .put(packing_item::update)
                .delete(packing_item::delete),
        )
        .route("/{id}/toggle", post(packing_item::toggle))
}
