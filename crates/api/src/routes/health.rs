use axum::extract::State;
use axum::{routing::get, Json, Router};
use packwise_db::StoreStats;
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Entity counts in the store.
    pub store: StoreStats,
}

/// GET /health -- returns service status and store counts.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let store = packwise_db::health_check(&state.store).await;

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        store,
    })
}

/// Mount health check routes (root level, not under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
