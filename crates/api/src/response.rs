//! Shared response envelope types for API handlers.
//!
//! Derived views (progress, grouped items, overviews) use a `{ "data": ... }`
//! envelope. Plain entity CRUD returns the entity itself.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
