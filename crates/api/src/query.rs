//! Shared query parameter types for API handlers.

use packwise_core::types::EntityId;
use serde::Deserialize;

/// Filter for the packing item listing (`?packing_list_id=`).
#[derive(Debug, Deserialize)]
pub struct PackingItemFilter {
    pub packing_list_id: Option<EntityId>,
}
