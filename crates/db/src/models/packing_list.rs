//! Packing list entity model and DTOs.

use packwise_core::category::Category;
use packwise_core::progress::PackingProgress;
use packwise_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};

use crate::models::packing_item::PackingItem;

/// A packing list held in the `packing_lists` collection.
///
/// `total_items` and `packed_items` are maintained by the store from the
/// list's items; they cannot be written directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackingList {
    pub id: EntityId,
    pub trip_id: EntityId,
    pub categories: Vec<Category>,
    pub total_items: usize,
    pub packed_items: usize,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl PackingList {
    pub fn progress(&self) -> PackingProgress {
        PackingProgress::new(self.total_items, self.packed_items)
    }
}

/// DTO for updating a packing list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePackingList {
    pub categories: Option<Vec<Category>>,
}

/// A packing list with its items, taken from one consistent read.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackingListWithItems {
    pub packing_list: PackingList,
    pub items: Vec<PackingItem>,
}
