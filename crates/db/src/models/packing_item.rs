//! Packing item entity model and DTOs.

use packwise_core::category::{Category, Priority};
use packwise_core::generator::ItemTemplate;
use packwise_core::item::DEFAULT_QUANTITY;
use packwise_core::types::{new_id, EntityId, Timestamp};
use serde::{Deserialize, Serialize};

use crate::models::packing_list::PackingList;

/// A packing item held in the `packing_items` collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackingItem {
    pub id: EntityId,
    pub packing_list_id: EntityId,
    pub name: String,
    pub category: Category,
    pub quantity: u32,
    pub priority: Priority,
    pub is_packed: bool,
    pub notes: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl PackingItem {
    /// Materialize a generated template as an unpacked item of `packing_list_id`.
    pub fn from_template(
        packing_list_id: EntityId,
        template: &ItemTemplate,
        now: Timestamp,
    ) -> Self {
        Self {
            id: new_id(),
            packing_list_id,
            name: template.name.to_string(),
            category: template.category,
            quantity: template.quantity,
            priority: template.priority,
            is_packed: false,
            notes: String::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

fn default_quantity() -> u32 {
    DEFAULT_QUANTITY
}

/// DTO for adding an item to an existing packing list.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePackingItem {
    pub packing_list_id: EntityId,
    pub name: String,
    pub category: Category,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub is_packed: bool,
    #[serde(default)]
    pub notes: String,
}

/// DTO for updating a packing item. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePackingItem {
    pub name: Option<String>,
    pub category: Option<Category>,
    pub quantity: Option<u32>,
    pub priority: Option<Priority>,
    pub is_packed: Option<bool>,
    pub notes: Option<String>,
}

/// Result of toggling an item's packed flag.
///
/// `packing_list` carries the recomputed counts, or `None` if the owning list
/// no longer exists.
#[derive(Debug, Clone, Serialize)]
pub struct PackedToggle {
    pub item: PackingItem,
    pub packing_list: Option<PackingList>,
}
