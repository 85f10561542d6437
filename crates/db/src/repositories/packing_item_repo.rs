//! Repository for the `packing_items` collection.
//!
//! Every mutation recomputes the owning list's `total_items` and
//! `packed_items` under the same write lock.

use chrono::Utc;
use packwise_core::error::CoreError;
use packwise_core::item::{validate_item_name, validate_notes, validate_quantity};
use packwise_core::types::{new_id, EntityId};

use crate::models::packing_item::{CreatePackingItem, PackedToggle, PackingItem, UpdatePackingItem};
use crate::Store;

const ENTITY: &str = "PackingItem";

/// Provides CRUD and toggle operations for packing items.
pub struct PackingItemRepo;

impl PackingItemRepo {
    /// List all packing items in creation order.
    pub async fn list(store: &Store) -> Vec<PackingItem> {
        store.read().await.packing_items.values().cloned().collect()
    }

    /// List the items of one packing list in creation order.
    pub async fn list_by_packing_list(
        store: &Store,
        packing_list_id: EntityId,
    ) -> Vec<PackingItem> {
        store.read().await.items_of(packing_list_id)
    }

    /// Find a packing item by its ID.
    pub async fn find_by_id(store: &Store, id: EntityId) -> Option<PackingItem> {
        store.read().await.packing_items.get(&id).cloned()
    }

    /// Add an item to an existing packing list.
    pub async fn create(
        store: &Store,
        input: &CreatePackingItem,
    ) -> Result<PackingItem, CoreError> {
        let name = validate_item_name(&input.name)?;
        validate_quantity(input.quantity)?;
        validate_notes(&input.notes)?;

        let mut c = store.write().await;
        if !c.packing_lists.contains_key(&input.packing_list_id) {
            return Err(CoreError::NotFound {
                entity: "PackingList",
                id: input.packing_list_id,
            });
        }

        let now = Utc::now();
        let item = PackingItem {
            id: new_id(),
            packing_list_id: input.packing_list_id,
            name,
            category: input.category,
            quantity: input.quantity,
            priority: input.priority,
            is_packed: input.is_packed,
            notes: input.notes.clone(),
            created_at: now,
            updated_at: now,
        };
        c.packing_items.insert(item.id, item.clone());
        c.recount_packing_list(item.packing_list_id);

        tracing::debug!(
            item_id = %item.id,
            packing_list_id = %item.packing_list_id,
            category = item.category.as_str(),
            "Created packing item"
        );
        Ok(item)
    }

    /// Update a packing item. Only `Some` fields in `input` are applied.
    pub async fn update(
        store: &Store,
        id: EntityId,
        input: &UpdatePackingItem,
    ) -> Result<PackingItem, CoreError> {
        let name = input.name.as_deref().map(validate_item_name).transpose()?;
        if let Some(quantity) = input.quantity {
            validate_quantity(quantity)?;
        }
        if let Some(notes) = &input.notes {
            validate_notes(notes)?;
        }

        let mut c = store.write().await;
        let item = c
            .packing_items
            .get_mut(&id)
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;

        if let Some(name) = name {
            item.name = name;
        }
        if let Some(category) = input.category {
            item.category = category;
        }
        if let Some(quantity) = input.quantity {
            item.quantity = quantity;
        }
        if let Some(priority) = input.priority {
            item.priority = priority;
        }
        if let Some(is_packed) = input.is_packed {
            item.is_packed = is_packed;
        }
        if let Some(notes) = &input.notes {
            item.notes = notes.clone();
        }
        item.updated_at = Utc::now();

        let item = item.clone();
        c.recount_packing_list(item.packing_list_id);

        tracing::debug!(item_id = %id, "Updated packing item");
        Ok(item)
    }

    /// Delete a packing item.
    pub async fn delete(store: &Store, id: EntityId) -> Result<PackingItem, CoreError> {
        let mut c = store.write().await;
        let item = c
            .packing_items
            .shift_remove(&id)
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;
        c.recount_packing_list(item.packing_list_id);

        tracing::debug!(item_id = %id, "Deleted packing item");
        Ok(item)
    }

    /// Flip an item's packed flag and recompute its list's counts.
    ///
    /// If the owning list is gone, the item is still toggled and the
    /// returned `packing_list` is `None`.
    pub async fn toggle_packed(store: &Store, id: EntityId) -> Result<PackedToggle, CoreError> {
        let mut c = store.write().await;
        let item = c
            .packing_items
            .get_mut(&id)
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;

        item.is_packed = !item.is_packed;
        item.updated_at = Utc::now();
        let item = item.clone();

        let packing_list = c.recount_packing_list(item.packing_list_id).cloned();
        match &packing_list {
            Some(list) => tracing::debug!(
                item_id = %id,
                is_packed = item.is_packed,
                packed_items = list.packed_items,
                total_items = list.total_items,
                "Toggled packing item"
            ),
            None => tracing::warn!(
                item_id = %id,
                packing_list_id = %item.packing_list_id,
                "Toggled packing item whose packing list no longer exists; progress not updated"
            ),
        }

        Ok(PackedToggle { item, packing_list })
    }
}
