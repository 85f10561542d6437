//! Repository for the `packing_lists` collection.

use chrono::Utc;
use packwise_core::category::{default_categories, Category};
use packwise_core::error::CoreError;
use packwise_core::item::validate_categories;
use packwise_core::types::{new_id, EntityId};

use crate::models::packing_list::{PackingList, PackingListWithItems, UpdatePackingList};
use crate::Store;

const ENTITY: &str = "PackingList";

/// Provides CRUD operations for packing lists.
///
/// Item counts are owned by the store; see [`crate::repositories::PackingItemRepo`].
pub struct PackingListRepo;

impl PackingListRepo {
    /// List all packing lists in creation order.
    pub async fn list(store: &Store) -> Vec<PackingList> {
        store.read().await.packing_lists.values().cloned().collect()
    }

    /// Find a packing list by its ID.
    pub async fn find_by_id(store: &Store, id: EntityId) -> Option<PackingList> {
        store.read().await.packing_lists.get(&id).cloned()
    }

    /// Find the packing list of a trip (the first one, if several exist).
    pub async fn find_by_trip(store: &Store, trip_id: EntityId) -> Option<PackingList> {
        store
            .read()
            .await
            .packing_lists
            .values()
            .find(|list| list.trip_id == trip_id)
            .cloned()
    }

    /// Find a packing list together with its items in one read.
    pub async fn find_with_items(store: &Store, id: EntityId) -> Option<PackingListWithItems> {
        store.read().await.list_with_items(id)
    }

    /// Create an empty packing list for an existing trip.
    ///
    /// `categories` defaults to all five categories.
    pub async fn create(
        store: &Store,
        trip_id: EntityId,
        categories: Option<Vec<Category>>,
    ) -> Result<PackingList, CoreError> {
        let categories = categories.unwrap_or_else(default_categories);
        validate_categories(&categories)?;

        let mut c = store.write().await;
        if !c.trips.contains_key(&trip_id) {
            return Err(CoreError::NotFound {
                entity: "Trip",
                id: trip_id,
            });
        }

        let now = Utc::now();
        let list = PackingList {
            id: new_id(),
            trip_id,
            categories,
            total_items: 0,
            packed_items: 0,
            created_at: now,
            updated_at: now,
        };
        c.packing_lists.insert(list.id, list.clone());

        tracing::debug!(packing_list_id = %list.id, %trip_id, "Created packing list");
        Ok(list)
    }

    /// Update a packing list's declared categories.
    ///
    /// Items whose category is dropped from the list are kept.
    pub async fn update(
        store: &Store,
        id: EntityId,
        input: &UpdatePackingList,
    ) -> Result<PackingList, CoreError> {
        if let Some(categories) = &input.categories {
            validate_categories(categories)?;
        }

        let mut c = store.write().await;
        let list = c
            .packing_lists
            .get_mut(&id)
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;

        if let Some(categories) = &input.categories {
            list.categories = categories.clone();
        }
        list.updated_at = Utc::now();

        tracing::debug!(packing_list_id = %id, "Updated packing list");
        Ok(list.clone())
    }

    /// Delete a packing list and all of its items.
    pub async fn delete(store: &Store, id: EntityId) -> Result<PackingList, CoreError> {
        let list = store
            .write()
            .await
            .remove_packing_list_cascade(id)
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;

        tracing::info!(packing_list_id = %id, "Deleted packing list");
        Ok(list)
    }
}
