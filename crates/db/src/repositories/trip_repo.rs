//! Repository for the `trips` collection.

use chrono::Utc;
use packwise_core::category::default_categories;
use packwise_core::error::CoreError;
use packwise_core::generator::ItemTemplate;
use packwise_core::trip::{validate_destination, validate_trip_dates};
use packwise_core::types::{new_id, EntityId};

use crate::models::packing_item::PackingItem;
use crate::models::packing_list::PackingList;
use crate::models::trip::{NewTrip, Trip, TripDetail, TripWithPackingList, UpdateTrip};
use crate::Store;

const ENTITY: &str = "Trip";

/// Provides CRUD operations for trips.
pub struct TripRepo;

impl TripRepo {
    /// List all trips in creation order.
    pub async fn list(store: &Store) -> Vec<Trip> {
        store.read().await.trips.values().cloned().collect()
    }

    /// Find a trip by its ID.
    pub async fn find_by_id(store: &Store, id: EntityId) -> Option<Trip> {
        store.read().await.trips.get(&id).cloned()
    }

    /// Find a trip with its packing list and items in one read.
    pub async fn find_detail(store: &Store, id: EntityId) -> Option<TripDetail> {
        let c = store.read().await;
        let trip = c.trips.get(&id)?.clone();
        let packing_list = c
            .packing_lists
            .values()
            .find(|list| list.trip_id == id)
            .and_then(|list| c.list_with_items(list.id));
        Some(TripDetail { trip, packing_list })
    }

    /// Insert a trip on its own, without a packing list.
    pub async fn create(store: &Store, input: NewTrip) -> Trip {
        let trip = build_trip(input);
        store.write().await.trips.insert(trip.id, trip.clone());
        tracing::debug!(trip_id = %trip.id, "Created trip");
        trip
    }

    /// Insert a trip, its packing list and one unpacked item per template as
    /// a single batch.
    ///
    /// The list declares every category and its counts reflect the inserted
    /// items. Nothing in the batch can fail once the write lock is held, so
    /// either all entities exist afterwards or (if the caller never gets here)
    /// none do.
    pub async fn create_with_packing_list(
        store: &Store,
        input: NewTrip,
        templates: &[ItemTemplate],
    ) -> TripWithPackingList {
        let trip = build_trip(input);
        let now = trip.created_at;

        let mut packing_list = PackingList {
            id: new_id(),
            trip_id: trip.id,
            categories: default_categories(),
            total_items: 0,
            packed_items: 0,
            created_at: now,
            updated_at: now,
        };

        let items: Vec<PackingItem> = templates
            .iter()
            .map(|template| PackingItem::from_template(packing_list.id, template, now))
            .collect();
        packing_list.total_items = items.len();

        let mut c = store.write().await;
        c.trips.insert(trip.id, trip.clone());
        c.packing_lists.insert(packing_list.id, packing_list.clone());
        c.packing_items
            .extend(items.iter().map(|item| (item.id, item.clone())));
        drop(c);

        tracing::info!(
            trip_id = %trip.id,
            packing_list_id = %packing_list.id,
            item_count = items.len(),
            destination = %trip.destination,
            "Created trip with packing list"
        );

        TripWithPackingList {
            trip,
            packing_list,
            items,
        }
    }

    /// Update a trip. Only `Some` fields in `input` are applied.
    ///
    /// The merged dates must still be in order.
    pub async fn update(
        store: &Store,
        id: EntityId,
        input: &UpdateTrip,
    ) -> Result<Trip, CoreError> {
        let destination = input
            .destination
            .as_deref()
            .map(validate_destination)
            .transpose()?;

        let mut c = store.write().await;
        let trip = c
            .trips
            .get_mut(&id)
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;

        let (start_date, end_date) = validate_trip_dates(
            Some(input.start_date.unwrap_or(trip.start_date)),
            Some(input.end_date.unwrap_or(trip.end_date)),
        )?;

        if let Some(destination) = destination {
            trip.destination = destination;
        }
        trip.start_date = start_date;
        trip.end_date = end_date;
        if let Some(weather) = input.weather {
            trip.weather = weather;
        }
        if let Some(trip_type) = input.trip_type {
            trip.trip_type = trip_type;
        }
        trip.updated_at = Utc::now();

        tracing::debug!(trip_id = %id, "Updated trip");
        Ok(trip.clone())
    }

    /// Delete a trip together with its packing lists and their items.
    pub async fn delete(store: &Store, id: EntityId) -> Result<Trip, CoreError> {
        let mut c = store.write().await;
        let trip = c
            .trips
            .shift_remove(&id)
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;

        let list_ids: Vec<EntityId> = c
            .packing_lists
            .values()
            .filter(|list| list.trip_id == id)
            .map(|list| list.id)
            .collect();
        for list_id in &list_ids {
            c.remove_packing_list_cascade(*list_id);
        }

        tracing::info!(trip_id = %id, packing_lists = list_ids.len(), "Deleted trip");
        Ok(trip)
    }
}

fn build_trip(input: NewTrip) -> Trip {
    let now = Utc::now();
    Trip {
        id: new_id(),
        destination: input.destination,
        start_date: input.start_date,
        end_date: input.end_date,
        weather: input.weather,
        trip_type: input.trip_type,
        created_at: now,
        updated_at: now,
    }
}
