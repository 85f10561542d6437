//! In-memory data store for trips, packing lists, packing items and
//! last-minute tasks.
//!
//! A [`Store`] owns all four collections behind a single async lock. It is
//! constructed explicitly (once per process, or once per test) and shared by
//! reference; there is no global state. Data lives for the lifetime of the
//! store only.

use chrono::Utc;
use indexmap::IndexMap;
use packwise_core::last_minute::DEFAULT_TASKS;
use packwise_core::progress::PackingProgress;
use packwise_core::types::EntityId;
use serde::Serialize;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

pub mod models;
pub mod repositories;

use models::last_minute_task::LastMinuteTask;
use models::packing_item::PackingItem;
use models::packing_list::{PackingList, PackingListWithItems};
use models::trip::Trip;

/// The four entity collections, each in insertion order.
#[derive(Debug, Default, Clone)]
pub(crate) struct Collections {
    pub(crate) trips: IndexMap<EntityId, Trip>,
    pub(crate) packing_lists: IndexMap<EntityId, PackingList>,
    pub(crate) packing_items: IndexMap<EntityId, PackingItem>,
    pub(crate) last_minute_tasks: IndexMap<EntityId, LastMinuteTask>,
}

impl Collections {
    /// Collections holding only the reference checklist.
    fn seeded() -> Self {
        let now = Utc::now();
        let last_minute_tasks = DEFAULT_TASKS
            .iter()
            .map(|seed| {
                let task = LastMinuteTask::from_seed(seed, now);
                (task.id, task)
            })
            .collect();
        Self {
            last_minute_tasks,
            ..Self::default()
        }
    }

    /// Recompute a list's `total_items` / `packed_items` from its items.
    ///
    /// Returns the updated list, or `None` if no list has that id.
    pub(crate) fn recount_packing_list(&mut self, list_id: EntityId) -> Option<&PackingList> {
        let progress = PackingProgress::from_flags(
            self.packing_items
                .values()
                .filter(|item| item.packing_list_id == list_id)
                .map(|item| item.is_packed),
        );

        let list = self.packing_lists.get_mut(&list_id)?;
        if list.total_items != progress.total_items || list.packed_items != progress.packed_items {
            list.total_items = progress.total_items;
            list.packed_items = progress.packed_items;
            list.updated_at = Utc::now();
        }
        Some(&*list)
    }

    /// Items of one packing list, in creation order.
    pub(crate) fn items_of(&self, list_id: EntityId) -> Vec<PackingItem> {
        self.packing_items
            .values()
            .filter(|item| item.packing_list_id == list_id)
            .cloned()
            .collect()
    }

    /// A packing list and its items, read under the caller's guard.
    pub(crate) fn list_with_items(&self, list_id: EntityId) -> Option<PackingListWithItems> {
        let packing_list = self.packing_lists.get(&list_id)?.clone();
        let items = self.items_of(list_id);
        Some(PackingListWithItems {
            packing_list,
            items,
        })
    }

    /// Remove a packing list and every item that belongs to it.
    pub(crate) fn remove_packing_list_cascade(&mut self, list_id: EntityId) -> Option<PackingList> {
        let list = self.packing_lists.shift_remove(&list_id)?;
        self.packing_items.retain(|_, item| item.packing_list_id != list_id);
        Some(list)
    }
}

/// Entity counts, reported by the health check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    pub trips: usize,
    pub packing_lists: usize,
    pub packing_items: usize,
    pub last_minute_tasks: usize,
}

/// Process-local store shared by all request handlers.
///
/// Every mutation, including multi-collection batches, runs under one write
/// lock, so readers never observe a partially applied operation.
#[derive(Debug, Default)]
pub struct Store {
    collections: RwLock<Collections>,
    seeded: bool,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the reference last-minute checklist.
    pub fn with_reference_data() -> Self {
        Self {
            collections: RwLock::new(Collections::seeded()),
            seeded: true,
        }
    }

    /// Drop all data and return to the state the store was constructed in.
    pub async fn reset(&self) {
        let fresh = if self.seeded {
            Collections::seeded()
        } else {
            Collections::default()
        };
        *self.collections.write().await = fresh;
        tracing::debug!(seeded = self.seeded, "Store reset");
    }

    /// Current entity counts.
    pub async fn stats(&self) -> StoreStats {
        let c = self.read().await;
        StoreStats {
            trips: c.trips.len(),
            packing_lists: c.packing_lists.len(),
            packing_items: c.packing_items.len(),
            last_minute_tasks: c.last_minute_tasks.len(),
        }
    }

    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, Collections> {
        self.collections.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, Collections> {
        self.collections.write().await
    }
}

/// Verify the store is responsive by taking its read lock.
pub async fn health_check(store: &Store) -> StoreStats {
    store.stats().await
}
